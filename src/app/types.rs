/// Which UI component receives key input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Book list (mode switching, reload, quit)
    #[default]
    List,
    /// Add form: name field
    Name,
    /// Add form: author field
    Author,
}

impl Focus {
    /// Next component in Tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::List => Focus::Name,
            Focus::Name => Focus::Author,
            Focus::Author => Focus::List,
        }
    }

    /// Previous component in Tab order.
    pub fn prev(self) -> Self {
        match self {
            Focus::List => Focus::Author,
            Focus::Name => Focus::List,
            Focus::Author => Focus::Name,
        }
    }

    /// True for either add-form field.
    pub fn is_form(self) -> bool {
        matches!(self, Focus::Name | Focus::Author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        assert_eq!(Focus::List.next(), Focus::Name);
        assert_eq!(Focus::Name.next(), Focus::Author);
        assert_eq!(Focus::Author.next(), Focus::List);
        for focus in [Focus::List, Focus::Name, Focus::Author] {
            assert_eq!(focus.next().prev(), focus);
        }
    }

    #[test]
    fn test_is_form() {
        assert!(!Focus::List.is_form());
        assert!(Focus::Name.is_form());
        assert!(Focus::Author.is_form());
    }
}
