//! AppMessage enum for async communication within the application.

/// Messages sent from background tasks back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// An add-book submission finished
    AddFinished { accepted: bool },
}
