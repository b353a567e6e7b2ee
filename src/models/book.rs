use serde::{Deserialize, Serialize};

use super::deserialize_optional_id;

/// A book as returned by the API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Book {
    /// Server- or client-assigned identifier; older records may lack one.
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<u64>,
    pub name: String,
    pub author: String,
}

impl Book {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            author: author.into(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Payload for `POST /`. Unlike [`Book`], the id is always present.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewBook {
    pub id: u64,
    pub name: String,
    pub author: String,
}

/// Body returned by the add endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AddBookResponse {
    pub status: String,
}

impl AddBookResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
