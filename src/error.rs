use thiserror::Error;

use crate::{book::BookState, events::BookEvent};

/// Which kind of catalog entry an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A book in the catalog
    Book,
    /// A registered member
    Member,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Book => f.write_str("book"),
            Self::Member => f.write_str("member"),
        }
    }
}

/// Errors reported by library operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// No entry with the given id is registered
    #[error("{kind} `{id}` not found")]
    NotFound { kind: EntryKind, id: String },
    /// The event has no transition from the book's current state
    #[error("cannot process {event:?} for book `{id}` while it is {state:?}")]
    InvalidState { id: String, state: BookState, event: BookEvent },
    /// The id is already taken and duplicates are rejected
    #[error("{kind} `{id}` is already registered")]
    DuplicateId { kind: EntryKind, id: String },
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
