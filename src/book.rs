use serde::{Deserialize, Serialize};

use crate::{
    error::{LibraryError, Result},
    events::BookEvent,
};

/// Represents the lending state of a library book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookState {
    /// Book is on the shelf and can be borrowed
    #[default]
    Available,
    /// Book is lent out
    Borrowed,
}

impl BookState {
    /// Get a human-readable description of the state
    #[must_use]
    pub fn get_description(self) -> &'static str {
        match self {
            Self::Available => "Book is available for borrowing",
            Self::Borrowed => "Book is currently borrowed",
        }
    }

    /// The state reached by applying `event`, if the transition exists
    #[must_use]
    pub fn next(self, event: BookEvent) -> Option<Self> {
        match (self, event) {
            (Self::Available, BookEvent::Borrow) => Some(Self::Borrowed),
            (Self::Borrowed, BookEvent::Return) => Some(Self::Available),
            _ => None,
        }
    }
}

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Book {
    /// Catalog identifier, unique within a library
    id: String,
    /// Title shown in listings
    name: String,
    /// Whether the book is on the shelf
    available: bool,
}

impl Book {
    /// Create a new book, initially available
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), available: true }
    }

    /// Catalog identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title shown in listings
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the book can be borrowed right now
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Current lending state derived from the availability flag
    #[must_use]
    pub fn state(&self) -> BookState {
        if self.available { BookState::Available } else { BookState::Borrowed }
    }

    /// Apply a lending event and return the state the book left
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidState` if the event has no transition
    /// from the current state. The book is left untouched in that case.
    pub fn apply(&mut self, event: BookEvent) -> Result<BookState> {
        let from = self.state();
        let to = from.next(event).ok_or_else(|| LibraryError::InvalidState {
            id: self.id.clone(),
            state: from,
            event,
        })?;
        self.available = to == BookState::Available;
        Ok(from)
    }
}
