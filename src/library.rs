use std::fmt;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    book::{Book, BookState},
    config::{DuplicatePolicy, LibraryConfig},
    error::{EntryKind, LibraryError, Result},
    events::BookEvent,
    member::Member,
    observers::StateObserver,
};

/// Represents a lending transition recorded by the library
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StateTransition {
    /// The book that changed state
    pub book_id: String,
    /// The state before the transition
    pub from: BookState,
    /// The state after the transition
    pub to: BookState,
    /// The event that triggered the transition
    pub event: BookEvent,
}

/// In-memory registry of books and members
pub struct Library {
    /// Books keyed by id, in insertion order
    books: IndexMap<String, Book>,
    /// Members keyed by id, in insertion order
    members: IndexMap<String, Member>,
    /// Record of lending transitions, oldest first
    history: Vec<StateTransition>,
    /// Settings the library was created with
    config: LibraryConfig,
    /// Registered state change observers
    observers: Vec<Box<dyn StateObserver>>,
}

// Manual implementation of Debug for Library
impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.books)
            .field("members", &self.members)
            .field("history", &self.history)
            .field("config", &self.config)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(LibraryConfig::default())
    }
}

impl Library {
    /// Create an empty library
    #[must_use]
    pub fn new(config: LibraryConfig) -> Self {
        Self {
            books: IndexMap::new(),
            members: IndexMap::new(),
            history: Vec::new(),
            config,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of lending transitions
    pub fn register_observer(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Settings this library was built with
    #[must_use]
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Add an available book, returning the entry it replaced
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::DuplicateId` if the id is taken and the library
    /// rejects duplicates.
    pub fn add_book(&mut self, id: &str, name: &str) -> Result<Option<Book>> {
        self.check_duplicate(EntryKind::Book, self.books.contains_key(id), id)?;
        debug!("adding book {id} ({name})");
        Ok(self.books.insert(id.to_string(), Book::new(id, name)))
    }

    /// Add a member, returning the entry it replaced
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::DuplicateId` if the id is taken and the library
    /// rejects duplicates.
    pub fn add_member(&mut self, id: &str, name: &str) -> Result<Option<Member>> {
        self.check_duplicate(EntryKind::Member, self.members.contains_key(id), id)?;
        debug!("adding member {id} ({name})");
        Ok(self.members.insert(id.to_string(), Member::new(id, name)))
    }

    /// Fails on a taken id when duplicates are rejected
    fn check_duplicate(&self, kind: EntryKind, taken: bool, id: &str) -> Result<()> {
        match (taken, self.config.duplicate_policy) {
            (true, DuplicatePolicy::Reject) => {
                Err(LibraryError::DuplicateId { kind, id: id.to_string() })
            }
            (true, DuplicatePolicy::Overwrite) => {
                debug!("{kind} {id} already registered, overwriting");
                Ok(())
            }
            (false, _) => Ok(()),
        }
    }

    /// Lend a book out
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` for an unknown id and
    /// `LibraryError::InvalidState` if the book is already borrowed.
    pub fn borrow(&mut self, id: &str) -> Result<&Book> {
        self.process_event(id, BookEvent::Borrow)
    }

    /// Bring a borrowed book back
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` for an unknown id and
    /// `LibraryError::InvalidState` if the book was not borrowed.
    pub fn return_book(&mut self, id: &str) -> Result<&Book> {
        self.process_event(id, BookEvent::Return)
    }

    /// Apply a lending event to one book, recording and broadcasting it
    fn process_event(&mut self, id: &str, event: BookEvent) -> Result<&Book> {
        let book = self
            .books
            .get_mut(id)
            .ok_or_else(|| LibraryError::NotFound { kind: EntryKind::Book, id: id.to_string() })?;

        let from = book.apply(event)?;
        let to = book.state();

        self.history.push(StateTransition { book_id: id.to_string(), from, to, event });

        // Maintain history size limit
        if self.history.len() > self.config.max_history_size {
            self.history.remove(0);
        }

        for observer in &self.observers {
            observer.on_state_change(book, from, to, event);
        }

        Ok(&*book)
    }

    /// Look up a book by id
    #[must_use]
    pub fn find_book(&self, id: &str) -> Option<&Book> {
        self.books.get(id)
    }

    /// Look up a member by id
    #[must_use]
    pub fn find_member(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    /// All books in insertion order
    pub fn list_books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// All members in insertion order
    pub fn list_members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Number of registered books
    #[must_use]
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of registered members
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Get the recorded lending history, oldest first
    #[must_use]
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }
}

// Include tests module
#[cfg(test)]
mod tests;
