use std::{cell::RefCell, rc::Rc};

use log::info;

use crate::{
    book::{Book, BookState},
    events::BookEvent,
};

/// Trait for state change observation
pub trait StateObserver {
    /// Called after `book` moved from `from` to `to` because of `event`
    fn on_state_change(&self, book: &Book, from: BookState, to: BookState, event: BookEvent);
}

/// Logs all transitions that occur in the library
#[derive(Debug)]
pub struct TransitionLogger;

impl StateObserver for TransitionLogger {
    fn on_state_change(&self, book: &Book, from: BookState, to: BookState, event: BookEvent) {
        info!("book {}: {from:?} --({event:?})--> {to:?}", book.id());
    }
}

/// Queue of user-facing notices waiting to be printed
///
/// Clones share the same queue, so an observer can post while the console
/// drains through its own writer.
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard(Rc<RefCell<Vec<String>>>);

impl NoticeBoard {
    /// Queue a notice
    pub fn post(&self, notice: String) {
        self.0.borrow_mut().push(notice);
    }

    /// Take every queued notice, oldest first
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        self.0.take()
    }
}

/// Tells the reader when a book is back on the shelf
#[derive(Debug)]
pub struct NotificationService {
    /// Where notices are posted
    board: NoticeBoard,
}

impl NotificationService {
    /// Create a notifier posting to `board`
    #[must_use]
    pub fn new(board: NoticeBoard) -> Self {
        Self { board }
    }
}

impl StateObserver for NotificationService {
    fn on_state_change(&self, book: &Book, from: BookState, to: BookState, event: BookEvent) {
        if let (BookState::Borrowed, BookState::Available, BookEvent::Return) = (from, to, event) {
            self.board.post(format!("NOTIFICATION: {} is available again!", book.name()));
        }
    }
}
