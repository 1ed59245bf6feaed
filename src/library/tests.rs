#[cfg(test)]
use std::{cell::RefCell, rc::Rc};

use crate::{
    book::{Book, BookState},
    config::{DuplicatePolicy, LibraryConfig},
    error::{EntryKind, LibraryError},
    events::BookEvent,
    library::{Library, StateTransition},
    member::Member,
    observers::StateObserver,
};

/// Helper function to set up a library with a couple of books
fn setup_test_library() -> Library {
    let mut library = Library::default();
    drop(library.add_book("B1", "Dune"));
    drop(library.add_book("B2", "Neuromancer"));
    drop(library.add_member("M1", "Ada"));
    library
}

/// Collects every notification it receives
#[derive(Debug, Default, Clone)]
struct RecordingObserver(Rc<RefCell<Vec<(String, BookState, BookState, BookEvent)>>>);

impl StateObserver for RecordingObserver {
    fn on_state_change(&self, book: &Book, from: BookState, to: BookState, event: BookEvent) {
        self.0.borrow_mut().push((book.id().to_string(), from, to, event));
    }
}

#[test]
fn test_listing_single_book() {
    let mut library = Library::default();
    assert_eq!(library.add_book("B1", "Dune"), Ok(None));

    let books: Vec<&Book> = library.list_books().collect();
    assert_eq!(books, vec![&Book::new("B1", "Dune")]);
    assert!(books.iter().all(|book| book.is_available()));
}

#[test]
fn test_listing_keeps_insertion_order() {
    let mut library = Library::default();
    let ids = ["Z9", "A1", "M5", "B2"];
    for id in ids {
        assert!(library.add_book(id, "Title").is_ok());
    }

    let listed: Vec<&str> = library.list_books().map(Book::id).collect();
    assert_eq!(listed, ids);
    assert_eq!(library.book_count(), ids.len());
}

#[test]
fn test_members_are_listed() {
    let mut library = setup_test_library();
    assert_eq!(library.add_member("M2", "Grace"), Ok(None));

    let names: Vec<&str> = library.list_members().map(Member::name).collect();
    assert_eq!(names, ["Ada", "Grace"]);
    assert_eq!(library.member_count(), 2);
    assert_eq!(library.find_member("M2").map(Member::id), Some("M2"));
}

#[test]
fn test_borrow_transitions_once() {
    let mut library = setup_test_library();

    let book = library.borrow("B1");
    assert!(matches!(book, Ok(book) if !book.is_available()));

    // Second borrow is reported and changes nothing
    let again = library.borrow("B1");
    assert_eq!(
        again.map(Book::id),
        Err(LibraryError::InvalidState {
            id: "B1".to_string(),
            state: BookState::Borrowed,
            event: BookEvent::Borrow,
        })
    );
    assert_eq!(library.find_book("B1").map(Book::is_available), Some(false));
    assert_eq!(library.history().len(), 1);
}

#[test]
fn test_return_restores_availability() {
    let mut library = setup_test_library();
    assert!(library.borrow("B2").is_ok());

    assert!(matches!(library.return_book("B2"), Ok(book) if book.is_available()));

    for _ in 0..3 {
        assert!(matches!(
            library.return_book("B2"),
            Err(LibraryError::InvalidState { state: BookState::Available, .. })
        ));
    }
    assert_eq!(library.find_book("B2").map(Book::state), Some(BookState::Available));
}

#[test]
fn test_unknown_id_is_not_found() {
    let mut library = setup_test_library();
    let before = library.list_books().cloned().collect::<Vec<_>>();

    let not_found = LibraryError::NotFound { kind: EntryKind::Book, id: "UNKNOWN".into() };
    assert_eq!(library.borrow("UNKNOWN").err(), Some(not_found.clone()));
    assert_eq!(library.return_book("UNKNOWN").err(), Some(not_found));

    let after = library.list_books().cloned().collect::<Vec<_>>();
    assert_eq!(before, after);
    assert!(library.history().is_empty());
}

#[test]
fn test_duplicate_overwrites_by_default() {
    let mut library = setup_test_library();
    assert!(library.borrow("B1").is_ok());

    let replaced = library.add_book("B1", "Dune Messiah");
    assert!(matches!(replaced, Ok(Some(ref old)) if old.name() == "Dune"));

    // Overwritten entry keeps its slot and starts available again
    let first = library.list_books().next();
    assert_eq!(first, Some(&Book::new("B1", "Dune Messiah")));
    assert_eq!(library.book_count(), 2);
}

#[test]
fn test_duplicate_rejected_when_strict() {
    let mut library = Library::new(LibraryConfig {
        duplicate_policy: DuplicatePolicy::Reject,
        ..LibraryConfig::default()
    });
    assert!(library.add_book("B1", "Dune").is_ok());
    assert!(library.add_member("M1", "Ada").is_ok());

    assert_eq!(
        library.add_book("B1", "Other"),
        Err(LibraryError::DuplicateId { kind: EntryKind::Book, id: "B1".into() })
    );
    assert_eq!(
        library.add_member("M1", "Other"),
        Err(LibraryError::DuplicateId { kind: EntryKind::Member, id: "M1".into() })
    );
    assert_eq!(library.find_book("B1").map(Book::name), Some("Dune"));
    assert_eq!(library.find_member("M1").map(Member::name), Some("Ada"));
}

#[test]
#[allow(clippy::indexing_slicing)]
fn test_history_tracking() {
    let mut library = setup_test_library();
    assert!(library.history().is_empty());

    drop(library.borrow("B1"));
    drop(library.borrow("B1"));
    drop(library.return_book("B1"));

    let history = library.history();
    assert_eq!(history.len(), 2);
    assert_eq!(
        history[0],
        StateTransition {
            book_id: "B1".to_string(),
            from: BookState::Available,
            to: BookState::Borrowed,
            event: BookEvent::Borrow,
        }
    );
    assert_eq!(history[1].event, BookEvent::Return);
}

#[test]
fn test_history_is_bounded() {
    let mut library =
        Library::new(LibraryConfig { max_history_size: 3, ..LibraryConfig::default() });
    drop(library.add_book("B1", "Dune"));

    for _ in 0..4 {
        drop(library.borrow("B1"));
        drop(library.return_book("B1"));
    }

    let events: Vec<BookEvent> = library.history().iter().map(|t| t.event).collect();
    assert_eq!(events, [BookEvent::Return, BookEvent::Borrow, BookEvent::Return]);
}

#[test]
fn test_observers_see_successful_transitions_only() {
    let mut library = setup_test_library();
    let observer = RecordingObserver::default();
    library.register_observer(Box::new(observer.clone()));

    drop(library.borrow("B1"));
    drop(library.borrow("B1"));
    drop(library.return_book("B2"));
    drop(library.borrow("UNKNOWN"));

    let seen = observer.0.borrow();
    assert_eq!(
        *seen,
        vec![("B1".to_string(), BookState::Available, BookState::Borrowed, BookEvent::Borrow)]
    );
}
