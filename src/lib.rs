//! In-memory lending library with an interactive console.
//!
//! This crate provides a registry of books and members, a two-state
//! lending state machine per book, and a menu-driven shell that also hosts
//! a small showcase of the SOLID design principles.

pub mod book;
pub mod config;
pub mod error;
pub mod events;
pub mod library;
pub mod member;
pub mod observers;
pub mod shell;
pub mod solid;

pub use book::{Book, BookState};
pub use config::{Args, DuplicatePolicy, LibraryConfig};
pub use error::{LibraryError, Result};
pub use events::BookEvent;
pub use library::{Library, StateTransition};
pub use member::Member;
pub use observers::{NoticeBoard, NotificationService, StateObserver, TransitionLogger};
pub use shell::Shell;
