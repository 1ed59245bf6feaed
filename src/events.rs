use serde::{Deserialize, Serialize};

/// Events that can cause a book state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookEvent {
    /// Lend the book out
    Borrow,
    /// Bring the book back to the shelf
    Return,
}
