//! Runtime configuration: command-line arguments and the library settings
//! derived from them.

use clap::Parser;

use crate::{
    library::Library,
    observers::{NoticeBoard, NotificationService, TransitionLogger},
};

/// Default bound on the number of recorded lending transitions
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// What to do when an id is added a second time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Replace the existing entry, keeping its position in listings
    #[default]
    Overwrite,
    /// Refuse the addition with `LibraryError::DuplicateId`
    Reject,
}

/// Settings a `Library` is constructed with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Handling of repeated book and member ids
    pub duplicate_policy: DuplicatePolicy,
    /// Maximum number of history entries to keep
    pub max_history_size: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            max_history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

/// Command-line arguments for the library console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging and log every lending transition
    #[arg(short, long)]
    pub verbose: bool,

    /// Reject books or members whose id is already registered
    #[arg(long)]
    pub strict_ids: bool,

    /// Number of lending transitions kept in the history
    #[arg(long, default_value_t = DEFAULT_HISTORY_SIZE)]
    pub history_size: usize,

    /// Print a notification whenever a book is returned
    #[arg(long)]
    pub notify: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Library settings selected by these arguments
    #[must_use]
    pub fn library_config(&self) -> LibraryConfig {
        LibraryConfig {
            duplicate_policy: if self.strict_ids {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::Overwrite
            },
            max_history_size: self.history_size,
        }
    }

    /// Build the library with the observers these arguments ask for
    ///
    /// `--verbose` logs every transition; `--notify` posts return notices
    /// to `notices`.
    #[must_use]
    pub fn build_library(&self, notices: &NoticeBoard) -> Library {
        let mut library = Library::new(self.library_config());
        if self.verbose {
            library.register_observer(Box::new(TransitionLogger));
        }
        if self.notify {
            library.register_observer(Box::new(NotificationService::new(notices.clone())));
        }
        library
    }

    /// Log filter used when `RUST_LOG` is not set
    #[must_use]
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
