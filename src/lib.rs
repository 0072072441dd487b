//! # Ticket Board
//!
//! A kanban board over a remote ticket feed.
//!
//! Tickets are fetched once, grouped into columns by status, assignee or
//! priority, sorted inside each column, and rendered as cards. Cards can be
//! reordered within their column. The grouping and sorting selectors are
//! persisted through a pluggable preference store.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod source;
pub mod storage;

// Re-export commonly used types
pub use app::KanbanBoard;
pub use config::BoardConfig;
pub use domain::{
    board::{Board, DragResult, Location, ReorderOutcome},
    grouping::{Bucket, BucketKey, BucketMap},
    preferences::{Grouping, Preferences, Sorting},
    ticket::{Ticket, TicketId, User},
};
pub use error::{BoardError, Result};
pub use render::{render_board, render_text, BoardView, CardView, ColumnView, RenderOptions};
pub use source::{HttpTicketSource, StaticTicketSource, TicketSource};
pub use storage::{MemoryStore, PreferenceStore};
#[cfg(feature = "file-storage")]
pub use storage::FileStore;
