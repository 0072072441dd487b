pub mod board;
pub mod grouping;
pub mod preferences;
pub mod sorting;
pub mod ticket;

pub use board::{Board, DragResult, Location, ReorderOutcome};
pub use grouping::{group_tickets, Bucket, BucketKey, BucketMap};
pub use preferences::{Grouping, Preferences, Sorting};
pub use sorting::{compare_tickets, sort_tickets};
pub use ticket::{priority_label, Ticket, TicketFeed, TicketId, User};
