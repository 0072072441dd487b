use crate::domain::{
    grouping::{group_tickets, BucketMap},
    preferences::{Grouping, Preferences, Sorting},
    ticket::Ticket,
};
use crate::error::{BoardError, Result};
use tracing::debug;

/// A position on the board: a bucket label and an index inside that
/// bucket's grouped and sorted view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub bucket: String,
    pub index: usize,
}

impl Location {
    pub fn new(bucket: impl Into<String>, index: usize) -> Self {
        Self {
            bucket: bucket.into(),
            index,
        }
    }
}

/// Result of a finished drag gesture
///
/// `destination` is `None` when the card was dropped outside any column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub source: Location,
    pub destination: Option<Location>,
}

impl DragResult {
    pub fn new(source: Location, destination: Option<Location>) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// What a drag did to the ticket list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Dropped outside any column; nothing changed
    Cancelled,
    /// Moved within its own column; the ticket list was replaced
    Reordered,
    /// Moved to another column; moving between columns is not supported,
    /// so nothing changed
    CrossBucketIgnored,
}

/// Kanban board state: the ticket list and the active selectors
#[derive(Debug, Clone, Default)]
pub struct Board {
    tickets: Vec<Ticket>,
    preferences: Preferences,
}

impl Board {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            tickets: Vec::new(),
            preferences,
        }
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Replaces the whole ticket list
    pub fn replace_tickets(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn grouping(&self) -> &Grouping {
        &self.preferences.grouping
    }

    pub fn sorting(&self) -> &Sorting {
        &self.preferences.sorting
    }

    pub fn set_grouping(&mut self, grouping: Grouping) {
        self.preferences.grouping = grouping;
    }

    pub fn set_sorting(&mut self, sorting: Sorting) {
        self.preferences.sorting = sorting;
    }

    /// Groups the ticket list and sorts each bucket
    ///
    /// Derived fresh on every call; the ticket list itself is not reordered.
    pub fn buckets(&self) -> BucketMap {
        let mut buckets = group_tickets(&self.tickets, &self.preferences.grouping);
        buckets.sort_each(&self.preferences.sorting);
        buckets
    }

    /// Applies a finished drag gesture
    ///
    /// A same-column drop splices the card from its origin index to the
    /// destination index within the column's current view, then rebuilds the
    /// ticket list from all buckets in key order.
    pub fn reorder(&mut self, drag: &DragResult) -> Result<ReorderOutcome> {
        let Some(destination) = &drag.destination else {
            return Ok(ReorderOutcome::Cancelled);
        };

        let source = &drag.source;
        if source.bucket != destination.bucket {
            debug!(
                from = %source.bucket,
                to = %destination.bucket,
                "Ignoring drag between columns"
            );
            return Ok(ReorderOutcome::CrossBucketIgnored);
        }

        let mut buckets = self.buckets();
        let bucket = buckets.get_mut(&source.bucket).ok_or_else(|| {
            BoardError::InvalidDrag(format!("no column named '{}'", source.bucket))
        })?;

        if source.index >= bucket.tickets.len() {
            return Err(BoardError::InvalidDrag(format!(
                "index {} out of range for column '{}' ({} cards)",
                source.index,
                source.bucket,
                bucket.tickets.len()
            )));
        }

        let moved = bucket.tickets.remove(source.index);
        let target = destination.index.min(bucket.tickets.len());
        bucket.tickets.insert(target, moved);

        debug!(
            column = %source.bucket,
            from = source.index,
            to = target,
            "Reordered card"
        );

        self.tickets = buckets.flatten();
        Ok(ReorderOutcome::Reordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(tickets: Vec<Ticket>, sorting: Sorting) -> Board {
        let mut board = Board::new(Preferences::new(Grouping::Status, sorting));
        board.replace_tickets(tickets);
        board
    }

    fn ids(tickets: &[Ticket]) -> Vec<&str> {
        tickets.iter().map(|t| t.id.as_str()).collect()
    }

    fn tied_tickets() -> Vec<Ticket> {
        vec![
            Ticket::new(1u32, "a").with_status("todo").with_priority(2),
            Ticket::new(2u32, "b").with_status("done").with_priority(2),
            Ticket::new(3u32, "c").with_status("todo").with_priority(2),
            Ticket::new(4u32, "d").with_status("todo").with_priority(2),
        ]
    }

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert!(board.tickets().is_empty());
        assert!(board.buckets().is_empty());
        assert_eq!(board.grouping(), &Grouping::Status);
        assert_eq!(board.sorting(), &Sorting::Priority);
    }

    #[test]
    fn test_reorder_within_column() {
        let mut board = board_with(tied_tickets(), Sorting::Priority);

        let drag = DragResult::new(Location::new("todo", 0), Some(Location::new("todo", 2)));
        let outcome = board.reorder(&drag).unwrap();

        assert_eq!(outcome, ReorderOutcome::Reordered);
        // Buckets are concatenated in key order: todo first, then done
        assert_eq!(ids(board.tickets()), vec!["3", "4", "1", "2"]);

        let buckets = board.buckets();
        assert_eq!(ids(&buckets.get("todo").unwrap().tickets), vec!["3", "4", "1"]);
    }

    #[test]
    fn test_reorder_clamps_destination_index() {
        let mut board = board_with(tied_tickets(), Sorting::Priority);

        let drag = DragResult::new(Location::new("todo", 0), Some(Location::new("todo", 99)));
        board.reorder(&drag).unwrap();

        assert_eq!(ids(&board.buckets().get("todo").unwrap().tickets), vec!["3", "4", "1"]);
    }

    #[test]
    fn test_cancelled_drag_is_noop() {
        let mut board = board_with(tied_tickets(), Sorting::Priority);

        let drag = DragResult::new(Location::new("todo", 0), None);
        assert_eq!(board.reorder(&drag).unwrap(), ReorderOutcome::Cancelled);
        assert_eq!(ids(board.tickets()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_cross_column_drag_is_noop() {
        let mut board = board_with(tied_tickets(), Sorting::Priority);

        let drag = DragResult::new(Location::new("todo", 0), Some(Location::new("done", 0)));
        assert_eq!(
            board.reorder(&drag).unwrap(),
            ReorderOutcome::CrossBucketIgnored
        );
        assert_eq!(ids(board.tickets()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_reorder_rejects_unknown_column_and_index() {
        let mut board = board_with(tied_tickets(), Sorting::Priority);

        let drag = DragResult::new(Location::new("doing", 0), Some(Location::new("doing", 1)));
        assert!(matches!(board.reorder(&drag), Err(BoardError::InvalidDrag(_))));

        let drag = DragResult::new(Location::new("done", 1), Some(Location::new("done", 0)));
        assert!(matches!(board.reorder(&drag), Err(BoardError::InvalidDrag(_))));

        assert_eq!(ids(board.tickets()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_reorder_uses_sorted_view_indices() {
        let tickets = vec![
            Ticket::new(1u32, "low").with_status("todo").with_priority(1),
            Ticket::new(2u32, "urgent").with_status("todo").with_priority(4),
            Ticket::new(3u32, "high").with_status("todo").with_priority(3),
        ];
        let mut board = board_with(tickets, Sorting::Other("manual".to_string()));
        board.set_sorting(Sorting::Priority);

        // Sorted view is [2, 3, 1]; moving index 0 to 2 drags ticket 2 last
        let drag = DragResult::new(Location::new("todo", 0), Some(Location::new("todo", 2)));
        board.reorder(&drag).unwrap();

        assert_eq!(ids(board.tickets()), vec!["3", "1", "2"]);
        assert_eq!(board.tickets().len(), 3);
    }
}
