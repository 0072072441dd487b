//! The board component: wires the ticket source, the preference store and
//! the board state together.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Board, DragResult, Grouping, Preferences, ReorderOutcome, Sorting};
use crate::error::Result;
use crate::render::BoardView;
use crate::source::{load_tickets, TicketSource};
use crate::storage::{load_preferences, save_preferences, PreferenceStore};

pub struct KanbanBoard {
    board: Board,
    store: Arc<dyn PreferenceStore>,
    source: Arc<dyn TicketSource>,
    mounted: bool,
}

impl KanbanBoard {
    /// Creates the component with preferences read from `store`
    ///
    /// The ticket list stays empty until [`KanbanBoard::mount`] runs.
    pub async fn new(store: Arc<dyn PreferenceStore>, source: Arc<dyn TicketSource>) -> Self {
        let preferences = load_preferences(store.as_ref()).await;
        Self {
            board: Board::new(preferences),
            store,
            source,
            mounted: false,
        }
    }

    /// First display: fetch tickets once and record the active preferences
    ///
    /// Later calls do nothing.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        self.persist_preferences().await;

        let tickets = load_tickets(self.source.as_ref()).await;
        info!(count = tickets.len(), "Board loaded");
        self.board.replace_tickets(tickets);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn preferences(&self) -> &Preferences {
        self.board.preferences()
    }

    /// Changes the grouping selector and saves both selectors
    pub async fn set_grouping(&mut self, grouping: Grouping) {
        if self.board.grouping() == &grouping {
            return;
        }
        self.board.set_grouping(grouping);
        self.persist_preferences().await;
    }

    /// Changes the sorting selector and saves both selectors
    pub async fn set_sorting(&mut self, sorting: Sorting) {
        if self.board.sorting() == &sorting {
            return;
        }
        self.board.set_sorting(sorting);
        self.persist_preferences().await;
    }

    /// Drag-end callback
    pub fn on_reorder(&mut self, drag: &DragResult) -> Result<ReorderOutcome> {
        let outcome = self.board.reorder(drag)?;
        debug!(?outcome, "Handled drag");
        Ok(outcome)
    }

    pub fn render(&self) -> BoardView {
        self.board.view()
    }

    // A failed write leaves the in-memory selectors in place.
    async fn persist_preferences(&self) {
        if let Err(err) = save_preferences(self.store.as_ref(), self.board.preferences()).await {
            warn!(error = %err, "Failed to save preferences");
        }
    }
}
