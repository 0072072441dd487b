//! Board rendering
//!
//! `render_board` turns board state into a plain view model; `render_text`
//! lays that view out for a terminal.

use crate::domain::{grouping::group_tickets, Board, Grouping, Sorting, Ticket, TicketId};
use owo_colors::OwoColorize;
use std::fmt::Write as _;

/// One ticket card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub priority: Option<i64>,
    pub priority_label: &'static str,
}

/// One column, titled with its bucket key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    pub title: String,
    pub cards: Vec<CardView>,
}

/// Everything needed to draw the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub grouping: Grouping,
    pub sorting: Sorting,
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }
}

impl From<&Ticket> for CardView {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            priority: ticket.priority,
            priority_label: ticket.priority_label(),
        }
    }
}

/// Groups, sorts and projects tickets into columns of cards
pub fn render_board(tickets: &[Ticket], grouping: &Grouping, sorting: &Sorting) -> BoardView {
    let mut buckets = group_tickets(tickets, grouping);
    buckets.sort_each(sorting);

    let columns = buckets
        .iter()
        .map(|bucket| ColumnView {
            title: bucket.label(),
            cards: bucket.tickets.iter().map(CardView::from).collect(),
        })
        .collect();

    BoardView {
        grouping: grouping.clone(),
        sorting: sorting.clone(),
        columns,
    }
}

impl Board {
    pub fn view(&self) -> BoardView {
        render_board(self.tickets(), self.grouping(), self.sorting())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

fn paint_priority(label: &str, priority: Option<i64>, color: bool) -> String {
    if !color {
        return label.to_string();
    }
    match priority {
        Some(4) => label.red().to_string(),
        Some(3) => label.truecolor(255, 165, 0).to_string(),
        Some(2) => label.yellow().to_string(),
        Some(1) => label.green().to_string(),
        _ => label.bright_black().to_string(),
    }
}

/// Lays the board out as text: heading, selectors, then one block per column
pub fn render_text(view: &BoardView, options: RenderOptions) -> String {
    let mut out = String::new();

    let heading = "Kanban Board";
    if options.color {
        let _ = writeln!(out, "{}", heading.bold());
    } else {
        let _ = writeln!(out, "{}", heading);
    }
    let _ = writeln!(
        out,
        "Group by: {}   Sort by: {}",
        view.grouping.label(),
        view.sorting.label()
    );

    for column in &view.columns {
        let _ = writeln!(out);
        let title = format!("== {} ({}) ==", column.title, column.cards.len());
        if options.color {
            let _ = writeln!(out, "{}", title.bold());
        } else {
            let _ = writeln!(out, "{}", title);
        }

        for (index, card) in column.cards.iter().enumerate() {
            let _ = writeln!(out, "  {}. [{}] {}", index, card.id, card.title);
            if !card.description.is_empty() {
                let _ = writeln!(out, "       {}", card.description);
            }
            let _ = writeln!(
                out,
                "       {}",
                paint_priority(card.priority_label, card.priority, options.color)
            );
        }
    }

    out
}
