use crate::domain::{preferences::Sorting, ticket::Ticket};
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Orders two tickets under the selected sorting
///
/// Unknown sortings give no ordering signal, so a stable sort leaves the
/// input untouched.
pub fn compare_tickets(a: &Ticket, b: &Ticket, sorting: &Sorting) -> Ordering {
    match sorting {
        Sorting::Priority => compare_priority(a, b),
        Sorting::Title => compare_titles(&a.title, &b.title),
        Sorting::Other(_) => Ordering::Equal,
    }
}

/// Sorts tickets in-place
///
/// The sort is stable: tickets that compare equal keep their relative order.
///
/// # Examples
/// ```
/// use ticket_board::domain::sorting::sort_tickets;
/// use ticket_board::domain::{Sorting, Ticket};
///
/// let mut tickets = vec![
///     Ticket::new(1u32, "Low").with_priority(1),
///     Ticket::new(2u32, "Urgent").with_priority(4),
/// ];
///
/// sort_tickets(&mut tickets, &Sorting::Priority);
/// assert_eq!(tickets[0].title, "Urgent");
/// ```
pub fn sort_tickets(tickets: &mut [Ticket], sorting: &Sorting) {
    if let Sorting::Other(_) = sorting {
        return;
    }
    tickets.sort_by(|a, b| compare_tickets(a, b, sorting));
}

/// Higher priority first; a missing priority ranks as 0
fn compare_priority(a: &Ticket, b: &Ticket) -> Ordering {
    b.priority.unwrap_or(0).cmp(&a.priority.unwrap_or(0))
}

/// Title order in three passes, loosest first:
///
/// 1. letters with accents and case folded away (`Éclair` sorts with `e`)
/// 2. accents significant, case folded (`resume` before `résumé`)
/// 3. case significant, lowercase first (`apple` before `Apple`)
///
/// Identical strings at every level fall back to code point order.
fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| {
            let fold = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<String>();
            fold(a).cmp(&fold(b))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
