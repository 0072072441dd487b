use crate::domain::{preferences::Grouping, sorting::sort_tickets, Sorting, Ticket};
use std::{collections::HashMap, fmt};
use tracing::warn;

pub const NO_STATUS: &str = "No Status";
pub const UNASSIGNED: &str = "Unassigned";
pub const NO_PRIORITY: &str = "No priority";

/// Key a bucket is filed under
///
/// The `Display` form doubles as the column title and as the identifier a
/// drag gesture refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Status(String),
    User(String),
    /// Raw priority value; a ticket without a priority gets its own bucket
    Priority(Option<i64>),
}

impl BucketKey {
    fn for_ticket(ticket: &Ticket, grouping: &Grouping) -> Option<Self> {
        match grouping {
            Grouping::Status => Some(BucketKey::Status(
                ticket
                    .status
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(NO_STATUS)
                    .to_string(),
            )),
            Grouping::User => Some(BucketKey::User(
                ticket
                    .user
                    .as_ref()
                    .map(|u| u.name.as_str())
                    .filter(|n| !n.is_empty())
                    .unwrap_or(UNASSIGNED)
                    .to_string(),
            )),
            Grouping::Priority => Some(BucketKey::Priority(ticket.priority)),
            Grouping::Other(_) => None,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::Status(s) | BucketKey::User(s) => f.write_str(s),
            BucketKey::Priority(Some(p)) => write!(f, "{}", p),
            BucketKey::Priority(None) => f.write_str(NO_PRIORITY),
        }
    }
}

/// One column's worth of tickets
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub key: BucketKey,
    pub tickets: Vec<Ticket>,
}

impl Bucket {
    pub fn label(&self) -> String {
        self.key.to_string()
    }
}

/// Tickets partitioned into buckets, in first-encounter order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BucketMap {
    buckets: Vec<Bucket>,
}

impl BucketMap {
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Finds the bucket whose label matches `label`
    pub fn get(&self, label: &str) -> Option<&Bucket> {
        let i = self.position(label)?;
        self.buckets.get(i)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Bucket> {
        let i = self.position(label)?;
        self.buckets.get_mut(i)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.buckets.iter().position(|b| b.label() == label)
    }

    /// Sorts every bucket in place
    pub fn sort_each(&mut self, sorting: &Sorting) {
        for bucket in &mut self.buckets {
            sort_tickets(&mut bucket.tickets, sorting);
        }
    }

    /// Concatenates all buckets in key order
    pub fn flatten(self) -> Vec<Ticket> {
        self.buckets.into_iter().flat_map(|b| b.tickets).collect()
    }
}

impl<'a> IntoIterator for &'a BucketMap {
    type Item = &'a Bucket;
    type IntoIter = std::slice::Iter<'a, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Partitions tickets by the selected grouping
///
/// Tickets keep their list order inside each bucket. An unrecognized
/// grouping yields no buckets at all.
pub fn group_tickets(tickets: &[Ticket], grouping: &Grouping) -> BucketMap {
    if let Grouping::Other(raw) = grouping {
        warn!(grouping = %raw, "Unknown grouping, board will be empty");
        return BucketMap::default();
    }

    let mut index: HashMap<BucketKey, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for ticket in tickets {
        let Some(key) = BucketKey::for_ticket(ticket, grouping) else {
            continue;
        };

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            buckets.push(Bucket {
                key,
                tickets: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[slot].tickets.push(ticket.clone());
    }

    BucketMap { buckets }
}
