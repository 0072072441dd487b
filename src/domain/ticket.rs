use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::HashMap, fmt};

/// Reads an explicit `null` the same way as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unique identifier for a ticket (e.g., CAM-1, 42)
///
/// Feeds send identifiers either as strings or as numbers; both are
/// normalized to their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTicketId")]
pub struct TicketId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTicketId {
    Text(String),
    Number(i64),
}

impl From<RawTicketId> for TicketId {
    fn from(raw: RawTicketId) -> Self {
        match raw {
            RawTicketId::Text(s) => Self(s),
            RawTicketId::Number(n) => Self(n.to_string()),
        }
    }
}

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for TicketId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user a ticket can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            available: None,
        }
    }
}

/// Display label for a numeric priority
///
/// 4 → Urgent, 3 → High, 2 → Medium, 1 → Low, anything else (including a
/// missing priority) → No priority.
pub fn priority_label(priority: Option<i64>) -> &'static str {
    match priority {
        Some(4) => "Urgent",
        Some(3) => "High",
        Some(2) => "Medium",
        Some(1) => "Low",
        _ => "No priority",
    }
}

/// A ticket as supplied by the remote feed
///
/// The board never edits ticket fields; it only changes the order of the
/// ticket list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(
        default,
        rename = "userId",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<String>,
}

impl Ticket {
    /// Creates a new ticket with the given ID and title
    pub fn new(id: impl Into<TicketId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: None,
            priority: None,
            user: None,
            user_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    /// Textual priority shown on the card
    pub fn priority_label(&self) -> &'static str {
        priority_label(self.priority)
    }
}

/// Body of the ticket feed
///
/// Either a bare list of tickets, or an envelope carrying tickets and the
/// users they reference by `userId`.
#[derive(Debug)]
pub enum TicketFeed {
    List(Vec<Ticket>),
    Envelope { tickets: Vec<Ticket>, users: Vec<User> },
}

#[derive(Deserialize)]
struct FeedEnvelope {
    tickets: Vec<Ticket>,
    #[serde(default, deserialize_with = "null_as_default")]
    users: Vec<User>,
}

impl TicketFeed {
    /// Decodes a feed body
    ///
    /// The shape is picked from the first non-whitespace byte, so a decode
    /// error names the offending field and position.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
        if first == Some(&b'[') {
            serde_json::from_slice(bytes).map(TicketFeed::List)
        } else {
            let envelope: FeedEnvelope = serde_json::from_slice(bytes)?;
            Ok(TicketFeed::Envelope {
                tickets: envelope.tickets,
                users: envelope.users,
            })
        }
    }

    /// Flattens the feed into a ticket list, resolving `userId` references
    /// against the envelope's users. Tickets that already embed a user keep it.
    pub fn into_tickets(self) -> Vec<Ticket> {
        match self {
            TicketFeed::List(tickets) => tickets,
            TicketFeed::Envelope { tickets, users } => {
                let by_id: HashMap<&str, &User> = users
                    .iter()
                    .filter_map(|u| u.id.as_deref().map(|id| (id, u)))
                    .collect();

                tickets
                    .into_iter()
                    .map(|mut ticket| {
                        if ticket.user.is_none() {
                            ticket.user = ticket
                                .user_id
                                .as_deref()
                                .and_then(|id| by_id.get(id))
                                .map(|u| (*u).clone());
                        }
                        ticket
                    })
                    .collect()
            }
        }
    }
}
