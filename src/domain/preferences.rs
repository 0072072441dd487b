use std::fmt;

/// How tickets are partitioned into columns
///
/// Values that are not one of the known groupings are kept verbatim in
/// `Other` so they are written back to storage unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Grouping {
    #[default]
    Status,
    User,
    Priority,
    Other(String),
}

/// How tickets are ordered inside a column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Sorting {
    #[default]
    Priority,
    Title,
    Other(String),
}

impl Grouping {
    pub const STORAGE_KEY: &'static str = "grouping";

    pub fn as_str(&self) -> &str {
        match self {
            Grouping::Status => "status",
            Grouping::User => "user",
            Grouping::Priority => "priority",
            Grouping::Other(raw) => raw,
        }
    }

    /// Human-readable label used by the selector
    pub fn label(&self) -> &str {
        match self {
            Grouping::Status => "Status",
            Grouping::User => "User",
            Grouping::Priority => "Priority",
            Grouping::Other(raw) => raw,
        }
    }
}

impl Sorting {
    pub const STORAGE_KEY: &'static str = "sorting";

    pub fn as_str(&self) -> &str {
        match self {
            Sorting::Priority => "priority",
            Sorting::Title => "title",
            Sorting::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Sorting::Priority => "Priority",
            Sorting::Title => "Title",
            Sorting::Other(raw) => raw,
        }
    }
}

// Matching is exact: the stored strings are the lowercase option values.
impl From<&str> for Grouping {
    fn from(s: &str) -> Self {
        match s {
            "status" => Grouping::Status,
            "user" => Grouping::User,
            "priority" => Grouping::Priority,
            other => Grouping::Other(other.to_string()),
        }
    }
}

impl From<&str> for Sorting {
    fn from(s: &str) -> Self {
        match s {
            "priority" => Sorting::Priority,
            "title" => Sorting::Title,
            other => Sorting::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of selector values the board persists
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    pub grouping: Grouping,
    pub sorting: Sorting,
}

impl Preferences {
    pub fn new(grouping: Grouping, sorting: Sorting) -> Self {
        Self { grouping, sorting }
    }
}
