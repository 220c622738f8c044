use std::fmt;

/// Result of a single store mutation.
///
/// Every variant except [`WriteOutcome::Applied`] leaves the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The mutation was committed.
    Applied,
    /// A movie with the same title (ignoring case) already exists.
    Duplicate { title: String },
    /// No movie matched the given title.
    NotFound { title: String },
    /// The arguments were rejected before touching the database.
    Invalid { reason: String },
    /// The database reported a fault; the transaction was rolled back.
    Failed { diagnostic: String },
}

impl WriteOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Human-readable explanation for any non-success outcome.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Applied => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Applied => f.write_str("ok"),
            Self::Duplicate { title } => write!(f, "movie '{title}' already exists"),
            Self::NotFound { title } => write!(f, "movie '{title}' not found"),
            Self::Invalid { reason } => write!(f, "invalid input: {reason}"),
            Self::Failed { diagnostic } => write!(f, "database error: {diagnostic}"),
        }
    }
}
