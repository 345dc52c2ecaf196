//! Identifier and position scalar types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display position of a task within its status column.
///
/// Positions start at 1 and order a column relative to its siblings; they
/// are not required to be dense, and gaps left behind when a task moves out
/// of a column are never compacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SortOrder(i64);

impl SortOrder {
    /// Position of the first task in a column.
    pub const FIRST: Self = Self(1);

    /// Creates a validated position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidSortOrder`] when the value is
    /// below 1.
    pub const fn new(value: i64) -> Result<Self, BoardDomainError> {
        if value < 1 {
            return Err(BoardDomainError::InvalidSortOrder(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns the position immediately after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the 1-based position for a 0-based sequence index.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self(i64::try_from(index).map_or(i64::MAX, |value| value.saturating_add(1)))
    }
}

impl From<SortOrder> for i64 {
    fn from(position: SortOrder) -> Self {
        position.0
    }
}

impl TryFrom<i64> for SortOrder {
    type Error = BoardDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
