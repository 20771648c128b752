use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid course priority: {0}")]
pub struct PriorityError(pub u8);

/// Ordering of a course run's state, lowest value first in listings.
///
/// Carried on the wire as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    OngoingOpen = 0,
    FutureOpen = 1,
    ArchivedOpen = 2,
    FutureNotYetOpen = 3,
    FutureClosed = 4,
    OngoingClosed = 5,
    ArchivedClosed = 6,
    ToBeScheduled = 7,
}

impl TryFrom<u8> for Priority {
    type Error = PriorityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::OngoingOpen),
            1 => Ok(Priority::FutureOpen),
            2 => Ok(Priority::ArchivedOpen),
            3 => Ok(Priority::FutureNotYetOpen),
            4 => Ok(Priority::FutureClosed),
            5 => Ok(Priority::OngoingClosed),
            6 => Ok(Priority::ArchivedClosed),
            7 => Ok(Priority::ToBeScheduled),
            other => Err(PriorityError(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}
