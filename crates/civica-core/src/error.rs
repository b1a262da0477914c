use thiserror::Error;

use crate::state::IssueId;

/// A rejected state transition. All variants are recoverable: the reducer
/// leaves state untouched and the initiating view decides what to show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Reporting an issue whose id is already in the collection.
    #[error("issue '{0}' already exists")]
    DuplicateIssueId(IssueId),

    /// Resolving an id no issue carries.
    #[error("issue '{0}' not found")]
    IssueNotFound(IssueId),

    /// Resolving an issue a second time. Rejected so points are never
    /// awarded twice for the same issue.
    #[error("issue '{0}' is already resolved")]
    AlreadyResolved(IssueId),

    /// Purchase cost exceeds the current balance.
    #[error("reward costs {cost} points but balance is {points}")]
    InsufficientPoints { cost: u32, points: u32 },
}

pub type TransitionResult<T> = std::result::Result<T, TransitionError>;
