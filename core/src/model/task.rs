use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned by the task store when a task is first persisted.
pub type TaskId = u64;

/// Identity of an already-authenticated user.
///
/// Issued by an external auth subsystem; this crate never creates or
/// verifies one, it only scopes queries and mutations by it.
pub type OwnerId = Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,

    // Any point in time is acceptable, including the past. Whether a
    // deadline is sensible is the caller's business, not ours.
    pub deadline: DateTime<Utc>,

    // Set exactly once at creation, never transferred.
    pub owner: OwnerId,

    pub created_at: DateTime<Utc>,
}

/// A task that has not been persisted yet.
///
/// The store assigns the id and the creation timestamp when it accepts
/// one; nothing outside a store builds a [`Task`] directly.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub owner: OwnerId,
}

impl NewTask {
    pub fn new(name: impl Into<String>, deadline: DateTime<Utc>, owner: OwnerId) -> Self {
        Self {
            name: name.into(),
            deadline,
            owner,
        }
    }

    pub(crate) fn into_task(self, id: TaskId, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            name: self.name,
            deadline: self.deadline,
            owner: self.owner,
            created_at,
        }
    }
}
