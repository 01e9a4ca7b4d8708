use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a caller submits to create a task.
///
/// The owner is deliberately not part of the request; it is the
/// authenticated identity making the call and travels separately.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddTaskRequest {
    pub name: String,
    pub deadline: DateTime<Utc>,
}
