use thiserror::Error;

use crate::model::task::TaskId;

/// Caller-visible outcomes of a task service call.
///
/// The first four variants are terminal validation/ownership results;
/// `Store` carries everything that went wrong below the service.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("task name is empty")]
    EmptyName,

    #[error("task name must be at least {min} characters")]
    TooShortName { min: usize },

    #[error("a task named \"{0}\" already exists")]
    DuplicateTaskName(String),

    /// Covers both a task that does not exist and a task owned by
    /// someone else. The caller cannot tell the two apart, so one
    /// user can never probe for another user's tasks.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    /// Infrastructure failure from the task store, distinct from the
    /// validation outcomes above.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
