use tracing::{debug, info};

use crate::error::TaskError;
use crate::model::task::{NewTask, OwnerId, Task, TaskId};
use crate::repository::traits::TaskStore;
use crate::service::dto::AddTaskRequest;

/// Minimum task name length, in characters, after trimming.
pub const MIN_NAME_LEN: usize = 2;

/// Validation and ownership rules over a [`TaskStore`].
///
/// Holds no state of its own; every call goes straight to the store.
pub struct TaskService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a task for `owner`.
    ///
    /// The name is trimmed, then checked in order: empty, too short,
    /// already taken by this owner. The first failing check decides the
    /// error and nothing is persisted.
    pub fn add_one(&self, request: AddTaskRequest, owner: OwnerId) -> Result<Task, TaskError> {
        let name = request.name.trim();

        if name.is_empty() {
            debug!(%owner, "rejected task: empty name");
            return Err(TaskError::EmptyName);
        }
        if name.chars().count() < MIN_NAME_LEN {
            debug!(%owner, name, "rejected task: name too short");
            return Err(TaskError::TooShortName { min: MIN_NAME_LEN });
        }
        if self.store.exists_by_owner_and_name(owner, name)? {
            debug!(%owner, name, "rejected task: duplicate name");
            return Err(TaskError::DuplicateTaskName(name.to_string()));
        }

        let task = self
            .store
            .save(NewTask::new(name, request.deadline, owner))?;
        info!(%owner, id = task.id, "task created");
        Ok(task)
    }

    /// All tasks belonging to `owner`, in the order the store keeps them.
    pub fn home(&self, owner: OwnerId) -> Result<Vec<Task>, TaskError> {
        Ok(self.store.find_all_by_owner(owner)?)
    }

    /// Delete a task the requester owns.
    ///
    /// A missing task and a task owned by someone else both come back
    /// as [`TaskError::TaskNotFound`], so the existence of another
    /// user's task is never revealed.
    pub fn delete(&self, id: TaskId, requester: OwnerId) -> Result<(), TaskError> {
        let task = match self.store.find_by_id(id)? {
            Some(task) if task.owner == requester => task,
            _ => return Err(TaskError::TaskNotFound(id)),
        };

        self.store.delete(&task)?;
        info!(%requester, id, "task deleted");
        Ok(())
    }
}
