use anyhow::Result;

use crate::model::task::{NewTask, OwnerId, Task, TaskId};

/// Persistence boundary for tasks.
///
/// Implementations own durability, id assignment and the (owner, name)
/// uniqueness constraint. Errors here are infrastructure failures; the
/// service layer translates nothing, it passes them through.
pub trait TaskStore {
    fn find_by_id(&self, id: TaskId) -> Result<Option<Task>>;

    /// All tasks of one owner, in insertion order.
    fn find_all_by_owner(&self, owner: OwnerId) -> Result<Vec<Task>>;

    /// Exact match on the stored name, case-sensitive.
    fn exists_by_owner_and_name(&self, owner: OwnerId, name: &str) -> Result<bool>;

    /// Persist a new task, assigning its id and creation timestamp.
    ///
    /// Rejects a (owner, name) pair that is already present. This is the
    /// authoritative uniqueness guard; the service-level check only exists
    /// to produce a friendlier error first.
    fn save(&self, task: NewTask) -> Result<Task>;

    fn delete(&self, task: &Task) -> Result<()>;
}
