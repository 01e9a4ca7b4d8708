use std::sync::{Mutex, MutexGuard};

use anyhow::{anyhow, Result};
use chrono::Utc;

use crate::model::task::{NewTask, OwnerId, Task, TaskId};
use crate::repository::traits::TaskStore;

#[derive(Default)]
struct State {
    next_id: TaskId,
    tasks: Vec<Task>,
}

/// Task store backed by process memory.
///
/// State is gone when the process exits. Mainly for tests and for
/// embedding the service without a data directory.
#[derive(Default)]
pub struct MemoryTaskStore {
    state: Mutex<State>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>> {
        self.state
            .lock()
            .map_err(|_| anyhow!("task store mutex poisoned"))
    }
}

impl TaskStore for MemoryTaskStore {
    fn find_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let state = self.lock()?;
        Ok(state.tasks.iter().find(|t| t.id == id).cloned())
    }

    fn find_all_by_owner(&self, owner: OwnerId) -> Result<Vec<Task>> {
        let state = self.lock()?;
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect())
    }

    fn exists_by_owner_and_name(&self, owner: OwnerId, name: &str) -> Result<bool> {
        let state = self.lock()?;
        Ok(state
            .tasks
            .iter()
            .any(|t| t.owner == owner && t.name == name))
    }

    fn save(&self, task: NewTask) -> Result<Task> {
        let mut state = self.lock()?;
        if state
            .tasks
            .iter()
            .any(|t| t.owner == task.owner && t.name == task.name)
        {
            return Err(anyhow!(
                "constraint violation: owner already has a task named \"{}\"",
                task.name
            ));
        }

        state.next_id += 1;
        let task = task.into_task(state.next_id, Utc::now());
        state.tasks.push(task.clone());
        Ok(task)
    }

    fn delete(&self, task: &Task) -> Result<()> {
        let mut state = self.lock()?;
        let initial_len = state.tasks.len();
        state.tasks.retain(|t| t.id != task.id);

        if state.tasks.len() == initial_len {
            return Err(anyhow!("task with ID {} not found", task.id));
        }
        Ok(())
    }
}
