use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::task::{NewTask, OwnerId, Task, TaskId};
use crate::repository::traits::TaskStore;

const DEFAULT_FILE_NAME: &str = "tasks.json";

/// On-disk document. `next_id` is the id sequence; it only ever grows,
/// so ids are never reused after a delete.
#[derive(Serialize, Deserialize, Default)]
struct StoreFile {
    next_id: TaskId,
    tasks: Vec<Task>,
}

/// Task store persisted as a single JSON document.
///
/// Every operation is a whole-file read (and, for mutations, rewrite);
/// the mutex serializes read-modify-write cycles within one process.
pub struct FileTaskStore {
    file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileTaskStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".taskdeck")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &StoreFile::default())?;
            writer.flush()?;
        }
        debug!(path = %path.display(), "opened task store");

        Ok(FileTaskStore {
            file_path: path,
            write_lock: Mutex::new(()),
        })
    }

    fn read_store(&self) -> Result<StoreFile> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let store = serde_json::from_reader(reader)?;
        Ok(store)
    }

    fn write_store(&self, store: &StoreFile) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, store)?;
        writer.flush()?;
        Ok(())
    }
}

impl TaskStore for FileTaskStore {
    fn find_by_id(&self, id: TaskId) -> Result<Option<Task>> {
        let store = self.read_store()?;
        Ok(store.tasks.into_iter().find(|t| t.id == id))
    }

    fn find_all_by_owner(&self, owner: OwnerId) -> Result<Vec<Task>> {
        let store = self.read_store()?;
        Ok(store
            .tasks
            .into_iter()
            .filter(|t| t.owner == owner)
            .collect())
    }

    fn exists_by_owner_and_name(&self, owner: OwnerId, name: &str) -> Result<bool> {
        let store = self.read_store()?;
        Ok(store
            .tasks
            .iter()
            .any(|t| t.owner == owner && t.name == name))
    }

    fn save(&self, task: NewTask) -> Result<Task> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow!("task store lock poisoned"))?;

        let mut store = self.read_store()?;
        if store
            .tasks
            .iter()
            .any(|t| t.owner == task.owner && t.name == task.name)
        {
            return Err(anyhow!(
                "constraint violation: owner already has a task named \"{}\"",
                task.name
            ));
        }

        store.next_id += 1;
        let task = task.into_task(store.next_id, Utc::now());
        store.tasks.push(task.clone());
        self.write_store(&store)?;
        Ok(task)
    }

    fn delete(&self, task: &Task) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| anyhow!("task store lock poisoned"))?;

        let mut store = self.read_store()?;
        let initial_len = store.tasks.len();
        store.tasks.retain(|t| t.id != task.id);

        if store.tasks.len() == initial_len {
            return Err(anyhow!("task with ID {} not found", task.id));
        }

        self.write_store(&store)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn draft(name: &str, owner: OwnerId) -> NewTask {
        NewTask::new(name, Utc::now() + Duration::hours(1), owner)
    }

    #[test]
    fn persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let owner = Uuid::new_v4();

        {
            let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();
            store.save(draft("Water the plants", owner)).unwrap();
        }

        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();
        let tasks = store.find_all_by_owner(owner).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Water the plants");
        assert_eq!(tasks[0].id, 1);
    }

    #[test]
    fn id_sequence_never_reuses_after_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();
        let owner = Uuid::new_v4();

        let first = store.save(draft("First", owner)).unwrap();
        store.delete(&first).unwrap();
        let second = store.save(draft("Second", owner)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn save_rejects_duplicate_name_for_same_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();
        let owner = Uuid::new_v4();

        store.save(draft("Laundry", owner)).unwrap();
        assert!(store.save(draft("Laundry", owner)).is_err());
        assert!(store.save(draft("Laundry", Uuid::new_v4())).is_ok());
    }

    #[test]
    fn find_all_is_scoped_to_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTaskStore::new(Some(dir.path().to_path_buf())).unwrap();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store.save(draft("Alice's task", alice)).unwrap();
        store.save(draft("Bob's task", bob)).unwrap();

        let tasks = store.find_all_by_owner(alice).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Alice's task");
    }
}
