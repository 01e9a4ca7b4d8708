pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::TaskError;
pub use model::task::{NewTask, OwnerId, Task, TaskId};
pub use repository::{FileTaskStore, MemoryTaskStore, TaskStore};
pub use service::dto::AddTaskRequest;
pub use service::task_service::{TaskService, MIN_NAME_LEN};
pub use time::parse_deadline;
