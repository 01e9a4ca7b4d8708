pub mod dto;
pub mod task_service;


// Re-export
pub use dto::AddTaskRequest;
pub use task_service::TaskService;
