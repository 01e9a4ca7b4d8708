use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tabled::{settings::Style, Table, Tabled};
use taskdeck_core::{parse_deadline, AddTaskRequest, FileTaskStore, Task, TaskError, TaskService};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A per-user task list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a task (usage: add "Task name" --due tomorrow --owner <uuid>)
    Add {
        /// Task name
        name: String,
        /// Deadline: today, tomorrow, +3d, +2w, 2025-12-31 or "2025-12-31 17:00"
        #[arg(long)]
        due: String,
        /// Acting user, as issued by the auth layer
        #[arg(long)]
        owner: Uuid,
    },
    /// List your tasks
    List {
        /// Acting user, as issued by the auth layer
        #[arg(long)]
        owner: Uuid,
    },
    /// Delete a task you own
    Delete {
        /// Task id
        id: u64,
        /// Acting user, as issued by the auth layer
        #[arg(long)]
        owner: Uuid,
    },
}

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<Task> for TaskRow {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            due: task
                .deadline
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            created: task
                .created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let store = FileTaskStore::new(None)?;
    let service = TaskService::new(store);

    match cli.command {
        Commands::Add { name, due, owner } => {
            let deadline = match parse_deadline(&due) {
                Ok(dt) => dt,
                Err(err) => {
                    println!("Error: {}", err);
                    std::process::exit(1);
                }
            };

            match service.add_one(AddTaskRequest { name, deadline }, owner) {
                Ok(task) => {
                    println!("Task added: {} (ID: {})", task.name, task.id);
                    println!(
                        "  Due: {}",
                        task.deadline.with_timezone(&Local).format("%Y-%m-%d %H:%M")
                    );
                }
                Err(TaskError::Store(err)) => return Err(err),
                Err(err) => {
                    println!("Error: {}", err);
                    std::process::exit(1);
                }
            }
        }
        Commands::List { owner } => {
            let tasks = service.home(owner)?;
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                let rows: Vec<TaskRow> = tasks.into_iter().map(TaskRow::from).collect();
                let mut table = Table::new(rows);
                table.with(Style::rounded());
                println!("{}", table);
            }
        }
        Commands::Delete { id, owner } => match service.delete(id, owner) {
            Ok(()) => println!("Task {} deleted.", id),
            Err(TaskError::Store(err)) => return Err(err),
            Err(err) => {
                println!("Error: {}", err);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
