use clap::{Parser, Subcommand};
use eyre::Result;
use kanban_agent::{CreateTaskInput, TaskStatus, TaskStore, tools, view};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Agent-driven kanban task board with JSON persistence")]
#[command(version)]
struct Cli {
    /// Workspace root holding the .kanban directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    store_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create tasks in 'ready' status, ordered after the current board
    Create {
        /// Task titles, in board order
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Move a task to a different status column
    Status {
        /// Task id (see `kanban list`)
        task_id: String,

        /// Target status: ready, in_progress, in_review, or done
        status: String,
    },

    /// List all tasks with per-status counts
    List,

    /// Clear the whole board
    Reset,

    /// Render the board as colored columns
    Board,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut store = TaskStore::open(&cli.store_path);

    match cli.command {
        Commands::Create { titles } => {
            // New tasks sort after everything already on the board
            let base = store
                .get_tasks()
                .iter()
                .map(|t| t.order)
                .fold(f64::NEG_INFINITY, f64::max)
                .max(-1.0);

            let inputs: Vec<CreateTaskInput> = titles
                .iter()
                .enumerate()
                .map(|(i, title)| CreateTaskInput {
                    title: title.clone(),
                    order: base + 1.0 + i as f64,
                })
                .collect();

            let args = tools::CreateTasksArgs { tasks: inputs };
            println!("{}", tools::create_tasks_invoke(&mut store, &args));
        }
        Commands::Status { task_id, status } => {
            let status: TaskStatus = status.parse().map_err(|e: String| eyre::eyre!(e))?;
            let args = tools::UpdateTaskArgs { task_id, status };
            println!("{}", tools::update_task_invoke(&mut store, &args)?);
        }
        Commands::List => {
            println!("{}", tools::get_tasks_invoke(&store));
        }
        Commands::Reset => {
            println!("{}", tools::reset_board_invoke(&mut store));
        }
        Commands::Board => {
            let columns = view::BoardColumns::from_tasks(&store.get_tasks());
            print!("{}", view::render(&columns));
        }
    }

    Ok(())
}
