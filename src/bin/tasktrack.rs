//! Browses users and their tasks from a JSON snapshot.
//!
//! Usage:
//!
//! ```text
//! tasktrack [--data <PATH>] [--now <RFC3339>] <COMMAND>
//! ```
//!
//! The snapshot holds `users` and `todos` arrays in the placeholder provider's
//! record format. Mutating commands (`toggle`, `add`) apply to the loaded
//! session and print the result; nothing is written back.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use tasktrack::clock::FixedClock;
use tasktrack::task::{
    adapters::json::JsonSnapshotSource,
    domain::{
        SortOrder, Task, TaskId, TaskStatistics, User, UserId, calculate_statistics,
        filter_by_status, group_by_user, parse_due_date, search_tasks, sort_by_due_date,
    },
    ports::TaskSourceError,
    services::{CreatePriorityTaskRequest, TaskSession, TaskSessionError},
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

type Session = TaskSession<FixedClock>;

#[derive(Debug, Parser)]
#[command(name = "tasktrack", version, about = "Browse users and their tasks")]
struct Cli {
    /// JSON snapshot with `users` and `todos` arrays
    #[arg(long, env = "TASKTRACK_DATA", default_value = "tasks.json", global = true)]
    data: Utf8PathBuf,

    /// Judge overdue tasks at this RFC 3339 instant instead of now
    #[arg(long, env = "TASKTRACK_NOW", global = true)]
    now: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List users with their completion rates
    Users,

    /// List one user's tasks
    Tasks(TasksArgs),

    /// Show completion statistics for one user or everyone
    Stats {
        /// Restrict to this user
        #[arg(long)]
        user: Option<u64>,
    },

    /// Count tasks per owner
    Groups,

    /// Toggle a task's completion
    Toggle {
        /// Owning user
        #[arg(long)]
        user: u64,

        /// Task to toggle
        #[arg(long)]
        task: u64,
    },

    /// Create a priority task
    Add {
        /// Owning user
        #[arg(long)]
        user: u64,

        /// Task title
        #[arg(long)]
        title: String,

        /// Priority (low, medium, high)
        #[arg(long)]
        priority: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("view").args(["status", "priority", "overdue", "due_before"])))]
struct TasksArgs {
    /// Owning user
    #[arg(long)]
    user: u64,

    /// Only tasks whose status starts with this text
    #[arg(long)]
    status: Option<String>,

    /// Only priority tasks at this level
    #[arg(long)]
    priority: Option<String>,

    /// Only overdue priority tasks
    #[arg(long)]
    overdue: bool,

    /// Only priority tasks due before this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    due_before: Option<DateTime<Utc>>,

    /// Only tasks whose title contains this keyword
    #[arg(long)]
    search: Option<String>,

    /// Order by due date
    #[arg(long, value_enum)]
    sort: Option<SortArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Asc => Self::Ascending,
            SortArg::Desc => Self::Descending,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to open snapshot: {0}")]
    Snapshot(#[source] TaskSourceError),
    #[error(transparent)]
    Session(#[from] TaskSessionError),
    #[error("user {0} not found")]
    UnknownUser(UserId),
    #[error("task {task_id} not found for user {user_id}")]
    UnknownTask { user_id: UserId, task_id: TaskId },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn parse_day(value: &str) -> Result<DateTime<Utc>, String> {
    match parse_due_date(value) {
        Ok(Some(day)) => Ok(day),
        Ok(None) => Err("date must not be empty".to_owned()),
        Err(err) => Err(err.to_string()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::error!(error = %err, "tasktrack failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let source = JsonSnapshotSource::open(&cli.data).map_err(CliError::Snapshot)?;
    let now = cli.now.unwrap_or_else(Utc::now);
    let mut session = TaskSession::load(&source, Arc::new(FixedClock::new(now))).await?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Users => write_users(&mut out, session.users())?,
        Command::Tasks(args) => {
            let user = find_user(&session, args.user)?;
            let tasks = select_tasks(user, &args, session.clock());
            write_tasks(&mut out, &tasks, session.clock())?;
        }
        Command::Stats { user } => {
            let stats = match user {
                Some(id) => calculate_statistics(find_user(&session, id)?.tasks()),
                None => calculate_statistics(session.all_tasks()),
            };
            write_statistics(&mut out, &stats)?;
        }
        Command::Groups => {
            for (owner, tasks) in group_by_user(session.all_tasks()) {
                writeln!(out, "User {owner}: {} task(s)", tasks.len())?;
            }
        }
        Command::Toggle { user, task } => {
            let user_id = UserId::new(user);
            let task_id = TaskId::new(task);
            let clock = *session.clock();
            let toggled = session
                .toggle_task(user_id, task_id)
                .ok_or(CliError::UnknownTask { user_id, task_id })?;
            writeln!(out, "Task \"{}\" updated.", toggled.title())?;
            write_task(&mut out, toggled, &clock)?;
        }
        Command::Add {
            user,
            title,
            priority,
            due,
        } => {
            let user_id = UserId::new(user);
            let mut request = CreatePriorityTaskRequest::new(title, priority);
            if let Some(raw) = due {
                request = request.with_due_date(raw);
            }
            let created = session
                .create_priority_task(user_id, request)?
                .ok_or(CliError::UnknownUser(user_id))?;
            writeln!(out, "Priority task added successfully.")?;
            write_task(&mut out, &created, session.clock())?;
        }
    }
    Ok(())
}

fn find_user(session: &Session, id: u64) -> Result<&User, CliError> {
    let user_id = UserId::new(id);
    session.user(user_id).ok_or(CliError::UnknownUser(user_id))
}

fn select_tasks<'a>(user: &'a User, args: &TasksArgs, clock: &FixedClock) -> Vec<&'a Task> {
    let mut selected = select_view(user, args, clock);
    if let Some(keyword) = &args.search {
        selected = search_tasks(selected, keyword);
    }
    if let Some(order) = args.sort {
        selected = sort_by_due_date(selected, order.into());
    }
    selected
}

/// Applies the single narrowing view chosen on the command line.
fn select_view<'a>(user: &'a User, args: &TasksArgs, clock: &FixedClock) -> Vec<&'a Task> {
    if let Some(prefix) = &args.status {
        return filter_by_status(user.tasks(), prefix, clock);
    }
    if let Some(priority) = &args.priority {
        return user.tasks_by_priority(priority);
    }
    if args.overdue {
        return user.overdue_tasks(clock);
    }
    if let Some(date) = args.due_before {
        return user.tasks_due_before(date);
    }
    user.tasks().iter().collect()
}

fn write_users(out: &mut impl Write, users: &[User]) -> io::Result<()> {
    for user in users {
        writeln!(
            out,
            "{}. {} ({}) - {:.2}% complete",
            user.id(),
            user.name(),
            user.email(),
            user.completion_rate()
        )?;
    }
    Ok(())
}

fn write_tasks(out: &mut impl Write, tasks: &[&Task], clock: &FixedClock) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No tasks found.");
    }
    for task in tasks {
        write_task(out, task, clock)?;
    }
    Ok(())
}

fn write_task(out: &mut impl Write, task: &Task, clock: &FixedClock) -> io::Result<()> {
    writeln!(
        out,
        "[{}] {} - {}",
        task.id(),
        task.title(),
        task.status_label(clock)
    )?;
    if let Some(details) = task.priority_details() {
        let due = details.due_date().map_or_else(
            || "None".to_owned(),
            |date| date.format("%Y-%m-%d").to_string(),
        );
        writeln!(out, "    Priority: {} | Due: {due}", details.priority())?;
    }
    Ok(())
}

fn write_statistics(out: &mut impl Write, stats: &TaskStatistics) -> io::Result<()> {
    writeln!(out, "Total: {}", stats.total_count)?;
    writeln!(out, "Completed: {}", stats.completed_count)?;
    writeln!(out, "Incomplete: {}", stats.incomplete_count)?;
    writeln!(out, "Completion rate: {:.2}%", stats.completion_rate)
}
