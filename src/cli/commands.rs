use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("[*] taskdeck v", env!("CARGO_PKG_VERSION"), " - your tasks, one server away"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the API base URL
    #[arg(short = 'u', long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Use a specific config file instead of discovery
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks
    List(ListArgs),
    /// Show task details
    Show(IdArg),
    /// Add a task
    Add(AddArgs),
    /// Change a task's status
    Status(StatusArgs),
    /// Start a task (shortcut for status <ID> "in Bearbeitung")
    Start(IdArg),
    /// Mark a task done (shortcut for status <ID> erledigt)
    Done(IdArg),
    /// Edit a task's fields
    Edit(EditArgs),
    /// Delete a task
    Delete(IdArg),
    /// Verify the API is reachable
    Check,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Filter by status (offen, "in Bearbeitung", erledigt; wire names work too)
    #[arg(long)]
    pub status: Option<String>,
    /// Case-insensitive search in title and description
    #[arg(long)]
    pub search: Option<String>,
    /// Sort key (id, title)
    #[arg(long, default_value = "id")]
    pub sort: String,
}

#[derive(Args)]
pub struct IdArg {
    /// Task ID
    pub id: u64,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Optional description
    #[arg(long)]
    pub desc: Option<String>,
    /// Initial status (default: offen)
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Task ID
    pub id: u64,
    /// New status
    pub status: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: u64,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New description (an empty string clears it)
    #[arg(long)]
    pub desc: Option<String>,
    /// New status
    #[arg(long)]
    pub status: Option<String>,
}
