//! Command-line interface definition

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use tasktime_domain::{SummaryPeriod, TaskId, TaskPriority, TaskStatus};

#[derive(Debug, Parser)]
#[command(name = "tasktime")]
#[command(about = "Track tasks and the time spent on them", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// API base URL, e.g. https://tasks.example.com/api
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Configuration file to use instead of the searched locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create an account and sign in
    Register {
        #[arg(value_name = "USERNAME")]
        username: String,

        #[arg(value_name = "EMAIL")]
        email: String,

        /// Read from stdin when omitted
        #[arg(long, env = "TASKTIME_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign in with an existing account
    Login {
        #[arg(value_name = "USERNAME")]
        username: String,

        /// Read from stdin when omitted
        #[arg(long, env = "TASKTIME_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List tasks
    Tasks {
        #[arg(long, value_name = "STATUS")]
        status: Option<TaskStatus>,

        #[arg(long, value_name = "PRIORITY")]
        priority: Option<TaskPriority>,
    },

    /// Show one task
    Show {
        #[arg(value_name = "ID")]
        id: TaskId,
    },

    /// Create a task
    Add {
        #[arg(value_name = "TITLE")]
        title: String,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long, default_value = "medium")]
        priority: TaskPriority,

        /// Due date as YYYY-MM-DD
        #[arg(long, value_name = "DATE")]
        due: Option<String>,
    },

    /// Edit a task; omitted fields keep their current value
    Edit {
        #[arg(value_name = "ID")]
        id: TaskId,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        priority: Option<TaskPriority>,

        #[arg(short, long)]
        status: Option<TaskStatus>,

        /// Due date as YYYY-MM-DD
        #[arg(long, value_name = "DATE", conflicts_with = "clear_due")]
        due: Option<String>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },

    /// Delete a task
    Delete {
        #[arg(value_name = "ID")]
        id: TaskId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Start the timer of a task
    Start {
        #[arg(value_name = "ID")]
        id: TaskId,
    },

    /// Stop the timer of a task
    Stop {
        #[arg(value_name = "ID")]
        id: TaskId,
    },

    /// List the time entries of a task
    History {
        #[arg(value_name = "ID")]
        id: TaskId,
    },

    /// Time tracked per task over a period
    Summary {
        /// today, this_week or this_month
        #[arg(long, default_value = "today", conflicts_with_all = ["from", "to"])]
        period: SummaryPeriod,

        /// Start of a custom range (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", requires = "to")]
        from: Option<NaiveDate>,

        /// End of a custom range (YYYY-MM-DD)
        #[arg(long, value_name = "DATE", requires = "from")]
        to: Option<NaiveDate>,
    },

    /// Task counts, the task list and today's summary
    Dashboard,

    /// Redraw running timers every second until they stop or Ctrl-C
    Watch {
        /// Tasks to watch; all running tasks when empty
        #[arg(value_name = "ID")]
        ids: Vec<TaskId>,
    },
}

impl Command {
    /// Whether the command needs a restored session before it runs
    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Register { .. } | Self::Login { .. } | Self::Logout)
    }
}
