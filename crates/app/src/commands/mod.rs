//! Command handlers - one function per subcommand
//!
//! Handlers write their output to the given writer and read prompts from the
//! given input, so they run the same against a terminal or a test buffer.

mod account;
mod summary;
mod tasks;
mod timers;

use std::io::{BufRead, Write};

use tasktime_common::validation::ValidationError;
use tasktime_core::{SubmitError, TimerError};
use tasktime_domain::{TaskId, TaskTimeError};
use thiserror::Error;
use tracing::debug;

use crate::cli::Command;
use crate::context::AppContext;

/// Why a command failed
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] TaskTimeError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error("Task {0} not found")]
    NotFound(TaskId),

    #[error("Aborted")]
    Aborted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommandError {
    /// Text printed to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            Self::Submit(err) => err.user_message(),
            Self::Timer(err) => err.user_message(),
            other => other.to_string(),
        }
    }

    /// The authentication failure behind this error, if any
    pub fn auth_error(&self) -> Option<&TaskTimeError> {
        let inner = match self {
            Self::Api(err) | Self::Submit(SubmitError::Api(err)) | Self::Timer(TimerError::Api(err)) => err,
            _ => return None,
        };
        inner.is_auth().then_some(inner)
    }
}

pub type CommandResult = Result<(), CommandError>;

/// Run one command against the context.
///
/// Commands other than register/login/logout restore the session first.
/// An authentication failure inside such a command ends the session; rejected
/// credentials on login or register leave the stored token untouched.
pub async fn run(
    command: Command,
    ctx: &mut AppContext,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> CommandResult {
    let session_bound = command.requires_session();
    if session_bound {
        let user = ctx.require_user().await?;
        debug!(user_id = user.id, "session restored");
    }

    let result = dispatch(command, ctx, out, input).await;

    if let (true, Err(err)) = (session_bound, &result) {
        if let Some(auth) = err.auth_error() {
            ctx.end_session(auth);
        }
    }
    result
}

async fn dispatch(
    command: Command,
    ctx: &mut AppContext,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> CommandResult {
    match command {
        Command::Register { username, email, password } => {
            account::register(ctx, out, input, username, email, password).await
        }
        Command::Login { username, password } => {
            account::login(ctx, out, input, username, password).await
        }
        Command::Logout => account::logout(ctx, out),
        Command::Whoami => account::whoami(ctx, out),
        Command::Tasks { status, priority } => tasks::list(ctx, out, status, priority).await,
        Command::Show { id } => tasks::show(ctx, out, id).await,
        Command::Add { title, description, priority, due } => {
            tasks::add(ctx, out, tasks::NewTaskArgs { title, description, priority, due }).await
        }
        Command::Edit { id, title, description, priority, status, due, clear_due } => {
            let args = tasks::EditArgs { title, description, priority, status, due, clear_due };
            tasks::edit(ctx, out, id, args).await
        }
        Command::Delete { id, yes } => tasks::delete(ctx, out, input, id, yes).await,
        Command::History { id } => tasks::history(ctx, out, id).await,
        Command::Start { id } => timers::start(ctx, out, id).await,
        Command::Stop { id } => timers::stop(ctx, out, id).await,
        Command::Watch { ids } => timers::watch(ctx, out, ids).await,
        Command::Summary { period, from, to } => summary::summary(ctx, out, period, from, to).await,
        Command::Dashboard => summary::dashboard(ctx, out).await,
    }
}
