use std::io::{BufRead, Write};

use tasktime_core::{LoginForm, RegisterForm};

use super::CommandResult;
use crate::context::AppContext;
use crate::render;
use crate::utils::prompt;

fn password_or_prompt(password: Option<String>, input: &mut dyn BufRead) -> std::io::Result<String> {
    match password {
        Some(password) => Ok(password),
        None => prompt::read_line("Password: ", input),
    }
}

pub(super) async fn register(
    ctx: &mut AppContext,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    username: String,
    email: String,
    password: Option<String>,
) -> CommandResult {
    let password = password_or_prompt(password, input)?;
    let registration = RegisterForm::new(username, email, password).registration()?;

    let user = ctx.session.register(&registration).await?;
    writeln!(out, "Registered and logged in as {}", user.username)?;
    Ok(())
}

pub(super) async fn login(
    ctx: &mut AppContext,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    username: String,
    password: Option<String>,
) -> CommandResult {
    let password = password_or_prompt(password, input)?;
    let credentials = LoginForm::new(username, password).credentials()?;

    let user = ctx.session.login(&credentials).await?;
    writeln!(out, "Logged in as {}", user.username)?;
    Ok(())
}

pub(super) fn logout(ctx: &mut AppContext, out: &mut dyn Write) -> CommandResult {
    ctx.session.logout()?;
    writeln!(out, "Logged out")?;
    Ok(())
}

pub(super) fn whoami(ctx: &AppContext, out: &mut dyn Write) -> CommandResult {
    match ctx.session.user() {
        Some(user) => writeln!(out, "{}", render::user(user))?,
        None => writeln!(out, "Not logged in")?,
    }
    Ok(())
}
