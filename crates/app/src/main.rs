//! tasktime - terminal client for the task and time tracking API

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tasktime_app::utils::logging;
use tasktime_app::{run, AppContext, Cli};
use tasktime_domain::Config;
use tasktime_infra::config;

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::apply_env_overrides(config::load_from_file(path)?)?,
        None => config::load()?,
    };

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    config::validate(&config)?;
    Ok(config)
}

fn main() -> ExitCode {
    // .env first so TASKTIME_* overrides from it are visible to the loader
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            logging::init("warn", cli.verbose);
            tracing::error!(error = %err, "configuration rejected");
            let _ = writeln!(io::stderr(), "error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.log_level, cli.verbose);
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::trace!(error = %err, "no .env loaded"),
    }

    match execute(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            let _ = writeln!(io::stderr(), "error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli, config: Config) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")
        .map_err(|err| format!("{err:#}"))?;

    runtime.block_on(async move {
        let mut ctx = AppContext::new(config).map_err(|err| err.user_message())?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let stdin = io::stdin();
        let mut input = stdin.lock();

        run(cli.command, &mut ctx, &mut out, &mut input).await.map_err(|err| {
            tracing::debug!(error = %err, "command failed");
            err.user_message()
        })
    })
}
