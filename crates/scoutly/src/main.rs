mod cli;
mod commands;
mod config;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scoutly_core::{Scout, UnauthorizedHandler};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Local commands never touch the API
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "scoutly", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let (profile, scout_config) = config::build_scout_config(&cli.global)?;

            let rejected_for = profile.clone();
            let on_unauthorized: Arc<dyn UnauthorizedHandler> = Arc::new(move || {
                tracing::warn!(profile = %rejected_for, "bearer token rejected; sign in again");
            });
            let scout = Scout::new(&scout_config)?.with_unauthorized_handler(on_unauthorized);

            tracing::debug!(command = ?cmd, %profile, "dispatching command");
            commands::dispatch(cmd, &scout, &cli.global)
                .await
                .map_err(|e| e.with_profile(&profile))
        }
    }
}
