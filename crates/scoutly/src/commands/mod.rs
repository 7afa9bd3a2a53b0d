//! Command dispatch: bridges CLI args to `Scout` calls and output formatting.

pub mod coaches;
pub mod config_cmd;
pub mod players;
pub mod reports;
pub mod shortlists;
pub mod util;

use scoutly_core::{CoreError, Scout};
use scoutly_core::models::CurrentUser;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Dispatch an API-bound command to its handler.
pub async fn dispatch(cmd: Command, scout: &Scout, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Players(args) => players::handle(scout, args, global).await,
        Command::Coaches(args) => coaches::handle(scout, args, global).await,
        Command::Shortlists(args) => shortlists::handle(scout, args, global).await,
        Command::Reports(args) => reports::handle(scout, args, global).await,
        Command::Me { sync } => me(scout, sync, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "local command reached API dispatch".into(),
        )),
    }
}

fn user_detail(u: &CurrentUser) -> String {
    let name = [u.first_name.as_deref(), u.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    output::detail_block(&[
        ("ID", u.id.to_string()),
        ("Email", u.email.clone()),
        ("Name", output::or_dash(Some(name.as_str()))),
        ("Role", u.role.clone()),
    ])
}

async fn me(scout: &Scout, sync: bool, global: &GlobalOpts) -> Result<(), CliError> {
    if sync {
        scout.api().sync_user().await.map_err(CoreError::from)?;
        output::print_status("Profile refreshed from the identity provider", global.quiet);
    }
    let user = scout.current_user().await?;
    let out = output::render_single(global.output, &user, user_detail, |u| u.email.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
