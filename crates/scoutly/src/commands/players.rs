//! Player command handlers.

use tabled::Tabled;

use scoutly_core::models::{NewPlayer, Player, PlayerStatsSummary, PlayerUpdate};
use scoutly_core::{EntityDetail, PlayerFilters, Players, Scout, category};

use crate::cli::{
    GlobalOpts, PlayerCreateArgs, PlayerListArgs, PlayerUpdateArgs, PlayersArgs, PlayersCommand,
};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Pos")]
    position: String,
    #[tabled(rename = "Club")]
    club: String,
    #[tabled(rename = "Nation")]
    nationality: String,
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "OVR")]
    rating: String,
}

impl PlayerRow {
    fn new(p: &Player, color: bool) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            position: output::position_badge(&p.position, color),
            club: output::or_dash(p.current_club.as_deref()),
            nationality: output::or_dash(p.nationality.as_deref()),
            age: output::opt_display(p.age),
            value: p
                .market_value_eur
                .map_or_else(|| "-".into(), output::format_eur),
            rating: output::opt_display(p.overall_rating),
        }
    }
}

fn detail(d: &EntityDetail<Player>, color: bool) -> String {
    let p = &d.entity;
    let mut rows = vec![
        ("ID", p.id.to_string()),
        ("Name", p.full_name.clone().unwrap_or_else(|| p.name.clone())),
        ("Position", output::position_badge(&p.position, color)),
        ("Club", output::or_dash(p.current_club.as_deref())),
        ("Nationality", output::or_dash(p.nationality.as_deref())),
        ("Born", output::opt_display(p.date_of_birth)),
        ("Foot", output::or_dash(p.preferred_foot.as_deref())),
        (
            "Value",
            p.market_value_eur
                .map_or_else(|| "-".into(), output::format_eur),
        ),
        (
            "Rating",
            format!(
                "{} (potential {})",
                output::opt_display(p.overall_rating),
                output::opt_display(p.potential_rating)
            ),
        ),
    ];
    if let Some(notes) = &p.scouting_notes {
        rows.push(("Notes", notes.clone()));
    }

    let mut out = output::detail_block(&rows);
    if !d.similar.is_empty() {
        out.push_str("\n\nSimilar players:");
        for s in &d.similar {
            out.push_str(&format!(
                "\n  {}  {} ({})",
                s.id,
                s.name,
                output::position_badge(&s.position, color)
            ));
        }
    }
    out
}

fn stats_detail(s: &PlayerStatsSummary) -> String {
    let o = &s.overview;
    let mut out = output::detail_block(&[
        ("Players", o.total_players.to_string()),
        ("Nationalities", o.total_nationalities.to_string()),
        ("Clubs", o.total_clubs.to_string()),
        ("Positions", o.total_positions.to_string()),
        ("Avg value", output::format_eur(o.avg_market_value_eur)),
        (
            "Max value",
            o.max_market_value_eur
                .map_or_else(|| "-".into(), output::format_eur),
        ),
    ]);
    if !s.position_breakdown.is_empty() {
        out.push_str("\n\nBy position:");
        for p in &s.position_breakdown {
            out.push_str(&format!("\n  {:<4} {}", p.position, p.count));
        }
    }
    out
}

// ── Payloads ────────────────────────────────────────────────────────

fn filters(args: &PlayerListArgs) -> PlayerFilters {
    PlayerFilters {
        position: args.position.as_deref().and_then(category),
        club: args.club.as_deref().and_then(category),
        nationality: args.nationality.as_deref().and_then(category),
        min_value: args.min_value,
        max_value: args.max_value,
    }
}

fn new_player(args: PlayerCreateArgs) -> Result<NewPlayer, CliError> {
    if let Some(path) = &args.from_file {
        return util::read_json_file(path);
    }
    let (Some(name), Some(position)) = (args.name, args.position) else {
        return Err(CliError::Validation {
            field: "name".into(),
            reason: "--name and --position are required without --from-file".into(),
        });
    };
    Ok(NewPlayer {
        name,
        position,
        current_club: args.club,
        nationality: args.nationality,
        date_of_birth: util::parse_opt("born", args.born.as_deref())?,
        preferred_foot: util::parse_opt("foot", args.foot.as_deref())?,
        market_value_eur: args.value,
        overall_rating: args.rating,
        potential_rating: args.potential,
        scouting_notes: args.notes,
        ..NewPlayer::default()
    })
}

fn player_update(args: PlayerUpdateArgs) -> Result<PlayerUpdate, CliError> {
    if let Some(path) = &args.from_file {
        return util::read_json_file(path);
    }
    let update = PlayerUpdate {
        name: args.name,
        current_club: args.club,
        market_value_eur: args.value,
        overall_rating: args.rating,
        scouting_notes: args.notes,
    };
    if serde_json::to_value(&update)?
        .as_object()
        .is_none_or(serde_json::Map::is_empty)
    {
        return Err(CliError::Validation {
            field: "update".into(),
            reason: "nothing to change; pass at least one field or --from-file".into(),
        });
    }
    Ok(update)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(scout: &Scout, args: PlayersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color);

    match args.command {
        PlayersCommand::List(list) => {
            let query = util::build_query::<Players>(&list.list, scout.page_size(), filters(&list));
            let (rows, meta) = util::collect_pages(&scout.players(), query, list.list.all).await?;
            let out = output::render_list(
                global.output,
                &rows,
                |p| PlayerRow::new(p, color),
                |p| p.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            if !list.list.all {
                output::print_status(&output::page_footer(&meta), global.quiet);
            }
            Ok(())
        }

        PlayersCommand::Get { id, no_similar } => {
            let id = util::parse_id(&id);
            let found = if no_similar {
                scout.get::<Players>(&id).await.map(|entity| EntityDetail {
                    entity,
                    similar: Vec::new(),
                })
            } else {
                scout.detail::<Players>(&id).await
            };
            let found = found.map_err(CliError::for_resource::<Players>)?;
            let out = output::render_single(
                global.output,
                &found,
                |d| detail(d, color),
                |d| d.entity.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PlayersCommand::Create(create) => {
            let draft = new_player(create)?;
            let created = scout.create::<Players>(&draft).await?;
            output::print_status(
                &format!("Created player {} ({})", created.name, created.id),
                global.quiet,
            );
            let out = output::render_single(
                global.output,
                &created,
                |p| p.id.to_string(),
                |p| p.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PlayersCommand::Update(update) => {
            let id = util::parse_id(&update.id);
            let changes = player_update(update)?;
            let updated = scout
                .update::<Players>(&id, &changes)
                .await
                .map_err(CliError::for_resource::<Players>)?;
            output::print_status(&format!("Updated player {}", updated.name), global.quiet);
            Ok(())
        }

        PlayersCommand::Delete { id } => {
            let id = util::parse_id(&id);
            if !util::confirm(&format!("Delete player {id}?"), global.yes)? {
                return Ok(());
            }
            scout
                .delete::<Players>(&id)
                .await
                .map_err(CliError::for_resource::<Players>)?;
            output::print_status(&format!("Deleted player {id}"), global.quiet);
            Ok(())
        }

        PlayersCommand::Stats => {
            let stats = scout.player_stats().await?;
            let out = output::render_single(global.output, &stats, stats_detail, |s| {
                s.overview.total_players.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
