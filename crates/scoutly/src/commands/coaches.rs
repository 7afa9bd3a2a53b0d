//! Coach command handlers.

use tabled::Tabled;

use scoutly_core::models::{Coach, CoachUpdate, NewCoach};
use scoutly_core::{CoachFilters, Coaches, EntityDetail, Scout, category};

use crate::cli::{
    CoachCreateArgs, CoachListArgs, CoachUpdateArgs, CoachesArgs, CoachesCommand, GlobalOpts,
};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CoachRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Club")]
    club: String,
    #[tabled(rename = "Formation")]
    formation: String,
    #[tabled(rename = "Exp")]
    experience: String,
    #[tabled(rename = "OVR")]
    rating: String,
}

impl From<&Coach> for CoachRow {
    fn from(c: &Coach) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            role: output::or_dash(c.current_role.as_deref()),
            club: output::or_dash(c.current_club.as_deref()),
            formation: output::or_dash(c.preferred_formation.as_deref()),
            experience: c
                .years_experience
                .map_or_else(|| "-".into(), |y| format!("{y}y")),
            rating: output::opt_display(c.overall_rating),
        }
    }
}

fn detail(d: &EntityDetail<Coach>) -> String {
    let c = &d.entity;
    let mut out = output::detail_block(&[
        ("ID", c.id.to_string()),
        ("Name", c.full_name.clone().unwrap_or_else(|| c.name.clone())),
        ("Role", output::or_dash(c.current_role.as_deref())),
        ("Club", output::or_dash(c.current_club.as_deref())),
        ("Nationality", output::or_dash(c.nationality.as_deref())),
        ("Formation", output::or_dash(c.preferred_formation.as_deref())),
        ("Level", output::or_dash(c.coaching_level.as_deref())),
        ("Experience", output::opt_display(c.years_experience)),
        (
            "Salary",
            c.estimated_salary_eur
                .map_or_else(|| "-".into(), output::format_eur),
        ),
        ("Rating", output::opt_display(c.overall_rating)),
    ]);
    if !d.similar.is_empty() {
        out.push_str("\n\nSimilar coaches:");
        for s in &d.similar {
            out.push_str(&format!("\n  {}  {}", s.id, s.name));
        }
    }
    out
}

fn filters(args: &CoachListArgs) -> Result<CoachFilters, CliError> {
    Ok(CoachFilters {
        current_role: util::parse_filter("role", args.role.as_deref())?,
        club: args.club.as_deref().and_then(category),
        nationality: args.nationality.as_deref().and_then(category),
        formation: args.formation.as_deref().and_then(category),
    })
}

fn new_coach(args: CoachCreateArgs) -> Result<NewCoach, CliError> {
    if let Some(path) = &args.from_file {
        return util::read_json_file(path);
    }
    let Some(name) = args.name else {
        return Err(CliError::Validation {
            field: "name".into(),
            reason: "--name is required without --from-file".into(),
        });
    };
    Ok(NewCoach {
        name,
        current_club: args.club,
        nationality: args.nationality,
        current_role: util::parse_opt("role", args.role.as_deref())?,
        preferred_formation: args.formation,
        coaching_level: util::parse_opt("level", args.level.as_deref())?,
        years_experience: args.experience,
        overall_rating: args.rating,
        scouting_notes: args.notes,
        ..NewCoach::default()
    })
}

fn coach_update(args: CoachUpdateArgs) -> Result<CoachUpdate, CliError> {
    if let Some(path) = &args.from_file {
        return util::read_json_file(path);
    }
    let update = CoachUpdate {
        name: args.name,
        current_club: args.club,
        current_role: util::parse_opt("role", args.role.as_deref())?,
        preferred_formation: args.formation,
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

pub async fn handle(scout: &Scout, args: CoachesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CoachesCommand::List(list) => {
            let list_filters = filters(&list)?;
            let query = util::build_query::<Coaches>(&list.list, scout.page_size(), list_filters);
            let (rows, meta) = util::collect_pages(&scout.coaches(), query, list.list.all).await?;
            let out = output::render_list(
                global.output,
                &rows,
                |c| CoachRow::from(c),
                |c| c.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            if !list.list.all {
                output::print_status(&output::page_footer(&meta), global.quiet);
            }
            Ok(())
        }

        CoachesCommand::Get { id, no_similar } => {
            let id = util::parse_id(&id);
            let found = if no_similar {
                scout.get::<Coaches>(&id).await.map(|entity| EntityDetail {
                    entity,
                    similar: Vec::new(),
                })
            } else {
                scout.detail::<Coaches>(&id).await
            };
            let found = found.map_err(CliError::for_resource::<Coaches>)?;
            let out =
                output::render_single(global.output, &found, detail, |d| d.entity.id.to_string())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CoachesCommand::Create(create) => {
            let draft = new_coach(create)?;
            let created = scout.create::<Coaches>(&draft).await?;
            output::print_status(
                &format!("Created coach {} ({})", created.name, created.id),
                global.quiet,
            );
            Ok(())
        }

        CoachesCommand::Update(update) => {
            let id = util::parse_id(&update.id);
            let changes = coach_update(update)?;
            let updated = scout
                .update::<Coaches>(&id, &changes)
                .await
                .map_err(CliError::for_resource::<Coaches>)?;
            output::print_status(&format!("Updated coach {}", updated.name), global.quiet);
            Ok(())
        }

        CoachesCommand::Delete { id } => {
            let id = util::parse_id(&id);
            if !util::confirm(&format!("Delete coach {id}?"), global.yes)? {
                return Ok(());
            }
            scout
                .delete::<Coaches>(&id)
                .await
                .map_err(CliError::for_resource::<Coaches>)?;
            output::print_status(&format!("Deleted coach {id}"), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::ListArgs;
    use scoutly_core::models::CoachRole;

    fn list_args(role: Option<&str>) -> CoachListArgs {
        CoachListArgs {
            list: ListArgs {
                page: 1,
                all: false,
                search: None,
                sort: None,
                desc: false,
            },
            role: role.map(str::to_owned),
            club: Some("*".into()),
            nationality: None,
            formation: Some("4-3-3".into()),
        }
    }

    #[test]
    fn role_filter_parses_case_insensitively() {
        let f = filters(&list_args(Some("Head_Coach"))).unwrap();
        assert_eq!(f.current_role, Some(CoachRole::HeadCoach));
        assert_eq!(f.club, None);
        assert_eq!(f.formation.as_deref(), Some("4-3-3"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(matches!(
            filters(&list_args(Some("manager"))),
            Err(CliError::Validation { field, .. }) if field == "role"
        ));
    }
}
