//! Shortlist command handlers.

use tabled::Tabled;

use scoutly_core::models::{
    NewShortlist, NewShortlistItem, Shortlist, ShortlistItemUpdate, ShortlistKind,
};
use scoutly_core::{Scout, ShortlistFilters, Shortlists};

use crate::cli::{AddItemArgs, GlobalOpts, ShortlistsArgs, ShortlistsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ShortlistRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Entries")]
    items: String,
}

impl From<&Shortlist> for ShortlistRow {
    fn from(s: &Shortlist) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.clone(),
            kind: s.kind.to_string(),
            priority: output::or_dash(s.priority.as_deref()),
            status: output::or_dash(s.status.as_deref()),
            items: output::opt_display(s.items_count),
        }
    }
}

fn detail(s: &Shortlist) -> String {
    let mut out = output::detail_block(&[
        ("ID", s.id.to_string()),
        ("Name", s.name.clone()),
        ("Type", s.kind.to_string()),
        ("Description", output::or_dash(s.description.as_deref())),
        ("Priority", output::or_dash(s.priority.as_deref())),
        ("Status", output::or_dash(s.status.as_deref())),
    ]);

    let items = s.items.as_deref().unwrap_or_default();
    if items.is_empty() {
        out.push_str("\n\nNo entries yet.");
    } else {
        out.push_str("\n\nEntries:");
        for item in items {
            let who = item
                .player_name
                .as_deref()
                .or(item.coach_name.as_deref())
                .unwrap_or("?");
            out.push_str(&format!(
                "\n  {}  {who}  [{}] p{}",
                item.id, item.status, item.priority
            ));
        }
    }
    out
}

fn new_item(args: &AddItemArgs) -> NewShortlistItem {
    NewShortlistItem {
        player_id: args.player.as_deref().map(util::parse_id),
        coach_id: args.coach.as_deref().map(util::parse_id),
        priority: args.priority,
        notes: args.notes.clone(),
        ..NewShortlistItem::default()
    }
}

pub async fn handle(
    scout: &Scout,
    args: ShortlistsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ShortlistsCommand::List { list, kind } => {
            let filters = ShortlistFilters {
                kind: util::parse_filter("type", kind.as_deref())?,
            };
            let query = util::build_query::<Shortlists>(&list, scout.page_size(), filters);
            let (rows, meta) = util::collect_pages(&scout.shortlists(), query, list.all).await?;
            let out = output::render_list(
                global.output,
                &rows,
                |s| ShortlistRow::from(s),
                |s| s.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            if !list.all {
                output::print_status(&output::page_footer(&meta), global.quiet);
            }
            Ok(())
        }

        ShortlistsCommand::Get { id } => {
            let shortlist = scout
                .get::<Shortlists>(&util::parse_id(&id))
                .await
                .map_err(CliError::for_resource::<Shortlists>)?;
            let out = output::render_single(global.output, &shortlist, detail, |s| {
                s.id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ShortlistsCommand::Create {
            name,
            kind,
            description,
            priority,
        } => {
            let draft = NewShortlist {
                name,
                kind: util::parse_value::<ShortlistKind>("type", &kind)?,
                description,
                priority: util::parse_opt("priority", priority.as_deref())?,
            };
            let created = scout.create::<Shortlists>(&draft).await?;
            output::print_status(
                &format!("Created shortlist {} ({})", created.name, created.id),
                global.quiet,
            );
            Ok(())
        }

        ShortlistsCommand::Delete { id } => {
            let id = util::parse_id(&id);
            if !util::confirm(&format!("Delete shortlist {id} and all its entries?"), global.yes)? {
                return Ok(());
            }
            scout
                .delete::<Shortlists>(&id)
                .await
                .map_err(CliError::for_resource::<Shortlists>)?;
            output::print_status(&format!("Deleted shortlist {id}"), global.quiet);
            Ok(())
        }

        ShortlistsCommand::AddItem(add) => {
            let shortlist = util::parse_id(&add.shortlist);
            let added = scout
                .api()
                .shortlists()
                .add_item(&shortlist, &new_item(&add))
                .await
                .map_err(|e| CliError::for_resource::<Shortlists>(e.into()))?;
            let entry = added
                .get("id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("?");
            output::print_status(
                &format!("Added entry {entry} to shortlist {shortlist}"),
                global.quiet,
            );
            Ok(())
        }

        ShortlistsCommand::UpdateItem {
            shortlist,
            item,
            status,
            priority,
            notes,
        } => {
            if status.is_none() && priority.is_none() && notes.is_none() {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "nothing to change; pass --status, --priority or --notes".into(),
                });
            }
            let shortlist = util::parse_id(&shortlist);
            let item = util::parse_id(&item);
            let changes = ShortlistItemUpdate {
                status,
                priority,
                notes,
                ..ShortlistItemUpdate::default()
            };
            scout
                .api()
                .shortlists()
                .update_item(&shortlist, &item, &changes)
                .await
                .map_err(|e| CliError::for_resource::<Shortlists>(e.into()))?;
            output::print_status(&format!("Updated entry {item}"), global.quiet);
            Ok(())
        }

        ShortlistsCommand::RemoveItem { shortlist, item } => {
            let shortlist = util::parse_id(&shortlist);
            let item = util::parse_id(&item);
            if !util::confirm(
                &format!("Remove entry {item} from shortlist {shortlist}?"),
                global.yes,
            )? {
                return Ok(());
            }
            scout
                .api()
                .shortlists()
                .remove_item(&shortlist, &item)
                .await
                .map_err(|e| CliError::for_resource::<Shortlists>(e.into()))?;
            output::print_status(&format!("Removed entry {item}"), global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_targets_player_or_coach() {
        let args = AddItemArgs {
            shortlist: "s1".into(),
            player: Some("p9".into()),
            coach: None,
            priority: Some(2),
            notes: None,
        };
        let item = new_item(&args);
        assert_eq!(item.player_id.map(|id| id.to_string()).as_deref(), Some("p9"));
        assert!(item.coach_id.is_none());
        assert_eq!(item.priority, Some(2));
    }
}
