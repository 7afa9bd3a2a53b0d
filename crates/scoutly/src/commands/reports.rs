//! Report command handlers.

use serde_json::{Map, Value};
use tabled::Tabled;

use scoutly_core::models::{NewReport, Report, ReportDownload, ReportKind};
use scoutly_core::{ReportFilters, Reports, Scout, category};

use crate::cli::{GlobalOpts, ReportsArgs, ReportsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Generated")]
    generated: String,
    #[tabled(rename = "Downloads")]
    downloads: u32,
}

impl ReportRow {
    fn new(r: &Report, color: bool) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title.clone(),
            kind: r.kind.to_string(),
            status: output::status_badge(&r.status, color),
            generated: r
                .generated_at
                .map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d %H:%M").to_string()),
            downloads: r.download_count,
        }
    }
}

fn detail(r: &Report, color: bool) -> String {
    output::detail_block(&[
        ("ID", r.id.to_string()),
        ("Title", r.title.clone()),
        ("Type", r.kind.to_string()),
        ("Status", output::status_badge(&r.status, color)),
        ("Generated", output::opt_display(r.generated_at)),
        ("Size", output::opt_display(r.file_size.map(|b| format!("{b} bytes")))),
        ("Downloads", r.download_count.to_string()),
    ])
}

fn download_detail(d: &ReportDownload) -> String {
    output::detail_block(&[
        ("URL", d.download_url.clone()),
        ("File", output::or_dash(d.file_name.as_deref())),
        ("Expires", output::or_dash(d.expires_in.as_deref())),
    ])
}

/// `key=value` pairs into a parameter object. Values that parse as JSON
/// (numbers, booleans, arrays) keep their type; anything else is a string.
fn parse_params(raw: &[String]) -> Result<Map<String, Value>, CliError> {
    raw.iter()
        .map(|pair| {
            let (key, value) = pair.split_once('=').ok_or_else(|| CliError::Validation {
                field: "param".into(),
                reason: format!("expected KEY=VALUE, got '{pair}'"),
            })?;
            let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.into()));
            Ok((key.trim().to_owned(), value))
        })
        .collect()
}

pub async fn handle(scout: &Scout, args: ReportsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color);

    match args.command {
        ReportsCommand::List { list, kind, status } => {
            let filters = ReportFilters {
                kind: util::parse_filter("type", kind.as_deref())?,
                status: status.as_deref().and_then(category),
            };
            let query = util::build_query::<Reports>(&list, scout.page_size(), filters);
            let (rows, meta) = util::collect_pages(&scout.reports(), query, list.all).await?;
            let out = output::render_list(
                global.output,
                &rows,
                |r| ReportRow::new(r, color),
                |r| r.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            if !list.all {
                output::print_status(&output::page_footer(&meta), global.quiet);
            }
            Ok(())
        }

        ReportsCommand::Get { id } => {
            let report = scout
                .get::<Reports>(&util::parse_id(&id))
                .await
                .map_err(CliError::for_resource::<Reports>)?;
            let out = output::render_single(
                global.output,
                &report,
                |r| detail(r, color),
                |r| r.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ReportsCommand::Create {
            title,
            kind,
            params,
        } => {
            let draft = NewReport {
                title,
                kind: util::parse_value::<ReportKind>("type", &kind)?,
                parameters: parse_params(&params)?,
                filters: None,
            };
            let created = scout.create::<Reports>(&draft).await?;
            output::print_status(
                &format!(
                    "Requested report {} ({}), status: {}",
                    created.title, created.id, created.status
                ),
                global.quiet,
            );
            Ok(())
        }

        ReportsCommand::Delete { id } => {
            let id = util::parse_id(&id);
            if !util::confirm(&format!("Delete report {id}?"), global.yes)? {
                return Ok(());
            }
            scout
                .delete::<Reports>(&id)
                .await
                .map_err(CliError::for_resource::<Reports>)?;
            output::print_status(&format!("Deleted report {id}"), global.quiet);
            Ok(())
        }

        ReportsCommand::Download { id } => {
            let link = scout
                .api()
                .reports()
                .download(&util::parse_id(&id))
                .await
                .map_err(|e| CliError::for_resource::<Reports>(e.into()))?;
            let out = output::render_single(global.output, &link, download_detail, |d| {
                d.download_url.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
