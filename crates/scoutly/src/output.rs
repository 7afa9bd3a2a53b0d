//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use scoutly_core::PaginationMeta;

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Position code tinted by line: keepers, defence, midfield, attack.
pub fn position_badge(position: &str, color: bool) -> String {
    if !color {
        return position.to_owned();
    }
    match position.to_ascii_uppercase().as_str() {
        "GK" => position.yellow().to_string(),
        "CB" | "LB" | "RB" | "LWB" | "RWB" => position.blue().to_string(),
        "CDM" | "CM" | "CAM" | "LM" | "RM" => position.green().to_string(),
        "LW" | "RW" | "CF" | "ST" => position.red().to_string(),
        _ => position.to_owned(),
    }
}

/// Report status tinted by outcome.
pub fn status_badge(status: &str, color: bool) -> String {
    if !color {
        return status.to_owned();
    }
    match status {
        "completed" => status.green().to_string(),
        "failed" => status.red().to_string(),
        "pending" | "processing" => status.yellow().to_string(),
        _ => status.to_owned(),
    }
}

// ── Value formatting ─────────────────────────────────────────────────

/// Compact euro amount: `€950K`, `€12.5M`.
pub fn format_eur(amount: u64) -> String {
    if amount >= 1_000_000 {
        let tenths = amount / 100_000;
        let (whole, frac) = (tenths / 10, tenths % 10);
        if frac == 0 {
            format!("€{whole}M")
        } else {
            format!("€{whole}.{frac}M")
        }
    } else if amount >= 1_000 {
        format!("€{}K", amount / 1_000)
    } else {
        format!("€{amount}")
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_owned()
}

pub fn opt_display<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

/// Footer for a list view: `Page 2 of 5 (93 total)`.
pub fn page_footer(meta: &PaginationMeta) -> String {
    format!(
        "Page {} of {} ({} total)",
        meta.page,
        meta.total_pages.max(1),
        meta.total
    )
}

/// Aligned `Key:  value` block for single-item table views.
pub fn detail_block(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0) + 1;
    rows.iter()
        .map(|(k, v)| format!("{:<width$}  {v}", format!("{k}:")))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                return Ok("No results.".into());
            }
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
        OutputFormat::Plain => Ok(data.iter().map(id_fn).collect::<Vec<_>>().join("\n")),
        structured => render_structured(structured, data),
    }
}

/// Render a single item. Table view uses `detail_fn` instead of `Tabled`.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Plain => Ok(id_fn(data)),
        structured => render_structured(structured, data),
    }
}

fn render_structured<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::JsonCompact => serde_json::to_string(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Json | OutputFormat::Table | OutputFormat::Plain => {
            serde_json::to_string_pretty(data)?
        }
    })
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Status line on stderr, so piping stdout stays clean.
pub fn print_status(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: &'static str,
    }

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: &'static str,
    }

    #[test]
    fn eur_amounts_are_compact() {
        assert_eq!(format_eur(950), "€950");
        assert_eq!(format_eur(950_000), "€950K");
        assert_eq!(format_eur(12_500_000), "€12.5M");
        assert_eq!(format_eur(180_000_000), "€180M");
    }

    #[test]
    fn badges_are_plain_without_color() {
        assert_eq!(position_badge("ST", false), "ST");
        assert_eq!(status_badge("completed", false), "completed");
    }

    #[test]
    fn plain_lists_one_id_per_line() {
        let items = [Item { id: "p1" }, Item { id: "p2" }];
        let out = render_list(
            OutputFormat::Plain,
            &items,
            |i| Row { id: i.id },
            |i| i.id.to_owned(),
        );
        assert!(matches!(out.as_deref(), Ok("p1\np2")));
    }

    #[test]
    fn empty_table_says_so() {
        let items: [Item; 0] = [];
        let out = render_list(
            OutputFormat::Table,
            &items,
            |i| Row { id: i.id },
            |i| i.id.to_owned(),
        );
        assert!(matches!(out.as_deref(), Ok("No results.")));
    }

    #[test]
    fn footer_never_shows_zero_pages() {
        let meta = PaginationMeta {
            page: 1,
            per_page: 20,
            total: 0,
            total_pages: 0,
        };
        assert_eq!(page_footer(&meta), "Page 1 of 1 (0 total)");
    }

    #[test]
    fn detail_block_aligns_values() {
        let out = detail_block(&[("ID", "p1".into()), ("Position", "ST".into())]);
        assert_eq!(out, "ID:        p1\nPosition:  ST");
    }
}
