//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use tracing::debug;

use scoutly_core::{
    EntityId, FetchState, ListController, ListResource, PaginationMeta, Query, SortDirection,
    SortField, parse_category,
};

use crate::cli::{ListArgs, SortKey};
use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.to_owned(),
        });
    }
    Ok(dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?)
}

/// Read a `--from-file` JSON payload straight into its request type.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CliError::Validation {
        field: "from-file".into(),
        reason: format!("{}: {e}", path.display()),
    })
}

pub fn parse_id(raw: &str) -> EntityId {
    EntityId::from(raw.trim())
}

/// A categorical filter flag. `all`, `*` and blank mean no filter.
pub fn parse_filter<T: FromStr>(field: &str, raw: Option<&str>) -> Result<Option<T>, CliError> {
    match raw {
        None => Ok(None),
        Some(input) => parse_category(input).map_err(|_| CliError::Validation {
            field: field.into(),
            reason: format!("unknown value '{input}'"),
        }),
    }
}

/// A required enumerated value such as a report type.
pub fn parse_value<T: FromStr>(field: &str, raw: &str) -> Result<T, CliError> {
    raw.trim().parse().map_err(|_| CliError::Validation {
        field: field.into(),
        reason: format!("unknown value '{raw}'"),
    })
}

/// Like [`parse_value`] for optional flags.
pub fn parse_opt<T: FromStr>(field: &str, raw: Option<&str>) -> Result<Option<T>, CliError> {
    raw.map(|r| parse_value(field, r)).transpose()
}

// ── List views ───────────────────────────────────────────────────────

/// Translate the shared list flags into a query for a fresh view.
pub fn build_query<R: ListResource>(
    args: &ListArgs,
    page_size: u32,
    filters: R::Filters,
) -> Query<R::Filters> {
    let field = match args.sort {
        None | Some(SortKey::Name) => SortField::Name,
        Some(SortKey::Rating) => SortField::Rating,
        Some(SortKey::Value) => SortField::Value,
        Some(SortKey::Created) => SortField::CreatedAt,
    };
    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    Query::new(page_size)
        .with_filters(filters)
        .with_search(args.search.as_deref().unwrap_or_default())
        .with_sort_field(field)
        .with_sort_direction(direction)
        .with_page(args.page)
}

/// Drive a list view to completion and collect its rows.
///
/// With `all`, keeps turning pages through the controller until the
/// server reports no next page.
pub async fn collect_pages<R: ListResource>(
    view: &ListController<R>,
    query: Query<R::Filters>,
    all: bool,
) -> Result<(Vec<R::Item>, PaginationMeta), CliError> {
    let mut rows = Vec::new();
    view.submit_query(query).await;

    loop {
        let page = match view.state() {
            FetchState::Success(page) => page,
            FetchState::Error { error, .. } => return Err(CliError::for_resource::<R>(error)),
            FetchState::Idle | FetchState::Loading { .. } => {
                return Err(CliError::Internal(format!(
                    "{} list request did not settle",
                    R::PATH
                )));
            }
        };

        let more = all && page.has_next();
        let meta = page.pagination;
        rows.extend(page.items);
        if !more {
            return Ok((rows, meta));
        }

        debug!(resource = R::PATH, page = meta.page + 1, "fetching next page");
        view.set_page(meta.page + 1).await;
    }
}
