// ── Typed filter sets ──
//
// Each resource has its own filter struct with explicit optional fields;
// `None` means "no filter". User input is parsed at the boundary with
// `category` / `parse_category`, which turn the "all" sentinel into `None`
// so it can never reach the wire.

use std::fmt::{self, Debug};
use std::str::FromStr;

use scoutly_api::models::{CoachRole, ReportKind, ShortlistKind};
use scoutly_api::{Coaches, ListParams, Players, Reports, Resource, Shortlists};

use crate::query::SortField;

/// A resource's filter set and its mapping onto wire parameters.
pub trait Filters: Clone + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Push the active filters. Absent filters push nothing.
    fn encode(&self, params: &mut ListParams);

    /// Backend column for a logical sort key, or `None` when the
    /// collection is not sortable server-side.
    fn sort_column(field: SortField) -> Option<&'static str>;
}

/// A collection that can be listed page by page.
pub trait ListResource: Resource {
    type Filters: Filters;
}

impl ListResource for Players {
    type Filters = PlayerFilters;
}

impl ListResource for Coaches {
    type Filters = CoachFilters;
}

impl ListResource for Shortlists {
    type Filters = ShortlistFilters;
}

impl ListResource for Reports {
    type Filters = ReportFilters;
}

// ── Boundary parsing ─────────────────────────────────────────────────

/// True for the inputs that mean "don't filter": empty, `*`, `all`.
pub fn is_all_sentinel(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || input == "*" || input.eq_ignore_ascii_case("all")
}

/// Free-text categorical input: `None` for the sentinel, trimmed otherwise.
pub fn category(input: &str) -> Option<String> {
    if is_all_sentinel(input) {
        None
    } else {
        Some(input.trim().to_owned())
    }
}

/// Enumerated categorical input: `Ok(None)` for the sentinel.
pub fn parse_category<T: FromStr>(input: &str) -> Result<Option<T>, T::Err> {
    if is_all_sentinel(input) {
        Ok(None)
    } else {
        input.trim().parse().map(Some)
    }
}

fn push_category(params: &mut ListParams, key: &'static str, value: Option<&str>) {
    if let Some(v) = value.and_then(category) {
        params.push(key, v);
    }
}

fn push_display<T: fmt::Display>(params: &mut ListParams, key: &'static str, value: Option<&T>) {
    if let Some(v) = value {
        params.push(key, v.to_string());
    }
}

// ── Players ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilters {
    pub position: Option<String>,
    pub club: Option<String>,
    pub nationality: Option<String>,
    /// Minimum market value in EUR.
    pub min_value: Option<u64>,
    /// Maximum market value in EUR.
    pub max_value: Option<u64>,
}

impl Filters for PlayerFilters {
    fn encode(&self, params: &mut ListParams) {
        push_category(params, "position", self.position.as_deref());
        push_category(params, "club", self.club.as_deref());
        push_category(params, "nationality", self.nationality.as_deref());
        push_display(params, "min_value", self.min_value.as_ref());
        push_display(params, "max_value", self.max_value.as_ref());
    }

    fn sort_column(field: SortField) -> Option<&'static str> {
        Some(match field {
            SortField::Name => "name",
            SortField::Rating => "overall_rating",
            SortField::Value => "market_value_eur",
            SortField::CreatedAt => "created_at",
        })
    }
}

// ── Coaches ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoachFilters {
    pub current_role: Option<CoachRole>,
    pub club: Option<String>,
    pub nationality: Option<String>,
    pub formation: Option<String>,
}

impl Filters for CoachFilters {
    fn encode(&self, params: &mut ListParams) {
        push_display(params, "current_role", self.current_role.as_ref());
        push_category(params, "club", self.club.as_deref());
        push_category(params, "nationality", self.nationality.as_deref());
        push_category(params, "formation", self.formation.as_deref());
    }

    fn sort_column(field: SortField) -> Option<&'static str> {
        Some(match field {
            SortField::Name => "name",
            SortField::Rating => "overall_rating",
            SortField::Value => "estimated_salary_eur",
            SortField::CreatedAt => "created_at",
        })
    }
}

// ── Shortlists ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortlistFilters {
    pub kind: Option<ShortlistKind>,
}

impl Filters for ShortlistFilters {
    fn encode(&self, params: &mut ListParams) {
        push_display(params, "type", self.kind.as_ref());
    }

    fn sort_column(_field: SortField) -> Option<&'static str> {
        None
    }
}

// ── Reports ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    pub kind: Option<ReportKind>,
    pub status: Option<String>,
}

impl Filters for ReportFilters {
    fn encode(&self, params: &mut ListParams) {
        push_display(params, "type", self.kind.as_ref());
        push_category(params, "status", self.status.as_deref());
    }

    fn sort_column(_field: SortField) -> Option<&'static str> {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encoded<F: Filters>(filters: &F) -> Vec<(&'static str, String)> {
        let mut params = ListParams::new(0, 20);
        filters.encode(&mut params);
        params.as_pairs()[2..].to_vec()
    }

    #[test]
    fn sentinel_inputs_parse_to_none() {
        for input in ["", "  ", "*", "all", "ALL", " All "] {
            assert_eq!(category(input), None, "input {input:?}");
            assert_eq!(parse_category::<CoachRole>(input).unwrap(), None);
        }
    }

    #[test]
    fn real_inputs_are_trimmed() {
        assert_eq!(category(" ST "), Some("ST".to_owned()));
        assert_eq!(
            parse_category::<CoachRole>("head_coach").unwrap(),
            Some(CoachRole::HeadCoach)
        );
        assert!(parse_category::<CoachRole>("groundskeeper").is_err());
    }

    #[test]
    fn empty_filters_encode_nothing() {
        assert!(encoded(&PlayerFilters::default()).is_empty());
        assert!(encoded(&CoachFilters::default()).is_empty());
        assert!(encoded(&ReportFilters::default()).is_empty());
    }

    #[test]
    fn sentinel_smuggled_into_filters_is_still_dropped() {
        let filters = PlayerFilters {
            position: Some("*".into()),
            club: Some("all".into()),
            nationality: Some("Norway".into()),
            ..PlayerFilters::default()
        };
        assert_eq!(
            encoded(&filters),
            vec![("nationality", "Norway".to_owned())]
        );
    }

    #[test]
    fn player_value_range_is_encoded() {
        let filters = PlayerFilters {
            min_value: Some(10_000_000),
            max_value: Some(50_000_000),
            ..PlayerFilters::default()
        };
        assert_eq!(
            encoded(&filters),
            vec![
                ("min_value", "10000000".to_owned()),
                ("max_value", "50000000".to_owned()),
            ]
        );
    }

    #[test]
    fn coach_filters_use_backend_names() {
        let filters = CoachFilters {
            current_role: Some(CoachRole::HeadCoach),
            club: Some("Arsenal".into()),
            ..CoachFilters::default()
        };
        assert_eq!(
            encoded(&filters),
            vec![
                ("current_role", "head_coach".to_owned()),
                ("club", "Arsenal".to_owned()),
            ]
        );
    }

    #[test]
    fn report_kind_goes_out_as_type() {
        let filters = ReportFilters {
            kind: Some(ReportKind::PlayerScout),
            status: Some("completed".into()),
        };
        assert_eq!(
            encoded(&filters),
            vec![
                ("type", "player_scout".to_owned()),
                ("status", "completed".to_owned()),
            ]
        );
    }

    #[test]
    fn coach_value_sorts_by_salary() {
        assert_eq!(
            CoachFilters::sort_column(SortField::Value),
            Some("estimated_salary_eur")
        );
    }
}
