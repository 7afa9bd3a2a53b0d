// ── Query state ──
//
// A `Query` is an immutable description of which page of a collection the
// user wants to see. Every `with_*` builder returns a new value; nothing
// here performs I/O. Encoding to wire parameters happens once, in
// `to_list_params`, at the boundary with the resource client.

use scoutly_api::ListParams;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::filters::Filters;

/// Rows per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound the backend accepts for `limit`.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Logical sort key. Each resource maps it onto its own column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortField {
    #[default]
    Name,
    Rating,
    Value,
    CreatedAt,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Filters, search, sort and page for one list view.
///
/// `page` is always at least 1 and `page_size` stays fixed for the
/// lifetime of a view. Changing what is being looked at (filters, search
/// text, sort key) starts again from page 1; flipping the sort direction
/// keeps the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<F> {
    pub search: String,
    pub filters: F,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    page: u32,
    page_size: u32,
}

impl<F: Filters> Default for Query<F> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<F: Filters> Query<F> {
    /// A fresh query on page 1. `page_size` is clamped into `1..=MAX_PAGE_SIZE`.
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            filters: F::default(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Same query, different page. `0` is treated as `1`.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_filters(mut self, filters: F) -> Self {
        if self.filters != filters {
            self.filters = filters;
            self.page = 1;
        }
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if self.search != search {
            self.search = search;
            self.page = 1;
        }
        self
    }

    pub fn with_sort_field(mut self, field: SortField) -> Self {
        if self.sort_field != field {
            self.sort_field = field;
            self.page = 1;
        }
        self
    }

    pub fn with_sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }

    /// Back to a fresh query, keeping only the page size.
    pub fn reset_to_defaults(self) -> Self {
        Self::new(self.page_size)
    }

    /// Number of rows before this page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Encode for the wire: `skip`, `limit`, trimmed `search`, the
    /// resource's active filters, then `sort_by` / `sort_order` when the
    /// resource sorts server-side.
    pub fn to_list_params(&self) -> ListParams {
        let mut params = ListParams::new(self.skip(), self.page_size);
        params.push_text("search", Some(&self.search));
        self.filters.encode(&mut params);
        if let Some(column) = F::sort_column(self.sort_field) {
            params.push("sort_by", column);
            params.push("sort_order", self.sort_direction.as_str());
        }
        params
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::filters::{PlayerFilters, ShortlistFilters};
    use pretty_assertions::assert_eq;
    use scoutly_api::models::ShortlistKind;

    fn on_page_three() -> Query<PlayerFilters> {
        Query::default().with_page(3)
    }

    #[test]
    fn defaults() {
        let q: Query<PlayerFilters> = Query::default();
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(q.sort_field, SortField::Name);
        assert_eq!(q.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn page_never_drops_below_one() {
        let q: Query<PlayerFilters> = Query::default().with_page(0);
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(Query::<PlayerFilters>::new(0).page_size(), 1);
        assert_eq!(Query::<PlayerFilters>::new(500).page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn filter_change_resets_page() {
        let filters = PlayerFilters {
            position: Some("ST".into()),
            ..PlayerFilters::default()
        };
        assert_eq!(on_page_three().with_filters(filters).page(), 1);
    }

    #[test]
    fn search_change_resets_page() {
        assert_eq!(on_page_three().with_search("Haaland").page(), 1);
    }

    #[test]
    fn sort_field_change_resets_page() {
        assert_eq!(on_page_three().with_sort_field(SortField::Value).page(), 1);
    }

    #[test]
    fn sort_direction_change_keeps_page() {
        let q = on_page_three().with_sort_direction(SortDirection::Desc);
        assert_eq!(q.page(), 3);
        assert_eq!(q.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn unchanged_filters_keep_page() {
        let q = on_page_three();
        let same = q.filters.clone();
        assert_eq!(q.with_filters(same).page(), 3);
    }

    #[test]
    fn reset_keeps_page_size_only() {
        let q = Query::<PlayerFilters>::new(50)
            .with_search("Salah")
            .with_page(4)
            .reset_to_defaults();
        assert_eq!(q, Query::new(50));
    }

    #[test]
    fn list_params_encode_offset_and_sort() {
        let q = Query::<PlayerFilters>::default()
            .with_search("  Haaland ")
            .with_sort_field(SortField::Value)
            .with_sort_direction(SortDirection::Desc)
            .with_page(2);
        let params = q.to_list_params();

        assert_eq!(params.get("skip"), Some("20"));
        assert_eq!(params.get("limit"), Some("20"));
        assert_eq!(params.get("search"), Some("Haaland"));
        assert_eq!(params.get("sort_by"), Some("market_value_eur"));
        assert_eq!(params.get("sort_order"), Some("desc"));
    }

    #[test]
    fn blank_search_is_not_encoded() {
        let params = Query::<PlayerFilters>::default()
            .with_search("   ")
            .to_list_params();
        assert!(!params.contains_key("search"));
    }

    #[test]
    fn unsorted_resources_send_no_sort_params() {
        let q = Query::<ShortlistFilters>::default().with_filters(ShortlistFilters {
            kind: Some(ShortlistKind::Coach),
        });
        let params = q.to_list_params();
        assert_eq!(params.get("type"), Some("coach"));
        assert!(!params.contains_key("sort_by"));
        assert!(!params.contains_key("sort_order"));
    }

    #[test]
    fn sort_direction_parses_case_insensitively() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!(
            "created_at".parse::<SortField>().unwrap(),
            SortField::CreatedAt
        );
    }
}
