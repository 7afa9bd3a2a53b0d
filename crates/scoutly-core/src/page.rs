// ── Result normalizer ──
//
// List endpoints return `{ success, data: [...], meta: { pagination } }`.
// `normalize` turns that into a `PageResult` or a recoverable
// `MalformedResponse`; it never panics on unexpected input.

use scoutly_api::{ListEnvelope, PaginationMeta};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CoreError;

/// One page of a collection plus the server's pagination block.
///
/// `items.len() <= pagination.per_page` always holds for values produced
/// by [`normalize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PageResult<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.pagination.page < self.pagination.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.pagination.page > 1
    }
}

/// Decode a raw list response body into a [`PageResult`].
///
/// Fails when `data` or `meta.pagination` is missing, when an item does not
/// decode as `T`, when `per_page` is zero, or when the page holds more items
/// than `per_page`. A value that is already `{ items, pagination }` has no
/// `data` and is rejected like any other foreign shape.
///
/// `total_pages` is taken from the server as-is and not recomputed from
/// `total / per_page`: some collections (shortlists) always report a single
/// page regardless of their count.
pub fn normalize<T: DeserializeOwned>(raw: Value) -> Result<PageResult<T>, CoreError> {
    if !raw.get("data").is_some_and(Value::is_array) {
        return Err(CoreError::malformed("list response has no `data` array"));
    }
    if raw.pointer("/meta/pagination").is_none_or(Value::is_null) {
        return Err(CoreError::malformed(
            "list response has no `meta.pagination` block",
        ));
    }

    let envelope: ListEnvelope<T> = serde_json::from_value(raw)
        .map_err(|e| CoreError::malformed(format!("list response did not decode: {e}")))?;

    if !envelope.success {
        return Err(CoreError::malformed("list response reported `success: false`"));
    }

    let pagination = envelope.meta.pagination;
    if pagination.per_page == 0 {
        return Err(CoreError::malformed("pagination.per_page is 0"));
    }
    let per_page = usize::try_from(pagination.per_page).unwrap_or(usize::MAX);
    if envelope.data.len() > per_page {
        return Err(CoreError::malformed(format!(
            "page holds {} items but per_page is {}",
            envelope.data.len(),
            pagination.per_page
        )));
    }

    Ok(PageResult {
        items: envelope.data,
        pagination,
    })
}
