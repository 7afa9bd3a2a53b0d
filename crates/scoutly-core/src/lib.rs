//! List-query layer between `scoutly-api` and front ends.
//!
//! - **[`Query`]**: immutable filters / search / sort / page for one view,
//!   encoded to wire parameters only at the boundary.
//! - **[`ListController`]**: owns a view's [`FetchState`] and guarantees
//!   last-request-wins by sequence number, observable through a `watch`
//!   channel.
//! - **[`normalize`]**: turns a raw list response into a [`PageResult`] or a
//!   recoverable [`CoreError::MalformedResponse`].
//! - **[`Scout`]**: session facade vending controllers, detail loading with
//!   best-effort similar entities, and create / update / delete.

pub mod config;
pub mod controller;
pub mod error;
pub mod filters;
pub mod page;
pub mod query;
pub mod scout;
pub mod state;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ScoutConfig, TlsVerification};
pub use controller::{ListController, SubmitOutcome};
pub use error::CoreError;
pub use filters::{
    CoachFilters, Filters, ListResource, PlayerFilters, ReportFilters, ShortlistFilters, category,
    is_all_sentinel, parse_category,
};
pub use page::{PageResult, normalize};
pub use query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Query, SortDirection, SortField};
pub use scout::{EntityDetail, SIMILAR_LIMIT, Scout};
pub use state::FetchState;

// Resource markers and entity types, so front ends need only this crate.
pub use scoutly_api::models;
pub use scoutly_api::{
    Coaches, EntityId, FieldError, PaginationMeta, Players, Reports, Resource, Shortlists,
    SupportsSimilar, UnauthorizedHandler, Updatable,
};
