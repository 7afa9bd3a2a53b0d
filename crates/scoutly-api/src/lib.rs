// scoutly-api: Async Rust client for the Scoutly football-scouting API

pub mod auth;
pub mod client;
pub mod error;
pub mod id;
pub mod models;
pub mod resources;
pub mod transport;
pub mod types;

pub use auth::{ApiVersion, UnauthorizedHandler};
pub use client::ApiClient;
pub use error::Error;
pub use id::EntityId;
pub use resources::{
    Coaches, Players, Reports, Resource, ResourceClient, Shortlists, SupportsSimilar, Updatable,
};
pub use transport::{TlsMode, TransportConfig};
pub use types::{FieldError, ListEnvelope, ListParams, PaginationMeta};
