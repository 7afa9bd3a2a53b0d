// Resource-scoped accessors.
//
// Every backend collection exposes the same CRUD surface under
// `/api/{v}/{path}`. `ResourceClient<R>` implements it once; the per-resource
// modules declare the marker types and add the endpoints only one
// collection has.

mod coaches;
mod players;
mod reports;
mod shortlists;

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;
use crate::client::ApiClient;
use crate::id::EntityId;
use crate::types::ListParams;

pub use coaches::Coaches;
pub use players::Players;
pub use reports::Reports;
pub use shortlists::Shortlists;

/// A backend entity collection.
pub trait Resource: Send + Sync + 'static {
    /// Collection path segment, e.g. `"players"`.
    const PATH: &'static str;
    /// Singular display name, e.g. `"player"`.
    const NAME: &'static str;

    type Item: DeserializeOwned + Serialize + Clone + fmt::Debug + Send + Sync + 'static;
    type Create: Serialize + Send + Sync;
}

/// Collections that accept `PUT /{path}/{id}`.
pub trait Updatable: Resource {
    type Update: Serialize + Send + Sync;
}

/// Collections with a best-effort `GET /{path}/{id}/similar` endpoint.
pub trait SupportsSimilar: Resource {}

/// Typed accessor for one collection. Cheap to clone.
pub struct ResourceClient<R> {
    api: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("base_url", &self.api.base_url().as_str())
            .finish_non_exhaustive()
    }
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }


    /// `GET /{path}` with encoded list parameters.
    ///
    /// Returns the raw body; turning it into a page is the caller's
    /// normalizer's job.
    pub async fn list(&self, params: &ListParams) -> Result<Value, Error> {
        self.api.get_raw(&[R::PATH], params.as_pairs()).await
    }

    pub async fn get(&self, id: &EntityId) -> Result<R::Item, Error> {
        let id = id.to_string();
        self.api.get(&[R::PATH, id.as_str()]).await
    }

    /// `POST /{path}`. Blank fields are stripped before sending.
    pub async fn create(&self, payload: &R::Create) -> Result<R::Item, Error> {
        self.api.post(&[R::PATH], payload).await
    }

    pub async fn delete(&self, id: &EntityId) -> Result<(), Error> {
        let id = id.to_string();
        self.api.delete(&[R::PATH, id.as_str()]).await
    }
}

impl<R: Updatable> ResourceClient<R> {
    /// `PUT /{path}/{id}`. The response replaces the caller's copy.
    pub async fn update(&self, id: &EntityId, payload: &R::Update) -> Result<R::Item, Error> {
        let id = id.to_string();
        self.api.put(&[R::PATH, id.as_str()], payload).await
    }
}

impl<R: SupportsSimilar> ResourceClient<R> {
    /// `GET /{path}/{id}/similar`, optionally capped by `limit` (backend: 1-20).
    pub async fn similar(&self, id: &EntityId, limit: Option<u32>) -> Result<Vec<R::Item>, Error> {
        let id = id.to_string();
        let path = [R::PATH, id.as_str(), "similar"];
        match limit {
            Some(limit) => {
                self.api
                    .get_with_params(&path, &[("limit", limit.to_string())])
                    .await
            }
            None => self.api.get(&path).await,
        }
    }
}
