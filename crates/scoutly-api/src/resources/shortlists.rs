use serde_json::Value;

use super::{Resource, ResourceClient, Updatable};
use crate::Error;
use crate::id::EntityId;
use crate::models::{
    NewShortlist, NewShortlistItem, Shortlist, ShortlistItemUpdate, ShortlistUpdate,
};

/// `/shortlists`
#[derive(Debug, Clone, Copy)]
pub struct Shortlists;

impl Resource for Shortlists {
    const PATH: &'static str = "shortlists";
    const NAME: &'static str = "shortlist";

    type Item = Shortlist;
    type Create = NewShortlist;
}

impl Updatable for Shortlists {
    type Update = ShortlistUpdate;
}

// ── Items ────────────────────────────────────────────────────────────

impl ResourceClient<Shortlists> {
    pub async fn add_item(
        &self,
        shortlist_id: &EntityId,
        item: &NewShortlistItem,
    ) -> Result<Value, Error> {
        let shortlist_id = shortlist_id.to_string();
        self.api()
            .post(&[Shortlists::PATH, shortlist_id.as_str(), "items"], item)
            .await
    }

    pub async fn update_item(
        &self,
        shortlist_id: &EntityId,
        item_id: &EntityId,
        update: &ShortlistItemUpdate,
    ) -> Result<Value, Error> {
        let (shortlist_id, item_id) = (shortlist_id.to_string(), item_id.to_string());
        self.api()
            .put(&[Shortlists::PATH, shortlist_id.as_str(), "items", item_id.as_str()], update)
            .await
    }

    pub async fn remove_item(
        &self,
        shortlist_id: &EntityId,
        item_id: &EntityId,
    ) -> Result<(), Error> {
        let (shortlist_id, item_id) = (shortlist_id.to_string(), item_id.to_string());
        self.api()
            .delete(&[Shortlists::PATH, shortlist_id.as_str(), "items", item_id.as_str()])
            .await
    }
}
