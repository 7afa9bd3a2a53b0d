use super::{Resource, ResourceClient, SupportsSimilar, Updatable};
use crate::Error;
use crate::models::{NewPlayer, Player, PlayerStatsSummary, PlayerUpdate};

/// `/players`
#[derive(Debug, Clone, Copy)]
pub struct Players;

impl Resource for Players {
    const PATH: &'static str = "players";
    const NAME: &'static str = "player";

    type Item = Player;
    type Create = NewPlayer;
}

impl Updatable for Players {
    type Update = PlayerUpdate;
}

impl SupportsSimilar for Players {}

impl ResourceClient<Players> {
    /// Aggregate counts and market values across all active players.
    pub async fn stats_summary(&self) -> Result<PlayerStatsSummary, Error> {
        self.api().get(&[Players::PATH, "stats", "summary"]).await
    }
}
