use std::sync::Arc;

use common::{Game, seed_games};
use tokio::sync::RwLock;
use tracing::debug;

use super::{ApiError, GameApi};

/// In-memory collection. Clones share the same games.
#[derive(Debug, Clone, Default)]
pub struct MockGameApi {
    games: Arc<RwLock<Vec<Game>>>,
}

impl MockGameApi {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games: Arc::new(RwLock::new(games)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_games())
    }

    pub async fn count(&self) -> usize {
        self.games.read().await.len()
    }
}

impl GameApi for MockGameApi {
    async fn get_all(&self) -> Result<Vec<Game>, ApiError> {
        Ok(self.games.read().await.clone())
    }

    async fn insert(&self, game: Game) -> Result<Game, ApiError> {
        let mut games = self.games.write().await;
        games.push(game.clone());
        debug!(name = %game.name, total = games.len(), "game appended to mock collection");
        Ok(game)
    }
}
