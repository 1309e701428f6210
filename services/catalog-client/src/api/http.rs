use common::{Game, GameRecord};
use reqwest::{Client, Response};
use tracing::debug;

use super::{ApiError, GameApi};
use crate::config::ClientConfig;

/// Catalog API over HTTP: one GET for the collection, one POST per insert.
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    client: Client,
    games_url: String,
    insert_url: String,
}

impl HttpGameApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("catalog-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            games_url: config.games_url(),
            insert_url: config.insert_url(),
        })
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

impl GameApi for HttpGameApi {
    async fn get_all(&self) -> Result<Vec<Game>, ApiError> {
        debug!(url = %self.games_url, "fetching games");
        let response = self.client.get(&self.games_url).send().await?;
        let records: Vec<GameRecord> = check_status(response).await?.json().await?;

        records
            .into_iter()
            .map(|record| Game::try_from(record).map_err(ApiError::from))
            .collect()
    }

    async fn insert(&self, game: Game) -> Result<Game, ApiError> {
        debug!(url = %self.insert_url, name = %game.name, "posting game");
        let response = self
            .client
            .post(&self.insert_url)
            .json(&GameRecord::for_insert(&game))
            .send()
            .await?;
        let created: GameRecord = check_status(response).await?.json().await?;

        Ok(Game::try_from(created)?)
    }
}
