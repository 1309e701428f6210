//! Access to the game collection.

use std::future::Future;

use common::{Game, ServiceError};

mod http;
mod mock;

pub use http::HttpGameApi;
pub use mock::MockGameApi;

/// Transport-level failures. These are surfaced unchanged; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to catalog API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog API answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("catalog API returned an invalid record: {0}")]
    InvalidRecord(#[from] ServiceError),
}

/// The two operations the list and edit screens need from the catalog.
pub trait GameApi {
    /// Every known game.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Game>, ApiError>> + Send;

    /// Adds `game` to the catalog and returns the stored game.
    fn insert(&self, game: Game) -> impl Future<Output = Result<Game, ApiError>> + Send;
}
