use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::handlers::{create_game_http, get_game_http, list_games_http};
use crate::store::SharedStore;

pub fn create_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/games", get(list_games_http))
        .route("/games/{name}", get(get_game_http))
        .route("/api/games", post(create_game_http))
        .layer(CorsLayer::permissive())
        .with_state(store)
}
