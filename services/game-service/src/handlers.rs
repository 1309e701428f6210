use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
};
use common::{Game, GameRecord, ServiceError, is_valid_image_url};
use tracing::{info, warn};

use crate::store::SharedStore;
use crate::types::AppError;

/// GET /games — every game in insertion order.
pub async fn list_games_http(State(store): State<SharedStore>) -> ResponseJson<Vec<GameRecord>> {
    let store = store.read().await;
    ResponseJson(store.all().iter().map(GameRecord::from).collect())
}

/// GET /games/{name}
pub async fn get_game_http(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<ResponseJson<GameRecord>, AppError> {
    let store = store.read().await;
    store
        .all()
        .iter()
        .find(|game| game.name == name)
        .map(|game| ResponseJson(GameRecord::from(game)))
        .ok_or_else(|| AppError::NotFound(format!("game '{}' not found", name)))
}

/// POST /api/games — validate and append.
pub async fn create_game_http(
    State(store): State<SharedStore>,
    request: Result<Json<GameRecord>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<GameRecord>), AppError> {
    let Json(request) = request.inspect_err(|e| warn!("unreadable game body: {}", e))?;
    let game = validate_record(request).inspect_err(|e| warn!("rejected game insert: {}", e))?;

    let stored = GameRecord::from(&game);
    let total = store.write().await.insert(game);
    info!(name = %stored.name, total, "game inserted");

    Ok((StatusCode::CREATED, ResponseJson(stored)))
}

fn validate_record(record: GameRecord) -> Result<Game, ServiceError> {
    if record.name.trim().is_empty() {
        return Err(ServiceError::BadRequest("name is required".to_string()));
    }
    if let Some(url) = record.image_url.as_deref() {
        if !url.is_empty() && !is_valid_image_url(url) {
            return Err(ServiceError::BadRequest(format!(
                "imageUrl '{}' must match https?://.+",
                url
            )));
        }
    }
    Game::try_from(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{GameStore, shared};

    fn record(name: &str, date: &str, image_url: Option<&str>) -> GameRecord {
        GameRecord {
            name: name.to_string(),
            date_release: date.to_string(),
            image_url: image_url.map(str::to_string),
            sellers: vec![],
        }
    }

    #[tokio::test]
    async fn list_returns_seed_collection() {
        let store = shared(GameStore::seeded());
        let ResponseJson(games) = list_games_http(State(store)).await;
        let names: Vec<_> = games.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Super Mario Bros", "Legend of Zelda", "Sonic"]);
        assert_eq!(games[0].date_release, "1985-09-13");
    }

    #[tokio::test]
    async fn create_appends_and_returns_created() {
        let store = shared(GameStore::seeded());
        let body = record("Tetris", "1984-06-06", Some("https://example.com/tetris.png"));

        let (status, ResponseJson(created)) =
            create_game_http(State(store.clone()), Ok(Json(body.clone()))).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created, body);
        let store = store.read().await;
        assert_eq!(store.len(), 4);
        assert_eq!(store.all()[3].name, "Tetris");
    }

    #[tokio::test]
    async fn create_rejects_bad_image_url() {
        let store = shared(GameStore::default());
        let body = record("Tetris", "1984-06-06", Some("example.com/tetris.png"));

        let result = create_game_http(State(store.clone()), Ok(Json(body))).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(store.read().await.len(), 0);
    }

    #[tokio::test]
    async fn create_rejects_blank_name_and_bad_date() {
        let store = shared(GameStore::default());

        let blank = create_game_http(State(store.clone()), Ok(Json(record("  ", "1984-06-06", None)))).await;
        assert!(matches!(blank, Err(AppError::BadRequest(_))));

        let bad_date = create_game_http(State(store.clone()), Ok(Json(record("Tetris", "June 1984", None)))).await;
        assert!(matches!(bad_date, Err(AppError::BadRequest(_))));

        assert_eq!(store.read().await.len(), 0);
    }

    #[tokio::test]
    async fn get_by_name() {
        let store = shared(GameStore::seeded());

        let ResponseJson(found) = get_game_http(State(store.clone()), Path("Sonic".to_string()))
            .await
            .unwrap();
        assert_eq!(found.name, "Sonic");

        let missing = get_game_http(State(store), Path("Pong".to_string())).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }
}
