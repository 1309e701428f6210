use chrono::NaiveDate;
use common::{Game, format_release_date};
use tracing::{error, info, warn};

use crate::api::{ApiError, GameApi};
use crate::form::{self, FieldError, ValidationErrors};
use crate::mapper::{GameViewModel, to_game, to_view_model};
use crate::routes::Route;

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Edit screen for `/edit` and `/edit/:id`. Saving always inserts.
pub struct GameEditController<A> {
    api: A,
    id: Option<String>,
    form: GameViewModel,
}

impl<A: GameApi> GameEditController<A> {
    pub fn new(api: A, id: Option<String>, today: NaiveDate) -> Self {
        Self {
            api,
            id,
            form: GameViewModel {
                date_release: format_release_date(today),
                ..GameViewModel::default()
            },
        }
    }

    /// Builds the controller for an edit route, `None` for any other screen.
    pub fn for_route(api: A, route: &Route, today: NaiveDate) -> Option<Self> {
        match route {
            Route::GameList => None,
            Route::NewGame | Route::EditGame(_) => {
                Some(Self::new(api, route.edit_id().map(str::to_string), today))
            }
        }
    }

    /// Prefills the form from the catalog when the route names a known game.
    pub async fn initialize(&mut self) -> Result<(), ApiError> {
        let Some(id) = self.id.as_deref() else {
            return Ok(());
        };

        let games = self.api.get_all().await.inspect_err(|err| {
            error!("failed to load game '{}': {}", id, err);
        })?;

        match games.iter().find(|game| game.name == id) {
            Some(game) => self.form = to_view_model(game),
            None => warn!("no game named '{}', starting from an empty form", id),
        }
        Ok(())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn form(&self) -> &GameViewModel {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut GameViewModel {
        &mut self.form
    }

    /// Current per-field errors, for inline display.
    pub fn field_errors(&self) -> Vec<FieldError> {
        form::field_errors(&self.form)
    }

    /// Validates, maps and inserts the form. An invalid form never reaches the API.
    pub async fn save(&mut self) -> Result<Game, EditError> {
        if let Err(errors) = form::validate(&self.form) {
            warn!(fields = errors.errors.len(), "{}", errors.alert());
            return Err(errors.into());
        }
        let game = to_game(&self.form)?;

        match self.api.insert(game).await {
            Ok(saved) => {
                info!(name = %saved.name, "game saved");
                Ok(saved)
            }
            Err(err) => {
                error!("failed to save game: {}", err);
                Err(err.into())
            }
        }
    }
}
