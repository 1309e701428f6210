use common::{Game, format_release_date, parse_release_date};

use crate::form::{FieldErrorKind, FormField, ValidationErrors};

/// String-only projection of a [`Game`] bound to the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameViewModel {
    pub name: String,
    pub image_url: String,
    pub date_release: String,
}

pub fn to_view_model(game: &Game) -> GameViewModel {
    GameViewModel {
        name: game.name.clone(),
        image_url: game.image_url.clone().unwrap_or_default(),
        date_release: format_release_date(game.date_release),
    }
}

/// Inverse of [`to_view_model`]. Only fails on a date the form validator would reject.
pub fn to_game(view_model: &GameViewModel) -> Result<Game, ValidationErrors> {
    let date_release = parse_release_date(&view_model.date_release)
        .map_err(|_| ValidationErrors::single(FormField::DateRelease, FieldErrorKind::Pattern))?;

    let game = Game::new(view_model.name.clone(), date_release);
    Ok(match view_model.image_url.as_str() {
        "" => game,
        url => game.with_image(url),
    })
}
