use chrono::Datelike;
use common::{Game, Seller};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::display::{OfferBadge, offer_badge};
use crate::routes::Route;

/// Messages a card sends up to the list that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    ShowSellers(Vec<Seller>),
    Navigate(Route),
}

/// View of a single game inside the list.
pub struct GameCard<'a> {
    game: &'a Game,
    events: UnboundedSender<CardEvent>,
}

impl<'a> GameCard<'a> {
    pub fn new(game: &'a Game, events: UnboundedSender<CardEvent>) -> Self {
        Self { game, events }
    }

    pub fn game(&self) -> &'a Game {
        self.game
    }

    pub fn title_click(&self) {
        self.emit(CardEvent::ShowSellers(self.game.sellers.clone()));
    }

    pub fn image_click(&self) {
        self.emit(CardEvent::Navigate(Route::EditGame(self.game.name.clone())));
    }

    pub fn offer_badge(&self, current_year: i32) -> OfferBadge {
        offer_badge(self.game.date_release.year(), current_year)
    }

    fn emit(&self, event: CardEvent) {
        if self.events.send(event).is_err() {
            debug!(game = %self.game.name, "card event dropped, list is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::seed_games;
    use tokio::sync::mpsc;

    #[test]
    fn clicks_emit_events() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let game = seed_games().remove(1);
        let card = GameCard::new(&game, tx);

        card.title_click();
        card.image_click();

        assert_eq!(rx.try_recv().unwrap(), CardEvent::ShowSellers(game.sellers.clone()));
        assert_eq!(
            rx.try_recv().unwrap(),
            CardEvent::Navigate(Route::EditGame("Legend of Zelda".to_string()))
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn badge_uses_release_year() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let game = Game::new("Upcoming", NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
        let card = GameCard::new(&game, tx);

        assert_eq!(card.offer_badge(2026), OfferBadge::New);
        assert_eq!(card.offer_badge(2028), OfferBadge::Offer);
    }
}
