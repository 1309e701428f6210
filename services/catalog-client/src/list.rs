use common::{Game, Seller};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info};

use crate::api::{ApiError, GameApi};
use crate::card::{CardEvent, GameCard};
use crate::display::game_names;
use crate::routes::Route;
use crate::sellers::SellerPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
}

/// Game list screen: loads the catalog once on `initialize()` and reacts to card events.
pub struct GameListController<A> {
    api: A,
    state: LoadState,
    games: Vec<Game>,
    seller_panel: SellerPanel,
    events_tx: UnboundedSender<CardEvent>,
    events_rx: UnboundedReceiver<CardEvent>,
    navigation: Option<Route>,
}

impl<A: GameApi> GameListController<A> {
    pub fn new(api: A) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            api,
            state: LoadState::Idle,
            games: Vec::new(),
            seller_panel: SellerPanel::default(),
            events_tx,
            events_rx,
            navigation: None,
        }
    }

    /// Loads the games. On failure the error is logged and returned, and the
    /// screen keeps whatever it showed before.
    pub async fn initialize(&mut self) -> Result<(), ApiError> {
        let previous = self.state;
        self.state = LoadState::Loading;

        match self.api.get_all().await {
            Ok(games) => {
                info!(count = games.len(), "games loaded");
                self.games = games;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                error!("failed to load games: {}", err);
                self.state = previous;
                Err(err)
            }
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn card(&self, index: usize) -> Option<GameCard<'_>> {
        self.games
            .get(index)
            .map(|game| GameCard::new(game, self.events_tx.clone()))
    }

    pub fn cards(&self) -> impl Iterator<Item = GameCard<'_>> {
        self.games
            .iter()
            .map(|game| GameCard::new(game, self.events_tx.clone()))
    }

    /// Applies every pending card event; returns how many were handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                CardEvent::ShowSellers(sellers) => self.show_seller_list(sellers),
                CardEvent::Navigate(route) => self.navigation = Some(route),
            }
            handled += 1;
        }
        handled
    }

    pub fn show_seller_list(&mut self, sellers: Vec<Seller>) {
        self.seller_panel.show(sellers);
    }

    pub fn close_seller_list(&mut self) {
        self.seller_panel.close();
    }

    pub fn seller_panel(&self) -> &SellerPanel {
        &self.seller_panel
    }

    /// Route requested by the last image click, if the host has not consumed it yet.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.navigation.take()
    }

    pub fn game_names(&self) -> String {
        let names: Vec<&str> = self.games.iter().map(|g| g.name.as_str()).collect();
        game_names(&names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockGameApi;
    use common::seed_games;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Serves the seed games until `fail` is set.
    #[derive(Clone, Default)]
    struct FlakyApi {
        fail: Arc<AtomicBool>,
    }

    impl GameApi for FlakyApi {
        async fn get_all(&self) -> Result<Vec<Game>, ApiError> {
            if self.fail.load(Ordering::SeqCst) {
                Err(ApiError::Status {
                    status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                    body: "down".to_string(),
                })
            } else {
                Ok(seed_games())
            }
        }

        async fn insert(&self, game: Game) -> Result<Game, ApiError> {
            Ok(game)
        }
    }

    #[tokio::test]
    async fn initialize_moves_to_ready() {
        let mut list = GameListController::new(MockGameApi::seeded());
        assert_eq!(list.state(), LoadState::Idle);
        assert!(list.games().is_empty());

        list.initialize().await.unwrap();

        assert_eq!(list.state(), LoadState::Ready);
        assert_eq!(list.games().len(), 3);
        assert_eq!(list.game_names(), "Super Mario Bros, Legend of Zelda, Sonic");
    }

    #[tokio::test]
    async fn failed_load_keeps_prior_state() {
        let api = FlakyApi::default();
        let mut list = GameListController::new(api.clone());

        api.fail.store(true, Ordering::SeqCst);
        assert!(list.initialize().await.is_err());
        assert_eq!(list.state(), LoadState::Idle);
        assert!(list.games().is_empty());

        api.fail.store(false, Ordering::SeqCst);
        list.initialize().await.unwrap();
        api.fail.store(true, Ordering::SeqCst);
        assert!(list.initialize().await.is_err());
        assert_eq!(list.state(), LoadState::Ready);
        assert_eq!(list.games().len(), 3);
    }

    #[tokio::test]
    async fn title_click_shows_only_that_games_sellers() {
        let mut list = GameListController::new(MockGameApi::seeded());
        list.initialize().await.unwrap();
        assert!(!list.seller_panel().is_visible());

        list.card(1).unwrap().title_click();
        assert_eq!(list.process_events(), 1);

        assert!(list.seller_panel().is_visible());
        assert_eq!(list.seller_panel().sellers(), list.games()[1].sellers.as_slice());

        list.card(2).unwrap().title_click();
        list.process_events();
        assert_eq!(list.seller_panel().sellers(), list.games()[2].sellers.as_slice());

        list.close_seller_list();
        assert!(!list.seller_panel().is_visible());
    }

    #[tokio::test]
    async fn image_click_requests_edit_route() {
        let mut list = GameListController::new(MockGameApi::seeded());
        list.initialize().await.unwrap();

        list.cards().last().unwrap().image_click();
        list.process_events();

        assert_eq!(list.take_navigation(), Some(Route::EditGame("Sonic".to_string())));
        assert_eq!(list.take_navigation(), None);
        assert!(!list.seller_panel().is_visible());
    }
}
