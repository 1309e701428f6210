//! Client-side core of the game catalog.
//!
//! Holds the catalog API abstraction (mock and HTTP backends), the
//! game/form view-model mapper, form validation and the list/edit
//! controllers a front-end drives. Collaborators are passed in through
//! constructors and every screen is started with an explicit `initialize()`.

pub mod api;
pub mod card;
pub mod config;
pub mod display;
pub mod edit;
pub mod form;
pub mod list;
pub mod mapper;
pub mod routes;
pub mod sellers;

pub use api::{ApiError, GameApi, HttpGameApi, MockGameApi};
pub use card::{CardEvent, GameCard};
pub use config::ClientConfig;
pub use edit::{EditError, GameEditController};
pub use form::{FieldError, FieldErrorKind, FormField, ValidationErrors};
pub use list::{GameListController, LoadState};
pub use mapper::{GameViewModel, to_game, to_view_model};
pub use routes::Route;
pub use sellers::SellerPanel;
