use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod models {
    use super::*;
    use rust_decimal::Decimal;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Seller {
        pub id: u32,
        pub name: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub price: Decimal,
        pub amount: u32,
        pub is_available: bool,
    }

    /// A catalog entry. `name` doubles as the identity used in edit routes.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Game {
        pub name: String,
        pub date_release: NaiveDate,
        pub image_url: Option<String>,
        pub sellers: Vec<Seller>,
    }

    impl Game {
        pub fn new(name: impl Into<String>, date_release: NaiveDate) -> Self {
            Self {
                name: name.into(),
                date_release,
                image_url: None,
                sellers: Vec::new(),
            }
        }

        pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
            self.image_url = Some(image_url.into());
            self
        }

        pub fn with_sellers(mut self, sellers: Vec<Seller>) -> Self {
            self.sellers = sellers;
            self
        }

        /// Whole years elapsed between the release date and `today`, zero for future releases.
        pub fn years_since_release(&self, today: NaiveDate) -> u32 {
            today.years_since(self.date_release).unwrap_or(0)
        }
    }

    /// JSON shape exchanged with the catalog API.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GameRecord {
        pub name: String,
        pub date_release: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub image_url: Option<String>,
        #[serde(default)]
        pub sellers: Vec<Seller>,
    }

    impl GameRecord {
        /// Body sent when inserting a game: sellers are never posted.
        pub fn for_insert(game: &Game) -> Self {
            Self {
                name: game.name.clone(),
                date_release: format_release_date(game.date_release),
                image_url: game.image_url.clone(),
                sellers: Vec::new(),
            }
        }
    }

    impl From<&Game> for GameRecord {
        fn from(game: &Game) -> Self {
            Self {
                sellers: game.sellers.clone(),
                ..GameRecord::for_insert(game)
            }
        }
    }

    impl TryFrom<GameRecord> for Game {
        type Error = ServiceError;

        fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
            Ok(Game {
                date_release: parse_release_date(&record.date_release)?,
                name: record.name,
                image_url: record.image_url.filter(|url| !url.is_empty()),
                sellers: record.sellers,
            })
        }
    }
}

pub mod utils {
    use super::*;
    use regex::Regex;
    use rust_decimal::Decimal;
    use std::sync::LazyLock;

    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    static IMAGE_URL_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^https?://.+$").expect("image url pattern compiles"));

    pub fn is_valid_image_url(url: &str) -> bool {
        IMAGE_URL_REGEX.is_match(url)
    }

    pub fn format_release_date(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parses the day part of an ISO date or timestamp (`1985-09-13` or `1985-09-13T00:00:00Z`).
    pub fn parse_release_date(value: &str) -> Result<NaiveDate, ServiceError> {
        let day = value.trim().get(..10).unwrap_or(value.trim());
        NaiveDate::parse_from_str(day, DATE_FORMAT)
            .map_err(|e| ServiceError::BadRequest(format!("invalid release date '{}': {}", value, e)))
    }

    /// Parses a form date: the whole trimmed value must be `YYYY-MM-DD`.
    pub fn parse_form_date(value: &str) -> Result<NaiveDate, ServiceError> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
            .map_err(|e| ServiceError::BadRequest(format!("invalid date '{}': {}", value, e)))
    }

    fn seller(id: u32, name: &str, price: i64, amount: u32) -> Seller {
        Seller {
            id,
            name: name.to_string(),
            price: Decimal::new(price, 2),
            amount,
            is_available: amount > 0,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
    }

    /// Demo data shared by the mock API and the catalog service.
    pub fn seed_games() -> Vec<Game> {
        vec![
            Game::new("Super Mario Bros", date(1985, 9, 13))
                .with_image("https://upload.wikimedia.org/wikipedia/en/0/03/Super_Mario_Bros._box.png")
                .with_sellers(vec![
                    seller(1, "Old shop", 9500, 2),
                    seller(2, "New shop", 11000, 1),
                    seller(3, "Super retro", 9000, 0),
                ]),
            Game::new("Legend of Zelda", date(1986, 2, 21))
                .with_image("https://upload.wikimedia.org/wikipedia/en/4/41/Legend_of_zelda_cover_%28with_cartridge%29_gold.png")
                .with_sellers(vec![
                    seller(1, "Old shop", 9200, 1),
                    seller(2, "New shop", 9900, 3),
                ]),
            Game::new("Sonic", date(1991, 6, 23))
                .with_image("https://upload.wikimedia.org/wikipedia/en/b/ba/Sonic_the_Hedgehog_1_Genesis_box_art.jpg")
                .with_sellers(vec![seller(3, "Super retro", 4500, 5)]),
        ]
    }
}

pub mod errors {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub enum ServiceError {
        NotFound(String),
        BadRequest(String),
    }

    impl fmt::Display for ServiceError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
                ServiceError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            }
        }
    }

    impl std::error::Error for ServiceError {}
}

pub use errors::*;
pub use models::*;
pub use utils::*;
