pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const GAMES_PATH: &str = "/games";
pub const INSERT_PATH: &str = "/api/games";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub use_mock: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            use_mock: false,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads `CATALOG_API_URL` and `CATALOG_USE_MOCK` (call `dotenv()` first).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let use_mock = std::env::var("CATALOG_USE_MOCK")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self { base_url, use_mock }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub fn games_url(&self) -> String {
        self.url(GAMES_PATH)
    }

    pub fn insert_url(&self) -> String {
        self.url(INSERT_PATH)
    }
}
