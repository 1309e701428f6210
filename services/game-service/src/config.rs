use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3001";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub http_addr: SocketAddr,
    /// Start with the demo collection instead of an empty catalog.
    pub seed: bool,
}

impl ServiceConfig {
    /// Reads `GAME_SERVICE_ADDR` and `GAME_SERVICE_SEED` (call `dotenv()` first).
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let addr = std::env::var("GAME_SERVICE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let http_addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| format!("GAME_SERVICE_ADDR '{}' is not a socket address: {}", addr, e))?;
        let seed = std::env::var("GAME_SERVICE_SEED")
            .map(|v| !matches!(v.as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Self { http_addr, seed })
    }
}
