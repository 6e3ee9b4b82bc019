/// Base URL of the REST backend, resolved at compile time:
/// - development: http://localhost:8000 (default)
/// - production: via the API_BASE_URL env var (.env or environment)
pub const API_BASE: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Base URL for the public wallet-pass download endpoints. Falls back to the
/// main API when not configured separately.
pub const PASS_API_BASE: &str = match option_env!("PASS_API_BASE_URL") {
    Some(url) => url,
    None => API_BASE,
};

// localStorage keys (device-local state)
pub const STORAGE_KEY_ACTIVE_STATION: &str = "loyaltypass.activeStation";
pub const STORAGE_KEY_THEME: &str = "loyaltypass.theme";
