// ============================================================================
// API HELPERS - uniform handling of backend responses
// ============================================================================
// Conventions shared by every service:
// - bodies parse through safe_json (None when not JSON, never a panic)
// - HTTP errors use the backend's `detail` field or an operation-specific
//   fallback message
// - 401/403 maps to a per-operation "Please sign in ..." message
// ============================================================================

use gloo_net::http::Response;

/// Parse the body as JSON, `None` on an unparsable body. Callers use this to
/// tell "bad body" apart from a network failure (which errors earlier).
pub async fn safe_json(response: Response) -> Option<serde_json::Value> {
    response.json::<serde_json::Value>().await.ok()
}

/// Error message for a non-2xx response: the backend's `detail` field when
/// present, the operation-specific fallback otherwise.
pub async fn error_detail(response: Response, fallback: &str) -> String {
    match safe_json(response).await {
        Some(body) => body
            .get("detail")
            .and_then(|detail| detail.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string()),
        None => fallback.to_string(),
    }
}

pub fn is_auth_failure(status: u16) -> bool {
    status == 401 || status == 403
}

/// Guard for station-scoped writes. Checked before building any request so a
/// device without a selected station never hits the network.
pub fn require_station_token(token: &str) -> Result<(), String> {
    if token.trim().is_empty() {
        Err("Station token is required. Choose a station for this device first.".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_failure_covers_both_statuses() {
        assert!(is_auth_failure(401));
        assert!(is_auth_failure(403));
        assert!(!is_auth_failure(404));
        assert!(!is_auth_failure(200));
    }

    #[test]
    fn missing_station_token_fails_fast() {
        assert!(require_station_token("").is_err());
        assert!(require_station_token("   ").is_err());
        assert!(require_station_token("STN-123").is_ok());
    }
}
