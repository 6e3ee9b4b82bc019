use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::models::station::{parse_station_payload, Station};
use crate::services::api::{error_detail, is_auth_failure, safe_json};
use crate::utils::{API_BASE, PASS_API_BASE};

pub async fn list_stations() -> Result<Vec<Station>, String> {
    let url = format!("{}/api/stations/", API_BASE);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to view stations.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to load stations.").await);
    }

    let payload = safe_json(response)
        .await
        .ok_or_else(|| "Unable to load stations.".to_string())?;
    Ok(parse_station_payload(&payload))
}

pub async fn create_station(name: &str) -> Result<Station, String> {
    let url = format!("{}/api/stations/", API_BASE);
    let body = serde_json::json!({ "name": name.trim() });

    log::info!("🏪 Creating station: {}", name.trim());

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to create stations.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Failed to create station.").await);
    }

    response
        .json::<Station>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

pub async fn delete_station(station_id: &str) -> Result<(), String> {
    let url = format!("{}/api/stations/{}/", API_BASE, station_id);

    let response = Request::delete(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to delete stations.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Failed to delete station.").await);
    }

    Ok(())
}

/// Empty a station's prepared slot without downloading the pass. The station
/// token rides as query auth, the JSON platform avoids the pkpass payload.
/// 404 means the slot was already empty, which is the state we wanted.
pub async fn clear_prepared_slot(station: &Station) -> Result<(), String> {
    if !station.has_prepared_card() {
        return Ok(());
    }

    let url = format!(
        "{}/api/stations/{}/prepared-pass/?token={}&clear=true&platform=json",
        API_BASE, station.id, station.api_token
    );

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to manage station slots.".to_string());
    }
    if !response.ok() && response.status() != 404 {
        return Err(error_detail(response, "Failed to clear prepared card.").await);
    }

    log::info!("🧹 Prepared slot cleared for station {}", station.name);
    Ok(())
}

/// Public wallet download URL for a station slug. No session involved: the
/// page holding this link is itself the access control.
pub fn public_pass_url(slug: &str, platform: &str, clear: bool) -> String {
    format!(
        "{}/api/stations/public/{}/prepared-pass/?platform={}&clear={}",
        PASS_API_BASE, slug, platform, clear
    )
}

/// Probe the JSON variant before navigating to the pkpass download, so the
/// customer gets a readable message instead of a broken download.
pub async fn probe_prepared_pass(slug: &str) -> Result<(), String> {
    let url = public_pass_url(slug, "json", false);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err("Pass not ready yet. Please ask staff to issue it again.".to_string());
    }

    Ok(())
}
