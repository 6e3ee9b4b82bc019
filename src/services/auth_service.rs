use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::models::CurrentUser;
use crate::services::api::{error_detail, is_auth_failure};
use crate::utils::API_BASE;

/// Payload for POST /accounts/business-signup/. The backend parses the rate
/// fields as decimals, so they travel as strings exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignupPayload {
    pub business_name: String,
    pub reward_rate: String,
    pub redemption_points: i64,
    pub redemption_rate: String,
    pub logo_url: String,
    pub primary_color: String,
    pub background_color: String,
    pub username: String,
    pub password: String,
}

/// Create a business account. Public endpoint, no session involved; the new
/// owner signs in afterwards with the email as username.
pub async fn signup(payload: &SignupPayload) -> Result<(), String> {
    let url = format!("{}/accounts/business-signup/", API_BASE);

    log::info!("📝 Creating business account for {}", payload.business_name);

    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Unable to create account.").await);
    }

    Ok(())
}

/// Sign in with username (or email, the backend falls back) and password.
/// Establishes the session cookie the rest of the app relies on.
pub async fn login(username: &str, password: &str) -> Result<CurrentUser, String> {
    let url = format!("{}/accounts/login/", API_BASE);
    let body = serde_json::json!({
        "username": username,
        "password": password,
    });

    log::info!("🔐 Signing in as: {}", username);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_detail(response, "Unable to sign in.").await);
    }

    response
        .json::<CurrentUser>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Idempotent sign-out; an already-expired session (401) is not an error.
pub async fn logout() -> Result<(), String> {
    let url = format!("{}/accounts/logout/", API_BASE);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() && response.status() != 401 {
        return Err(error_detail(response, "Unable to log out.").await);
    }

    log::info!("👋 Signed out");
    Ok(())
}

/// Session probe. 401/403 means "no session" and is NOT an error here —
/// the caller renders the login screen instead.
pub async fn fetch_current_user() -> Result<Option<CurrentUser>, String> {
    let url = format!("{}/accounts/me/", API_BASE);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Ok(None);
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to load profile.").await);
    }

    let user = response
        .json::<CurrentUser>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;
    Ok(Some(user))
}

pub async fn update_password(current_password: &str, new_password: &str) -> Result<(), String> {
    let url = format!("{}/accounts/password/", API_BASE);
    let body = serde_json::json!({
        "current_password": current_password,
        "new_password": new_password,
    });

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to change your password.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to update password.").await);
    }

    Ok(())
}
