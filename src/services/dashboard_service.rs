use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::models::{DashboardDetails, DashboardMetrics};
use crate::services::api::{error_detail, is_auth_failure};
use crate::utils::API_BASE;

/// KPI counters (current week vs previous week).
pub async fn fetch_dashboard_metrics() -> Result<DashboardMetrics, String> {
    let url = format!("{}/api/dashboard/metrics/", API_BASE);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to view your dashboard.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to load metrics.").await);
    }

    response
        .json::<DashboardMetrics>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Detail aggregates: station readiness, revenue trend, recent transactions
/// and top customers. Independent from the metrics endpoint on purpose.
pub async fn fetch_dashboard_details() -> Result<DashboardDetails, String> {
    let url = format!("{}/api/dashboard/details/", API_BASE);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to view your dashboard.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to load dashboard data.").await);
    }

    response
        .json::<DashboardDetails>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
