use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::RequestCredentials;

use crate::models::card::{BusinessCustomer, IssuedCard, LoyaltyCard};
use crate::services::api::{error_detail, is_auth_failure, require_station_token};
use crate::utils::API_BASE;

/// Flattened row for the customers page, derived from the nested
/// business-customer payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoyaltyCustomer {
    pub id: String,
    pub name: String,
    pub phone_number: Option<String>,
}

impl From<&BusinessCustomer> for LoyaltyCustomer {
    fn from(bc: &BusinessCustomer) -> Self {
        Self {
            id: bc.id.clone(),
            name: bc.customer.name.clone(),
            phone_number: bc.customer.phone_number.clone(),
        }
    }
}

pub async fn list_business_customers() -> Result<Vec<BusinessCustomer>, String> {
    let url = format!("{}/api/businesscustomers/", API_BASE);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to view loyalty cards.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to load customers.").await);
    }

    response
        .json::<Vec<BusinessCustomer>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Issue a new digital loyalty card for a walk-in customer. Runs local
/// validation before any network traffic and authenticates as the active
/// station via the X-Station-Token header.
pub async fn issue_loyalty_card(
    customer_name: &str,
    phone_number: &str,
    station_token: &str,
) -> Result<IssuedCard, String> {
    let name = customer_name.trim();
    let phone = phone_number.trim();

    if name.is_empty() {
        return Err("Enter the customer's name.".to_string());
    }
    if phone.is_empty() {
        return Err("Enter the customer's phone number.".to_string());
    }
    require_station_token(station_token)?;

    let url = format!("{}/api/loyaltycards/issue/", API_BASE);
    let body = serde_json::json!({
        "customer_name": name,
        "phone_number": phone,
    });

    log::info!("🎟️ Issuing loyalty card for {}", name);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .header("X-Station-Token", station_token)
        .json(&body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to issue loyalty cards.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to issue loyalty card.").await);
    }

    response
        .json::<IssuedCard>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Resolve a scanned or typed card code into a full card record.
pub async fn lookup_loyalty_card(token: &str) -> Result<LoyaltyCard, String> {
    let code = token.trim();
    if code.is_empty() {
        return Err("Enter a loyalty card code.".to_string());
    }

    let url = format!("{}/api/loyaltycards/{}/", API_BASE, code);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to look up loyalty cards.".to_string());
    }
    if response.status() == 404 {
        return Err("No loyalty card matches that code.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to look up loyalty card.").await);
    }

    response
        .json::<LoyaltyCard>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::card::Customer;

    #[test]
    fn customer_row_flattens_nested_payload() {
        let bc = BusinessCustomer {
            id: "bc-1".into(),
            customer: Customer {
                id: "c-1".into(),
                name: "Dana Reyes".into(),
                phone_number: Some("+15551234567".into()),
            },
            loyalty_card: None,
        };
        let row = LoyaltyCustomer::from(&bc);
        assert_eq!(row.id, "bc-1");
        assert_eq!(row.name, "Dana Reyes");
        assert_eq!(row.phone_number.as_deref(), Some("+15551234567"));
    }
}
