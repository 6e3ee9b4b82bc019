use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::models::transaction::{NewTransaction, TransactionRecord};
use crate::services::api::{error_detail, is_auth_failure, require_station_token};
use crate::utils::API_BASE;

pub async fn list_transactions() -> Result<Vec<TransactionRecord>, String> {
    let url = format!("{}/api/transactions/", API_BASE);

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to view transactions.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to load transactions.").await);
    }

    response
        .json::<Vec<TransactionRecord>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Client-side checks that must reject a checkout before it touches the
/// network. A redemption without a linked card would silently earn instead
/// of discount, so it is refused outright.
pub fn validate_new_transaction(tx: &NewTransaction) -> Result<(), String> {
    if tx.amount <= 0.0 {
        return Err("Enter an amount greater than zero.".to_string());
    }
    if tx.redeem && tx.loyalty_card_id.is_none() {
        return Err("Link a loyalty card before redeeming points.".to_string());
    }
    Ok(())
}

/// Record a checkout. Validation and the station-token check both run
/// before the request is built.
pub async fn create_transaction(
    tx: &NewTransaction,
    station_token: &str,
) -> Result<TransactionRecord, String> {
    validate_new_transaction(tx)?;
    require_station_token(station_token)?;

    let url = format!("{}/api/transactions/", API_BASE);

    log::info!("💳 Recording checkout of {:.2}", tx.amount);

    let response = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .header("X-Station-Token", station_token)
        .json(tx)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if is_auth_failure(response.status()) {
        return Err("Please sign in to record transactions.".to_string());
    }
    if !response.ok() {
        return Err(error_detail(response, "Unable to record transaction.").await);
    }

    response
        .json::<TransactionRecord>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative_amounts() {
        let tx = NewTransaction {
            amount: 0.0,
            redeem: false,
            loyalty_card_id: None,
        };
        assert_eq!(
            validate_new_transaction(&tx),
            Err("Enter an amount greater than zero.".to_string())
        );

        let tx = NewTransaction {
            amount: -3.5,
            redeem: false,
            loyalty_card_id: None,
        };
        assert!(validate_new_transaction(&tx).is_err());
    }

    #[test]
    fn rejects_redeem_without_linked_card() {
        let tx = NewTransaction {
            amount: 10.0,
            redeem: true,
            loyalty_card_id: None,
        };
        assert_eq!(
            validate_new_transaction(&tx),
            Err("Link a loyalty card before redeeming points.".to_string())
        );
    }

    #[test]
    fn accepts_guest_checkout_and_redeem_with_card() {
        let guest = NewTransaction {
            amount: 7.25,
            redeem: false,
            loyalty_card_id: None,
        };
        assert!(validate_new_transaction(&guest).is_ok());

        let redeem = NewTransaction {
            amount: 10.0,
            redeem: true,
            loyalty_card_id: Some("CARD-7".into()),
        };
        assert!(validate_new_transaction(&redeem).is_ok());
    }
}
