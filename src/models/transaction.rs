use serde::{Deserialize, Deserializer, Serialize};

use super::card::LoyaltyCard;
use super::station::Station;

/// Checkout transaction as the backend reports it. Immutable once created;
/// the UI only prepends new records and re-reads the list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "flexible_amount")]
    pub final_amount: f64,
    #[serde(default)]
    pub points_earned: i64,
    #[serde(default)]
    pub points_redeemed: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub station: Option<Station>,
    #[serde(default)]
    pub loyalty_card: Option<LoyaltyCard>,
}

impl TransactionRecord {
    pub fn station_name(&self) -> &str {
        self.station.as_ref().map(|s| s.name.as_str()).unwrap_or("—")
    }

    pub fn customer_name(&self) -> &str {
        self.loyalty_card
            .as_ref()
            .and_then(|card| card.customer_name())
            .unwrap_or("Guest checkout")
    }

    /// Discount actually applied by the backend (zero for plain checkouts).
    pub fn discount(&self) -> f64 {
        (self.amount - self.final_amount).max(0.0)
    }
}

/// Payload for POST /api/transactions/. `loyalty_card_id` is omitted for
/// guest checkouts so the backend skips the points pipeline entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub redeem: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_card_id: Option<String>,
}

/// The backend serializes decimal amounts as strings ("12.50"); older rows
/// and aggregate endpoints emit plain numbers. Anything else coerces to 0.
pub fn coerce_amount(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub(crate) fn flexible_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_amount(&value))
}

/// Numeric ids arrive as integers, UUID ids as strings; the UI treats both
/// as opaque strings.
pub(crate) fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_amount_normalizes_to_number() {
        assert_eq!(coerce_amount(&json!("12.50")), 12.5);
        assert_eq!(coerce_amount(&json!(" 7 ")), 7.0);
        assert_eq!(coerce_amount(&json!(3.25)), 3.25);
    }

    #[test]
    fn unparsable_amount_defaults_to_zero() {
        assert_eq!(coerce_amount(&json!("a lot")), 0.0);
        assert_eq!(coerce_amount(&json!(null)), 0.0);
        assert_eq!(coerce_amount(&json!({"amount": 4})), 0.0);
    }

    #[test]
    fn record_deserializes_with_mixed_field_types() {
        let record: TransactionRecord = serde_json::from_value(json!({
            "id": 42,
            "amount": "12.50",
            "final_amount": 10.0,
            "points_earned": 12,
            "created_at": "2025-11-10T09:00:00Z",
        }))
        .unwrap();

        assert_eq!(record.id, "42");
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.final_amount, 10.0);
        assert_eq!(record.points_redeemed, 0);
        assert_eq!(record.discount(), 2.5);
        assert_eq!(record.customer_name(), "Guest checkout");
    }

    #[test]
    fn new_transaction_omits_missing_card() {
        let guest = NewTransaction {
            amount: 10.0,
            redeem: false,
            loyalty_card_id: None,
        };
        let body = serde_json::to_value(&guest).unwrap();
        assert_eq!(body, json!({"amount": 10.0, "redeem": false}));

        let linked = NewTransaction {
            amount: 10.0,
            redeem: false,
            loyalty_card_id: Some("CARD-7".into()),
        };
        let body = serde_json::to_value(&linked).unwrap();
        assert_eq!(
            body,
            json!({"amount": 10.0, "redeem": false, "loyalty_card_id": "CARD-7"})
        );
    }
}
