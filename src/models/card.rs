use serde::Deserialize;

use super::transaction::flexible_string;

/// Digital loyalty card: an opaque token plus the points balance the backend
/// maintains for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoyaltyCard {
    pub token: String,
    #[serde(default)]
    pub points_balance: i64,
    #[serde(default)]
    pub business_customer: Option<BusinessCustomer>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl LoyaltyCard {
    pub fn customer_name(&self) -> Option<&str> {
        self.business_customer
            .as_ref()
            .map(|bc| bc.customer.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusinessCustomer {
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: String,
    pub customer: Customer,
    #[serde(default)]
    pub loyalty_card: Option<CardSummary>,
}

/// Slim card view embedded in customer listings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardSummary {
    pub token: String,
    #[serde(default)]
    pub points_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Response of POST /api/loyaltycards/issue/: the (possibly pre-existing)
/// customer, the card, and where the staged wallet pass can be downloaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssuedCard {
    pub customer: Customer,
    pub loyalty_card: LoyaltyCard,
    #[serde(default)]
    pub prepared_pass_url: Option<String>,
    #[serde(default)]
    pub wallet: Option<WalletLinks>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletLinks {
    #[serde(default)]
    pub apple: Option<WalletDownload>,
    #[serde(default)]
    pub google: Option<WalletDownload>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WalletDownload {
    pub download_url: String,
}
