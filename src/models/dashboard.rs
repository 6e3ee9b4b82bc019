use serde::Deserialize;

use super::transaction::{flexible_amount, flexible_string};

/// KPI counters for the current 7-day window and the window before it.
/// Every field is optional so a partially-migrated backend still renders.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct DashboardMetrics {
    #[serde(default)]
    pub active_loyalty_cards: Option<i64>,
    #[serde(default)]
    pub active_loyalty_cards_prev: Option<i64>,
    #[serde(default)]
    pub repeat_customers: Option<i64>,
    #[serde(default)]
    pub repeat_customers_prev: Option<i64>,
    #[serde(default)]
    pub points_redeemed_7d: Option<i64>,
    #[serde(default)]
    pub points_redeemed_prev: Option<i64>,
    #[serde(default)]
    pub wallet_pass_installs: Option<i64>,
    #[serde(default)]
    pub wallet_pass_prev: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct DashboardDetails {
    #[serde(default)]
    pub station_readiness: Vec<StationReadiness>,
    #[serde(default)]
    pub revenue_trend: Vec<RevenuePoint>,
    #[serde(default)]
    pub recent_transactions: Vec<RecentTransaction>,
    #[serde(default)]
    pub top_customers: Vec<TopCustomer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationReadiness {
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub prepared_slot: Option<PreparedSlot>,
    #[serde(default)]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PreparedSlot {
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentTransaction {
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default)]
    pub customer: String,
    #[serde(default)]
    pub station: String,
    #[serde(default, deserialize_with = "flexible_amount")]
    pub amount: f64,
    #[serde(default)]
    pub points_earned: i64,
    #[serde(default)]
    pub points_redeemed: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopCustomer {
    pub name: String,
    #[serde(default)]
    pub visits: i64,
    #[serde(default)]
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    #[serde(default, deserialize_with = "flexible_amount")]
    pub total: f64,
}

impl DashboardMetrics {
    /// (current, previous) pairs in dashboard display order.
    pub fn kpi_pairs(&self) -> [(&'static str, Option<i64>, Option<i64>); 4] {
        [
            ("Active Loyalty Cards", self.active_loyalty_cards, self.active_loyalty_cards_prev),
            ("Repeat Customers", self.repeat_customers, self.repeat_customers_prev),
            ("Points Redeemed (7d)", self.points_redeemed_7d, self.points_redeemed_prev),
            ("Wallet Pass Installs", self.wallet_pass_installs, self.wallet_pass_prev),
        ]
    }
}
