use serde::Deserialize;

use super::transaction::flexible_string;

/// Registered checkout device. The api_token is what the device presents in
/// the X-Station-Token header; prepared_loyalty_card is the staged card
/// waiting for a customer's wallet download.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub api_token: String,
    /// Public identifier embedded in customer-facing pass links.
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub prepared_loyalty_card: Option<String>,
    #[serde(default)]
    pub prepared_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Station {
    pub fn has_prepared_card(&self) -> bool {
        self.prepared_loyalty_card.is_some()
    }

    /// Most recent activity timestamp we know about.
    pub fn last_activity(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .or(self.prepared_at.as_deref())
    }
}

/// Accepts both list shapes the backend has produced over time: a bare JSON
/// array, or a paginated `{"results": [...]}` envelope.
pub fn parse_station_payload(payload: &serde_json::Value) -> Vec<Station> {
    let items = if payload.is_array() {
        payload.clone()
    } else {
        payload
            .get("results")
            .cloned()
            .unwrap_or(serde_json::Value::Null)
    };
    serde_json::from_value(items).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_parsing_accepts_both_shapes() {
        let bare = json!([{"id": "s1", "name": "Front Counter", "api_token": "STN-123"}]);
        let wrapped = json!({"results": [{"id": 2, "name": "Drive Thru", "api_token": "STN-456"}]});

        let stations = parse_station_payload(&bare);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].api_token, "STN-123");

        let stations = parse_station_payload(&wrapped);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "2");

        assert!(parse_station_payload(&json!({"detail": "nope"})).is_empty());
    }

    #[test]
    fn prepared_state_reads_from_slot() {
        let station: Station = serde_json::from_value(json!({
            "id": "s1",
            "name": "Front Counter",
            "api_token": "STN-123",
            "prepared_loyalty_card": "c0ffee",
            "prepared_at": "2025-11-10T09:00:00Z",
        }))
        .unwrap();
        assert!(station.has_prepared_card());
        assert_eq!(station.last_activity(), Some("2025-11-10T09:00:00Z"));
    }
}
