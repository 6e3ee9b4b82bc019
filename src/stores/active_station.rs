use serde::{Deserialize, Serialize};

use crate::models::station::Station;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_ACTIVE_STATION};

/// The station this browser acts as. Persisted to localStorage so the
/// choice survives reloads; the token is what checkout and card issuance
/// send in the X-Station-Token header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveStation {
    pub id: String,
    pub name: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ActiveStation {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.clone(),
            name: station.name.clone(),
            token: station.api_token.clone(),
            slug: station.slug.clone(),
        }
    }
}

pub fn select(station: &Station) -> ActiveStation {
    let active = ActiveStation::from_station(station);
    if let Err(e) = save_to_storage(STORAGE_KEY_ACTIVE_STATION, &active) {
        log::warn!("⚠️ Could not persist active station: {}", e);
    }
    log::info!("📍 Active station set to {}", active.name);
    active
}

pub fn load_persisted() -> Option<ActiveStation> {
    load_from_storage(STORAGE_KEY_ACTIVE_STATION)
}

pub fn forget() {
    if let Err(e) = remove_from_storage(STORAGE_KEY_ACTIVE_STATION) {
        log::warn!("⚠️ Could not clear active station: {}", e);
    }
    log::info!("📍 Active station cleared");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_form_omits_missing_slug() {
        let active = ActiveStation {
            id: "7".into(),
            name: "Front Counter".into(),
            token: "STN-123".into(),
            slug: None,
        };
        let json = serde_json::to_string(&active).unwrap();
        assert!(!json.contains("slug"));
    }

    #[test]
    fn round_trips_through_json() {
        let active = ActiveStation {
            id: "7".into(),
            name: "Front Counter".into(),
            token: "STN-123".into(),
            slug: Some("front-counter".into()),
        };
        let json = serde_json::to_string(&active).unwrap();
        let back: ActiveStation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, active);
    }

    #[test]
    fn built_from_station_fields() {
        let station = Station {
            id: "9".into(),
            name: "Drive Thru".into(),
            api_token: "STN-999".into(),
            slug: Some("drive-thru".into()),
            prepared_loyalty_card: None,
            prepared_at: None,
            created_at: None,
            updated_at: None,
        };
        let active = ActiveStation::from_station(&station);
        assert_eq!(active.token, "STN-999");
        assert_eq!(active.slug.as_deref(), Some("drive-thru"));
    }
}
