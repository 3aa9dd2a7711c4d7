//! Trip records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the traveller got from origin to destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Flight,
    Ferry,
    Bike,
    Walk,
}

/// Trip details accepted from a client, decoded from a validated body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripDraft {
    pub trip_number: String,
    pub origin: String,
    pub destination: String,
    pub transport_mode: TransportMode,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A stored trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub trip_number: String,
    pub origin: String,
    pub destination: String,
    pub transport_mode: TransportMode,
    pub start_time: DateTime<Utc>,
    pub distance_km: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Materialise a draft with the identifier and creation time assigned by
    /// the store.
    pub fn from_draft(id: Uuid, draft: TripDraft, created_at: DateTime<Utc>) -> Self {
        let TripDraft {
            trip_number,
            origin,
            destination,
            transport_mode,
            start_time,
            distance_km,
            notes,
        } = draft;
        Self {
            id,
            trip_number,
            origin,
            destination,
            transport_mode,
            start_time,
            distance_km,
            notes,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schemas::{TRANSPORT_MODES, trip_schema};
    use crate::domain::validation::validate;
    use serde_json::json;

    #[test]
    fn every_schema_mode_decodes() {
        for mode in TRANSPORT_MODES {
            let decoded: TransportMode =
                serde_json::from_value(json!(mode)).expect("schema modes are known");
            assert_eq!(serde_json::to_value(decoded).expect("serialises"), json!(mode));
        }
    }

    #[test]
    fn validated_body_decodes_into_draft() {
        let value = validate(
            trip_schema(),
            &json!({
                "trip_number": "TRIP-001",
                "origin": "New York",
                "destination": "Boston",
                "transport_mode": "FLIGHT",
                "start_time": "2024-01-15T10:00:00Z",
                "distance_km": "215.5",
            }),
        )
        .expect("valid trip");
        let draft: TripDraft = serde_json::from_value(value).expect("decodes");
        assert_eq!(draft.transport_mode, TransportMode::Flight);
        assert_eq!(draft.distance_km, Some(215.5));
        assert!(draft.notes.is_none());
    }
}
