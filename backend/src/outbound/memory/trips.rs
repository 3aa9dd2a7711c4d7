//! In-memory [`TripRepository`] adapter.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{TripPersistenceError, TripRepository};
use crate::domain::{Trip, TripDraft};

/// Trip store keyed by insertion order. Trip numbers are unique.
pub struct InMemoryTripRepository {
    trips: RwLock<Vec<Trip>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTripRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            trips: RwLock::new(Vec::new()),
            clock,
        }
    }
}

#[async_trait]
impl TripRepository for InMemoryTripRepository {
    async fn insert(&self, draft: TripDraft) -> Result<Trip, TripPersistenceError> {
        let mut trips = self.trips.write().await;
        if trips
            .iter()
            .any(|trip| trip.trip_number == draft.trip_number)
        {
            return Err(TripPersistenceError::duplicate(draft.trip_number));
        }
        let trip = Trip::from_draft(Uuid::new_v4(), draft, self.clock.utc());
        trips.push(trip.clone());
        Ok(trip)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Trip>, TripPersistenceError> {
        let trips = self.trips.read().await;
        Ok(trips.iter().find(|trip| trip.id == *id).cloned())
    }

    async fn list(&self) -> Result<Vec<Trip>, TripPersistenceError> {
        let mut trips = self.trips.read().await.clone();
        trips.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(trips)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportMode;
    use chrono::{TimeZone, Utc};
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryTripRepository {
        InMemoryTripRepository::new(Arc::new(DefaultClock))
    }

    fn draft(trip_number: &str, day: u32) -> TripDraft {
        TripDraft {
            trip_number: trip_number.to_owned(),
            origin: "New York".to_owned(),
            destination: "Boston".to_owned(),
            transport_mode: TransportMode::Car,
            start_time: Utc
                .with_ymd_and_hms(2024, 1, day, 10, 0, 0)
                .single()
                .expect("valid date"),
            distance_km: Some(215.5),
            notes: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn inserted_trips_can_be_found(repo: InMemoryTripRepository) {
        let trip = repo.insert(draft("TRIP-001", 15)).await.expect("insert");
        let found = repo.find_by_id(&trip.id).await.expect("lookup");
        assert_eq!(found, Some(trip));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_trip_numbers_are_rejected(repo: InMemoryTripRepository) {
        repo.insert(draft("TRIP-001", 15)).await.expect("first insert");
        let err = repo
            .insert(draft("TRIP-001", 16))
            .await
            .expect_err("duplicate");
        assert_eq!(err, TripPersistenceError::duplicate("TRIP-001"));
    }

    #[rstest]
    #[tokio::test]
    async fn list_orders_by_start_time_descending(repo: InMemoryTripRepository) {
        repo.insert(draft("TRIP-001", 10)).await.expect("insert");
        repo.insert(draft("TRIP-002", 20)).await.expect("insert");
        let numbers: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|trip| trip.trip_number)
            .collect();
        assert_eq!(numbers, ["TRIP-002", "TRIP-001"]);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_ids_are_absent(repo: InMemoryTripRepository) {
        let found = repo.find_by_id(&Uuid::nil()).await.expect("lookup");
        assert!(found.is_none());
    }
}
