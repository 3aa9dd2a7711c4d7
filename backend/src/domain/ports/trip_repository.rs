//! Port abstraction for trip persistence adapters and their errors.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Trip, TripDraft};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by trip repository adapters.
    pub enum TripPersistenceError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "trip repository connection failed: {message}"
            as ServiceUnavailable(503, "Trip storage is temporarily unavailable"),
        /// A trip with the same trip number already exists.
        Duplicate { trip_number: String } =>
            "trip {trip_number} already exists"
            as DuplicateRecord(409, "A trip with this trip number already exists"),
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "trip repository query failed: {message}"
            as DatabaseError(500, "Trip storage failed"),
    }
}

/// Port for recording and reading trips.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Store a new trip, assigning its identifier and creation time.
    async fn insert(&self, draft: TripDraft) -> Result<Trip, TripPersistenceError>;

    /// Fetch a trip by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Trip>, TripPersistenceError>;

    /// List every trip, most recent start time first.
    async fn list(&self) -> Result<Vec<Trip>, TripPersistenceError>;
}
