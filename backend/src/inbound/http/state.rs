//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{AccountRepository, ExpenseRepository, TripRepository};
use crate::outbound::memory::{
    InMemoryAccountRepository, InMemoryExpenseRepository, InMemoryTripRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub trips: Arc<dyn TripRepository>,
    pub accounts: Arc<dyn AccountRepository>,
    pub expenses: Arc<dyn ExpenseRepository>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        trips: Arc<dyn TripRepository>,
        accounts: Arc<dyn AccountRepository>,
        expenses: Arc<dyn ExpenseRepository>,
    ) -> Self {
        Self {
            trips,
            accounts,
            expenses,
        }
    }

    /// Construct state backed by the in-memory adapters.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use tripline::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory(Arc::new(DefaultClock));
    /// let _trips = state.trips.clone();
    /// ```
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Arc::new(InMemoryTripRepository::new(clock.clone())),
            Arc::new(InMemoryAccountRepository::new(clock.clone())),
            Arc::new(InMemoryExpenseRepository::new(clock)),
        )
    }
}
