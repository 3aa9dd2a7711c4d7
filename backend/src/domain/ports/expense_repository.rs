//! Port abstraction for expense persistence adapters and their errors.
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Expense, ExpenseDraft};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by expense repository adapters.
    pub enum ExpensePersistenceError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "expense repository connection failed: {message}"
            as ServiceUnavailable(503, "Expense storage is temporarily unavailable"),
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "expense repository query failed: {message}"
            as DatabaseError(500, "Expense storage failed"),
    }
}

/// Port for logging expenses against trips.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Store a new expense. The caller checks that the trip exists.
    async fn insert(&self, draft: ExpenseDraft) -> Result<Expense, ExpensePersistenceError>;

    /// List the expenses recorded for a trip, oldest first.
    async fn list_for_trip(&self, trip_id: &Uuid) -> Result<Vec<Expense>, ExpensePersistenceError>;
}
