//! In-process adapters standing in for the hosted backend.
//!
//! They keep records in memory behind async read/write locks, assign
//! identifiers and creation times, and enforce the same uniqueness rules the
//! hosted tables do. Used for local development and tests.

mod accounts;
mod expenses;
mod trips;

pub use accounts::InMemoryAccountRepository;
pub use expenses::InMemoryExpenseRepository;
pub use trips::InMemoryTripRepository;
