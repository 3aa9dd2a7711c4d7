//! Domain ports: the data-access boundary the handlers call through.
//!
//! The production collaborator is a hosted backend; handlers see only these
//! traits. Adapters report typed errors which handlers wrap into
//! [`crate::domain::AppError`] at the call site.

mod macros;
pub(crate) use macros::define_port_error;

mod account_repository;
mod expense_repository;
mod trip_repository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountPersistenceError, AccountRepository};
#[cfg(test)]
pub use expense_repository::MockExpenseRepository;
pub use expense_repository::{ExpensePersistenceError, ExpenseRepository};
#[cfg(test)]
pub use trip_repository::MockTripRepository;
pub use trip_repository::{TripPersistenceError, TripRepository};
