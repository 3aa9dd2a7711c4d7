//! Port abstraction for the identity provider's account records.
use async_trait::async_trait;

use crate::domain::{Account, SignUp};

use super::define_port_error;

define_port_error! {
    /// Errors raised by account adapters.
    pub enum AccountPersistenceError {
        /// The identity provider could not be reached.
        Connection { message: String } =>
            "account repository connection failed: {message}"
            as ServiceUnavailable(503, "Sign-up is temporarily unavailable"),
        /// The email address is already registered.
        Duplicate { email: String } =>
            "account {email} already exists"
            as DuplicateRecord(409, "An account with this email already exists"),
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "account repository query failed: {message}"
            as DatabaseError(500, "Account storage failed"),
    }
}

/// Port for registering accounts with the identity provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Register an account. Emails are unique regardless of case.
    async fn create(&self, sign_up: &SignUp) -> Result<Account, AccountPersistenceError>;
}
