//! In-memory [`AccountRepository`] adapter.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{AccountPersistenceError, AccountRepository};
use crate::domain::{Account, SignUp};

/// Account store keyed by lower-cased email. Passwords are not retained.
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryAccountRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            clock,
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, sign_up: &SignUp) -> Result<Account, AccountPersistenceError> {
        let account = Account::from_sign_up(Uuid::new_v4(), sign_up, self.clock.utc());
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AccountPersistenceError::duplicate(account.email));
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::DefaultClock;
    use serde_json::json;

    fn sign_up(email: &str) -> SignUp {
        serde_json::from_value(json!({
            "email": email,
            "password": "Analytical1",
            "full_name": "Ada Lovelace",
        }))
        .expect("decodes")
    }

    #[tokio::test]
    async fn emails_are_unique_ignoring_case() {
        let repo = InMemoryAccountRepository::new(Arc::new(DefaultClock));
        repo.create(&sign_up("ada@example.com"))
            .await
            .expect("first sign-up");
        let err = repo
            .create(&sign_up("ADA@example.com"))
            .await
            .expect_err("duplicate");
        assert_eq!(err, AccountPersistenceError::duplicate("ada@example.com"));
    }
}
