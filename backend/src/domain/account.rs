//! Account records created at sign-up.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Password supplied at sign-up.
///
/// The value is handed to the identity provider and never logged; `Debug`
/// is redacted.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Sign-up details decoded from a validated body.
///
/// The confirmation field has already been checked by the schema and is not
/// carried further.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignUp {
    pub email: String,
    pub password: Password,
    pub full_name: String,
    #[serde(default)]
    pub home_city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// A registered account. Credentials stay with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub home_city: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Build the stored account for a sign-up. Emails are stored lower-cased.
    pub fn from_sign_up(id: Uuid, sign_up: &SignUp, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: sign_up.email.to_lowercase(),
            full_name: sign_up.full_name.clone(),
            home_city: sign_up.home_city.clone(),
            phone: sign_up.phone.clone(),
            created_at,
        }
    }
}
