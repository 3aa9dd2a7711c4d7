//! Business travel expenses logged against a trip.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Transport,
    Lodging,
    Meals,
    Fuel,
    Other,
}

/// Expense details decoded from a validated body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub trip_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub category: ExpenseCategory,
    pub incurred_at: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub category: ExpenseCategory,
    pub incurred_at: DateTime<Utc>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn from_draft(id: Uuid, draft: ExpenseDraft, created_at: DateTime<Utc>) -> Self {
        let ExpenseDraft {
            trip_id,
            amount,
            currency,
            category,
            incurred_at,
            description,
        } = draft;
        Self {
            id,
            trip_id,
            amount,
            currency,
            category,
            incurred_at,
            description,
            created_at,
        }
    }
}
