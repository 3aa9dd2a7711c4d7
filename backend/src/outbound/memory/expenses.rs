//! In-memory [`ExpenseRepository`] adapter.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::{ExpensePersistenceError, ExpenseRepository};
use crate::domain::{Expense, ExpenseDraft};

pub struct InMemoryExpenseRepository {
    expenses: RwLock<Vec<Expense>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryExpenseRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            expenses: RwLock::new(Vec::new()),
            clock,
        }
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn insert(&self, draft: ExpenseDraft) -> Result<Expense, ExpensePersistenceError> {
        let expense = Expense::from_draft(Uuid::new_v4(), draft, self.clock.utc());
        self.expenses.write().await.push(expense.clone());
        Ok(expense)
    }

    async fn list_for_trip(&self, trip_id: &Uuid) -> Result<Vec<Expense>, ExpensePersistenceError> {
        let mut expenses: Vec<Expense> = self
            .expenses
            .read()
            .await
            .iter()
            .filter(|expense| expense.trip_id == *trip_id)
            .cloned()
            .collect();
        expenses.sort_by(|a, b| a.incurred_at.cmp(&b.incurred_at));
        Ok(expenses)
    }
}
