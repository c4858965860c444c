//! Loan management service: borrow, return and overdue fines

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::{
        fine::FineRecord,
        item::{ActiveLoan, ItemId},
    },
    repository::Repository,
};

pub use crate::models::fine::fine_amount;

/// Acknowledgement of a successful borrow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowReceipt {
    pub item_id: ItemId,
    pub borrower: String,
    pub due_date: DateTime<Utc>,
}

#[derive(Clone)]
pub struct LoansService {
    clock: Arc<dyn Clock>,
}

impl LoansService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Lend an available item to `borrower` for `days` days
    pub fn borrow(
        &self,
        repository: &mut Repository,
        id: ItemId,
        borrower: &str,
        days: u32,
    ) -> AppResult<BorrowReceipt> {
        let item = repository.items.get_by_id_mut(id)?;
        if let Some(loan) = item.loan() {
            tracing::warn!("Borrow refused: item id={} already lent to {}", id, loan.borrower);
            return Err(AppError::ItemNotAvailable {
                id,
                borrower: loan.borrower.clone(),
            });
        }

        let borrower = borrower.trim();
        if borrower.is_empty() {
            return Err(AppError::Validation("Borrower name is required".to_string()));
        }
        if days == 0 {
            return Err(AppError::Validation("Loan must last at least one day".to_string()));
        }

        let due_date = self
            .clock
            .now()
            .checked_add_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| AppError::Validation(format!("Loan of {} days is out of range", days)))?;
        item.lend(ActiveLoan {
            borrower: borrower.to_string(),
            due_date,
        });

        tracing::info!("Borrowed item id={} by {} until {}", id, borrower, due_date);

        Ok(BorrowReceipt {
            item_id: id,
            borrower: borrower.to_string(),
            due_date,
        })
    }

    /// Return a borrowed item, recording a fine in the ledger when it is overdue
    pub fn return_item(&self, repository: &mut Repository, id: ItemId) -> AppResult<Option<FineRecord>> {
        let now = self.clock.now();
        let item = repository.items.get_by_id_mut(id)?;

        let Some(loan) = item.take_loan() else {
            tracing::info!("Return ignored: item id={} is already available", id);
            return Err(AppError::AlreadyAvailable(id));
        };

        let days = overdue_days(loan.due_date, now);
        tracing::info!("Returned item id={} by {} at {}", id, loan.borrower, now);

        if days == 0 {
            return Ok(None);
        }

        let fine = FineRecord::new(id, loan.borrower, days, now);
        tracing::info!(
            "Fine applied to {} for item id={}: {} days, {:.1}",
            fine.borrower,
            id,
            fine.days_overdue,
            fine.amount
        );
        repository.fines.record(fine.clone());

        Ok(Some(fine))
    }
}

/// Whole days elapsed after `due_date`; zero when returned on or before it
pub fn overdue_days(due_date: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    if now <= due_date {
        return 0;
    }
    u32::try_from((now - due_date).num_days()).unwrap_or(u32::MAX)
}
