//! Fines repository: the append-only fine ledger

use crate::models::fine::FineRecord;

/// Fines in the order they were recorded
#[derive(Debug, Clone, Default)]
pub struct FinesRepository {
    fines: Vec<FineRecord>,
}

impl FinesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fine to the ledger
    pub fn record(&mut self, fine: FineRecord) {
        tracing::debug!("Recording fine for item id={} ({} entries)", fine.item_id, self.fines.len() + 1);
        self.fines.push(fine);
    }

    pub fn list(&self) -> &[FineRecord] {
        &self.fines
    }

    pub fn len(&self) -> usize {
        self.fines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fines.is_empty()
    }
}
