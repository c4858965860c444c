//! Business logic services

pub mod catalog;
pub mod loans;

use std::sync::Arc;

use crate::clock::Clock;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services sharing the given time source
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog: catalog::CatalogService::new(clock.clone()),
            loans: loans::LoansService::new(clock),
        }
    }
}
