//! Repository layer owning all desk state

pub mod fines;
pub mod items;

use crate::{error::AppResult, models::item::SeedItem};

/// Main repository struct holding the catalog and the fine ledger
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub items: items::ItemsRepository,
    pub fines: fines::FinesRepository,
}

impl Repository {
    /// Create a repository with the catalog seeded from `seed` and an empty ledger
    pub fn new(seed: Vec<SeedItem>) -> AppResult<Self> {
        Ok(Self {
            items: items::ItemsRepository::from_seed(seed)?,
            fines: fines::FinesRepository::new(),
        })
    }
}
