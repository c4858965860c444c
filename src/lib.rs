//! LibraNet circulation desk
//!
//! Tracks books, audiobooks and e-magazines through the lending workflow:
//! borrowing, returning and the fines charged for overdue returns.

use std::sync::Arc;

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use clock::Clock;
use models::{FineRecord, ItemId, LibraryItem, SeedItem};
use repository::Repository;
use services::{
    catalog::{Archived, Playback},
    loans::BorrowReceipt,
    Services,
};

/// Desk state built once at startup and handed to every operation
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Repository,
    pub services: Services,
}

impl AppState {
    /// Build the desk with the catalog seeded from `config`
    pub fn new(config: AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let repository = Repository::new(config.catalog.items.clone())?;
        Ok(Self {
            config: Arc::new(config),
            repository,
            services: Services::new(clock),
        })
    }

    /// Build the desk around an explicit seed list and default settings
    pub fn with_seed(seed: Vec<SeedItem>, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let mut config = AppConfig::default();
        config.catalog.items = seed;
        Self::new(config, clock)
    }

    pub fn lookup(&self, id: ItemId) -> AppResult<&LibraryItem> {
        self.services.catalog.get_item(&self.repository, id)
    }

    pub fn borrow(&mut self, id: ItemId, borrower: &str, days: u32) -> AppResult<BorrowReceipt> {
        self.services.loans.borrow(&mut self.repository, id, borrower, days)
    }

    pub fn return_item(&mut self, id: ItemId) -> AppResult<Option<FineRecord>> {
        self.services.loans.return_item(&mut self.repository, id)
    }

    pub fn play(&self, id: ItemId) -> AppResult<Playback> {
        self.services.catalog.play(&self.repository, id)
    }

    pub fn archive(&mut self, id: ItemId) -> AppResult<Archived> {
        self.services.catalog.archive(&mut self.repository, id)
    }

    pub fn search<'a>(&'a self, keyword: &str) -> impl Iterator<Item = &'a LibraryItem> + 'a {
        self.services.catalog.search_items(&self.repository, keyword)
    }

    pub fn list_items(&self) -> impl Iterator<Item = &LibraryItem> {
        self.repository.items.iter()
    }

    pub fn list_fines(&self) -> &[FineRecord] {
        self.repository.fines.list()
    }
}
