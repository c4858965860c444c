//! Data models for LibraNet

pub mod fine;
pub mod item;

// Re-export commonly used types
pub use fine::{fine_amount, FineRecord, FINE_RATE_PER_DAY};
pub use item::{ActiveLoan, ItemId, ItemKind, LibraryItem, MediaType, SeedItem};
