//! Catalog service: lookup, search and variant-specific capabilities

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    clock::Clock,
    error::{AppError, AppResult},
    models::item::{ItemId, ItemKind, LibraryItem, MediaType},
    repository::Repository,
};

/// Playback notification emitted by an audiobook
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    pub item_id: ItemId,
    pub title: String,
    pub author: String,
    pub hours: f64,
}

impl fmt::Display for Playback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Playing audiobook '{}' by {} (approx. {:?}h)",
            self.title, self.author, self.hours
        )
    }
}

/// Outcome of archiving an e-magazine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archived {
    pub item_id: ItemId,
    pub title: String,
    pub issue: String,
    pub at: DateTime<Utc>,
    /// The magazine was archived before this call
    pub already_archived: bool,
}

impl fmt::Display for Archived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.already_archived {
            write!(f, "E-Magazine '{}' issue #{} is already archived", self.title, self.issue)
        } else {
            write!(
                f,
                "Archived E-Magazine '{}' issue #{} at {}",
                self.title,
                self.issue,
                self.at.format("%Y-%m-%d %H:%M")
            )
        }
    }
}

#[derive(Clone)]
pub struct CatalogService {
    clock: Arc<dyn Clock>,
}

impl CatalogService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Get item by ID
    pub fn get_item<'a>(&self, repository: &'a Repository, id: ItemId) -> AppResult<&'a LibraryItem> {
        tracing::debug!("Looking up item id={}", id);
        repository.items.get_by_id(id)
    }

    /// Items whose type name or title contains `keyword`, ignoring case, in id order
    pub fn search_items<'a>(
        &self,
        repository: &'a Repository,
        keyword: &str,
    ) -> impl Iterator<Item = &'a LibraryItem> + 'a {
        let needle = keyword.trim().to_lowercase();
        tracing::debug!("Searching catalog for '{}'", needle);
        repository.items.iter().filter(move |item| {
            item.media_type().as_str().to_lowercase().contains(&needle)
                || item.title().to_lowercase().contains(&needle)
        })
    }

    /// Play an audiobook; lending state is left untouched
    pub fn play(&self, repository: &Repository, id: ItemId) -> AppResult<Playback> {
        let item = repository.items.get_by_id(id)?;
        let ItemKind::AudioBook { hours } = item.kind() else {
            return Err(wrong_variant(id, item.media_type(), MediaType::AudioBook));
        };

        let playback = Playback {
            item_id: id,
            title: item.title().to_string(),
            author: item.author().to_string(),
            hours: *hours,
        };
        tracing::info!("{}", playback);
        Ok(playback)
    }

    /// Archive an e-magazine. Archiving twice is allowed and changes nothing.
    pub fn archive(&self, repository: &mut Repository, id: ItemId) -> AppResult<Archived> {
        let at = self.clock.now();
        let item = repository.items.get_by_id_mut(id)?;
        let title = item.title().to_string();
        let actual = item.media_type();

        let ItemKind::EMagazine { issue, archived } = item.kind_mut() else {
            return Err(wrong_variant(id, actual, MediaType::EMagazine));
        };

        let already_archived = *archived;
        *archived = true;

        let outcome = Archived {
            item_id: id,
            title,
            issue: issue.clone(),
            at,
            already_archived,
        };
        tracing::info!("{}", outcome);
        Ok(outcome)
    }
}

fn wrong_variant(id: ItemId, actual: MediaType, expected: MediaType) -> AppError {
    tracing::warn!("Item id={} is a {}, expected {}", id, actual, expected);
    AppError::WrongVariant { id, expected, actual }
}
