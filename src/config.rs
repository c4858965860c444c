//! Configuration management for the LibraNet desk

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;

use crate::{error::AppResult, models::item::SeedItem};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoansConfig {
    /// Loan length offered when the operator leaves the day count empty
    pub default_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    pub items: Vec<SeedItem>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub loans: LoansConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. LIBRANET_LOGGING__LEVEL=debug)
            .add_source(
                Environment::with_prefix("LIBRANET")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an in-memory TOML document
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LoansConfig {
    fn default() -> Self {
        Self { default_days: 14 }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            items: default_catalog(),
        }
    }
}

fn book(id: u32, title: &str, author: &str, pages: u32) -> SeedItem {
    SeedItem::Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        pages,
    }
}

fn audio_book(id: u32, title: &str, author: &str, hours: f64) -> SeedItem {
    SeedItem::AudioBook {
        id,
        title: title.to_string(),
        author: author.to_string(),
        hours,
    }
}

fn e_magazine(id: u32, title: &str, author: &str, issue: &str) -> SeedItem {
    SeedItem::EMagazine {
        id,
        title: title.to_string(),
        author: author.to_string(),
        issue: issue.to_string(),
    }
}

/// Catalog used when no items are configured
pub fn default_catalog() -> Vec<SeedItem> {
    vec![
        book(1, "Clean Code", "Robert C. Martin", 464),
        audio_book(2, "Effective Java - Audio", "Joshua Bloch", 11.5),
        e_magazine(3, "Nature Monthly", "Editorial Team", "2025"),
        book(4, "Half Girlfriend", "Chetan Bhagat", 260),
        book(5, "Wings of Fire", "A.P.J. Abdul Kalam", 180),
        book(6, "Malgudi Days", "R.K. Narayan", 245),
        audio_book(7, "Panchatantra Ki Kahaniyaan - Audio", "Vishnu Sharma", 5.75),
        e_magazine(8, "Champak Monthly", "Delhi Press", "202509"),
        e_magazine(9, "India Today", "Editorial Team", "202509"),
    ]
}
