//! Library item (catalog entry) model and related types.
//!
//! Items come in a closed set of variants. Lending state is shared by all of
//! them; the variant payload carries the type-specific fields.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog identifier of an item
pub type ItemId = u32;

/// Media type tag of an item variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Book,
    AudioBook,
    EMagazine,
}

impl MediaType {
    /// Display name of the variant, also matched by search
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Book => "Book",
            MediaType::AudioBook => "AudioBook",
            MediaType::EMagazine => "EMagazine",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemKind {
    Book { pages: u32 },
    AudioBook { hours: f64 },
    EMagazine { issue: String, archived: bool },
}

impl ItemKind {
    pub fn media_type(&self) -> MediaType {
        match self {
            ItemKind::Book { .. } => MediaType::Book,
            ItemKind::AudioBook { .. } => MediaType::AudioBook,
            ItemKind::EMagazine { .. } => MediaType::EMagazine,
        }
    }
}

/// Borrower and due date of an item currently lent out.
///
/// Both values live together so an item either has both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLoan {
    pub borrower: String,
    pub due_date: DateTime<Utc>,
}

/// Full item model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    id: ItemId,
    title: String,
    author: String,
    loan: Option<ActiveLoan>,
    kind: ItemKind,
}

impl LibraryItem {
    pub fn new(id: ItemId, title: impl Into<String>, author: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            loan: None,
            kind,
        }
    }

    pub fn book(id: ItemId, title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self::new(id, title, author, ItemKind::Book { pages })
    }

    pub fn audio_book(id: ItemId, title: impl Into<String>, author: impl Into<String>, hours: f64) -> Self {
        Self::new(id, title, author, ItemKind::AudioBook { hours })
    }

    pub fn e_magazine(
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
        issue: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            title,
            author,
            ItemKind::EMagazine {
                issue: issue.into(),
                archived: false,
            },
        )
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn media_type(&self) -> MediaType {
        self.kind.media_type()
    }

    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    pub fn loan(&self) -> Option<&ActiveLoan> {
        self.loan.as_ref()
    }

    pub fn borrower(&self) -> Option<&str> {
        self.loan.as_ref().map(|l| l.borrower.as_str())
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.loan.as_ref().map(|l| l.due_date)
    }

    /// Only meaningful for e-magazines; other variants are never archived
    pub fn is_archived(&self) -> bool {
        matches!(self.kind, ItemKind::EMagazine { archived: true, .. })
    }

    pub(crate) fn lend(&mut self, loan: ActiveLoan) {
        self.loan = Some(loan);
    }

    pub(crate) fn take_loan(&mut self) -> Option<ActiveLoan> {
        self.loan.take()
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ItemKind {
        &mut self.kind
    }
}

impl fmt::Display for LibraryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[id={}, title='{}', author='{}', status=",
            self.media_type(),
            self.id,
            self.title,
            self.author
        )?;
        match &self.loan {
            None => f.write_str("Available]")?,
            Some(loan) => write!(
                f,
                "Borrowed by {} until {}]",
                loan.borrower,
                loan.due_date.format("%Y-%m-%d %H:%M")
            )?,
        }
        match &self.kind {
            ItemKind::Book { pages } => write!(f, " (pages={})", pages),
            ItemKind::AudioBook { hours } => write!(f, " (hours={:?})", hours),
            ItemKind::EMagazine { issue, archived } => {
                write!(f, " (issue={}, archived={})", issue, archived)
            }
        }
    }
}

/// Seed entry used to populate the catalog at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SeedItem {
    Book {
        id: ItemId,
        title: String,
        author: String,
        pages: u32,
    },
    AudioBook {
        id: ItemId,
        title: String,
        author: String,
        hours: f64,
    },
    EMagazine {
        id: ItemId,
        title: String,
        author: String,
        issue: String,
    },
}

impl SeedItem {
    pub fn id(&self) -> ItemId {
        match self {
            SeedItem::Book { id, .. } | SeedItem::AudioBook { id, .. } | SeedItem::EMagazine { id, .. } => *id,
        }
    }
}

impl From<SeedItem> for LibraryItem {
    fn from(seed: SeedItem) -> Self {
        match seed {
            SeedItem::Book { id, title, author, pages } => LibraryItem::book(id, title, author, pages),
            SeedItem::AudioBook { id, title, author, hours } => {
                LibraryItem::audio_book(id, title, author, hours)
            }
            SeedItem::EMagazine { id, title, author, issue } => {
                LibraryItem::e_magazine(id, title, author, issue)
            }
        }
    }
}
