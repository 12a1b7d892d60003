//! Daily Proverbs reading: which chapters to show today and their verses.

pub mod parser;
pub mod selector;

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::reading::MISSING_RESOURCE_MESSAGE;
use crate::services::source::VerseSource;

pub use parser::{load_verses, parse_line, parse_verses};
pub use selector::{days_in_month, select_chapters};

/// A single verse with its reference and text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    /// Chapter number (0 only for the missing-resource sentinel).
    pub chapter: u32,
    /// Verse number within the chapter (0 only for the sentinel).
    pub verse: u32,
    /// Verse text, whitespace normalized.
    pub text: String,
}

impl Verse {
    /// Create a verse.
    pub fn new(chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// The sentinel returned in place of verses when the resource is unreadable.
    pub fn missing_resource() -> Self {
        Self::new(0, 0, MISSING_RESOURCE_MESSAGE)
    }

    /// Whether this is the missing-resource sentinel.
    pub const fn is_missing_resource(&self) -> bool {
        self.chapter == 0 && self.verse == 0
    }

    /// Format the reference (e.g., "18:1").
    pub fn reference(&self) -> String {
        format!("{}:{}", self.chapter, self.verse)
    }
}

/// Everything shown for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReading {
    /// The day the reading was selected for.
    pub date: NaiveDate,
    /// Selected chapters, ascending.
    pub chapters: Vec<u32>,
    /// Matching verses in source order, or the single sentinel verse.
    pub verses: Vec<Verse>,
}

impl DailyReading {
    /// Whether the resource could not be read.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self.verses.as_slice(), [v] if v.is_missing_resource())
    }
}

/// Select today's chapters and load their verses from `source`.
pub fn todays_verses<S: VerseSource + ?Sized>(source: &S, today: NaiveDate) -> DailyReading {
    let chapters = select_chapters(today);
    let wanted: HashSet<u32> = chapters.iter().copied().collect();
    let verses = load_verses(source, &wanted);

    DailyReading {
        date: today,
        chapters,
        verses,
    }
}
