//! Range checks for the identifiers that arrive from the command line or a
//! reading position: chapter, verse, juz, page and hizb numbers.
//!
//! Every check is total over `&str`. An identifier is valid when it coerces
//! to an integral number inside a closed range starting at 1. Fractional
//! spellings of an integer (`"3.0"`, `"3e0"`) are accepted; `"1.5"` is not.

use crate::{
    chapter::ChapterMetadata,
    constants::{TOTAL_CHAPTERS, TOTAL_HIZBS, TOTAL_JUZ, TOTAL_PAGES},
};
use regex::Regex;
use std::{fmt, sync::LazyLock};
use tracing::{debug, warn};

static NUMERIC_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric identifier pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Chapter,
    Verse,
    Juz,
    Page,
    Hizb,
}

impl IdentifierKind {
    /// Fixed upper bound, or `None` for verses whose bound depends on the chapter.
    pub fn upper_bound(self) -> Option<u16> {
        match self {
            IdentifierKind::Chapter => Some(TOTAL_CHAPTERS),
            IdentifierKind::Verse => None,
            IdentifierKind::Juz => Some(TOTAL_JUZ),
            IdentifierKind::Page => Some(TOTAL_PAGES),
            IdentifierKind::Hizb => Some(TOTAL_HIZBS),
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdentifierKind::Chapter => "chapter",
            IdentifierKind::Verse => "verse",
            IdentifierKind::Juz => "juz",
            IdentifierKind::Page => "page",
            IdentifierKind::Hizb => "hizb",
        };
        f.write_str(name)
    }
}

/// Coerces a decimal numeric string, ignoring surrounding whitespace.
pub fn parse_identifier(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if !NUMERIC_IDENTIFIER.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// The number `raw` denotes when it is an integer in `[1, upper]`.
pub fn identifier_number(raw: &str, upper: u16) -> Option<u16> {
    let value = parse_identifier(raw)?;
    if value.fract() != 0.0 || value < 1.0 || value > f64::from(upper) {
        return None;
    }
    Some(value as u16)
}

fn is_within(raw: &str, upper: u16) -> bool {
    let valid = identifier_number(raw, upper).is_some();
    if !valid {
        debug!("Rejected identifier {:?} (range 1..={})", raw, upper);
    }
    valid
}

pub fn is_valid_chapter_id(chapter_id: &str) -> bool {
    is_within(chapter_id, TOTAL_CHAPTERS)
}

/// Checks `verse_id` against the verse count of `chapter_id`.
///
/// `chapter_id` must already have passed [`is_valid_chapter_id`]; it is not
/// re-checked here. If the lookup still rejects it, the verse is reported as
/// invalid.
pub fn is_valid_verse_id<M>(chapters: &M, chapter_id: &str, verse_id: &str) -> bool
where
    M: ChapterMetadata + ?Sized,
{
    match chapters.verses_count(chapter_id) {
        Ok(verses_count) => is_within(verse_id, verses_count),
        Err(err) => {
            warn!(
                "Verse {:?} validated against an unchecked chapter id: {}",
                verse_id, err
            );
            false
        }
    }
}

pub fn is_valid_juz_id(juz_id: &str) -> bool {
    is_within(juz_id, TOTAL_JUZ)
}

pub fn is_valid_page_id(page_id: &str) -> bool {
    is_within(page_id, TOTAL_PAGES)
}

pub fn is_valid_hizb_id(hizb_id: &str) -> bool {
    is_within(hizb_id, TOTAL_HIZBS)
}
