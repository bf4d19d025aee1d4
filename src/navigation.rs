use crate::{
    chapter::ChapterMetadata,
    constants::TOTAL_CHAPTERS,
    validator::{identifier_number, is_valid_chapter_id, is_valid_verse_id},
};
use std::fmt;

pub fn chapter_url(chapter_id: &str) -> String {
    format!("/{}", chapter_id)
}

pub fn surah_info_url(chapter_id: &str) -> String {
    format!("/surah/{}/info", chapter_id)
}

/// A `chapter:verse` reference such as `2:255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseKey {
    pub chapter: u16,
    pub verse: u16,
}

impl VerseKey {
    pub fn new(chapter: u16, verse: u16) -> Self {
        Self { chapter, verse }
    }

    pub fn first_of(chapter: u16) -> Self {
        Self::new(chapter, 1)
    }

    /// Parses and range-checks a verse key; the chapter half is checked first.
    pub fn parse<M>(chapters: &M, raw: &str) -> Option<Self>
    where
        M: ChapterMetadata + ?Sized,
    {
        let (chapter_id, verse_id) = raw.trim().split_once(':')?;

        if !is_valid_chapter_id(chapter_id) || !is_valid_verse_id(chapters, chapter_id, verse_id) {
            return None;
        }

        let chapter = identifier_number(chapter_id, TOTAL_CHAPTERS)?;
        let verse = identifier_number(verse_id, u16::MAX)?;
        Some(Self { chapter, verse })
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter::StaticChapters;

    #[test]
    fn urls() {
        assert_eq!(surah_info_url("18"), "/surah/18/info");
        assert_eq!(chapter_url("18"), "/18");
    }

    #[test]
    fn verse_key_parse_and_display() {
        let key = VerseKey::parse(&StaticChapters, "2:255").unwrap();
        assert_eq!(key, VerseKey::new(2, 255));
        assert_eq!(key.to_string(), "2:255");
        assert_eq!(VerseKey::first_of(36).to_string(), "36:1");
    }

    #[test]
    fn verse_key_rejects_out_of_range_halves() {
        assert_eq!(VerseKey::parse(&StaticChapters, "1:8"), None);
        assert_eq!(VerseKey::parse(&StaticChapters, "115:1"), None);
        assert_eq!(VerseKey::parse(&StaticChapters, "1:0"), None);
        assert_eq!(VerseKey::parse(&StaticChapters, "2-255"), None);
        assert_eq!(VerseKey::parse(&StaticChapters, "abc:1"), None);
    }
}
