use crate::{
    chapter_table::CHAPTERS,
    constants::{CHAPTERS_WITHOUT_BISMILLAH, CHAPTER_ID_WIDTH, TOTAL_CHAPTERS},
    error::MetadataError,
    locale::DEFAULT_LOCALE,
    validator::identifier_number,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterData {
    pub id: u16,
    pub verses_count: u16,
    pub transliterated_name: String,
    pub translated_name: String,
    pub bismillah_pre: bool,
}

/// Read-only source of chapter metadata.
///
/// Chapter ids are passed as the raw strings callers receive them in. A lookup
/// answers for chapters `1..=chapter_count()`.
pub trait ChapterMetadata {
    fn chapter_data(&self, chapter_id: &str, lang: &str) -> Result<ChapterData, MetadataError>;

    fn verses_count(&self, chapter_id: &str) -> Result<u16, MetadataError> {
        Ok(self.chapter_data(chapter_id, DEFAULT_LOCALE)?.verses_count)
    }

    fn chapter_count(&self) -> u16;
}

/// The chapter table bundled with the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticChapters;

impl StaticChapters {
    pub fn new() -> Self {
        Self
    }
}

impl ChapterMetadata for StaticChapters {
    fn chapter_data(&self, chapter_id: &str, lang: &str) -> Result<ChapterData, MetadataError> {
        let id = identifier_number(chapter_id, TOTAL_CHAPTERS)
            .ok_or_else(|| MetadataError::UnknownChapter(chapter_id.to_string()))?;
        let (verses_count, transliterated, translated) = CHAPTERS[usize::from(id) - 1];

        // Only English translated names are bundled.
        if lang != DEFAULT_LOCALE {
            debug!(
                "No {} translated name for chapter {}, using {}",
                lang, id, DEFAULT_LOCALE
            );
        }

        Ok(ChapterData {
            id,
            verses_count,
            transliterated_name: transliterated.to_string(),
            translated_name: translated.to_string(),
            bismillah_pre: has_bismillah(&id.to_string()),
        })
    }

    fn chapter_count(&self) -> u16 {
        TOTAL_CHAPTERS
    }
}

/// Zero-pads a chapter id to three digits, e.g. `"1"` becomes `"001"`.
pub fn format_chapter_id(chapter_id: &str) -> String {
    format!("{:0>width$}", chapter_id.trim(), width = CHAPTER_ID_WIDTH)
}

pub fn has_bismillah(chapter_id: &str) -> bool {
    !CHAPTERS_WITHOUT_BISMILLAH.contains(&chapter_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_VERSES;

    #[test]
    fn lookup_al_fatihah() {
        let data = StaticChapters.chapter_data("1", "en").unwrap();
        assert_eq!(data.id, 1);
        assert_eq!(data.verses_count, 7);
        assert_eq!(data.transliterated_name, "Al-Fatihah");
        assert_eq!(data.translated_name, "The Opener");
        assert!(!data.bismillah_pre);
    }

    #[test]
    fn lookup_resolves_integral_spellings() {
        let data = StaticChapters.chapter_data("3.0", "en").unwrap();
        assert_eq!(data.id, 3);
        assert_eq!(data.verses_count, 200);
    }

    #[test]
    fn lookup_rejects_unknown_chapters() {
        for raw in ["0", "115", "test", ""] {
            assert_eq!(
                StaticChapters.chapter_data(raw, "en"),
                Err(MetadataError::UnknownChapter(raw.to_string()))
            );
        }
    }

    #[test]
    fn table_covers_every_verse() {
        let total: u32 = CHAPTERS.iter().map(|(count, _, _)| u32::from(*count)).sum();
        assert_eq!(total, TOTAL_VERSES);
        assert_eq!(CHAPTERS.len(), usize::from(TOTAL_CHAPTERS));
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let data = StaticChapters.chapter_data("2", "xx").unwrap();
        assert_eq!(data.translated_name, "The Cow");
    }

    #[test]
    fn chapter_id_formatting() {
        assert_eq!(format_chapter_id("1"), "001");
        assert_eq!(format_chapter_id("36"), "036");
        assert_eq!(format_chapter_id("114"), "114");
    }

    #[test]
    fn bismillah_omitted_for_opener_and_repentance() {
        assert!(!has_bismillah("1"));
        assert!(!has_bismillah("9"));
        assert!(has_bismillah("2"));
        assert!(has_bismillah("114"));
    }
}
