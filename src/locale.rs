pub const DEFAULT_LOCALE: &str = "en";

// Locales whose translated chapter name would only repeat the Arabic one.
const MINIMAL_LAYOUT_LOCALES: [&str; 3] = ["ar", "fa", "ur"];

pub fn should_use_minimal_layout(lang: &str) -> bool {
    MINIMAL_LAYOUT_LOCALES.contains(&lang)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Surah,
    SurahInfo,
    PlayAudio,
    PauseAudio,
    Verses,
    Page,
    Hizb,
}

pub fn translate(lang: &str, message: Message) -> &'static str {
    use Message::*;

    match (lang, message) {
        ("ar", Surah) => "سورة",
        ("ar", SurahInfo) => "معلومات السورة",
        ("ar", PlayAudio) => "تشغيل الصوت",
        ("ar", PauseAudio) => "إيقاف مؤقت",
        ("ar", Verses) => "آيات",
        ("ar", Page) => "صفحة",
        ("ar", Hizb) => "حزب",

        ("ur", Surah) => "سورہ",
        ("ur", SurahInfo) => "سورہ کی معلومات",
        ("ur", PlayAudio) => "آڈیو چلائیں",
        ("ur", PauseAudio) => "روکیں",
        ("ur", Verses) => "آیات",
        ("ur", Page) => "صفحہ",
        ("ur", Hizb) => "حزب",

        ("fr", Surah) => "Sourate",
        ("fr", SurahInfo) => "Infos sur la sourate",
        ("fr", PlayAudio) => "Écouter",
        ("fr", PauseAudio) => "Pause",
        ("fr", Verses) => "Versets",
        ("fr", Page) => "Page",
        ("fr", Hizb) => "Hizb",

        ("id", Surah) => "Surah",
        ("id", SurahInfo) => "Info Surah",
        ("id", PlayAudio) => "Putar Audio",
        ("id", PauseAudio) => "Jeda",
        ("id", Verses) => "Ayat",
        ("id", Page) => "Halaman",
        ("id", Hizb) => "Hizb",

        (_, Surah) => "Surah",
        (_, SurahInfo) => "Surah Info",
        (_, PlayAudio) => "Play Audio",
        (_, PauseAudio) => "Pause Audio",
        (_, Verses) => "Verses",
        (_, Page) => "Page",
        (_, Hizb) => "Hizb",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_layout_locales() {
        assert!(should_use_minimal_layout("ar"));
        assert!(should_use_minimal_layout("ur"));
        assert!(!should_use_minimal_layout("en"));
        assert!(!should_use_minimal_layout("id"));
    }

    #[test]
    fn unknown_locale_uses_english() {
        assert_eq!(translate("xx", Message::SurahInfo), "Surah Info");
        assert_eq!(translate("fr", Message::Surah), "Sourate");
    }
}
