use mushaf::{ChapterHeader, ChapterMetadata, PlaybackState, StaticChapters};
use ratatui::{Terminal, backend::TestBackend};

fn render_header(
    chapter_id: &str,
    lang: &str,
    width: u16,
    height: u16,
    build: impl FnOnce(ChapterHeader) -> ChapterHeader,
) -> Vec<String> {
    let chapter = StaticChapters
        .chapter_data(chapter_id, lang)
        .expect("chapter exists");
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");

    terminal
        .draw(|f| {
            let header = build(ChapterHeader::new(&chapter, lang));
            f.render_widget(header, f.area());
        })
        .expect("draw header");

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn screen_text(rows: &[String]) -> String {
    rows.join("\n")
}

#[test]
fn test_header_shows_names_and_controls() {
    let text = screen_text(&render_header("1", "en", 60, 6, |h| h));

    assert!(text.contains("The Opener"));
    assert!(text.contains("Surah Al-Fatihah"));
    assert!(text.contains("Surah Info"));
    assert!(text.contains("001"));
    assert!(text.contains("7 Verses"));
    assert!(text.contains("Play Audio"));
    assert!(text.contains("1:1"));
}

#[test]
fn test_bismillah_banner_presence() {
    let opener = screen_text(&render_header("1", "en", 60, 6, |h| h));
    let cow = screen_text(&render_header("2", "en", 60, 6, |h| h));
    let repentance = screen_text(&render_header("9", "en", 60, 6, |h| h));

    assert!(!opener.contains('ب'));
    assert!(cow.contains('ب'));
    assert!(!repentance.contains('ب'));
}

#[test]
fn test_minimal_layout_hides_translated_name() {
    let english = screen_text(&render_header("2", "en", 60, 6, |h| h));
    let arabic = screen_text(&render_header("2", "ar", 60, 6, |h| h));

    assert!(english.contains("The Cow"));
    assert!(!arabic.contains("The Cow"));
    assert!(arabic.contains("Al-Baqarah"));
}

#[test]
fn test_play_control_reflects_playback() {
    let playing = screen_text(&render_header("36", "en", 60, 6, |h| {
        h.playback(PlaybackState::Playing { chapter: 36 })
    }));
    let other = screen_text(&render_header("36", "en", 60, 6, |h| {
        h.playback(PlaybackState::Playing { chapter: 2 })
    }));
    let paused = screen_text(&render_header("36", "en", 60, 6, |h| {
        h.playback(PlaybackState::Paused { chapter: 36 })
    }));

    assert!(playing.contains("Pause Audio"));
    assert!(other.contains("Play Audio"));
    assert!(paused.contains("Play Audio"));
}

#[test]
fn test_title_carries_position() {
    let rows = render_header("2", "en", 60, 6, |h| h.page_number(Some(2)).hizb_number(Some(1)));

    assert!(rows[0].contains("2:1"));
    assert!(rows[0].contains("Page 2"));
    assert!(rows[0].contains("Hizb 1"));
}

#[test]
fn test_header_skips_render_when_too_small() {
    let rows = render_header("2", "en", 60, 3, |h| h);
    assert!(rows.iter().all(|row| row.trim().is_empty()));
}

#[test]
fn test_header_flags() {
    let chapter = StaticChapters.chapter_data("9", "ur").unwrap();
    let header = ChapterHeader::new(&chapter, "ur");

    assert!(!header.shows_bismillah());
    assert!(!header.shows_translated_name());
    assert_eq!(header.verse_key().to_string(), "9:1");
}

#[test]
fn test_header_uses_resolved_chapter_for_alternate_spellings() {
    for id in ["9.0", "09"] {
        let text = screen_text(&render_header(id, "en", 60, 6, |h| h));
        assert!(!text.contains('ب'), "banner drawn for {:?}", id);
        assert!(text.contains("009"), "chapter number for {:?}", id);
        assert!(!text.contains("9.0"), "raw id shown for {:?}", id);
    }

    for id in ["01", "1.0"] {
        let text = screen_text(&render_header(id, "en", 60, 6, |h| h));
        assert!(!text.contains('ب'), "banner drawn for {:?}", id);
        assert!(text.contains("001"), "chapter number for {:?}", id);
    }

    let text = screen_text(&render_header("2.0", "en", 60, 6, |h| h));
    assert!(text.contains('ب'));
    assert!(text.contains("002"));
}
