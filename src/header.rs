use crate::{
    audio::PlaybackState,
    chapter::{ChapterData, format_chapter_id},
    constants::{BISMILLAH_HEIGHT, HEADER_BODY_HEIGHT, HEADER_HEIGHT, HEADER_MIN_WIDTH},
    locale::{Message, should_use_minimal_layout, translate},
    navigation::VerseKey,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};
use unicode_segmentation::UnicodeSegmentation;

pub const BISMILLAH: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ";

/// Title block for a chapter: names, surah-info link, play control and the
/// bismillah banner.
#[derive(Debug, Clone)]
pub struct ChapterHeader<'a> {
    chapter: &'a ChapterData,
    lang: &'a str,
    page_number: Option<u16>,
    hizb_number: Option<u16>,
    playback: PlaybackState,
}

impl<'a> ChapterHeader<'a> {
    pub fn new(chapter: &'a ChapterData, lang: &'a str) -> Self {
        Self {
            chapter,
            lang,
            page_number: None,
            hizb_number: None,
            playback: PlaybackState::Stopped,
        }
    }

    pub fn page_number(mut self, page_number: Option<u16>) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn hizb_number(mut self, hizb_number: Option<u16>) -> Self {
        self.hizb_number = hizb_number;
        self
    }

    pub fn playback(mut self, playback: PlaybackState) -> Self {
        self.playback = playback;
        self
    }

    pub fn verse_key(&self) -> VerseKey {
        VerseKey::first_of(self.chapter.id)
    }

    pub fn shows_translated_name(&self) -> bool {
        !should_use_minimal_layout(self.lang)
    }

    pub fn shows_bismillah(&self) -> bool {
        self.chapter.bismillah_pre
    }

    fn title(&self) -> String {
        let mut title = format!("│ {}", self.verse_key());
        if let Some(page) = self.page_number {
            title.push_str(&format!(" · {} {}", translate(self.lang, Message::Page), page));
        }
        if let Some(hizb) = self.hizb_number {
            title.push_str(&format!(" · {} {}", translate(self.lang, Message::Hizb), hizb));
        }
        title.push(' ');
        title
    }

    fn left_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::with_capacity(HEADER_BODY_HEIGHT as usize);

        if self.shows_translated_name() {
            lines.push(Line::from(Span::styled(
                fit_to_width(&self.chapter.translated_name, width),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        let name = format!(
            "{} {}",
            translate(self.lang, Message::Surah),
            self.chapter.transliterated_name
        );
        lines.push(Line::from(Span::styled(
            fit_to_width(&name, width),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));

        lines.push(Line::from(vec![
            Span::styled("[i] ", Style::default().fg(Color::Yellow)),
            Span::styled(
                translate(self.lang, Message::SurahInfo),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));

        lines
    }

    fn right_lines(&self) -> Vec<Line<'static>> {
        let control = if self.playback.is_playing(self.chapter.id) {
            format!("❚❚ {}", translate(self.lang, Message::PauseAudio))
        } else {
            format!("▶ {}", translate(self.lang, Message::PlayAudio))
        };

        vec![
            Line::from(Span::styled(
                format_chapter_id(&self.chapter.id.to_string()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{} {}",
                    self.chapter.verses_count,
                    translate(self.lang, Message::Verses)
                ),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(vec![
                Span::styled("[p] ", Style::default().fg(Color::Yellow)),
                Span::styled(control, Style::default().fg(Color::Green)),
            ]),
        ]
    }
}

impl Widget for ChapterHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < HEADER_MIN_WIDTH || area.height < HEADER_HEIGHT {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(self.title())
            .title_style(Style::default().fg(Color::LightBlue))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_BODY_HEIGHT),
                Constraint::Length(BISMILLAH_HEIGHT),
            ])
            .split(inner);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0]);

        Paragraph::new(self.left_lines(columns[0].width as usize)).render(columns[0], buf);
        Paragraph::new(self.right_lines())
            .alignment(Alignment::Right)
            .render(columns[1], buf);

        if self.shows_bismillah() {
            Paragraph::new(Line::from(Span::styled(
                BISMILLAH,
                Style::default().fg(Color::Yellow),
            )))
            .alignment(Alignment::Center)
            .render(rows[1], buf);
        }
    }
}

/// Truncates to `width` graphemes, marking the cut with an ellipsis.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.graphemes(true).count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let kept: String = text.graphemes(true).take(width - 1).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_to_width_truncates_by_grapheme() {
        assert_eq!(fit_to_width("The Cow", 10), "The Cow");
        assert_eq!(fit_to_width("The Rocky Tract", 8), "The Roc…");
        assert_eq!(fit_to_width("abc", 0), "");
        assert_eq!(fit_to_width("e\u{301}x", 1), "…");
    }
}
