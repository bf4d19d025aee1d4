use crate::audio::{AudioControl, PlaybackState, SilentPlayer};
use crate::chapter::{ChapterData, ChapterMetadata};
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::error::{IdentifierError, UiError};
use crate::header::ChapterHeader;
use crate::locale::{Message, translate};
use crate::navigation::{VerseKey, chapter_url, surah_info_url};
use crate::validator::{
    IdentifierKind, identifier_number, is_valid_chapter_id, is_valid_hizb_id, is_valid_page_id,
    is_valid_verse_id,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph,
        Wrap,
    },
};
use std::io;
use tracing::{debug, warn};

/// Where the reader opens: a chapter with an optional verse and print position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    pub chapter: u16,
    pub verse: Option<u16>,
    pub page: Option<u16>,
    pub hizb: Option<u16>,
    pub lang: String,
}

impl ReaderOptions {
    /// Builds options from raw identifiers, rejecting any that are out of range.
    /// The chapter is checked before the verse that depends on it.
    pub fn from_identifiers<M>(
        chapters: &M,
        chapter: &str,
        verse: Option<&str>,
        page: Option<&str>,
        hizb: Option<&str>,
        lang: &str,
    ) -> Result<Self, IdentifierError>
    where
        M: ChapterMetadata + ?Sized,
    {
        if !is_valid_chapter_id(chapter) {
            return Err(IdentifierError::new(IdentifierKind::Chapter, chapter));
        }
        let chapter_number = Self::number(IdentifierKind::Chapter, chapter)?;

        let verse = match verse {
            Some(raw) if is_valid_verse_id(chapters, chapter, raw) => {
                Some(Self::number(IdentifierKind::Verse, raw)?)
            }
            Some(raw) => return Err(IdentifierError::new(IdentifierKind::Verse, raw)),
            None => None,
        };

        let page = match page {
            Some(raw) if is_valid_page_id(raw) => Some(Self::number(IdentifierKind::Page, raw)?),
            Some(raw) => return Err(IdentifierError::new(IdentifierKind::Page, raw)),
            None => None,
        };

        let hizb = match hizb {
            Some(raw) if is_valid_hizb_id(raw) => Some(Self::number(IdentifierKind::Hizb, raw)?),
            Some(raw) => return Err(IdentifierError::new(IdentifierKind::Hizb, raw)),
            None => None,
        };

        Ok(Self {
            chapter: chapter_number,
            verse,
            page,
            hizb,
            lang: lang.to_string(),
        })
    }

    fn number(kind: IdentifierKind, raw: &str) -> Result<u16, IdentifierError> {
        identifier_number(raw, kind.upper_bound().unwrap_or(u16::MAX))
            .ok_or_else(|| IdentifierError::new(kind, raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FloatingPane {
    None,
    Info,
    Contents { selected_index: usize },
}

#[derive(Debug)]
struct NavigationState {
    current_chapter: u16,
    start_verse: Option<u16>,
    page_number: Option<u16>,
    hizb_number: Option<u16>,
}

impl NavigationState {
    fn from_options(options: &ReaderOptions) -> Self {
        Self {
            current_chapter: options.chapter,
            start_verse: options.verse,
            page_number: options.page,
            hizb_number: options.hizb,
        }
    }

    // The requested position only describes the chapter the reader opened on.
    fn move_to(&mut self, chapter: u16) {
        self.current_chapter = chapter;
        self.start_verse = None;
        self.page_number = None;
        self.hizb_number = None;
    }
}

pub struct App {
    chapters: Box<dyn ChapterMetadata>,
    player: Box<dyn AudioControl>,
    nav_state: NavigationState,
    lang: String,
    floating_pane: FloatingPane,
    terminal: Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
}

impl App {
    pub fn new(chapters: Box<dyn ChapterMetadata>, options: ReaderOptions) -> Self {
        Self {
            chapters,
            player: Box::new(SilentPlayer::new()),
            nav_state: NavigationState::from_options(&options),
            lang: options.lang,
            floating_pane: FloatingPane::None,
            terminal: None,
        }
    }

    pub fn with_player(mut self, player: Box<dyn AudioControl>) -> Self {
        self.player = player;
        self
    }

    pub fn current_chapter(&self) -> u16 {
        self.nav_state.current_chapter
    }

    pub fn start_verse(&self) -> Option<VerseKey> {
        self.nav_state
            .start_verse
            .map(|verse| VerseKey::new(self.nav_state.current_chapter, verse))
    }

    pub fn floating_pane(&self) -> &FloatingPane {
        &self.floating_pane
    }

    pub fn playback(&self) -> PlaybackState {
        self.player.state()
    }

    pub fn run(&mut self) -> Result<(), UiError> {
        // Fail before touching the terminal if the opening chapter is unknown.
        self.chapters
            .chapter_data(&self.nav_state.current_chapter.to_string(), &self.lang)?;

        if let Err(err) = self.setup_terminal() {
            let _ = disable_raw_mode();
            return Err(err);
        }

        with_restore(self, Self::event_loop, Self::cleanup_terminal)
    }

    fn event_loop(&mut self) -> Result<(), UiError> {
        loop {
            if let Some(terminal) = self.terminal.as_mut() {
                let chapters = self.chapters.as_ref();
                let nav_state = &self.nav_state;
                let lang = self.lang.as_str();
                let playback = self.player.state();
                let floating_pane = &self.floating_pane;

                terminal.draw(|f| {
                    Self::draw_ui(f, chapters, nav_state, lang, playback, floating_pane);
                })?;
            }

            if let Event::Key(key) = event::read()? {
                if !self.handle_key(key) {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Applies one key press. Returns `false` when the reader should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }

        if self.handle_floating_pane_input(key) {
            return true;
        }

        match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Right | KeyCode::Char('l') => self.next_chapter(),
            KeyCode::Left | KeyCode::Char('h') => self.prev_chapter(),
            KeyCode::Home | KeyCode::Char('g') => self.go_to_chapter(1),
            KeyCode::End | KeyCode::Char('G') => {
                self.go_to_chapter(self.chapters.chapter_count())
            }
            KeyCode::Char('i') => self.floating_pane = FloatingPane::Info,
            KeyCode::Char('-') => self.open_contents_pane(),
            KeyCode::Char('p') => self.player.toggle_chapter(self.nav_state.current_chapter),
            _ => {}
        }
        true
    }

    fn setup_terminal(&mut self) -> Result<(), UiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);
        Ok(())
    }

    fn cleanup_terminal(&mut self) -> Result<(), UiError> {
        if let Some(mut terminal) = self.terminal.take() {
            disable_raw_mode()?;
            execute!(
                terminal.backend_mut(),
                LeaveAlternateScreen,
                DisableMouseCapture
            )?;
            terminal.show_cursor()?;
        }
        Ok(())
    }

    /// Draws one full reader frame.
    pub fn draw(&self, f: &mut Frame) {
        Self::draw_ui(
            f,
            self.chapters.as_ref(),
            &self.nav_state,
            &self.lang,
            self.player.state(),
            &self.floating_pane,
        );
    }

    fn draw_ui(
        f: &mut Frame,
        chapters: &dyn ChapterMetadata,
        nav_state: &NavigationState,
        lang: &str,
        playback: PlaybackState,
        floating_pane: &FloatingPane,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        let chapter_id = nav_state.current_chapter.to_string();
        match chapters.chapter_data(&chapter_id, lang) {
            Ok(chapter) => {
                let header = ChapterHeader::new(&chapter, lang)
                    .page_number(nav_state.page_number)
                    .hizb_number(nav_state.hizb_number)
                    .playback(playback);
                f.render_widget(header, chunks[0]);

                let mut lines = Vec::new();
                if let Some(verse) = nav_state.start_verse {
                    lines.push(Line::from(vec![
                        Span::styled("Starting at ", Style::default().fg(Color::DarkGray)),
                        Span::styled(
                            VerseKey::new(chapter.id, verse).to_string(),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]));
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", translate(lang, Message::Verses)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        chapter.verses_count.to_string(),
                        Style::default().fg(Color::White),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", translate(lang, Message::SurahInfo)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        surah_info_url(&chapter_id),
                        Style::default().fg(Color::LightBlue),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::styled("Link: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(chapter_url(&chapter_id), Style::default().fg(Color::LightBlue)),
                ]));

                let content = Paragraph::new(lines)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(Color::Blue))
                            .padding(Padding::new(2, 1, 0, 0)),
                    )
                    .wrap(Wrap { trim: false });
                f.render_widget(content, chunks[1]);

                if *floating_pane == FloatingPane::Info {
                    Self::render_info_pane(f, &chapter_id, &chapter, lang);
                }
            }
            Err(err) => {
                warn!("Cannot render chapter {}: {}", chapter_id, err);
                let message = Paragraph::new(err.to_string())
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center);
                f.render_widget(message, chunks[1]);
            }
        }

        let chapter_count = chapters.chapter_count();
        let chapter_progress = if chapter_count > 0 {
            (f64::from(nav_state.current_chapter) / f64::from(chapter_count)) * 100.0
        } else {
            0.0
        };

        let footer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(2)])
            .split(chunks[2]);

        let progress_label = format!(
            "{} {}/{}",
            translate(lang, Message::Surah),
            nav_state.current_chapter,
            chapter_count
        );
        let progress = Gauge::default()
            .block(Block::default())
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .percent(chapter_progress.min(100.0) as u16)
            .label(progress_label);
        f.render_widget(progress, footer_chunks[0]);

        let help_text = vec![Line::from(vec![
            Span::styled(" q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(":quit ", Style::default().fg(Color::DarkGray)),
            Span::styled("←→", Style::default().fg(Color::Green)),
            Span::styled(":surah ", Style::default().fg(Color::DarkGray)),
            Span::styled("i", Style::default().fg(Color::Yellow)),
            Span::styled(":info ", Style::default().fg(Color::DarkGray)),
            Span::styled("p", Style::default().fg(Color::Magenta)),
            Span::styled(":audio ", Style::default().fg(Color::DarkGray)),
            Span::styled("-", Style::default().fg(Color::Blue)),
            Span::styled(":contents", Style::default().fg(Color::DarkGray)),
        ])];
        let footer = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Center);
        f.render_widget(footer, footer_chunks[1]);

        if let FloatingPane::Contents { selected_index } = floating_pane {
            Self::render_contents_pane(f, chapters, lang, *selected_index);
        }
    }

    fn next_chapter(&mut self) {
        if self.nav_state.current_chapter < self.chapters.chapter_count() {
            self.go_to_chapter(self.nav_state.current_chapter + 1);
        }
    }

    fn prev_chapter(&mut self) {
        if self.nav_state.current_chapter > 1 {
            self.go_to_chapter(self.nav_state.current_chapter - 1);
        }
    }

    fn go_to_chapter(&mut self, chapter: u16) {
        if chapter == 0 || chapter > self.chapters.chapter_count() {
            return;
        }
        if chapter != self.nav_state.current_chapter {
            debug!("Moving to chapter {}", chapter);
            self.nav_state.move_to(chapter);
        }
    }

    fn open_contents_pane(&mut self) {
        self.floating_pane = FloatingPane::Contents {
            selected_index: usize::from(self.nav_state.current_chapter.saturating_sub(1)),
        };
    }

    fn handle_floating_pane_input(&mut self, key: KeyEvent) -> bool {
        let floating_pane = std::mem::replace(&mut self.floating_pane, FloatingPane::None);

        match floating_pane {
            FloatingPane::None => false,
            FloatingPane::Info => {
                match key.code {
                    KeyCode::Esc | KeyCode::Char('i') | KeyCode::Enter => {}
                    _ => self.floating_pane = FloatingPane::Info,
                }
                true
            }
            FloatingPane::Contents { mut selected_index } => {
                match key.code {
                    KeyCode::Esc => {}
                    KeyCode::Up | KeyCode::Char('k') => {
                        selected_index = selected_index.saturating_sub(1);
                        self.floating_pane = FloatingPane::Contents { selected_index };
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        let last = usize::from(self.chapters.chapter_count().saturating_sub(1));
                        if selected_index < last {
                            selected_index += 1;
                        }
                        self.floating_pane = FloatingPane::Contents { selected_index };
                    }
                    KeyCode::Enter => match u16::try_from(selected_index + 1) {
                        Ok(chapter) => self.go_to_chapter(chapter),
                        Err(_) => warn!("Contents selection out of range: {}", selected_index),
                    },
                    _ => self.floating_pane = FloatingPane::Contents { selected_index },
                }
                true
            }
        }
    }

    fn popup_area(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
        let popup_width = area.width.saturating_mul(width_percent).saturating_div(100);
        let popup_height = area.height.saturating_mul(height_percent).saturating_div(100);
        let x = area.width.saturating_sub(popup_width).saturating_div(2);
        let y = area.height.saturating_sub(popup_height).saturating_div(2);

        Rect {
            x,
            y,
            width: popup_width,
            height: popup_height,
        }
    }

    fn render_info_pane(
        f: &mut Frame,
        chapter_id: &str,
        chapter: &ChapterData,
        lang: &str,
    ) {
        let popup_area = Self::popup_area(f.area(), 60, 50);
        f.render_widget(Clear, popup_area);

        let label = Style::default().fg(Color::DarkGray);
        let value = Style::default().fg(Color::White);
        let lines = vec![
            Line::from(Span::styled(
                format!("{} {}", translate(lang, Message::Surah), chapter.transliterated_name),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                chapter.translated_name.clone(),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{}: ", translate(lang, Message::Verses)), label),
                Span::styled(chapter.verses_count.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Bismillah: ", label),
                Span::styled(if chapter.bismillah_pre { "yes" } else { "no" }, value),
            ]),
            Line::from(vec![
                Span::styled("URL: ", label),
                Span::styled(surah_info_url(chapter_id), Style::default().fg(Color::LightBlue)),
            ]),
        ];

        let info = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(format!("ⓘ {}", translate(lang, Message::SurahInfo)))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(info, popup_area);
    }

    fn render_contents_pane(
        f: &mut Frame,
        chapters: &dyn ChapterMetadata,
        lang: &str,
        selected_index: usize,
    ) {
        let popup_area = Self::popup_area(f.area(), 60, 60);
        f.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(popup_area);

        let items: Vec<ListItem> = (1..=chapters.chapter_count())
            .filter_map(|id| {
                chapters.chapter_data(&id.to_string(), lang).ok().map(|chapter| {
                    let entry = format!(
                        "{:>3}: {} ({})",
                        id, chapter.transliterated_name, chapter.translated_name
                    );
                    ListItem::new(entry)
                })
            })
            .collect();

        let contents_list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Blue))
                    .title(format!("📑 Surahs ({})", chapters.chapter_count()))
                    .style(Style::default().fg(Color::Blue)),
            )
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(selected_index));

        f.render_stateful_widget(contents_list, chunks[0], &mut list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Blue)),
            Span::raw(" navigate  "),
            Span::styled("Enter", Style::default().fg(Color::Blue)),
            Span::raw(" select  "),
            Span::styled("Esc", Style::default().fg(Color::Blue)),
            Span::raw(" close"),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(help, chunks[1]);
    }
}

/// Runs `body`, then `restore` whether or not `body` failed. The body's error
/// takes precedence over the restore error.
fn with_restore<S, T, E>(
    state: &mut S,
    body: impl FnOnce(&mut S) -> Result<T, E>,
    restore: impl FnOnce(&mut S) -> Result<(), E>,
) -> Result<T, E> {
    let result = body(state);
    let restored = restore(state);
    let value = result?;
    restored?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Session {
        restored: bool,
    }

    #[test]
    fn restore_runs_after_failed_body() {
        let mut session = Session::default();
        let result: Result<(), &str> = with_restore(
            &mut session,
            |_| Err("draw failed"),
            |s| {
                s.restored = true;
                Ok(())
            },
        );

        assert_eq!(result, Err("draw failed"));
        assert!(session.restored);
    }

    #[test]
    fn restore_error_surfaces_after_successful_body() {
        let mut session = Session::default();
        let result: Result<u8, &str> =
            with_restore(&mut session, |_| Ok(7), |_| Err("leave alternate screen"));

        assert_eq!(result, Err("leave alternate screen"));
    }

    #[test]
    fn body_value_returned_when_both_succeed() {
        let mut session = Session::default();
        let result: Result<u8, &str> = with_restore(&mut session, |_| Ok(7), |s| {
            s.restored = true;
            Ok(())
        });

        assert_eq!(result, Ok(7));
        assert!(session.restored);
    }
}
