use clap::{Args, Parser, Subcommand, ValueEnum};
use mushaf::{
    App, ChapterMetadata, IdentifierKind, ReaderOptions, StaticChapters, is_valid_chapter_id,
    is_valid_hizb_id, is_valid_juz_id, is_valid_page_id, is_valid_verse_id,
    locale::DEFAULT_LOCALE,
};
use std::{fs::File, path::PathBuf, process::ExitCode, sync::Mutex};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "mushaf")]
#[command(about = "A terminal Quran chapter reader")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a chapter in the reader
    Read(ReadArgs),
    /// Check whether an identifier is in range
    Check {
        kind: KindArg,
        id: String,
        /// Owning chapter, required for verse ids
        #[arg(long, required_if_eq("kind", "verse"))]
        chapter: Option<String>,
    },
}

#[derive(Args)]
struct ReadArgs {
    chapter: String,
    #[arg(long)]
    verse: Option<String>,
    #[arg(long)]
    page: Option<String>,
    #[arg(long)]
    hizb: Option<String>,
    #[arg(long, default_value = DEFAULT_LOCALE)]
    lang: String,
    /// Write logs here; the reader discards them otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Chapter,
    Verse,
    Juz,
    Page,
    Hizb,
}

impl From<KindArg> for IdentifierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Chapter => IdentifierKind::Chapter,
            KindArg::Verse => IdentifierKind::Verse,
            KindArg::Juz => IdentifierKind::Juz,
            KindArg::Page => IdentifierKind::Page,
            KindArg::Hizb => IdentifierKind::Hizb,
        }
    }
}

/// Outcome of `mushaf check`: the line to print and whether the id is valid.
#[derive(Debug, PartialEq, Eq)]
struct CheckReport {
    line: String,
    valid: bool,
}

impl CheckReport {
    fn new(kind: IdentifierKind, id: &str, valid: bool) -> Self {
        let verdict = if valid { "valid" } else { "invalid" };
        Self {
            line: format!("{} {:?}: {}", kind, id, verdict),
            valid,
        }
    }

    fn exit_code(&self) -> ExitCode {
        if self.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn check<M>(chapters: &M, kind: IdentifierKind, id: &str, chapter: Option<&str>) -> CheckReport
where
    M: ChapterMetadata + ?Sized,
{
    let valid = match kind {
        IdentifierKind::Chapter => is_valid_chapter_id(id),
        IdentifierKind::Juz => is_valid_juz_id(id),
        IdentifierKind::Page => is_valid_page_id(id),
        IdentifierKind::Hizb => is_valid_hizb_id(id),
        IdentifierKind::Verse => {
            let chapter = chapter.unwrap_or_default();
            if !is_valid_chapter_id(chapter) {
                return CheckReport::new(IdentifierKind::Chapter, chapter, false);
            }
            is_valid_verse_id(chapters, chapter, id)
        }
    };
    CheckReport::new(kind, id, valid)
}

fn reader_options<M>(chapters: &M, args: &ReadArgs) -> Result<ReaderOptions, String>
where
    M: ChapterMetadata + ?Sized,
{
    ReaderOptions::from_identifiers(
        chapters,
        &args.chapter,
        args.verse.as_deref(),
        args.page.as_deref(),
        args.hizb.as_deref(),
        &args.lang,
    )
    .map_err(|e| e.to_string())
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let level = log_level(cli.verbose);
    let chapters = StaticChapters::new();

    match cli.command {
        Command::Read(args) => {
            // Logging to the terminal would draw over the reader.
            if let Some(path) = &args.log_file {
                let file = File::create(path)
                    .map_err(|e| format!("Failed to open log file {:?}: {}", path, e))?;
                tracing_subscriber::fmt()
                    .with_max_level(level)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
            }

            let options = match reader_options(&chapters, &args) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("{}", message);
                    return Ok(ExitCode::FAILURE);
                }
            };
            info!("Opening chapter {} ({})", options.chapter, options.lang);

            let mut app = App::new(Box::new(chapters), options);
            app.run()
                .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })?;

            Ok(ExitCode::SUCCESS)
        }
        Command::Check { kind, id, chapter } => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();

            let report = check(&chapters, kind.into(), &id, chapter.as_deref());
            println!("{}", report.line);
            Ok(report.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_args(argv: &[&str]) -> ReadArgs {
        match Cli::try_parse_from(argv).expect("arguments parse").command {
            Command::Read(args) => args,
            Command::Check { .. } => panic!("expected read"),
        }
    }

    #[test]
    fn check_reports_fixed_range_kinds() {
        let report = check(&StaticChapters, IdentifierKind::Juz, "30", None);
        assert_eq!(report.line, "juz \"30\": valid");
        assert!(report.valid);

        let report = check(&StaticChapters, IdentifierKind::Page, "605", None);
        assert_eq!(report.line, "page \"605\": invalid");
        assert!(!report.valid);

        assert!(check(&StaticChapters, IdentifierKind::Chapter, "114", None).valid);
        assert!(!check(&StaticChapters, IdentifierKind::Hizb, "test", None).valid);
    }

    #[test]
    fn check_verse_validates_chapter_first() {
        let report = check(&StaticChapters, IdentifierKind::Verse, "1", Some("115"));
        assert_eq!(report.line, "chapter \"115\": invalid");
        assert!(!report.valid);

        let report = check(&StaticChapters, IdentifierKind::Verse, "1", None);
        assert_eq!(report.line, "chapter \"\": invalid");
    }

    #[test]
    fn check_verse_against_chapter_length() {
        let report = check(&StaticChapters, IdentifierKind::Verse, "7", Some("1"));
        assert_eq!(report.line, "verse \"7\": valid");

        let report = check(&StaticChapters, IdentifierKind::Verse, "8", Some("1"));
        assert_eq!(report.line, "verse \"8\": invalid");
        assert!(!report.valid);
    }

    #[test]
    fn check_verse_requires_chapter_flag() {
        assert!(Cli::try_parse_from(["mushaf", "check", "verse", "3"]).is_err());
        assert!(Cli::try_parse_from(["mushaf", "check", "verse", "3", "--chapter", "2"]).is_ok());
        assert!(Cli::try_parse_from(["mushaf", "check", "page", "3"]).is_ok());
    }

    #[test]
    fn read_reports_not_found_identifiers() {
        let args = read_args(&["mushaf", "read", "115"]);
        assert_eq!(
            reader_options(&StaticChapters, &args),
            Err("chapter \"115\" not found".to_string())
        );

        let args = read_args(&["mushaf", "read", "1", "--verse", "8"]);
        assert_eq!(
            reader_options(&StaticChapters, &args),
            Err("verse \"8\" not found".to_string())
        );
    }

    #[test]
    fn read_builds_options_from_flags() {
        let args = read_args(&["mushaf", "read", "2", "--verse", "255", "--page", "42"]);
        let options = reader_options(&StaticChapters, &args).expect("valid identifiers");

        assert_eq!(options.chapter, 2);
        assert_eq!(options.verse, Some(255));
        assert_eq!(options.page, Some(42));
        assert_eq!(options.lang, DEFAULT_LOCALE);
    }
}
