pub mod audio;
pub mod chapter;
mod chapter_table;
pub mod constants;
pub mod error;
pub mod header;
pub mod locale;
pub mod navigation;
pub mod ui;
pub mod validator;

pub use audio::{AudioControl, PlaybackState, SilentPlayer};
pub use chapter::{ChapterData, ChapterMetadata, StaticChapters};
pub use error::{IdentifierError, MetadataError, UiError};
pub use header::ChapterHeader;
pub use navigation::VerseKey;
pub use ui::{App, FloatingPane, ReaderOptions};
pub use validator::{
    IdentifierKind, is_valid_chapter_id, is_valid_hizb_id, is_valid_juz_id, is_valid_page_id,
    is_valid_verse_id,
};
