// Structure of the Quran
pub const TOTAL_CHAPTERS: u16 = 114;
pub const TOTAL_JUZ: u16 = 30;
pub const TOTAL_PAGES: u16 = 604;
pub const TOTAL_HIZBS: u16 = 60;
pub const TOTAL_VERSES: u32 = 6236;

// Chapters rendered without the bismillah banner
pub const CHAPTERS_WITHOUT_BISMILLAH: [&str; 2] = ["1", "9"];

// Formatting
pub const CHAPTER_ID_WIDTH: usize = 3;

// Header
pub const HEADER_BODY_HEIGHT: u16 = 3;
pub const BISMILLAH_HEIGHT: u16 = 1;
pub const HEADER_HEIGHT: u16 = HEADER_BODY_HEIGHT + BISMILLAH_HEIGHT + 2;
pub const HEADER_MIN_WIDTH: u16 = 24;

// UI
pub const FOOTER_HEIGHT: u16 = 3;
