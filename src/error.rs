use crate::validator::IdentifierKind;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    UnknownChapter(String),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::UnknownChapter(id) => write!(f, "Unknown chapter: {:?}", id),
        }
    }
}

impl std::error::Error for MetadataError {}

#[derive(Debug)]
pub enum UiError {
    Terminal(Box<dyn std::error::Error + Send + Sync>),
    Metadata(MetadataError),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Terminal(err) => write!(f, "Terminal error: {}", err),
            UiError::Metadata(err) => write!(f, "Chapter metadata error: {}", err),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::Terminal(err) => Some(err.as_ref()),
            UiError::Metadata(err) => Some(err),
        }
    }
}

impl From<MetadataError> for UiError {
    fn from(err: MetadataError) -> Self {
        UiError::Metadata(err)
    }
}

impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        UiError::Terminal(Box::new(err))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierError {
    pub kind: IdentifierKind,
    pub value: String,
}

impl IdentifierError {
    pub fn new(kind: IdentifierKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} not found", self.kind, self.value)
    }
}

impl std::error::Error for IdentifierError {}
