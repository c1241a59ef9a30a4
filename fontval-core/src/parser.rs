//! Seam between the report and the font-parsing backend.

use std::path::Path;

use thiserror::Error;

use crate::facts::FontFacts;

/// The backend rejected a file. The message is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Anything that can turn a font file on disk into [`FontFacts`].
pub trait FontParser {
    fn parse(&self, path: &Path) -> Result<FontFacts, ParseError>;
}

impl<P: FontParser + ?Sized> FontParser for &P {
    fn parse(&self, path: &Path) -> Result<FontFacts, ParseError> {
        (**self).parse(path)
    }
}

impl<P: FontParser + ?Sized> FontParser for Box<P> {
    fn parse(&self, path: &Path) -> Result<FontFacts, ParseError> {
        (**self).parse(path)
    }
}

/// The parser compiled into this build, if any.
#[cfg(feature = "fontations")]
pub fn default_parser() -> Option<Box<dyn FontParser>> {
    Some(Box::new(crate::fontations::FontationsParser))
}

/// The parser compiled into this build, if any.
#[cfg(not(feature = "fontations"))]
pub fn default_parser() -> Option<Box<dyn FontParser>> {
    None
}
