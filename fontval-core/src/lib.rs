//! fontval-core: table and metadata checks for a fixed set of font files.
//!
//! Each path is checked on its own: a missing file or a file the parser
//! rejects becomes a failure entry, anything else becomes a success entry
//! listing the family, style, version, glyph count and table inventory, plus
//! any required tables the font lacks. The run never stops early; the
//! [`validate::RunSummary`] at the end decides the exit status.
//!
//! ```rust,no_run
//! use std::io;
//!
//! use fontval_core::parser::default_parser;
//! use fontval_core::report::ReportWriter;
//! use fontval_core::sources::default_font_paths;
//! use fontval_core::validate::Validator;
//!
//! let parser = default_parser().expect("built with the fontations feature");
//! let validator = Validator::new(parser);
//! let mut report = ReportWriter::new(io::stdout().lock());
//! let summary = validator.run(&default_font_paths(), &mut report)?;
//! std::process::exit(summary.exit_code().into());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Parsing is delegated to read-fonts and skrifa behind the default
//! `fontations` feature. Without it [`parser::default_parser`] returns
//! `None` and callers are expected to bail out before checking anything.

pub mod facts;
#[cfg(feature = "fontations")]
pub mod fontations;
pub mod parser;
pub mod report;
pub mod sources;
pub mod tags;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod validate;
