//! Built-in font list and required table set.

use std::path::PathBuf;

use crate::tags::TableTag;

/// Fonts checked when no paths are given, relative to the working directory.
pub const DEFAULT_FONT_PATHS: [&str; 8] = [
    "sources/AmstradCPC-Regular.ttf",
    "sources/C64-Regular.ttf",
    "sources/Terminus.ttf",
    "sources/TerminusTTF-Bold-4.49.3.ttf",
    "sources/TerminusTTF-Bold-Italic-4.49.3.ttf",
    "sources/TomThumb.ttf",
    "sources/Unscii-8.ttf",
    "sources/VT323-Regular.ttf",
];

/// Tables every font must carry. Missing ones are reported in this order.
pub const REQUIRED_TABLES: [TableTag; 7] = [
    TableTag::new(b"cmap"),
    TableTag::new(b"head"),
    TableTag::new(b"hhea"),
    TableTag::new(b"hmtx"),
    TableTag::new(b"maxp"),
    TableTag::new(b"name"),
    TableTag::new(b"post"),
];

pub fn default_font_paths() -> Vec<PathBuf> {
    DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect()
}

pub fn required_tables() -> Vec<TableTag> {
    REQUIRED_TABLES.to_vec()
}
