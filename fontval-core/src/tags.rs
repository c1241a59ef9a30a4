//! Table tags as the report sees them.
//!
//! Tags are kept as raw 4-byte values so the required-table set and CLI
//! overrides can be built without the parsing backend compiled in.

use std::fmt;

use anyhow::{anyhow, Result};

/// A four-byte OpenType table tag (`cmap`, `OS/2`, `CFF `, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableTag([u8; 4]);

impl TableTag {
    pub const fn new(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }
}

impl fmt::Display for TableTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

#[cfg(feature = "fontations")]
impl From<read_fonts::types::Tag> for TableTag {
    fn from(tag: read_fonts::types::Tag) -> Self {
        Self(tag.to_be_bytes())
    }
}

/// Encode 1-4 printable ASCII chars as a tag, space padding short input.
pub fn tag4(raw: &str) -> Result<TableTag> {
    if raw.is_empty() || raw.len() > 4 {
        return Err(anyhow!("tag must be 1-4 printable ASCII chars: {raw:?}"));
    }

    let mut buf = [b' '; 4];
    for (i, byte) in raw.as_bytes().iter().enumerate() {
        if !(0x20..=0x7E).contains(byte) {
            return Err(anyhow!("tag byte out of range: {raw:?}"));
        }
        buf[i] = *byte;
    }

    Ok(TableTag(buf))
}

/// Parse a list of tag strings, keeping the first occurrence of duplicates.
pub fn parse_tag_list(raw: &[String]) -> Result<Vec<TableTag>> {
    let mut tags: Vec<TableTag> = Vec::with_capacity(raw.len());
    for item in raw {
        let tag = tag4(item.trim())?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}
