//! Font parsing backed by read-fonts and skrifa.

use std::fs;
use std::path::Path;

use read_fonts::tables::name::{Encoding, NameId};
use read_fonts::{FontRef, ReadError, TableProvider};
use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef as SkrifaFontRef, MetadataProvider};
use tracing::debug;

use crate::facts::{FontFacts, FontNames, NameField};
use crate::parser::{FontParser, ParseError};
use crate::tags::TableTag;

/// Reads a single-face TrueType/OpenType file from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontationsParser;

impl FontParser for FontationsParser {
    fn parse(&self, path: &Path) -> Result<FontFacts, ParseError> {
        // The bytes and every view borrowed from them drop at the end of this call.
        let data = fs::read(path).map_err(|err| ParseError::new(err.to_string()))?;
        debug!(path = %path.display(), bytes = data.len(), "parsing font");
        inspect(&data).map_err(|err| ParseError::new(err.to_string()))
    }
}

/// Extract report facts from in-memory font data.
pub fn inspect(data: &[u8]) -> Result<FontFacts, ReadError> {
    let font = FontRef::new(data)?;
    let sfont = SkrifaFontRef::new(data)?;

    let names = collect_names(&font)?;
    let glyph_count = sfont
        .glyph_metrics(Size::unscaled(), LocationRef::default())
        .glyph_count();
    let table_tags = collect_tables(&font);

    Ok(FontFacts::new(names, glyph_count, table_tags))
}

fn collect_tables(font: &FontRef) -> Vec<TableTag> {
    font.table_directory
        .table_records()
        .iter()
        .map(|rec| TableTag::from(rec.tag()))
        .collect()
}

fn collect_names(font: &FontRef) -> Result<FontNames, ReadError> {
    let mut names = FontNames::default();

    let name_table = match font.name() {
        Ok(table) => table,
        Err(ReadError::TableIsMissing(_)) => return Ok(names),
        Err(err) => return Err(err),
    };

    let data = name_table.string_data();
    for record in name_table.name_record() {
        let name_id: NameId = record.name_id();
        if NameField::from_name_id(name_id.to_u16()).is_none() {
            continue;
        }
        // read-fonts decodes unsupported encodings (Big5, Shift JIS, Mac
        // non-Roman...) to an empty string rather than an error.
        if Encoding::new(record.platform_id(), record.encoding_id()) == Encoding::Unknown {
            debug!(
                name_id = name_id.to_u16(),
                platform = record.platform_id(),
                encoding = record.encoding_id(),
                "skipping name record in unsupported encoding"
            );
            continue;
        }
        if let Ok(entry) = record.string(data) {
            names.record(name_id.to_u16(), entry.to_string());
        }
    }

    Ok(names)
}
