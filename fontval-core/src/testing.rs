//! Synthetic sfnt files for tests.
//!
//! Tables are compiled with write-fonts and assembled by its `FontBuilder`,
//! so fixtures carry a real table directory and checksums. Raw tables can be
//! added for tags the report only needs to see in the directory.
//!
//! Fixture construction panics on tables write-fonts refuses to compile.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use write_fonts::tables::cmap::Cmap;
use write_fonts::tables::head::Head;
use write_fonts::tables::hhea::Hhea;
use write_fonts::tables::hmtx::{Hmtx, LongMetric};
use write_fonts::tables::maxp::Maxp;
use write_fonts::tables::name::{Name, NameRecord};
use write_fonts::tables::post::Post;
use write_fonts::types::{NameId, Tag};
use write_fonts::validate::Validate;
use write_fonts::{dump_table, FontBuilder, FontWrite, OffsetMarker};

/// Windows platform, Unicode BMP encoding, US English.
pub const WINDOWS_EN_US: (u16, u16, u16) = (3, 1, 0x0409);

#[derive(Debug, Clone, Default)]
pub struct SfntBuilder {
    tables: BTreeMap<Tag, Vec<u8>>,
}

impl SfntBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A font carrying every required table with the given names and glyph count.
    pub fn with_required_tables(names: &[(u16, &str)], num_glyphs: u16) -> Self {
        let head = Head {
            units_per_em: 1000,
            ..Default::default()
        };
        let hhea = Hhea {
            number_of_h_metrics: num_glyphs,
            ..Default::default()
        };
        let hmtx = Hmtx::new(
            vec![LongMetric::new(500, 0); num_glyphs as usize],
            Vec::new(),
        );

        Self::new()
            .table(b"cmap", compile(&Cmap::new(Vec::new())))
            .table(b"head", compile(&head))
            .table(b"hhea", compile(&hhea))
            .table(b"hmtx", compile(&hmtx))
            .table(b"maxp", compile(&Maxp::new(num_glyphs)))
            .table(b"name", name_table(names))
            .table(b"post", compile(&Post::default()))
    }

    /// Add a table, replacing any existing table with the same tag.
    pub fn table(mut self, tag: &[u8; 4], data: Vec<u8>) -> Self {
        self.tables.insert(Tag::new(tag), data);
        self
    }

    pub fn without(mut self, tag: &[u8; 4]) -> Self {
        self.tables.remove(&Tag::new(tag));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut builder = FontBuilder::new();
        for (tag, data) in &self.tables {
            builder.add_raw(*tag, data.as_slice());
        }
        builder.build()
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.build())
    }
}

/// `name` table with one Windows US-English record per `(name id, text)`.
pub fn name_table(records: &[(u16, &str)]) -> Vec<u8> {
    let (platform, encoding, language) = WINDOWS_EN_US;
    name_table_from_records(records.iter().map(|(name_id, text)| {
        name_record(platform, encoding, language, *name_id, text)
    }))
}

/// `name` table from arbitrary records. Records are stored in the sorted
/// order the format requires, so record order follows platform, encoding,
/// language, then name id.
pub fn name_table_from_records(records: impl IntoIterator<Item = NameRecord>) -> Vec<u8> {
    let mut records: Vec<NameRecord> = records.into_iter().collect();
    records.sort();
    compile(&Name::new(records))
}

pub fn name_record(
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    text: &str,
) -> NameRecord {
    NameRecord::new(
        platform_id,
        encoding_id,
        language_id,
        NameId::new(name_id),
        OffsetMarker::new(text.to_string()),
    )
}

fn compile<T: FontWrite + Validate>(table: &T) -> Vec<u8> {
    dump_table(table).unwrap_or_else(|err| panic!("fixture table does not compile: {err}"))
}
