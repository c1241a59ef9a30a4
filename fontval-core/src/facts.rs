//! Metadata extracted from one parsed font.

use crate::tags::TableTag;

/// Name-table fields the report shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Family,
    Style,
    Version,
}

impl NameField {
    /// Map an OpenType name identifier onto a report field.
    pub fn from_name_id(name_id: u16) -> Option<Self> {
        match name_id {
            1 => Some(NameField::Family),
            2 => Some(NameField::Style),
            5 => Some(NameField::Version),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontNames {
    pub family: Option<String>,
    pub style: Option<String>,
    pub version: Option<String>,
}

impl FontNames {
    /// Record a decoded name string. Later records for the same field win.
    pub fn record(&mut self, name_id: u16, text: String) {
        let slot = match NameField::from_name_id(name_id) {
            Some(NameField::Family) => &mut self.family,
            Some(NameField::Style) => &mut self.style,
            Some(NameField::Version) => &mut self.version,
            None => return,
        };
        *slot = Some(text);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFacts {
    pub names: FontNames,
    pub glyph_count: u32,
    table_tags: Vec<TableTag>,
}

impl FontFacts {
    pub fn new(names: FontNames, glyph_count: u32, mut table_tags: Vec<TableTag>) -> Self {
        table_tags.sort_unstable();
        table_tags.dedup();
        Self {
            names,
            glyph_count,
            table_tags,
        }
    }

    /// Table tags in ascending byte order, without duplicates.
    pub fn table_tags(&self) -> &[TableTag] {
        &self.table_tags
    }

    pub fn table_count(&self) -> usize {
        self.table_tags.len()
    }

    /// Required tags absent from this font, in the order they were required.
    pub fn missing_tables(&self, required: &[TableTag]) -> Vec<TableTag> {
        required
            .iter()
            .copied()
            .filter(|tag| self.table_tags.binary_search(tag).is_err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::REQUIRED_TABLES;
    use crate::tags::tag4;

    fn tags(raw: &[&str]) -> Vec<TableTag> {
        raw.iter().map(|t| tag4(t).unwrap()).collect()
    }

    #[test]
    fn last_record_per_field_wins() {
        let mut names = FontNames::default();
        names.record(1, "Mac Family".to_string());
        names.record(4, "Full Name".to_string());
        names.record(1, "Win Family".to_string());
        names.record(5, "Version 1.0".to_string());

        assert_eq!(names.family.as_deref(), Some("Win Family"));
        assert_eq!(names.style, None);
        assert_eq!(names.version.as_deref(), Some("Version 1.0"));
    }

    #[test]
    fn tables_are_sorted_and_deduplicated() {
        let facts = FontFacts::new(
            FontNames::default(),
            3,
            tags(&["post", "OS/2", "cmap", "post"]),
        );

        assert_eq!(facts.table_count(), 3);
        assert_eq!(facts.table_tags(), tags(&["OS/2", "cmap", "post"]).as_slice());
    }

    #[test]
    fn missing_tables_follow_required_order() {
        let facts = FontFacts::new(FontNames::default(), 0, tags(&["head", "hhea", "name"]));
        let missing = facts.missing_tables(&REQUIRED_TABLES);

        assert_eq!(missing, tags(&["cmap", "hmtx", "maxp", "post"]));
    }

    #[test]
    fn nothing_missing_when_all_required_present() {
        let facts = FontFacts::new(
            FontNames::default(),
            0,
            tags(&["cmap", "glyf", "head", "hhea", "hmtx", "loca", "maxp", "name", "post"]),
        );
        assert!(facts.missing_tables(&REQUIRED_TABLES).is_empty());
    }
}
