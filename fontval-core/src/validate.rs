//! Per-path validation loop and run counters.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use crate::parser::FontParser;
use crate::report::{display_name, FailureReason, ReportEntry, ReportWriter};
use crate::sources::required_tables;
use crate::tags::TableTag;

/// Valid and invalid counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub valid: usize,
    pub invalid: usize,
}

impl RunSummary {
    pub fn record(&mut self, entry: &ReportEntry) {
        if entry.is_valid() {
            self.valid += 1;
        } else {
            self.invalid += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }

    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }

    /// Process exit status: 0 when every font was valid, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_valid() {
            0
        } else {
            1
        }
    }
}

/// Checks font paths one at a time against a required table set.
#[derive(Debug, Clone)]
pub struct Validator<P> {
    parser: P,
    required: Vec<TableTag>,
}

impl<P: FontParser> Validator<P> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            required: required_tables(),
        }
    }

    pub fn with_required_tables(mut self, required: Vec<TableTag>) -> Self {
        self.required = required;
        self
    }

    pub fn required_tables(&self) -> &[TableTag] {
        &self.required
    }

    /// Build the report entry for a single path. Never fails; problems become
    /// an [`ReportEntry::Invalid`].
    pub fn check(&self, path: &Path) -> ReportEntry {
        let file_name = display_name(path);

        if !path.exists() {
            warn!(path = %path.display(), "font file not found");
            return ReportEntry::Invalid {
                file_name,
                reason: FailureReason::NotFound,
            };
        }

        match self.parser.parse(path) {
            Ok(facts) => {
                let missing = facts.missing_tables(&self.required);
                debug!(
                    path = %path.display(),
                    family = ?facts.names.family,
                    glyphs = facts.glyph_count,
                    tables = facts.table_count(),
                    "font parsed"
                );
                if !missing.is_empty() {
                    warn!(path = %path.display(), missing = missing.len(), "required tables missing");
                }
                ReportEntry::Valid {
                    file_name,
                    facts,
                    missing,
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "font rejected by parser");
                ReportEntry::Invalid {
                    file_name,
                    reason: err.into(),
                }
            }
        }
    }

    /// Check every path in order, streaming the full report to `report`.
    pub fn run<W: Write>(
        &self,
        paths: &[PathBuf],
        report: &mut ReportWriter<W>,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        report.write_header()?;
        for path in paths {
            let entry = self.check(path);
            report.write_entry(&entry)?;
            summary.record(&entry);
        }
        report.write_summary(&summary)?;

        debug!(valid = summary.valid, invalid = summary.invalid, "run complete");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;

    use proptest::prelude::*;

    use crate::facts::{FontFacts, FontNames};
    use crate::parser::ParseError;
    use crate::sources::REQUIRED_TABLES;
    use crate::tags::tag4;

    /// Treats file contents as a comma-separated tag list; `bad` is rejected.
    #[derive(Default)]
    struct ScriptedParser {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl FontParser for ScriptedParser {
        fn parse(&self, path: &Path) -> Result<FontFacts, ParseError> {
            self.calls.borrow_mut().push(path.to_path_buf());
            let contents = fs::read_to_string(path).map_err(|e| ParseError::new(e.to_string()))?;
            if contents == "bad" {
                return Err(ParseError::new("Invalid sfnt version 0x62616400"));
            }
            let tags = contents
                .split(',')
                .filter(|t| !t.is_empty())
                .map(|t| tag4(t).map_err(|e| ParseError::new(e.to_string())))
                .collect::<Result<Vec<_>, _>>()?;
            let mut names = FontNames::default();
            names.record(1, "Scripted".to_string());
            Ok(FontFacts::new(names, 10, tags))
        }
    }

    const ALL_REQUIRED: &str = "cmap,head,hhea,hmtx,maxp,name,post";

    #[test]
    fn missing_file_never_reaches_parser() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let parser = ScriptedParser::default();
        let validator = Validator::new(&parser);

        let entry = validator.check(&tmp.path().join("sources/Unscii-8.ttf"));

        assert_eq!(
            entry,
            ReportEntry::Invalid {
                file_name: "Unscii-8.ttf".to_string(),
                reason: FailureReason::NotFound,
            }
        );
        assert!(parser.calls.borrow().is_empty());
    }

    #[test]
    fn parse_errors_keep_message_verbatim() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("Terminus.ttf");
        fs::write(&path, "bad").expect("write");

        let entry = Validator::new(ScriptedParser::default()).check(&path);

        match entry {
            ReportEntry::Invalid { reason, .. } => {
                assert_eq!(reason.to_string(), "Invalid sfnt version 0x62616400")
            }
            other => panic!("expected invalid entry, got {other:?}"),
        }
    }

    #[test]
    fn missing_post_is_still_valid_with_warning() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("TomThumb.ttf");
        fs::write(&path, "cmap,head,hhea,hmtx,maxp,name").expect("write");

        let entry = Validator::new(ScriptedParser::default()).check(&path);

        assert!(entry.is_valid());
        match entry {
            ReportEntry::Valid { missing, .. } => assert_eq!(missing, vec![tag4("post").unwrap()]),
            other => panic!("expected valid entry, got {other:?}"),
        }
    }

    #[test]
    fn custom_required_tables_replace_defaults() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("VT323-Regular.ttf");
        fs::write(&path, ALL_REQUIRED).expect("write");

        let required = vec![tag4("glyf").unwrap(), tag4("cmap").unwrap(), tag4("OS/2").unwrap()];
        let validator = Validator::new(ScriptedParser::default()).with_required_tables(required);

        match validator.check(&path) {
            ReportEntry::Valid { missing, .. } => assert_eq!(
                missing,
                vec![tag4("glyf").unwrap(), tag4("OS/2").unwrap()]
            ),
            other => panic!("expected valid entry, got {other:?}"),
        }
    }

    #[test]
    fn run_writes_full_report_and_counts() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let good = tmp.path().join("C64-Regular.ttf");
        let bad = tmp.path().join("Terminus.ttf");
        let missing = tmp.path().join("AmstradCPC-Regular.ttf");
        fs::write(&good, ALL_REQUIRED).expect("write");
        fs::write(&bad, "bad").expect("write");

        let parser = ScriptedParser::default();
        let validator = Validator::new(&parser);
        let mut report = ReportWriter::new(Vec::new());
        let summary = validator
            .run(&[missing, good.clone(), bad.clone()], &mut report)
            .expect("run");
        let text = String::from_utf8(report.into_inner()).expect("utf8");

        assert_eq!(summary, RunSummary { valid: 1, invalid: 2 });
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(*parser.calls.borrow(), vec![good, bad]);

        let amstrad = text.find("❌ AmstradCPC-Regular.ttf").expect("amstrad entry");
        let c64 = text.find("✅ C64-Regular.ttf").expect("c64 entry");
        let terminus = text.find("❌ Terminus.ttf").expect("terminus entry");
        assert!(amstrad < c64 && c64 < terminus, "entries follow path order");
        assert!(text.starts_with("Font Validation Report\n"));
        assert!(text.ends_with("\nSummary: 1 valid, 2 invalid\n"));
        assert!(!text.contains("Missing tables"));
    }

    #[test]
    fn empty_run_succeeds() {
        let validator = Validator::new(ScriptedParser::default());
        let mut report = ReportWriter::new(Vec::new());
        let summary = validator.run(&[], &mut report).expect("run");

        assert_eq!(summary.total(), 0);
        assert_eq!(summary.exit_code(), 0);
        assert_eq!(validator.required_tables(), &REQUIRED_TABLES);
    }

    #[derive(Debug, Clone, Copy)]
    enum Case {
        Missing,
        Malformed,
        Complete,
        Partial,
    }

    fn case_strategy() -> impl Strategy<Value = Case> {
        prop_oneof![
            Just(Case::Missing),
            Just(Case::Malformed),
            Just(Case::Complete),
            Just(Case::Partial),
        ]
    }

    proptest! {
        #[test]
        fn counters_cover_every_path(cases in prop::collection::vec(case_strategy(), 0..12)) {
            let tmp = tempfile::tempdir().expect("tempdir");
            let mut paths = Vec::new();
            let mut expected_invalid = 0;
            for (i, case) in cases.iter().enumerate() {
                let path = tmp.path().join(format!("font-{i}.ttf"));
                match case {
                    Case::Missing => expected_invalid += 1,
                    Case::Malformed => {
                        fs::write(&path, "bad").expect("write");
                        expected_invalid += 1;
                    }
                    Case::Complete => fs::write(&path, ALL_REQUIRED).expect("write"),
                    Case::Partial => fs::write(&path, "cmap,head").expect("write"),
                }
                paths.push(path);
            }

            let validator = Validator::new(ScriptedParser::default());
            let mut report = ReportWriter::new(Vec::new());
            let summary = validator.run(&paths, &mut report).expect("run");

            prop_assert_eq!(summary.total(), paths.len());
            prop_assert_eq!(summary.invalid, expected_invalid);
            prop_assert_eq!(summary.exit_code() == 0, expected_invalid == 0);
        }
    }
}
