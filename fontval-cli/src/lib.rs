//! fontval CLI

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum, ValueHint};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use fontval_core::parser::{default_parser, FontParser};
use fontval_core::report::ReportWriter;
use fontval_core::sources::{default_font_paths, required_tables};
use fontval_core::tags::{parse_tag_list, TableTag};
use fontval_core::validate::Validator;

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "FONTVAL_LOG";

pub const BACKEND_MISSING_HINT: &str =
    "❌ Font parsing backend not available. Rebuild with: cargo install fontval-cli --features fontations";

/// Validate font files and print a table/metadata report.
#[derive(Debug, Parser)]
#[command(
    name = "fontval",
    about = "Validate font files and report their names, glyphs and tables"
)]
pub struct Cli {
    /// Font files to check (defaults to the built-in sources/ list)
    #[arg(value_hint = ValueHint::FilePath)]
    paths: Vec<PathBuf>,

    /// Tables every font must contain, replacing the default set
    #[arg(short = 'r', long = "require", value_delimiter = ',', value_hint = ValueHint::Other)]
    require: Vec<String>,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Parse CLI args, run the report and map the outcome to an exit status.
pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            err.print()?;
            return Ok(code);
        }
    };

    init_logging();

    let stdout = io::stdout();
    let handle = stdout.lock();
    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    let code = execute(&cli, default_parser(), handle, use_color)?;
    Ok(ExitCode::from(code))
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));
    // A second initialisation (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn execute(
    cli: &Cli,
    parser: Option<Box<dyn FontParser>>,
    mut out: impl Write,
    color: bool,
) -> Result<u8> {
    let Some(parser) = parser else {
        warn!("built without the fontations feature; no font parser available");
        writeln!(out, "{BACKEND_MISSING_HINT}")?;
        return Ok(1);
    };

    let required = resolve_required(&cli.require)?;
    let paths = resolve_paths(&cli.paths);

    let validator = Validator::new(parser).with_required_tables(required);
    let mut report = ReportWriter::new(out).with_color(color);
    let summary = validator.run(&paths, &mut report)?;

    Ok(summary.exit_code())
}

fn resolve_required(raw: &[String]) -> Result<Vec<TableTag>> {
    if raw.is_empty() {
        return Ok(required_tables());
    }
    let required =
        parse_tag_list(raw).inspect_err(|err| warn!(%err, "rejected --require value"))?;
    debug!(count = required.len(), "required tables overridden");
    Ok(required)
}

fn resolve_paths(raw: &[PathBuf]) -> Vec<PathBuf> {
    if raw.is_empty() {
        default_font_paths()
    } else {
        raw.to_vec()
    }
}
