//! # pymodlen
//!
//! A commit-time gate that fails when a Python module grows past a line limit.
//!
//! ## Overview
//!
//! pymodlen is built on top of pymodlenlib. A commit hook runner passes it the
//! staged files; it counts the lines of every existing `.py` file among them
//! and, if any is over the limit, prints which files to split and how, then
//! exits with status 1. Deleted files and non-Python files are ignored.
//!
//! ## Usage
//!
//! ```bash
//! # Check files against the default 1000-line limit
//! pymodlen app/models.py tests/test_models.py
//!
//! # Use a tighter limit
//! pymodlen --max-lines 500 app/*.py
//!
//! # Leave generated code alone
//! pymodlen --exclude "**/migrations/*.py" $(git diff --cached --name-only)
//!
//! # Machine-readable report
//! pymodlen --format json app/models.py
//! ```
//!
//! ## Exit codes
//!
//! - `0`: every file is within the limit, or no files were given
//! - `1`: at least one file is over the limit
//! - `2`: invalid arguments

mod render;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use glob::Pattern;
use pymodlenlib::{find_violations_with, CheckOptions, FilterConfig, Report, DEFAULT_MAX_LINES};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use render::{render, OutputFormat};

/// Status when every checked file is within the limit
const EXIT_OK: u8 = 0;
/// Status when at least one file exceeds the limit
const EXIT_VIOLATIONS: u8 = 1;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("pymodlen")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Fail if any Python module exceeds the configured maximum line count")
        .arg(
            Arg::new("max-lines")
                .long("max-lines")
                .value_name("N")
                .value_parser(value_parser!(u64).range(1..))
                .default_value("1000")
                .help("Maximum allowed lines per module"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .value_name("GLOB")
                .action(ArgAction::Append)
                .value_parser(parse_glob)
                .help("Skip files matching glob pattern (can be specified multiple times)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(OutputFormat::NAMES)
                .default_value("text")
                .help("Report format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log skipped and counted files to stderr (repeat for more detail)"),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Python files to check"),
        )
}

/// Usage line to print ahead of a clap error that does not carry one.
///
/// clap includes usage for unknown arguments but not for rejected values,
/// and every malformed invocation should show how the command is called.
fn missing_usage(cmd: &mut Command, err: &clap::Error) -> Option<String> {
    if !err.use_stderr() || err.render().to_string().contains("Usage:") {
        return None;
    }
    Some(cmd.render_usage().to_string())
}

fn parse_glob(pattern: &str) -> Result<Pattern, String> {
    Pattern::new(pattern).map_err(|e| format!("invalid glob pattern '{pattern}': {e}"))
}

/// Build check options from matches
fn build_options(matches: &ArgMatches) -> Result<CheckOptions, anyhow::Error> {
    let max_lines = matches
        .get_one::<u64>("max-lines")
        .copied()
        .map(usize::try_from)
        .transpose()?
        .unwrap_or(DEFAULT_MAX_LINES);

    let filter = matches
        .get_many::<Pattern>("exclude")
        .into_iter()
        .flatten()
        .cloned()
        .fold(FilterConfig::new(), FilterConfig::exclude_pattern);

    Ok(CheckOptions::new().max_lines(max_lines).filter(filter))
}

/// Extract the candidate file list from matches
fn extract_files(matches: &ArgMatches) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>("files")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Check the files named in `matches`, writing the report to `out` on failure.
///
/// Returns the process exit status.
fn run(matches: &ArgMatches, out: &mut impl Write) -> Result<u8, anyhow::Error> {
    let options = build_options(matches)?;
    let files = extract_files(matches);
    let format = matches
        .get_one::<String>("format")
        .map(|s| OutputFormat::from_name(s))
        .unwrap_or_default();

    let violations = find_violations_with(&files, &options);
    tracing::info!(
        checked = files.len(),
        violations = violations.len(),
        max_lines = options.max_lines,
        "module length check finished"
    );

    if violations.is_empty() {
        return Ok(EXIT_OK);
    }

    let report = Report::new(&violations, options.max_lines);
    out.write_all(render(&report, format)?.as_bytes())?;
    out.flush()?;

    Ok(EXIT_VIOLATIONS)
}

/// Install the stderr log subscriber; `-v` raises the level step by step.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::new(format!("pymodlen={level},pymodlenlib={level}")))
        .init();
}

fn main() -> ExitCode {
    let mut cmd = build_command();
    let matches = match cmd.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => {
            if let Some(usage) = missing_usage(&mut cmd, &e) {
                eprintln!("{usage}\n");
            }
            // Status 2 for usage errors, 0 for --help and --version
            e.exit()
        }
    };
    init_tracing(matches.get_count("verbose"));

    let stdout = std::io::stdout();
    match run(&matches, &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
