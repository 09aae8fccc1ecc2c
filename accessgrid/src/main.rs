//! # accessgrid
//!
//! Renders a completed access-check result as a grouped, aligned table.
//!
//! ## Overview
//!
//! accessgrid is built on top of accessgridlib. It reads a JSON document
//! describing which verbs are allowed on which resources and prints one
//! section per API group, one row per resource and one column per verb.
//!
//! ## Usage
//!
//! ```bash
//! # Render a result file
//! accessgrid access.json
//!
//! # Read from stdin, only show some verbs
//! kubectl-sweep | accessgrid - --verbs get,list,watch
//!
//! # ASCII-safe words instead of glyphs, never colored
//! accessgrid access.json --output ascii-table
//! ```
//!
//! ## Input
//!
//! Either a report with an explicit verb order:
//!
//! ```json
//! { "verbs": ["get", "list"], "resources": { "pods": { "get": "allowed" } } }
//! ```
//!
//! or just the `resources` object. Outcomes are `allowed`, `denied`,
//! `not-applicable` and `error`.

mod input;

use std::io::{self, Write};
use std::process::ExitCode;

use accessgridlib::{OutputFormat, TerminalDetection};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

use crate::input::Input;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("accessgrid")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render access-check results as a grouped, aligned table")
        .arg(
            Arg::new("input")
                .help("JSON access result to render ('-' for stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("verbs")
                .long("verbs")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Verbs to show, in column order (comma-separated)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(OutputFormat::names())
                .default_value(OutputFormat::Default.as_str())
                .help("Output format"),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .value_parser(["auto", "always", "never"])
                .default_value("auto")
                .help("When to color the output"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log more details to stderr (repeat for more)"),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Terminal detection for stdout, honoring `--color` and `NO_COLOR`.
fn terminal_detection(matches: &ArgMatches) -> TerminalDetection {
    match matches.get_one::<String>("color").map(String::as_str) {
        Some("always") => TerminalDetection::assume(true),
        Some("never") => TerminalDetection::assume(false),
        _ if std::env::var_os("NO_COLOR").is_some() => TerminalDetection::assume(false),
        _ => TerminalDetection::stdout(),
    }
}

/// Extract the explicit verb list, if any
fn extract_verbs(matches: &ArgMatches) -> Option<Vec<String>> {
    matches.get_many::<String>("verbs").map(|values| {
        values
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .collect()
    })
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("input")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let format = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();
    let terminal = terminal_detection(matches);

    let input = Input::load(path)?;
    let verbs = input.resolve_verbs(extract_verbs(matches));
    tracing::debug!(?verbs, %format, "rendering access table");

    let table = input.result.table(&verbs);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    table.render(&mut out, format, &terminal)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
