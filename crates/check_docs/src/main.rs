use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};
use std::env;
use std::path::PathBuf;
use std::process;

use check_docs::config::{AppConfig, OutputFormat, DOCS_ROOT_ENV};
use check_docs::{all_passed, render_json, render_text, run_checks};
use validate_doc_set::BUILTIN_SCHEMAS;

/// Validation ran and found problems.
const EXIT_FAILED: i32 = 1;
/// Validation could not run.
const EXIT_ERROR: i32 = 2;

fn main() {
    let code = match run() {
        Ok(true) => 0,
        Ok(false) => EXIT_FAILED,
        Err(err) => {
            eprintln!("Error: {err:#}");
            EXIT_ERROR
        }
    };
    process::exit(code);
}

fn run() -> Result<bool> {
    let matches = Command::new("check_docs")
        .version("0.1.0")
        .about("Checks a documentation directory for required documents, sections and open TODOs")
        .arg(
            Arg::new("docs")
                .long("docs")
                .num_args(1)
                .help("Documentation root (defaults to $CHECK_DOCS_ROOT, then ./docs)"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .action(ArgAction::Append)
                .value_parser(PossibleValuesParser::new(BUILTIN_SCHEMAS.iter().copied()))
                .help("Built-in schema to validate against (repeatable)"),
        )
        .arg(
            Arg::new("schema_file")
                .long("schema-file")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help("TOML schema file to validate against (repeatable)"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .num_args(1)
                .value_parser(clap::value_parser!(OutputFormat))
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("require_all")
                .long("require-all")
                .help("Fail when any required document is missing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    let config = AppConfig {
        docs_root: AppConfig::resolve_docs_root(
            matches.get_one::<String>("docs").map(String::as_str),
            env::var(DOCS_ROOT_ENV).ok(),
        ),
        schemas: AppConfig::resolve_schemas(
            matches
                .get_many::<String>("schema")
                .unwrap_or_default()
                .cloned()
                .collect(),
            matches
                .get_many::<PathBuf>("schema_file")
                .unwrap_or_default()
                .cloned()
                .collect(),
        ),
        format: matches
            .get_one::<OutputFormat>("format")
            .copied()
            .unwrap_or_default(),
        require_all: matches.get_flag("require_all"),
    };
    log::debug!("{config:?}");

    let reports = run_checks(&config)?;
    match config.format {
        OutputFormat::Text => print!("{}", render_text(&reports, config.require_all)),
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }
    Ok(all_passed(&reports, config.require_all))
}
