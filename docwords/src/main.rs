//! docwords - word counter for .docx documents
//!
//! A CLI tool that counts the words of a Word document, leaving out sections
//! outside a configured region, excluded paragraph styles and in-text
//! citations.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![allow(clippy::module_name_repetitions)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, RuleArgs};
use docwords::config::RulesConfig;
use docwords::{engine, report, Document};
use regex::Regex;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main entry point for the docwords CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count {
            input,
            config,
            rules,
            trace,
            verbose,
        } => {
            init_logging(verbose);
            handle_count_command(input, config, rules, trace)?;
        }

        Commands::Styles { input, verbose } => {
            init_logging(verbose);
            handle_styles_command(&input)?;
        }

        Commands::Outline { input, verbose } => {
            init_logging(verbose);
            handle_outline_command(&input)?;
        }

        Commands::Find {
            input,
            pattern,
            verbose,
        } => {
            init_logging(verbose);
            handle_find_command(&input, &pattern)?;
        }
    }

    Ok(())
}

/// Initialize logging; warnings are always shown, `--verbose` adds progress
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Open the input document, failing with the path in the error context
fn open_document(input: &Path) -> Result<Document> {
    Document::open(input).with_context(|| format!("Failed to open document {}", input.display()))
}

/// Handle the count command
fn handle_count_command(
    input: PathBuf,
    config_path: Option<PathBuf>,
    rule_args: RuleArgs,
    trace: bool,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => RulesConfig::load(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        None => RulesConfig::default(),
    };
    let rules = rule_args
        .merge_into(config)
        .into_rules()
        .context("Invalid exclusion rules")?;

    let document = open_document(&input)?;
    log::info!(
        "Counting {} paragraphs of {}",
        document.paragraphs().len(),
        input.display()
    );

    let result = if trace {
        engine::run_traced(&document, &rules)
    } else {
        engine::run(&document, &rules)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::write_report(&mut out, &document, &result).context("Failed to write report")?;
    out.flush()?;

    Ok(())
}

/// Handle the styles command
fn handle_styles_command(input: &Path) -> Result<()> {
    let document = open_document(input)?;
    let mut out = std::io::stdout().lock();
    report::write_styles(&mut out, &document)?;
    Ok(())
}

/// Handle the outline command
fn handle_outline_command(input: &Path) -> Result<()> {
    let document = open_document(input)?;
    let mut out = std::io::stdout().lock();
    report::write_outline(&mut out, &document)?;
    Ok(())
}

/// Handle the find command
fn handle_find_command(input: &Path, pattern: &str) -> Result<()> {
    let regex =
        Regex::new(pattern).with_context(|| format!("Invalid regular expression '{}'", pattern))?;
    let document = open_document(input)?;

    let mut out = std::io::stdout().lock();
    for matched in document.find_all(&regex) {
        writeln!(out, "{}", matched)?;
    }
    Ok(())
}
