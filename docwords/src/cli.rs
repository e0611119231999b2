//! Command-line interface definitions for docwords

use clap::{Args, Parser, Subcommand};
use docwords::config::RulesConfig;
use std::path::PathBuf;

/// CLI structure for the docwords application
#[derive(Parser)]
#[command(name = "docwords")]
#[command(version)]
#[command(about = "Word counter for .docx documents", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for docwords
#[derive(Subcommand)]
pub enum Commands {
    /// Count words, applying section, style and pattern exclusions
    Count {
        /// The .docx file to count
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// TOML file with exclusion rules
        #[arg(short, long, value_name = "RULES")]
        config: Option<PathBuf>,

        #[command(flatten)]
        rules: RuleArgs,

        /// Print a line for every ignored paragraph and stripped substring
        #[arg(short, long)]
        trace: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the styles used by the document's paragraphs
    Styles {
        /// The .docx file to inspect
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the document's outline (heading) paragraphs
    Outline {
        /// The .docx file to inspect
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print every match of a regular expression, to check exclusion patterns
    Find {
        /// The .docx file to search
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Regular expression to search for
        #[arg(value_name = "REGEX")]
        pattern: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Exclusion rules given on the command line
#[derive(Args, Debug, Default)]
pub struct RuleArgs {
    /// Regular expression whose matches are stripped before counting (repeatable)
    #[arg(long = "ignore", value_name = "REGEX")]
    pub ignore_patterns: Vec<String>,

    /// Style identifier whose paragraphs are not counted (repeatable)
    #[arg(long = "ignore-style", value_name = "STYLE")]
    pub ignore_styles: Vec<String>,

    /// Start counting after the outline paragraph with this title
    #[arg(long, value_name = "TITLE")]
    pub start_after: Option<String>,

    /// Stop counting at the outline paragraph with this title
    #[arg(long, value_name = "TITLE")]
    pub stop_before: Option<String>,

    /// Do not strip in-text citations such as "(Smith, 2014)"
    #[arg(long)]
    pub no_citations: bool,
}

impl RuleArgs {
    /// Combine command-line rules with those from a configuration file
    ///
    /// Patterns and styles are appended, boundary titles replace the file's.
    pub fn merge_into(self, mut config: RulesConfig) -> RulesConfig {
        if self.no_citations {
            config.default_citations = false;
        }
        config.ignore_patterns.extend(self.ignore_patterns);
        config.ignore_styles.extend(self.ignore_styles);
        if self.start_after.is_some() {
            config.start_after = self.start_after;
        }
        if self.stop_before.is_some() {
            config.stop_before = self.stop_before;
        }
        config
    }
}
