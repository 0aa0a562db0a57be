//! Command line arguments of the three tools and logging setup
//!
//! The argument structs only collect flags, they are converted into the
//! configuration structs of the [`tools`](crate::tools) module.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::fasta::DEFAULT_WRAP;
use crate::tools::{FastaConfig, Input, TableConfig, TokensConfig};

const TABLE_HELP: &str = "Table of equivalences. First column should have the name to convert, \
                          second column the new name. Must be tab separated.";

/// Replaces the headers of a FASTA file according to a table of equivalences.
#[derive(Parser, Debug)]
#[command(name = "rename_fasta", version, about, long_about = None)]
pub struct FastaArgs {
    #[arg(short, long, help = TABLE_HELP)]
    pub table: PathBuf,
    /// FASTA file to convert. Use "-" to read from standard input.
    #[arg(short, long)]
    pub file: String,
    /// Output file name. If omitted, output is printed to the terminal.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Number of residues per sequence line (0 = no line wrapping).
    #[arg(short, long, default_value_t = DEFAULT_WRAP)]
    pub wrap: usize,
    /// Increase logging verbosity (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl FastaArgs {
    pub fn into_config(self) -> FastaConfig {
        FastaConfig {
            table: self.table,
            input: Input::from_arg(&self.file),
            output: self.output,
            wrap: self.wrap,
        }
    }
}

/// Replaces names in one column or in all columns of a tab-separated table
/// according to a table of equivalences. Values within a cell may be
/// separated by spaces.
#[derive(Parser, Debug)]
#[command(name = "rename_table", version, about, long_about = None)]
pub struct TableArgs {
    #[arg(short, long, help = TABLE_HELP)]
    pub table: PathBuf,
    /// File to convert. Can be a long table.
    #[arg(short, long)]
    pub file: PathBuf,
    /// Column number (1-based) to apply the replacements to. If omitted,
    /// all columns are checked.
    #[arg(short, long, allow_negative_numbers = true)]
    pub column: Option<i64>,
    /// Output file name. If omitted, output is printed to the terminal.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Increase logging verbosity (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TableArgs {
    pub fn into_config(self) -> TableConfig {
        TableConfig {
            table: self.table,
            input: self.file,
            column: self.column,
            output: self.output,
        }
    }
}

/// Replaces every whitespace-delimited name in a text file according to a
/// table of equivalences.
#[derive(Parser, Debug)]
#[command(name = "rename_tokens", version, about, long_about = None)]
pub struct TokensArgs {
    #[arg(short, long, help = TABLE_HELP)]
    pub table: PathBuf,
    /// File to convert. Can be a long table.
    #[arg(short, long)]
    pub file: PathBuf,
    /// Output file name. If omitted, output is printed to the terminal.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Increase logging verbosity (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TokensArgs {
    pub fn into_config(self) -> TokensConfig {
        TokensConfig {
            table: self.table,
            input: self.file,
            output: self.output,
        }
    }
}

/// Maps the number of `-v` flags to a log level.
pub fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Sets up `env_logger` writing to standard error.
pub fn init_logging(verbosity: u8) {
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(level_filter(verbosity))
        .init();
}
