//! Complete workflows of the command line tools
//!
//! Every tool loads the table of equivalences, reads its input, renames and
//! writes the result. Each is configured by a plain struct and returns a
//! [`Summary`](Summary), so they can be run without spawning a process:
//!
//! ```no_run
//! use seq_rename::tools::{rename_fasta, FastaConfig, Input};
//!
//! let config = FastaConfig {
//!     table: "names.tsv".into(),
//!     input: Input::from_arg("seqs.fasta"),
//!     output: Some("renamed.fasta".into()),
//!     wrap: seq_rename::fasta::DEFAULT_WRAP,
//! };
//! let summary = rename_fasta(&config).unwrap();
//! println!("{} of {} records renamed", summary.renamed, summary.items);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::equiv::{ColumnCheck, EquivalenceMap};
use crate::fasta::{self, OwnedRecord};
use crate::lines::RenameLines;
use crate::output::{self, Output};
use crate::table::{Columns, Table};
use crate::{Error, Result};

/// Input of a tool: a file or standard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl Input {
    /// `-` denotes standard input, everything else a path.
    pub fn from_arg(arg: &str) -> Input {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::Path(arg.into())
        }
    }

    fn open(&self) -> Result<Box<dyn io::Read>> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin())),
            Input::Path(p) => File::open(p)
                .map(|f| Box::new(f) as Box<dyn io::Read>)
                .map_err(|e| Error::from(e).with_path(p)),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Configuration of `rename_fasta`
#[derive(Debug, Clone)]
pub struct FastaConfig {
    /// Table of equivalences, must have exactly two columns
    pub table: PathBuf,
    pub input: Input,
    /// Output file, standard output if `None`
    pub output: Option<PathBuf>,
    /// Sequence line width, 0 = no wrapping
    pub wrap: usize,
}

/// Configuration of `rename_table`
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub table: PathBuf,
    pub input: PathBuf,
    /// 1-based column number, all columns if `None`
    pub column: Option<i64>,
    pub output: Option<PathBuf>,
}

/// Configuration of `rename_tokens`
#[derive(Debug, Clone)]
pub struct TokensConfig {
    pub table: PathBuf,
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

/// Outcome of a tool run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of records, rows or lines read
    pub items: usize,
    /// Number of replacements done
    pub renamed: usize,
}

/// Renames FASTA headers. Nothing is written if the table or the input
/// cannot be parsed.
pub fn rename_fasta(config: &FastaConfig) -> Result<Summary> {
    let map = EquivalenceMap::from_path(&config.table, ColumnCheck::Exact)?;

    let reader = fasta::Reader::new(config.input.open()?);
    let mut renamed = reader.rename(&map);
    let records: Vec<OwnedRecord> = renamed
        .by_ref()
        .collect::<Result<_>>()
        .map_err(|e| e.with_path(config.input.to_string()))?;
    let summary = Summary {
        items: renamed.num_records(),
        renamed: renamed.num_renamed(),
    };

    let mut out = Output::create(config.output.as_deref())?;
    output::write_with(&mut out, |out| {
        for record in &records {
            record.write_wrap(&mut *out, config.wrap)?;
        }
        Ok(())
    })?;
    info!(
        "{} of {} FASTA records renamed, written to {}",
        summary.renamed, summary.items, out
    );
    Ok(summary)
}

/// Renames values in one column (or all columns) of a table. Nothing is
/// written if the column is out of range.
pub fn rename_table(config: &TableConfig) -> Result<Summary> {
    let map = EquivalenceMap::from_path(&config.table, ColumnCheck::Lenient)?;
    let mut table = Table::from_path(&config.input)?;

    let columns = match config.column {
        Some(number) => Columns::from_number(number, table.width())
            .map_err(|e| e.with_path(&config.input))?,
        None => Columns::All,
    };
    let summary = Summary {
        items: table.len(),
        renamed: table.rename(&map, columns),
    };

    let mut out = Output::create(config.output.as_deref())?;
    output::write_with(&mut out, |out| table.write(out))?;
    info!(
        "{} values renamed in {} rows, written to {}",
        summary.renamed, summary.items, out
    );
    Ok(summary)
}

/// Renames whitespace-delimited tokens line by line. Lines are written as
/// soon as they are renamed. If the output is closed by the receiving end,
/// reading stops without error.
pub fn rename_tokens(config: &TokensConfig) -> Result<Summary> {
    let map = EquivalenceMap::from_path(&config.table, ColumnCheck::Lenient)?;
    let mut lines = RenameLines::from_path(&config.input, &map)
        .map_err(|e| Error::from(e).with_path(&config.input))?;

    let mut out = Output::create(config.output.as_deref())?;
    let mut read_err = None;
    output::write_with(&mut out, |out| {
        for line in lines.by_ref() {
            match line {
                Ok(line) => {
                    out.write_all(line.as_bytes())?;
                    out.write_all(b"\n")?;
                }
                Err(e) => {
                    read_err = Some(e);
                    break;
                }
            }
        }
        Ok(())
    })?;
    if let Some(e) = read_err {
        return Err(e.with_path(&config.input));
    }

    let summary = Summary {
        items: lines.num_lines() as usize,
        renamed: lines.num_renamed(),
    };
    info!(
        "{} tokens renamed in {} lines, written to {}",
        summary.renamed, summary.items, out
    );
    Ok(summary)
}
