//! This library renames identifiers in FASTA files, delimited tables and
//! plain text files, driven by a table of equivalences (old name → new name).
//! It backs the three command line tools `rename_fasta`, `rename_table` and
//! `rename_tokens`, but all readers and renamers can be used on their own.
//!
//! All substitutions are exact: a FASTA ID, a table sub-token or a text
//! token is only replaced if it is equal to a key of the
//! [`EquivalenceMap`](equiv::EquivalenceMap). Anything else passes through
//! unchanged.
//!
//! # Table of equivalences
//!
//! The table is tab-separated UTF-8 text without header. The first column
//! holds the current name, the second column the new name. Lines starting
//! with `#` are ignored. If a name appears several times, the last
//! occurrence wins.
//!
//! ```
//! use seq_rename::equiv::{ColumnCheck, EquivalenceMap};
//!
//! let table = b"# old\tnew\nseq1\tSampleA\nseq2\tSampleB\n";
//! let map = EquivalenceMap::from_reader(&table[..], ColumnCheck::Exact).unwrap();
//! assert_eq!(map.rename("seq1"), "SampleA");
//! assert_eq!(map.rename("seq3"), "seq3");
//! ```
//!
//! # Renaming FASTA headers
//!
//! [`fasta::Reader`](fasta::Reader) parses multi-line FASTA,
//! [`Reader::rename`](fasta::Reader::rename) lazily rewrites the header of each
//! record whose ID is found in the map:
//!
//! ```
//! use seq_rename::equiv::EquivalenceMap;
//! use seq_rename::fasta::{self, Reader};
//!
//! let map: EquivalenceMap = vec![("seq1", "SampleA")].into_iter().collect();
//! let input = b">seq1 desc\nACGT\n>seq2 desc\nTTTT\n";
//!
//! let mut output = vec![];
//! for record in Reader::new(&input[..]).rename(&map) {
//!     record.unwrap().write_wrap(&mut output, fasta::DEFAULT_WRAP).unwrap();
//! }
//! assert_eq!(&output[..], &b">SampleA\nACGT\n>seq2 desc\nTTTT\n"[..]);
//! ```
//!
//! # Tables and text
//!
//! See the [`table`](table) and [`lines`](lines) modules. The
//! [`tools`](tools) module contains the complete workflows of the command
//! line tools, configured with plain structs.

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;

use std::io;

macro_rules! try_opt {
    ($expr: expr) => {
        match $expr {
            Ok(item) => item,
            Err(e) => return Some(Err(::std::convert::From::from(e))),
        }
    };
}

pub mod bufreader;
pub mod cli;
pub mod equiv;
mod error;
pub mod fasta;
pub mod lines;
pub mod output;
pub mod table;
pub mod tools;

pub use crate::error::*;

/// Remove a final '\r' from a byte slice
#[inline]
fn trim_cr(line: &[u8]) -> &[u8] {
    if let Some((&b'\r', remaining)) = line.split_last() {
        remaining
    } else {
        line
    }
}

/// Makes sure the buffer is full after this call (unless EOF reached)
/// code adapted from `io::Read::read_exact`
fn fill_buf<R>(
    reader: &mut buffer_redux::BufReader<R, buffer_redux::policy::StdPolicy>,
) -> io::Result<usize>
where
    R: io::Read,
{
    let initial_size = reader.buffer().len();
    let mut num_read = 0;
    while initial_size + num_read < reader.capacity() {
        match reader.read_into_buf() {
            Ok(0) => break,
            Ok(n) => num_read += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(num_read)
}
