//! FASTA reading, renaming and writing
//!
//! # Example
//!
//! ```rust
//! use seq_rename::equiv::EquivalenceMap;
//! use seq_rename::fasta::Reader;
//!
//! let input = b">id1 some description
//! ACGT
//! ACGT
//! >id2
//! TGCA
//! ";
//! let map: EquivalenceMap = vec![("id1", "sample_1")].into_iter().collect();
//!
//! let mut output = vec![];
//! for result in Reader::new(&input[..]).rename(&map) {
//!     let record = result.unwrap();
//!     println!("ID: '{}', description: {:?}", record.id().unwrap(), record.desc());
//!     record.write_wrap(&mut output, 4).unwrap();
//! }
//!
//! assert_eq!(
//!     std::str::from_utf8(&output).unwrap(),
//!     ">sample_1\nACGT\nACGT\n>id2\nTGCA\n"
//! );
//! ```
//!
//! # Details on parsing and writing
//!
//! * UNIX (LF) and Windows (CRLF) line endings are accepted, also mixed
//!   within the same file. Writing always uses UNIX line endings.
//! * Empty lines are allowed anywhere in the file, they are ignored.
//! * The first non-empty line must start with `>`. If not, an error with
//!   `ErrorKind::MalformedFasta` is returned.
//! * The ID is the first word of the header: spaces or tabs directly after
//!   `>` are skipped, and the ID ends at the next space or tab. The
//!   description is everything after it.
//! * Sequence lines are concatenated without line terminators. Their
//!   content is never modified, whitespace at line ends included.
//! * Two consecutive headers yield a record with an empty sequence, as does
//!   a header at the end of the input.
//! * Empty input results in no records at all.
//! * When a record is renamed, the whole header line (ID and description) is
//!   replaced by the new name.
//! * Sequences are written wrapped to [`DEFAULT_WRAP`](DEFAULT_WRAP) residues
//!   per line unless another width is given. A width of 0 writes every
//!   sequence on a single line.

mod reader;
mod record;
mod write;

pub use self::reader::*;
pub use self::record::*;
pub use self::write::*;

/// Default number of residues per sequence line in FASTA output
pub const DEFAULT_WRAP: usize = 60;
