//! Renaming whitespace-delimited tokens in any text file
//!
//! Each line is split at runs of whitespace, and every token found in the
//! map is replaced, no matter where it occurs. The tokens are joined by
//! single spaces, so the original spacing is not preserved:
//!
//! ```
//! use seq_rename::equiv::EquivalenceMap;
//! use seq_rename::lines::rename_tokens;
//!
//! let map: EquivalenceMap = vec![("old", "new")].into_iter().collect();
//! let mut out = String::new();
//! assert_eq!(rename_tokens("  old   token  ", &map, &mut out), 1);
//! assert_eq!(out, "new token");
//! ```

use std::fs::File;
use std::io;
use std::path::Path;

use crate::bufreader::LineReader;
use crate::equiv::EquivalenceMap;
use crate::Result;

/// Clears `out` and writes the renamed tokens of `line` to it.
/// Returns the number of replaced tokens.
pub fn rename_tokens(line: &str, map: &EquivalenceMap, out: &mut String) -> usize {
    out.clear();
    let mut n = 0;
    for (i, token) in line.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match map.get(token) {
            Some(new) => {
                out.push_str(new);
                n += 1;
            }
            None => out.push_str(token),
        }
    }
    n
}

/// Iterator over the renamed lines of a text input, one `String` (without
/// line terminator) per input line, in input order.
pub struct RenameLines<'m, R: io::Read> {
    lines: LineReader<R>,
    map: &'m EquivalenceMap,
    n_renamed: usize,
}

impl<'m> RenameLines<'m, File> {
    pub fn from_path<P: AsRef<Path>>(path: P, map: &'m EquivalenceMap) -> io::Result<Self> {
        File::open(path).map(|f| RenameLines::new(f, map))
    }
}

impl<'m, R: io::Read> RenameLines<'m, R> {
    pub fn new(reader: R, map: &'m EquivalenceMap) -> Self {
        RenameLines {
            lines: LineReader::new(reader),
            map,
            n_renamed: 0,
        }
    }

    /// Number of lines returned so far
    #[inline]
    pub fn num_lines(&self) -> u64 {
        self.lines.line_num()
    }

    /// Number of tokens replaced so far
    #[inline]
    pub fn num_renamed(&self) -> usize {
        self.n_renamed
    }
}

impl<'m, R: io::Read> Iterator for RenameLines<'m, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = try_opt!(self.lines.next_str())?;
        let mut out = String::with_capacity(line.len());
        self.n_renamed += rename_tokens(line, self.map, &mut out);
        Some(Ok(out))
    }
}
