//! Renaming values in tab-separated tables
//!
//! Every cell may hold several values separated by single spaces
//! (*sub-tokens*), for example a list of sample names. Cells are therefore
//! always stored as a list of sub-tokens, and renaming is applied to each
//! sub-token separately.
//!
//! ```
//! use seq_rename::equiv::EquivalenceMap;
//! use seq_rename::table::{Columns, Table};
//!
//! let map: EquivalenceMap = vec![("foo", "bar")].into_iter().collect();
//! let mut table = Table::from_reader(&b"foo baz\tqux\tfoo\n"[..]).unwrap();
//!
//! let columns = Columns::from_number(1, table.width()).unwrap();
//! assert_eq!(table.rename(&map, columns), 1);
//!
//! let mut out = vec![];
//! table.write(&mut out).unwrap();
//! assert_eq!(&out[..], &b"bar baz\tqux\tfoo\n"[..]);
//! ```
//!
//! Parsing details:
//!
//! * There is no header line, all lines are data rows.
//! * Lines starting with `#` and empty lines are skipped.
//! * Rows may have different numbers of cells, they are kept as they are.
//! * Sub-tokens are separated by exactly one space. Consecutive spaces
//!   therefore result in empty sub-tokens, which are kept so that the cell
//!   is written back unchanged.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::bufreader::LineReader;
use crate::equiv::EquivalenceMap;
use crate::{Error, ErrorKind, Result};

/// Table cell: a list of space-separated sub-tokens (at least one)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    tokens: Vec<String>,
}

impl Cell {
    /// Splits a cell value at single spaces.
    pub fn parse(value: &str) -> Cell {
        Cell {
            tokens: value.split(' ').map(str::to_string).collect(),
        }
    }

    #[inline]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Renames all sub-tokens found in `map` and returns the number
    /// of replacements.
    pub fn rename(&mut self, map: &EquivalenceMap) -> usize {
        let mut n = 0;
        for token in &mut self.tokens {
            if map.rename_in_place(token) {
                n += 1;
            }
        }
        n
    }

    /// Writes the sub-tokens joined by a single space.
    pub fn write<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                writer.write_all(b" ")?;
            }
            writer.write_all(token.as_bytes())?;
        }
        Ok(())
    }
}

/// One line of the table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Splits a line into tab-separated cells.
    pub fn parse(line: &str) -> Row {
        Row {
            cells: line.split('\t').map(Cell::parse).collect(),
        }
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Renames the sub-tokens of the selected cells, returns the number of
    /// replacements. A row too short for the selected column is left alone.
    pub fn rename(&mut self, map: &EquivalenceMap, columns: Columns) -> usize {
        match columns {
            Columns::All => self.cells.iter_mut().map(|cell| cell.rename(map)).sum(),
            Columns::Index(i) => self.cells.get_mut(i).map_or(0, |cell| cell.rename(map)),
        }
    }

    /// Writes the cells separated by tabs, followed by a newline.
    pub fn write<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\t")?;
            }
            cell.write(&mut writer)?;
        }
        writer.write_all(b"\n")
    }
}

/// Selection of the columns to rename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    /// Every column
    All,
    /// One column (0-based index)
    Index(usize),
}

impl Columns {
    /// Converts a 1-based column number into a column selection, making
    /// sure that the column exists in a table with `width` columns.
    pub fn from_number(number: i64, width: usize) -> Result<Columns> {
        let index = number - 1;
        if index < 0 || index as u64 >= width as u64 {
            return Err(Error::new(ErrorKind::ColumnOutOfRange {
                column: number,
                width,
            }));
        }
        Ok(Columns::Index(index as usize))
    }
}

/// Tab-separated table, loaded completely into memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Reads a table from a file. Errors carry the path of the file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        File::open(path)
            .map_err(Error::from)
            .and_then(Table::from_reader)
            .map_err(|e| e.with_path(path))
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Table> {
        let mut reader = LineReader::new(reader);
        let mut rows = vec![];
        while let Some(line) = reader.next_str()? {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            rows.push(Row::parse(line));
        }
        Ok(Table { rows })
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, which is the number of cells in the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Renames sub-tokens in the selected columns and returns the total number
    /// of replacements. Rows, cells and sub-tokens are never added, removed
    /// or reordered.
    pub fn rename(&mut self, map: &EquivalenceMap, columns: Columns) -> usize {
        self.rows.iter_mut().map(|row| row.rename(map, columns)).sum()
    }

    /// Writes all rows as tab-separated lines.
    pub fn write<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        for row in &self.rows {
            row.write(&mut writer)?;
        }
        Ok(())
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table { rows }
    }
}
