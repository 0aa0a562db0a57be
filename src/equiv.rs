//! Loading the table of equivalences
//!
//! The table is tab-separated, has no header and maps the name in the
//! first column to the name in the second column. Parsing details:
//!
//! * Lines starting with `#` and empty lines are skipped.
//! * Fields are read as plain strings (no numeric conversion, so `007`
//!   stays `007`). Surrounding whitespace is removed from every field.
//! * Rows are applied in file order. If a name is listed twice, the later
//!   row overwrites the earlier one.
//! * With [`ColumnCheck::Exact`](ColumnCheck::Exact), every row must have
//!   exactly two columns, otherwise `ErrorKind::MalformedTable` is returned.
//!   With [`ColumnCheck::Lenient`](ColumnCheck::Lenient), additional columns
//!   are ignored.
//! * Rows without a usable name in the first two columns (a single column,
//!   or an empty field) are skipped with a warning.

use std::collections::hash_map;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::bufreader::LineReader;
use crate::{Error, ErrorKind, Result};

/// Column count validation applied while loading a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnCheck {
    /// Every row must have exactly two columns
    Exact,
    /// Only the first two columns are read, the rest is ignored
    Lenient,
}

/// Exact-match mapping from original names to new names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceMap {
    map: HashMap<String, String>,
}

impl EquivalenceMap {
    /// Reads a table of equivalences from a file.
    /// Errors carry the path of the table.
    pub fn from_path<P: AsRef<Path>>(path: P, check: ColumnCheck) -> Result<EquivalenceMap> {
        let path = path.as_ref();
        File::open(path)
            .map_err(Error::from)
            .and_then(|f| EquivalenceMap::from_reader(f, check))
            .map_err(|e| e.with_path(path))
    }

    /// Reads a table of equivalences from any `io::Read` instance.
    pub fn from_reader<R: io::Read>(reader: R, check: ColumnCheck) -> Result<EquivalenceMap> {
        let mut reader = LineReader::new(reader);
        let mut map = HashMap::new();
        loop {
            let line_num = reader.line_num() + 1;
            let line = match reader.next_str()? {
                Some(line) => line,
                None => break,
            };
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let key = fields.next().map(str::trim).unwrap_or_default();
            let value = fields.next().map(str::trim);
            if check == ColumnCheck::Exact {
                let found = 1 + usize::from(value.is_some()) + fields.count();
                if found != 2 {
                    return Err(Error::new(ErrorKind::MalformedTable {
                        line: line_num,
                        found,
                    }));
                }
            }
            match value {
                Some(value) if !key.is_empty() && !value.is_empty() => {
                    if let Some(previous) = map.insert(key.to_string(), value.to_string()) {
                        debug!(
                            "'{}' listed again at line {}, replacing '{}' by '{}'",
                            key, line_num, previous, value
                        );
                    }
                }
                _ => warn!(
                    "Skipping line {} of the table of equivalences: no name pair found",
                    line_num
                ),
            }
        }
        debug!("Loaded {} name equivalences", map.len());
        Ok(EquivalenceMap { map })
    }

    /// Returns the new name for `name`, if present.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// Returns the new name for `name`, or `name` itself if there is none.
    #[inline]
    pub fn rename<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// Replaces `name` in place if it has a new name.
    /// Returns `true` if a replacement was done.
    #[inline]
    pub fn rename_in_place(&self, name: &mut String) -> bool {
        match self.get(name.as_str()) {
            Some(new) => {
                name.clear();
                name.push_str(new);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over (original, new) name pairs in arbitrary order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.map.iter(),
        }
    }
}

/// Collects (original, new) pairs, later pairs overwriting earlier ones.
impl<K, V> FromIterator<(K, V)> for EquivalenceMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        EquivalenceMap {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Iterator over the name pairs of an `EquivalenceMap`
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
