use std::fs::File;
use std::io;
use std::path::Path;

use super::OwnedRecord;
use crate::bufreader::{LineReader, BUFSIZE};
use crate::equiv::EquivalenceMap;
use crate::{Error, ErrorKind, Result};

/// Parser for multi-line FASTA files.
pub struct Reader<R: io::Read> {
    lines: LineReader<R>,
    // header of the following record, already consumed from input
    next_head: Option<Vec<u8>>,
    finished: bool,
}

impl Reader<File> {
    /// Creates a reader from a file path.
    ///
    /// # Example:
    ///
    /// ```no_run
    /// use seq_rename::fasta::Reader;
    ///
    /// let mut reader = Reader::from_path("seqs.fasta").unwrap();
    ///
    /// // (... do something with the reader)
    /// ```
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<Reader<File>> {
        File::open(path).map(Reader::new)
    }
}

impl<R> Reader<R>
where
    R: io::Read,
{
    /// Creates a new reader with the default buffer size of 64 KiB
    ///
    /// # Example:
    ///
    /// ```
    /// use seq_rename::fasta::Reader;
    /// let fasta = b">id\nSEQUENCE";
    ///
    /// let mut reader = Reader::new(&fasta[..]);
    /// let record = reader.next().unwrap().unwrap();
    /// assert_eq!(record.id(), Ok("id"))
    /// ```
    #[inline]
    pub fn new(reader: R) -> Reader<R> {
        Reader::with_capacity(reader, BUFSIZE)
    }

    /// Creates a new reader with a given buffer capacity. Lines longer than
    /// the buffer are still read completely.
    #[inline]
    pub fn with_capacity(reader: R, capacity: usize) -> Reader<R> {
        Reader {
            lines: LineReader::with_capacity(reader, capacity),
            next_head: None,
            finished: false,
        }
    }

    /// Reads the next record. After an error was returned, all subsequent
    /// calls return `None`.
    ///
    /// # Example:
    ///
    /// ```no_run
    /// use seq_rename::fasta::Reader;
    ///
    /// let mut reader = Reader::from_path("seqs.fasta").unwrap();
    ///
    /// while let Some(record) = reader.next() {
    ///     let record = record.unwrap();
    ///     println!("{}", record.id().unwrap());
    /// }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Result<OwnedRecord>> {
        if self.finished {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }

    fn read_record(&mut self) -> Result<Option<OwnedRecord>> {
        let head = match self.next_head.take() {
            Some(head) => head,
            None => match self.first_head()? {
                Some(head) => head,
                None => return Ok(None),
            },
        };
        let mut seq = vec![];
        while let Some(line) = self.lines.next_line()? {
            if let Some((&b'>', next_head)) = line.split_first() {
                self.next_head = Some(next_head.to_vec());
                return Ok(Some(OwnedRecord { head, seq }));
            }
            if is_blank(line) {
                continue;
            }
            seq.extend_from_slice(line);
        }
        self.finished = true;
        Ok(Some(OwnedRecord { head, seq }))
    }

    // skips empty lines and returns the first header
    fn first_head(&mut self) -> Result<Option<Vec<u8>>> {
        while let Some(line) = self.lines.next_line()? {
            if let Some((&b'>', head)) = line.split_first() {
                return Ok(Some(head.to_vec()));
            }
            let found = match line.iter().find(|b| !b.is_ascii_whitespace()) {
                Some(&b) => b,
                None => continue,
            };
            return Err(Error::new(ErrorKind::MalformedFasta {
                line: self.lines.line_num(),
                found,
            }));
        }
        Ok(None)
    }

    /// Returns a borrowed iterator over all FASTA records.
    ///
    /// # Example
    ///
    /// ```
    /// use seq_rename::fasta::{Reader, OwnedRecord};
    ///
    /// let fasta = b">id1
    /// ACGT
    /// >id2
    /// TGCA";
    ///
    /// let mut reader = Reader::new(&fasta[..]);
    ///
    /// let records: Result<Vec<_>, _> = reader
    ///     .records()
    ///     .collect();
    ///
    /// assert_eq!(records.unwrap(),
    ///     vec![
    ///         OwnedRecord {head: b"id1".to_vec(), seq: b"ACGT".to_vec()},
    ///         OwnedRecord {head: b"id2".to_vec(), seq: b"TGCA".to_vec()}
    ///     ]
    /// );
    /// ```
    pub fn records(&mut self) -> RecordsIter<'_, R> {
        RecordsIter { rdr: self }
    }

    /// Returns an iterator over all FASTA records like `Reader::records()`,
    /// but with the difference that it owns the underlying reader.
    pub fn into_records(self) -> RecordsIntoIter<R> {
        RecordsIntoIter { rdr: self }
    }

    /// Returns an iterator over all records, with headers rewritten
    /// according to `map` (see [`OwnedRecord::rename`](OwnedRecord::rename)).
    pub fn rename(self, map: &EquivalenceMap) -> Rename<'_, R> {
        Rename {
            rdr: self,
            map,
            n_records: 0,
            n_renamed: 0,
        }
    }
}

#[inline]
fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Borrowed iterator of `OwnedRecord`
pub struct RecordsIter<'a, R>
where
    R: io::Read + 'a,
{
    rdr: &'a mut Reader<R>,
}

impl<'a, R> Iterator for RecordsIter<'a, R>
where
    R: io::Read + 'a,
{
    type Item = Result<OwnedRecord>;
    fn next(&mut self) -> Option<Self::Item> {
        self.rdr.next()
    }
}

/// Iterator of `OwnedRecord` that owns the underlying reader
pub struct RecordsIntoIter<R: io::Read> {
    rdr: Reader<R>,
}

impl<R> Iterator for RecordsIntoIter<R>
where
    R: io::Read,
{
    type Item = Result<OwnedRecord>;
    fn next(&mut self) -> Option<Self::Item> {
        self.rdr.next()
    }
}

/// Iterator of renamed records, created by [`Reader::rename`](Reader::rename).
/// Records are returned in input order.
pub struct Rename<'m, R: io::Read> {
    rdr: Reader<R>,
    map: &'m EquivalenceMap,
    n_records: usize,
    n_renamed: usize,
}

impl<'m, R: io::Read> Rename<'m, R> {
    /// Number of records returned so far
    #[inline]
    pub fn num_records(&self) -> usize {
        self.n_records
    }

    /// Number of records returned so far, whose ID was renamed
    #[inline]
    pub fn num_renamed(&self) -> usize {
        self.n_renamed
    }
}

impl<'m, R: io::Read> Iterator for Rename<'m, R> {
    type Item = Result<OwnedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = try_opt!(self.rdr.next()?);
        self.n_records += 1;
        if record.rename(self.map) {
            self.n_renamed += 1;
        }
        Some(Ok(record))
    }
}
