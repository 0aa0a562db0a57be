use std::io;
use std::str::{self, Utf8Error};

use memchr::memchr2;

use super::{write, write_wrap};
use crate::equiv::EquivalenceMap;

/// A FASTA record that owns its data.
///
/// `head` is the header line without the leading `>`, `seq` the sequence
/// with all line terminators removed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedRecord {
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
}

impl OwnedRecord {
    #[inline]
    pub fn new<H, S>(head: H, seq: S) -> Self
    where
        H: Into<Vec<u8>>,
        S: Into<Vec<u8>>,
    {
        OwnedRecord {
            head: head.into(),
            seq: seq.into(),
        }
    }

    /// Return the header line of the record as byte slice
    #[inline]
    pub fn head(&self) -> &[u8] {
        &self.head
    }

    /// Return the sequence as byte slice
    #[inline]
    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    // spaces or tabs directly after '>' are not part of the ID
    #[inline]
    fn id_start(&self) -> usize {
        self.head
            .iter()
            .position(|&b| b != b' ' && b != b'\t')
            .unwrap_or(self.head.len())
    }

    #[inline]
    fn id_end(&self) -> Option<usize> {
        let start = self.id_start();
        memchr2(b' ', b'\t', &self.head[start..]).map(|pos| start + pos)
    }

    /// Returns the record ID (everything up to the first space or tab
    /// following it) as byte slice.
    #[inline]
    pub fn id_bytes(&self) -> &[u8] {
        let start = self.id_start();
        match self.id_end() {
            Some(end) => &self.head[start..end],
            None => &self.head[start..],
        }
    }

    /// Returns the record ID as `&str`.
    #[inline]
    pub fn id(&self) -> Result<&str, Utf8Error> {
        str::from_utf8(self.id_bytes())
    }

    /// Returns the record description (separated from the ID by a space or tab)
    /// as byte slice, if present.
    #[inline]
    pub fn desc_bytes(&self) -> Option<&[u8]> {
        self.id_end().map(|pos| &self.head[pos + 1..])
    }

    /// Returns the record description as `&str`, if present.
    #[inline]
    pub fn desc(&self) -> Option<Result<&str, Utf8Error>> {
        self.desc_bytes().map(str::from_utf8)
    }

    /// Replaces the header by the new name of the record ID, if the ID
    /// is found in `map`. The description is dropped in this case.
    /// Returns `true` if the record was renamed.
    ///
    /// IDs that are not valid UTF-8 can never match.
    pub fn rename(&mut self, map: &EquivalenceMap) -> bool {
        let new_head = match self.id().ok().and_then(|id| map.get(id)) {
            Some(name) => name.as_bytes().to_vec(),
            None => return false,
        };
        self.head = new_head;
        true
    }

    /// Writes the record with the sequence on one line.
    #[inline]
    pub fn write<W: io::Write>(&self, writer: W) -> io::Result<()> {
        write(writer, &self.head, &self.seq)
    }

    /// Writes the record to the given `io::Write` instance.
    /// The sequence is wrapped to produce multi-line FASTA with a maximum width
    /// specified by `wrap` (0 = no wrapping).
    #[inline]
    pub fn write_wrap<W: io::Write>(&self, writer: W, wrap: usize) -> io::Result<()> {
        write_wrap(writer, &self.head, &self.seq, wrap)
    }
}
