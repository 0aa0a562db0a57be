use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use std::str;

use memchr::memchr;

use crate::{fill_buf, trim_cr};

/// The default initial buffer size for readers.
pub const BUFSIZE: usize = 64 * 1024;

/// Line reader on top of `buffer_redux::BufReader`.
///
/// Lines are copied into an internal buffer, which is reused for every
/// call to [`next_line`](LineReader::next_line). UNIX (LF) and Windows
/// (CRLF) line endings are both removed, a final line without terminator
/// is returned as well.
pub struct LineReader<R>
where
    R: io::Read,
{
    buf_reader: buffer_redux::BufReader<R>,
    line: Vec<u8>,
    // number of lines returned so far
    line_num: u64,
}

impl LineReader<File> {
    /// Creates a line reader from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<LineReader<File>> {
        File::open(path).map(LineReader::new)
    }
}

impl<R> LineReader<R>
where
    R: io::Read,
{
    #[inline]
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, BUFSIZE)
    }

    /// Creates a new reader with a given buffer capacity. The minimum allowed
    /// capacity is 1.
    #[inline]
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        assert!(capacity >= 1);
        LineReader {
            buf_reader: buffer_redux::BufReader::with_capacity(capacity, reader),
            line: Vec::with_capacity(256),
            line_num: 0,
        }
    }

    /// Number of the line returned by the last call to `next_line()` (1-based),
    /// or 0 if nothing was read yet.
    #[inline]
    pub fn line_num(&self) -> u64 {
        self.line_num
    }

    /// Returns the next line without line terminator, or `None` if the
    /// input is exhausted.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.line.clear();
        let mut found = false;
        loop {
            if self.buf_reader.buf_len() == 0 {
                self.buf_reader.make_room();
                if fill_buf(&mut self.buf_reader)? == 0 {
                    if !found {
                        return Ok(None);
                    }
                    break;
                }
            }
            found = true;
            let buf = self.buf_reader.buffer();
            if let Some(pos) = memchr(b'\n', buf) {
                self.line.extend_from_slice(&buf[..pos]);
                self.buf_reader.consume(pos + 1);
                break;
            }
            // line continues beyond the buffered data
            let n = buf.len();
            self.line.extend_from_slice(buf);
            self.buf_reader.consume(n);
        }
        self.line_num += 1;
        Ok(Some(trim_cr(&self.line)))
    }

    /// Like [`next_line`](LineReader::next_line), but validates UTF-8.
    /// Invalid input results in an error of kind `io::ErrorKind::InvalidData`.
    pub fn next_str(&mut self) -> io::Result<Option<&str>> {
        let line_num = self.line_num + 1;
        match self.next_line()? {
            Some(line) => str::from_utf8(line).map(Some).map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid UTF-8 at line {}: {}", line_num, e),
                )
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LineReader;

    fn collect(input: &[u8], cap: usize) -> Vec<Vec<u8>> {
        let mut reader = LineReader::with_capacity(input, cap);
        let mut lines = vec![];
        while let Some(line) = reader.next_line().unwrap() {
            lines.push(line.to_vec());
        }
        lines
    }

    #[test]
    fn line_endings() {
        let input = b"a b\r\n\ncd\nlast";
        for cap in 1..20 {
            let lines = collect(&input[..], cap);
            assert_eq!(
                lines,
                vec![b"a b".to_vec(), vec![], b"cd".to_vec(), b"last".to_vec()],
                "capacity {}",
                cap
            );
        }
    }

    #[test]
    fn line_numbers() {
        let mut reader = LineReader::new(&b"x\ny\n"[..]);
        assert_eq!(reader.line_num(), 0);
        reader.next_line().unwrap();
        reader.next_line().unwrap();
        assert_eq!(reader.line_num(), 2);
        assert!(reader.next_line().unwrap().is_none());
        assert_eq!(reader.line_num(), 2);
    }

    #[test]
    fn invalid_utf8() {
        let mut reader = LineReader::new(&b"ok\n\xff\xfe\n"[..]);
        assert_eq!(reader.next_str().unwrap(), Some("ok"));
        let err = reader.next_str().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
