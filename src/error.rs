use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum ErrorKind {
    /// `std::io::Error`
    Io(io::Error),
    /// A row of the equivalence table does not have exactly two columns.
    /// Only raised when the table is loaded with `ColumnCheck::Exact`.
    MalformedTable {
        /// Line number (1-based)
        line: u64,
        /// Number of tab-separated columns found instead
        found: usize,
    },
    /// The first non-empty line of the FASTA input does not start with `>`
    MalformedFasta {
        /// Line number (1-based)
        line: u64,
        /// Byte found instead
        found: u8,
    },
    /// A 1-based column number pointing outside of the table
    ColumnOutOfRange {
        /// The column number as supplied by the user
        column: i64,
        /// Number of columns of the widest row
        width: usize,
    },
}

/// Error returned by all readers and the renaming tools
#[derive(Debug)]
pub struct Error {
    kind: Box<ErrorKind>,
    path: Option<PathBuf>,
}

impl Error {
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Error {
            kind: Box::new(kind),
            path: None,
        }
    }

    /// Returns a reference to the [`ErrorKind`](ErrorKind)
    /// associated with the error.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the [`ErrorKind`](ErrorKind) associated with
    /// the error, thereby consuming the error.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        *self.kind
    }

    /// Returns the path of the file the error relates to, if known.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Attaches the path of the offending file. An already present path
    /// is kept, since it was set closer to the source of the error.
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        if self.path.is_none() {
            self.path = Some(path.as_ref().to_owned());
        }
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(path) = self.path.as_ref() {
            write!(f, "{}: ", path.display())?;
        }
        match self.kind() {
            ErrorKind::Io(ref e) => e.fmt(f),
            ErrorKind::MalformedTable { line, found } => write!(
                f,
                "equivalence table parse error: expected exactly two tab-separated columns \
                 but found {} at line {}.",
                found, line
            ),
            ErrorKind::MalformedFasta { line, found } => write!(
                f,
                "FASTA parse error: expected '>' at record start but found '{}' at line {}.",
                (*found as char).escape_default(),
                line
            ),
            ErrorKind::ColumnOutOfRange { column, width } => write!(
                f,
                "column {} is out of range, the table has {} column(s).",
                column, width
            ),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::new(ErrorKind::Io(e))
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}
