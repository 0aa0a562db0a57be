//! Output destinations of the renaming tools
//!
//! Output goes to a file if a path is given, otherwise to standard output.
//! A downstream program closing the pipe early (e.g. `rename_fasta ... | head`)
//! is not an error: use [`ignore_broken_pipe`](ignore_broken_pipe) around the
//! writing step only, so other I/O errors still surface.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Buffered output to a file or to standard output
pub enum Output {
    File(BufWriter<File>, PathBuf),
    Stdout(BufWriter<io::StdoutLock<'static>>),
}

impl Output {
    /// Creates (or truncates) the file at `path`, or locks standard output
    /// if `path` is `None`.
    pub fn create(path: Option<&Path>) -> Result<Output> {
        match path {
            Some(p) => File::create(p)
                .map(|f| Output::File(BufWriter::new(f), p.to_owned()))
                .map_err(|e| Error::from(e).with_path(p)),
            None => Ok(Output::Stdout(BufWriter::new(io::stdout().lock()))),
        }
    }

    /// Path of the output file, `None` for standard output
    pub fn path(&self) -> Option<&Path> {
        match self {
            Output::File(_, path) => Some(path),
            Output::Stdout(_) => None,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Output::File(_, path) => write!(f, "{}", path.display()),
            Output::Stdout(_) => write!(f, "<stdout>"),
        }
    }
}

impl Write for Output {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::File(w, _) => w.write(buf),
            Output::Stdout(w) => w.write(buf),
        }
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Output::File(w, _) => w.write_all(buf),
            Output::Stdout(w) => w.write_all(buf),
        }
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::File(w, _) => w.flush(),
            Output::Stdout(w) => w.flush(),
        }
    }
}

/// Returns `true` if the reading end of the output was closed.
#[inline]
pub fn is_broken_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}

/// Turns a broken pipe error into success, leaves other results unchanged.
pub fn ignore_broken_pipe(res: io::Result<()>) -> io::Result<()> {
    match res {
        Err(ref e) if is_broken_pipe(e) => {
            debug!("Output closed by the receiving end, stopping");
            Ok(())
        }
        res => res,
    }
}

/// Runs the writing step `func` on `out`, flushes the output and converts
/// errors, ignoring a broken pipe. Errors carry the output path.
pub fn write_with<F>(out: &mut Output, func: F) -> Result<()>
where
    F: FnOnce(&mut Output) -> io::Result<()>,
{
    let res = func(out).and_then(|_| out.flush());
    ignore_broken_pipe(res).map_err(|e| match out.path() {
        Some(p) => Error::from(e).with_path(p),
        None => Error::from(e).with_path("<stdout>"),
    })
}
