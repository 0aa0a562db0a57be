use std::io;

/// Helper function for writing data (not necessarily stored in an
/// `OwnedRecord`) to the FASTA format. The sequence is written to one line.
#[inline]
pub fn write<W>(mut writer: W, head: &[u8], seq: &[u8]) -> io::Result<()>
where
    W: io::Write,
{
    write_head(&mut writer, head)?;
    write_seq(writer, seq)
}

/// Writes data to the FASTA format. Wraps the sequence to produce multi-line FASTA
/// with a maximum width specified by the `wrap` parameter (0 = no wrapping).
#[inline]
pub fn write_wrap<W>(mut writer: W, head: &[u8], seq: &[u8], wrap: usize) -> io::Result<()>
where
    W: io::Write,
{
    write_head(&mut writer, head)?;
    write_wrap_seq(writer, seq, wrap)
}

/// Writes only the header line.
#[inline]
pub fn write_head<W>(mut writer: W, head: &[u8]) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(b">")?;
    writer.write_all(head)?;
    writer.write_all(b"\n")
}

/// Writes the whole sequence to one line. An empty sequence results in an
/// empty line.
#[inline]
pub fn write_seq<W>(mut writer: W, seq: &[u8]) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(seq)?;
    writer.write_all(b"\n")
}

/// Writes the sequence, breaking lines after `wrap` residues. Nothing is
/// written for an empty sequence. With `wrap == 0`, this is the same as
/// [`write_seq`](write_seq).
#[inline]
pub fn write_wrap_seq<W>(mut writer: W, seq: &[u8], wrap: usize) -> io::Result<()>
where
    W: io::Write,
{
    if wrap == 0 {
        return write_seq(writer, seq);
    }
    for chunk in seq.chunks(wrap) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
