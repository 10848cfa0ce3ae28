//! Buffered append-only byte sink for candidate output.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::error::PrinceError;

const OUT_BUF_LEN: usize = 8192;

/// Collects candidate bytes and hands them to the underlying writer in
/// buffer-sized batches. `flush` must be called to drain the tail.
pub struct Sink<W: Write> {
    writer: W,
    buf: Vec<u8>,
}

impl<W: Write> Sink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buf: Vec::with_capacity(OUT_BUF_LEN),
        }
    }

    /// Append `bytes`, draining the internal buffer first when it would
    /// overflow.
    pub fn push(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.buf.len() + bytes.len() > OUT_BUF_LEN {
            self.flush()?;
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Write all buffered bytes through to the writer.
    pub fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            self.writer.write_all(&self.buf)?;
            self.buf.clear();
        }
        Ok(())
    }
}

/// Open the run's output: the given file in append mode, or stdout.
///
/// Rust file and stdout handles write raw bytes on every platform, so the
/// emitted byte stream is identical regardless of OS text conventions.
pub fn open(output_file: Option<&Path>) -> Result<Box<dyn Write>, PrinceError> {
    match output_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| PrinceError::OutputFile {
                    path: path.display().to_string(),
                    source,
                })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_buffers_until_flush() {
        let mut out = Vec::new();
        {
            let mut sink = Sink::new(&mut out);
            sink.push(b"abc\n").unwrap();
            sink.push(b"de\n").unwrap();
            sink.flush().unwrap();
        }
        assert_eq!(out, b"abc\nde\n");
    }

    #[test]
    fn overflowing_push_drains_first() {
        let mut out = Vec::new();
        {
            let mut sink = Sink::new(&mut out);
            sink.push(&vec![b'x'; OUT_BUF_LEN - 1]).unwrap();
            sink.push(b"yy").unwrap();
            // no final flush: only the drained prefix reaches the writer
        }
        assert_eq!(out.len(), OUT_BUF_LEN - 1);
    }
}
