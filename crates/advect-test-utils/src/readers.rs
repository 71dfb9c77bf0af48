//! `Read` implementations that misbehave in controlled ways.

use std::io::{self, Read};

/// Serves a byte slice in chunks of at most `chunk` bytes per `read`,
/// interleaved with `Interrupted` errors.
pub struct ChunkedReader<'a> {
    data: &'a [u8],
    chunk: usize,
    interrupt_next: bool,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        assert!(chunk > 0, "chunk size must be non-zero");
        Self {
            data,
            chunk,
            interrupt_next: true,
        }
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        self.interrupt_next = true;
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Yields zero bytes until `fail_after` bytes have been served, then
/// fails every read with `ErrorKind::Other`.
pub struct FailingReader {
    remaining: usize,
}

impl FailingReader {
    pub fn new(fail_after: usize) -> Self {
        Self {
            remaining: fail_after,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::other("injected read failure"));
        }
        let n = self.remaining.min(buf.len());
        buf[..n].fill(0);
        self.remaining -= n;
        Ok(n)
    }
}
