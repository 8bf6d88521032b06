//! Output buffer for an assembled body.
//!
//! Stays in memory up to a threshold, then rolls over to an anonymous temp
//! file, so large uploads do not grow resident memory without bound.

use std::io::{self, Read, Seek, SeekFrom, Write};

use tempfile::SpooledTempFile;

use super::Stream;
use crate::filename::MEMORY_LOCATOR;

/// Append-only writer used while serializing. Call `finish` to get the
/// readable [`BodyStream`] positioned at offset 0.
pub(crate) struct BodyWriter {
    file: SpooledTempFile,
    len: u64,
    spilled: bool,
}

impl BodyWriter {
    pub(crate) fn new(spool_threshold: usize) -> Self {
        Self {
            file: SpooledTempFile::new(spool_threshold),
            len: 0,
            spilled: false,
        }
    }

    pub(crate) fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.len += data.len() as u64;
        if !self.spilled && self.file.is_rolled() {
            self.spilled = true;
            tracing::debug!(bytes = self.len, "multipart body spilled to temp file");
        }
        Ok(())
    }

    pub(crate) fn finish(mut self) -> io::Result<BodyStream> {
        self.file.flush()?;
        self.file.seek(SeekFrom::Start(0))?;
        Ok(BodyStream {
            file: self.file,
            len: self.len,
            eof: false,
        })
    }
}

/// The assembled multipart body. Readable through both [`Stream`] and
/// `std::io::Read`/`Seek`.
#[derive(Debug)]
pub struct BodyStream {
    file: SpooledTempFile,
    len: u64,
    eof: bool,
}

impl BodyStream {
    /// Total body length in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if the body outgrew the spool threshold and lives on disk.
    pub fn is_spilled(&self) -> bool {
        self.file.is_rolled()
    }
}

impl Read for BodyStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.file.read(buf)?;
        if n == 0 && !buf.is_empty() {
            self.eof = true;
        }
        Ok(n)
    }
}

impl Seek for BodyStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.eof = false;
        self.file.seek(pos)
    }
}

impl Stream for BodyStream {
    fn is_seekable(&self) -> bool {
        true
    }

    fn rewind(&mut self) -> io::Result<()> {
        Seek::seek(self, SeekFrom::Start(0)).map(|_| ())
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn size(&self) -> Option<u64> {
        Some(self.len)
    }

    fn to_bytes(&mut self) -> io::Result<Vec<u8>> {
        Seek::seek(self, SeekFrom::Start(0))?;
        let mut out = Vec::with_capacity(self.len as usize);
        Read::read_to_end(self, &mut out)?;
        Ok(out)
    }

    fn source_locator(&self) -> Option<&str> {
        Some(MEMORY_LOCATOR)
    }
}
