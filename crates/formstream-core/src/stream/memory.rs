//! In-memory stream over an owned byte buffer.

use std::io::{self, Read};

use super::Stream;
use crate::filename::MEMORY_LOCATOR;

/// Seekable stream over bytes held in memory. Reports the `memory://`
/// locator, so named parts built from it carry no filename.
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    data: io::Cursor<Vec<u8>>,
    eof: bool,
}

impl MemoryStream {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: io::Cursor::new(data.into()),
            eof: false,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.get_ref()
    }
}

impl Stream for MemoryStream {
    fn is_seekable(&self) -> bool {
        true
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.data.set_position(0);
        self.eof = false;
        Ok(())
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n == 0 && !buf.is_empty() {
            self.eof = true;
        }
        Ok(n)
    }

    fn size(&self) -> Option<u64> {
        Some(self.data.get_ref().len() as u64)
    }

    fn to_bytes(&mut self) -> io::Result<Vec<u8>> {
        Ok(self.data.get_ref().clone())
    }

    fn source_locator(&self) -> Option<&str> {
        Some(MEMORY_LOCATOR)
    }
}
