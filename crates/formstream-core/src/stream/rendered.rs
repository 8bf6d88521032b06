//! Non-readable stream that renders a value on demand.

use std::fmt::Display;
use std::io;

use super::{not_seekable, Stream};

/// Wraps a [`Display`] value. It is not readable, so `build` writes its
/// rendered text in one piece through `to_bytes`.
#[derive(Debug, Clone)]
pub struct RenderedStream<T> {
    value: T,
}

impl<T: Display + Send> RenderedStream<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Display + Send> Stream for RenderedStream<T> {
    fn is_seekable(&self) -> bool {
        false
    }

    fn rewind(&mut self) -> io::Result<()> {
        Err(not_seekable())
    }

    fn is_readable(&self) -> bool {
        false
    }

    fn eof(&self) -> bool {
        true
    }

    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "stream is not readable",
        ))
    }

    fn size(&self) -> Option<u64> {
        None
    }

    fn to_bytes(&mut self) -> io::Result<Vec<u8>> {
        Ok(self.value.to_string().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_display_value() {
        let mut s = RenderedStream::new(4711);
        assert!(!s.is_readable());
        assert!(s.read(&mut [0u8; 4]).is_err());
        assert_eq!(s.to_bytes().unwrap(), b"4711");
        assert_eq!(s.size(), None);
        assert_eq!(s.into_inner(), 4711);
    }
}
