//! Byte stream abstraction consumed and produced by the builder.
//!
//! Parts are stored as `Box<dyn Stream>`; the factory in [`factory`] adapts
//! strings, byte buffers and raw handles into one. [`BodyStream`] is what
//! `build` hands back.

mod body;
mod factory;
mod file;
mod memory;
mod rendered;

pub use body::BodyStream;
pub(crate) use body::BodyWriter;
pub use factory::{Content, FactoryAdapter, LegacyStreamFactory, RawHandle, StandardStreams, StreamFactory};
pub use file::{FileStream, ReaderStream};
pub use memory::MemoryStream;
pub use rendered::RenderedStream;

use std::io;

/// A readable and possibly seekable source of part content.
pub trait Stream: Send {
    /// Whether `rewind` can move back to offset 0.
    fn is_seekable(&self) -> bool;

    /// Moves to offset 0. Errors on non-seekable streams.
    fn rewind(&mut self) -> io::Result<()>;

    /// Whether `read` yields content. Non-readable streams are written via
    /// `to_bytes` instead.
    fn is_readable(&self) -> bool;

    /// True once a read has hit the end of the content.
    fn eof(&self) -> bool;

    /// Reads at most `buf.len()` bytes; `Ok(0)` means end of stream.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Total size in bytes, when known without reading.
    fn size(&self) -> Option<u64>;

    /// Full content from offset 0.
    fn to_bytes(&mut self) -> io::Result<Vec<u8>>;

    /// Where the content comes from (file path, URI or pseudo-path).
    fn source_locator(&self) -> Option<&str> {
        None
    }
}

pub(crate) fn not_seekable() -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, "stream is not seekable")
}
