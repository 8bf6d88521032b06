//! Adapting caller content into streams.
//!
//! Two factory shapes are supported: [`StreamFactory`] with one method per
//! input kind, and [`LegacyStreamFactory`] with a single entry point that
//! dispatches on the input itself. [`FactoryAdapter`] picks one at builder
//! construction so the rest of the crate only ever calls `adapt`.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::{FileStream, MemoryStream, ReaderStream, Stream};
use crate::error::{MultipartError, Result};

/// An open OS-level resource that has not been wrapped into a [`Stream`] yet.
pub enum RawHandle {
    /// Open file plus the path it was opened from.
    File { file: File, path: PathBuf },
    /// Forward-only reader with an optional locator.
    Reader {
        reader: Box<dyn Read + Send>,
        locator: Option<String>,
    },
}

impl RawHandle {
    /// Opens `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        Ok(RawHandle::File {
            file: File::open(path)?,
            path: path.to_path_buf(),
        })
    }

    pub fn reader(reader: impl Read + Send + 'static, locator: Option<String>) -> Self {
        RawHandle::Reader {
            reader: Box::new(reader),
            locator,
        }
    }
}

impl std::fmt::Debug for RawHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawHandle::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
            RawHandle::Reader { locator, .. } => {
                f.debug_struct("Reader").field("locator", locator).finish()
            }
        }
    }
}

/// Anything that can be added as part content.
pub enum Content {
    /// Already a stream; used as-is.
    Stream(Box<dyn Stream>),
    /// Strings and byte buffers.
    Bytes(Vec<u8>),
    /// Open file or reader.
    Handle(RawHandle),
    /// Several values at once. Never adaptable: add each value as its own part.
    Values(Vec<String>),
}

impl Content {
    /// Short description used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Stream(_) => "stream",
            Content::Bytes(_) => "bytes",
            Content::Handle(_) => "raw handle",
            Content::Values(_) => "list of values",
        }
    }

    pub fn stream(stream: impl Stream + 'static) -> Self {
        Content::Stream(Box::new(stream))
    }
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Content::Stream(_) => f.write_str("Stream(..)"),
            Content::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Content::Handle(h) => f.debug_tuple("Handle").field(h).finish(),
            Content::Values(v) => f.debug_tuple("Values").field(v).finish(),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Bytes(s.as_bytes().to_vec())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Bytes(s.into_bytes())
    }
}

impl From<&[u8]> for Content {
    fn from(b: &[u8]) -> Self {
        Content::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Content {
    fn from(b: Vec<u8>) -> Self {
        Content::Bytes(b)
    }
}

impl From<RawHandle> for Content {
    fn from(h: RawHandle) -> Self {
        Content::Handle(h)
    }
}

impl From<Box<dyn Stream>> for Content {
    fn from(s: Box<dyn Stream>) -> Self {
        Content::Stream(s)
    }
}

impl From<MemoryStream> for Content {
    fn from(s: MemoryStream) -> Self {
        Content::stream(s)
    }
}

impl From<FileStream> for Content {
    fn from(s: FileStream) -> Self {
        Content::stream(s)
    }
}

impl From<ReaderStream> for Content {
    fn from(s: ReaderStream) -> Self {
        Content::stream(s)
    }
}

impl From<Vec<String>> for Content {
    fn from(v: Vec<String>) -> Self {
        Content::Values(v)
    }
}

/// Factory with one constructor per input kind.
pub trait StreamFactory: Send + Sync {
    fn create_from_bytes(&self, bytes: Vec<u8>) -> Box<dyn Stream>;

    fn create_from_handle(&self, handle: RawHandle) -> io::Result<Box<dyn Stream>>;
}

/// Factory with a single entry point that inspects the input itself.
pub trait LegacyStreamFactory: Send + Sync {
    fn create_stream(&self, content: Content) -> Result<Box<dyn Stream>>;
}

/// The crate's own stream implementations behind both factory shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardStreams;

impl StreamFactory for StandardStreams {
    fn create_from_bytes(&self, bytes: Vec<u8>) -> Box<dyn Stream> {
        Box::new(MemoryStream::new(bytes))
    }

    fn create_from_handle(&self, handle: RawHandle) -> io::Result<Box<dyn Stream>> {
        Ok(match handle {
            RawHandle::File { file, path } => Box::new(FileStream::from_file(file, path)?),
            RawHandle::Reader { reader, locator } => {
                let stream = ReaderStream::new(reader);
                Box::new(match locator {
                    Some(l) => stream.with_locator(l),
                    None => stream,
                })
            }
        })
    }
}

impl LegacyStreamFactory for StandardStreams {
    fn create_stream(&self, content: Content) -> Result<Box<dyn Stream>> {
        match content {
            Content::Stream(s) => Ok(s),
            Content::Bytes(b) => Ok(StreamFactory::create_from_bytes(self, b)),
            Content::Handle(h) => Ok(StreamFactory::create_from_handle(self, h)?),
            other => Err(MultipartError::InvalidInput { kind: other.kind() }),
        }
    }
}

/// The factory wired into a builder, resolved once at construction.
pub enum FactoryAdapter {
    Modern(Box<dyn StreamFactory>),
    Legacy(Box<dyn LegacyStreamFactory>),
}

impl FactoryAdapter {
    pub fn modern(factory: impl StreamFactory + 'static) -> Self {
        FactoryAdapter::Modern(Box::new(factory))
    }

    pub fn legacy(factory: impl LegacyStreamFactory + 'static) -> Self {
        FactoryAdapter::Legacy(Box::new(factory))
    }

    /// Turns `content` into a stream. Existing streams pass through untouched.
    pub fn adapt(&self, content: Content) -> Result<Box<dyn Stream>> {
        if let Content::Stream(s) = content {
            return Ok(s);
        }
        match self {
            FactoryAdapter::Legacy(f) => f.create_stream(content),
            FactoryAdapter::Modern(f) => match content {
                Content::Bytes(b) => Ok(f.create_from_bytes(b)),
                Content::Handle(h) => Ok(f.create_from_handle(h)?),
                other => Err(MultipartError::InvalidInput { kind: other.kind() }),
            },
        }
    }
}

impl Default for FactoryAdapter {
    fn default() -> Self {
        FactoryAdapter::modern(StandardStreams)
    }
}

impl std::fmt::Debug for FactoryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryAdapter::Modern(_) => f.write_str("FactoryAdapter::Modern"),
            FactoryAdapter::Legacy(_) => f.write_str("FactoryAdapter::Legacy"),
        }
    }
}
