//! Streams over open files and arbitrary readers.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use super::{not_seekable, Stream};

/// Seekable stream over an open file. The path doubles as the locator used
/// for filename inference.
#[derive(Debug)]
pub struct FileStream {
    file: File,
    path: String,
    size: Option<u64>,
    eof: bool,
}

impl FileStream {
    /// Opens `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_file(file, path)
    }

    /// Wraps an already open file. The size is read from its metadata.
    pub fn from_file(file: File, path: impl Into<PathBuf>) -> io::Result<Self> {
        let size = file.metadata()?.len();
        Ok(Self {
            file,
            path: path.into().to_string_lossy().into_owned(),
            size: Some(size),
            eof: false,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Stream for FileStream {
    fn is_seekable(&self) -> bool {
        true
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(0))?;
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
        let n = self.file.read(buf)?;
        if n == 0 && !buf.is_empty() {
            self.eof = true;
        }
        Ok(n)
    }

    fn size(&self) -> Option<u64> {
        self.size
    }

    fn to_bytes(&mut self) -> io::Result<Vec<u8>> {
        Stream::rewind(self)?;
        let mut out = Vec::with_capacity(self.size.unwrap_or(0) as usize);
        self.file.read_to_end(&mut out)?;
        self.eof = true;
        Ok(out)
    }

    fn source_locator(&self) -> Option<&str> {
        Some(&self.path)
    }
}

/// Forward-only stream over any reader (pipes, sockets, decoders).
/// Size is unknown, so named parts built from it get no `Content-Length`.
pub struct ReaderStream {
    reader: Box<dyn Read + Send>,
    locator: Option<String>,
    eof: bool,
}

impl ReaderStream {
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            locator: None,
            eof: false,
        }
    }

    /// Attaches a locator (e.g. the URL the reader was opened from).
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }
}

impl std::fmt::Debug for ReaderStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderStream")
            .field("locator", &self.locator)
            .field("eof", &self.eof)
            .finish_non_exhaustive()
    }
}

impl Stream for ReaderStream {
    fn is_seekable(&self) -> bool {
        false
    }

    fn rewind(&mut self) -> io::Result<()> {
        Err(not_seekable())
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.reader.read(buf)?;
        if n == 0 && !buf.is_empty() {
            self.eof = true;
        }
        Ok(n)
    }

    fn size(&self) -> Option<u64> {
        None
    }

    /// Drains whatever has not been read yet.
    fn to_bytes(&mut self) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        self.reader.read_to_end(&mut out)?;
        self.eof = true;
        Ok(out)
    }

    fn source_locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }
}
