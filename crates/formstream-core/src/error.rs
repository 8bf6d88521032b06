//! Error type for part registration and body assembly.

use std::io;

/// Errors returned by [`MultipartBuilder`](crate::builder::MultipartBuilder)
/// and the stream factories.
#[derive(Debug, thiserror::Error)]
pub enum MultipartError {
    /// Content was neither a stream, a byte source nor a raw handle.
    /// Nothing was added to the builder.
    #[error("content must be a string, byte buffer, raw handle or stream (got {kind})")]
    InvalidInput { kind: &'static str },
    /// Reading a source or writing the output buffer failed.
    #[error("multipart i/o: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = MultipartError> = std::result::Result<T, E>;
