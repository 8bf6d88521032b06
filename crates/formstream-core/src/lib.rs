//! Streaming `multipart/form-data` body builder.
//!
//! ```no_run
//! use formstream_core::{MultipartBuilder, NamedPartOptions, RawHandle};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = MultipartBuilder::default();
//! builder.add_named_part("title", "holiday", NamedPartOptions::new())?;
//! builder.add_named_part("image", RawHandle::open("photos/beach.png")?, NamedPartOptions::new())?;
//! let content_type = builder.content_type();
//! let body = builder.build()?;
//! # let _ = (content_type, body);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;

pub mod builder;
pub mod error;
pub mod filename;
pub mod headers;
pub mod mimetype;
pub mod stream;

pub use builder::{BuildLimits, MultipartBuilder, NamedPartOptions, Part};
pub use error::{MultipartError, Result};
pub use headers::Headers;
pub use mimetype::{CustomMimetypes, MimetypeResolver, StandardMimetypes};
pub use stream::{BodyStream, Content, FactoryAdapter, RawHandle, StandardStreams, Stream};
