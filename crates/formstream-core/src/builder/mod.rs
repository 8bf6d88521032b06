//! Multipart body assembly.
//!
//! [`MultipartBuilder`] collects parts in order, derives default headers for
//! named parts, and serializes everything into a [`BodyStream`]:
//!
//! ```text
//! --<boundary>\r\n
//! <Name>: <value>\r\n        (each header, insertion order)
//! \r\n
//! <body>\r\n
//! ...
//! --<boundary>--\r\n
//! ```
//!
//! The boundary is not checked against part content; pick one that cannot
//! occur in your data when using `set_boundary`.

mod prepare;
mod serialize;

use uuid::Uuid;

use crate::config::FormstreamConfig;
use crate::error::Result;
use crate::filename;
use crate::headers::Headers;
use crate::mimetype::{MimetypeResolver, StandardMimetypes};
use crate::stream::{
    BodyStream, BodyWriter, Content, FactoryAdapter, LegacyStreamFactory, StandardStreams,
    Stream, StreamFactory,
};

/// Read size used when copying part bodies into the output (1 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 1024 * 1024;
/// Output kept in memory before spilling to a temp file (2 MiB).
pub const DEFAULT_SPOOL_THRESHOLD: usize = 2 * 1024 * 1024;

/// Resource bounds for `build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildLimits {
    /// Bytes read from a part body per copy step.
    pub chunk_size: usize,
    /// Output bytes held in memory before rolling over to disk.
    pub spool_threshold: usize,
}

impl Default for BuildLimits {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            spool_threshold: DEFAULT_SPOOL_THRESHOLD,
        }
    }
}

/// Options for [`MultipartBuilder::add_named_part`].
#[derive(Debug, Clone, Default)]
pub struct NamedPartOptions {
    /// Headers that take precedence over derived ones.
    pub headers: Headers,
    /// Filename to announce; overrides the stream's locator.
    pub filename: Option<String>,
}

impl NamedPartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn headers(mut self, headers: impl Into<Headers>) -> Self {
        self.headers = headers.into();
        self
    }
}

/// A stored part. Never modified after it was added.
pub struct Part {
    content: Box<dyn Stream>,
    headers: Headers,
}

impl Part {
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Size of the body, if the underlying stream knows it.
    pub fn size(&self) -> Option<u64> {
        self.content.size()
    }
}

impl std::fmt::Debug for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Part")
            .field("headers", &self.headers)
            .field("size", &self.content.size())
            .finish()
    }
}

/// Builds `multipart/form-data` bodies from strings, byte buffers, files and
/// streams. Reusable across messages via [`reset`](Self::reset).
pub struct MultipartBuilder {
    factory: FactoryAdapter,
    mimetypes: Box<dyn MimetypeResolver>,
    boundary: Option<String>,
    parts: Vec<Part>,
    limits: BuildLimits,
}

impl MultipartBuilder {
    /// Builder using a [`StreamFactory`].
    pub fn new(factory: impl StreamFactory + 'static) -> Self {
        Self::with_adapter(FactoryAdapter::modern(factory))
    }

    /// Builder using a single-entry-point [`LegacyStreamFactory`].
    pub fn with_legacy_factory(factory: impl LegacyStreamFactory + 'static) -> Self {
        Self::with_adapter(FactoryAdapter::legacy(factory))
    }

    pub fn with_adapter(factory: FactoryAdapter) -> Self {
        Self {
            factory,
            mimetypes: Box::new(StandardMimetypes),
            boundary: None,
            parts: Vec::new(),
            limits: BuildLimits::default(),
        }
    }

    /// Builder with limits and extra mimetypes taken from `cfg`.
    pub fn from_config(factory: FactoryAdapter, cfg: &FormstreamConfig) -> Self {
        let mut builder = Self::with_adapter(factory);
        builder.limits = cfg.limits();
        builder.mimetypes = Box::new(cfg.mimetypes());
        builder
    }

    /// Appends a part with exactly the given headers; nothing is derived.
    pub fn add_part(
        &mut self,
        content: impl Into<Content>,
        headers: impl Into<Headers>,
    ) -> Result<&mut Self> {
        let stream = self.factory.adapt(content.into())?;
        Ok(self.push(stream, headers.into()))
    }

    /// Appends a form field named `name`, filling in `Content-Disposition`,
    /// `Content-Length` and `Content-Type` where `options.headers` lacks them.
    ///
    /// The filename is `options.filename`, or else the stream's locator unless
    /// that is an in-memory or inline-data pseudo-path.
    pub fn add_named_part(
        &mut self,
        name: &str,
        content: impl Into<Content>,
        options: NamedPartOptions,
    ) -> Result<&mut Self> {
        let stream = self.factory.adapt(content.into())?;
        let filename =
            filename::infer_filename(options.filename.as_deref(), stream.source_locator());
        let headers = prepare::prepare_headers(
            name,
            stream.as_ref(),
            filename.as_deref(),
            self.mimetypes.as_ref(),
            options.headers,
        );
        Ok(self.push(stream, headers))
    }

    fn push(&mut self, content: Box<dyn Stream>, headers: Headers) -> &mut Self {
        tracing::debug!(
            index = self.parts.len(),
            headers = headers.len(),
            size = ?content.size(),
            "multipart part added"
        );
        self.parts.push(Part { content, headers });
        self
    }

    /// Serializes all parts, in insertion order, into a body positioned at
    /// offset 0. With no parts the body is just the closing delimiter.
    pub fn build(&mut self) -> Result<BodyStream> {
        let boundary = self.boundary().to_string();
        let mut out = BodyWriter::new(self.limits.spool_threshold);
        let mut chunk = vec![0u8; self.limits.chunk_size.max(1)];

        for part in &mut self.parts {
            serialize::write_part(&mut out, &boundary, part, &mut chunk)?;
        }
        serialize::write_closing(&mut out, &boundary)?;

        let body = out.finish()?;
        tracing::info!(
            parts = self.parts.len(),
            bytes = body.len(),
            spilled = body.is_spilled(),
            "multipart body built"
        );
        Ok(body)
    }

    /// Current boundary, generated on first use.
    pub fn boundary(&mut self) -> &str {
        self.boundary.get_or_insert_with(|| {
            let boundary = Uuid::new_v4().simple().to_string();
            tracing::debug!(%boundary, "generated multipart boundary");
            boundary
        })
    }

    /// Fixes the boundary. It is not checked against part content.
    pub fn set_boundary(&mut self, boundary: impl Into<String>) -> &mut Self {
        self.boundary = Some(boundary.into());
        self
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&mut self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary())
    }

    /// Resolver used by later `add_named_part` calls. Parts already added
    /// keep the headers they were given.
    pub fn set_mimetype_resolver(
        &mut self,
        resolver: impl MimetypeResolver + 'static,
    ) -> &mut Self {
        self.mimetypes = Box::new(resolver);
        self
    }

    pub fn set_limits(&mut self, limits: BuildLimits) -> &mut Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> BuildLimits {
        self.limits
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Drops all parts and the boundary; factory, resolver and limits stay.
    pub fn reset(&mut self) -> &mut Self {
        self.parts.clear();
        self.boundary = None;
        self
    }
}

impl Default for MultipartBuilder {
    fn default() -> Self {
        Self::new(StandardStreams)
    }
}

impl std::fmt::Debug for MultipartBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultipartBuilder")
            .field("factory", &self.factory)
            .field("boundary", &self.boundary)
            .field("parts", &self.parts)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MultipartError;
    use crate::mimetype::CustomMimetypes;
    use crate::stream::RenderedStream;

    fn body_string(builder: &mut MultipartBuilder) -> String {
        let mut body = builder.build().unwrap();
        String::from_utf8(Stream::to_bytes(&mut body).unwrap()).unwrap()
    }

    #[test]
    fn boundary_is_generated_once() {
        let mut b = MultipartBuilder::default();
        let first = b.boundary().to_string();
        assert_eq!(first.len(), 32);
        assert_eq!(b.boundary(), first);
    }

    #[test]
    fn add_part_uses_headers_verbatim() {
        let mut b = MultipartBuilder::default();
        b.set_boundary("B");
        b.add_part("raw", [("X-Custom", "1")]).unwrap();
        assert_eq!(body_string(&mut b), "--B\r\nX-Custom: 1\r\n\r\nraw\r\n--B--\r\n");
    }

    #[test]
    fn named_part_full_output() {
        let mut b = MultipartBuilder::default();
        b.set_boundary("B");
        b.add_named_part("field", "value", NamedPartOptions::new()).unwrap();
        assert_eq!(
            body_string(&mut b),
            "--B\r\nContent-Disposition: form-data; name=\"field\"\r\nContent-Length: 5\r\n\r\nvalue\r\n--B--\r\n"
        );
    }

    #[test]
    fn explicit_filename_for_in_memory_content() {
        let mut b = MultipartBuilder::default();
        b.add_named_part(
            "doc",
            "%PDF-1.4",
            NamedPartOptions::new().filename("reports/q3.pdf"),
        )
        .unwrap();
        let h = b.parts()[0].headers();
        assert_eq!(
            h.get("content-disposition"),
            Some("form-data; name=\"doc\"; filename=\"q3.pdf\"")
        );
        assert_eq!(h.get("content-type"), Some("application/pdf"));
    }

    #[test]
    fn invalid_content_leaves_parts_untouched() {
        let mut b = MultipartBuilder::default();
        b.add_named_part("a", "1", NamedPartOptions::new()).unwrap();
        let before = b.part_count();

        let err = b
            .add_named_part("foo", vec!["x".to_string()], NamedPartOptions::new())
            .unwrap_err();
        assert!(matches!(err, MultipartError::InvalidInput { .. }));
        assert!(b.add_part(Vec::<String>::new(), Headers::new()).is_err());
        assert_eq!(b.part_count(), before);
    }

    #[test]
    fn resolver_change_is_not_retroactive() {
        let mut b = MultipartBuilder::default();
        let opts = || NamedPartOptions::new().filename("data.zzz");
        b.add_named_part("first", "1", opts()).unwrap();
        b.set_mimetype_resolver(CustomMimetypes::new([("zzz", "custom/type")]));
        b.add_named_part("second", "2", opts()).unwrap();

        assert_eq!(b.parts()[0].headers().get("content-type"), None);
        assert_eq!(b.parts()[1].headers().get("content-type"), Some("custom/type"));
    }

    #[test]
    fn reset_keeps_limits() {
        let mut b = MultipartBuilder::default();
        let limits = BuildLimits {
            chunk_size: 8,
            spool_threshold: 64,
        };
        b.set_limits(limits).set_boundary("x");
        b.add_part("a", Headers::new()).unwrap();
        b.reset();
        assert_eq!(b.part_count(), 0);
        assert_eq!(b.limits(), limits);
        assert_ne!(b.boundary(), "x");
    }

    #[test]
    fn content_type_header_value() {
        let mut b = MultipartBuilder::default();
        b.set_boundary("abc");
        assert_eq!(b.content_type(), "multipart/form-data; boundary=abc");
    }

    #[test]
    fn stream_content_without_size() {
        let mut b = MultipartBuilder::default();
        b.set_boundary("B");
        b.add_named_part("n", Content::stream(RenderedStream::new(7)), NamedPartOptions::new())
            .unwrap();
        assert_eq!(
            body_string(&mut b),
            "--B\r\nContent-Disposition: form-data; name=\"n\"\r\n\r\n7\r\n--B--\r\n"
        );
    }

    #[test]
    fn from_config_wires_limits_and_mimetypes() {
        let mut cfg = FormstreamConfig::default();
        cfg.chunk_size_bytes = 16;
        cfg.mimetypes.insert("zzz".into(), "custom/type".into());
        let mut b = MultipartBuilder::from_config(FactoryAdapter::default(), &cfg);
        assert_eq!(b.limits().chunk_size, 16);
        b.add_named_part("f", "x", NamedPartOptions::new().filename("a.zzz"))
            .unwrap();
        assert_eq!(b.parts()[0].headers().get("Content-Type"), Some("custom/type"));
    }
}
