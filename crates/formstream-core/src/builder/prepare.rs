//! Default headers for named parts.

use crate::filename;
use crate::headers::Headers;
use crate::mimetype::MimetypeResolver;
use crate::stream::Stream;

/// Fills in `Content-Disposition`, `Content-Length` and `Content-Type` when
/// the caller did not supply them (compared ignoring case). Derived headers
/// are appended after the caller's, so explicit values always win.
pub(crate) fn prepare_headers(
    name: &str,
    stream: &dyn Stream,
    filename: Option<&str>,
    mimetypes: &dyn MimetypeResolver,
    mut headers: Headers,
) -> Headers {
    if !headers.contains("content-disposition") {
        let mut disposition = format!("form-data; name=\"{}\"", name);
        if let Some(f) = filename {
            disposition.push_str(&format!("; filename=\"{}\"", filename::basename(f)));
        }
        headers.insert("Content-Disposition", disposition);
    }

    if !headers.contains("content-length") {
        if let Some(len) = stream.size() {
            headers.insert("Content-Length", len.to_string());
        }
    }

    if !headers.contains("content-type") {
        if let Some(mime) = filename.and_then(|f| mimetypes.resolve_filename(f)) {
            headers.insert("Content-Type", mime);
        }
    }

    headers
}
