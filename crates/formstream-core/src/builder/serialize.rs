//! Wire serialization of stored parts.

use std::io;

use super::Part;
use crate::stream::{BodyWriter, Stream};

/// Writes `--boundary`, the header block, the body and the trailing CRLF.
pub(crate) fn write_part(
    out: &mut BodyWriter,
    boundary: &str,
    part: &mut Part,
    chunk: &mut [u8],
) -> io::Result<()> {
    out.write_all(format!("--{}\r\n{}\r\n", boundary, part.headers.to_wire()).as_bytes())?;
    copy_body(out, part.content.as_mut(), chunk)?;
    out.write_all(b"\r\n")
}

/// Writes the closing delimiter.
pub(crate) fn write_closing(out: &mut BodyWriter, boundary: &str) -> io::Result<()> {
    out.write_all(format!("--{}--\r\n", boundary).as_bytes())
}

/// Copies a part body from its start. Readable sources go through `chunk`
/// so peak memory per part is bounded; others are written via `to_bytes`.
fn copy_body(out: &mut BodyWriter, stream: &mut dyn Stream, chunk: &mut [u8]) -> io::Result<()> {
    if stream.is_seekable() {
        stream.rewind()?;
    }
    if !stream.is_readable() {
        return out.write_all(&stream.to_bytes()?);
    }
    while !stream.eof() {
        let n = stream.read(chunk)?;
        if n == 0 {
            break;
        }
        out.write_all(&chunk[..n])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::Headers;
    use crate::stream::{MemoryStream, ReaderStream, RenderedStream};
    use std::io::Read;

    fn render(parts: Vec<Part>, boundary: &str, chunk_size: usize) -> Vec<u8> {
        let mut out = BodyWriter::new(1 << 20);
        let mut chunk = vec![0u8; chunk_size];
        for mut part in parts {
            write_part(&mut out, boundary, &mut part, &mut chunk).unwrap();
        }
        write_closing(&mut out, boundary).unwrap();
        let mut body = out.finish().unwrap();
        let mut bytes = Vec::new();
        body.read_to_end(&mut bytes).unwrap();
        bytes
    }

    fn part(content: impl Stream + 'static, headers: Headers) -> Part {
        Part {
            content: Box::new(content),
            headers,
        }
    }

    #[test]
    fn exact_wire_layout() {
        let bytes = render(
            vec![part(
                MemoryStream::new("hello"),
                Headers::from([("Content-Disposition", "form-data; name=\"a\"")]),
            )],
            "XYZ",
            4,
        );
        assert_eq!(
            bytes,
            b"--XYZ\r\nContent-Disposition: form-data; name=\"a\"\r\n\r\nhello\r\n--XYZ--\r\n"
        );
    }

    #[test]
    fn part_without_headers() {
        let bytes = render(vec![part(MemoryStream::new("x"), Headers::new())], "b", 16);
        assert_eq!(bytes, b"--b\r\n\r\nx\r\n--b--\r\n");
    }

    #[test]
    fn no_parts_is_only_the_closing_line() {
        assert_eq!(render(Vec::new(), "b", 16), b"--b--\r\n");
    }

    #[test]
    fn partially_read_source_is_rewound() {
        let mut s = MemoryStream::new("abcdef");
        Stream::read(&mut s, &mut [0u8; 3]).unwrap();
        let bytes = render(vec![part(s, Headers::new())], "b", 2);
        assert_eq!(bytes, b"--b\r\n\r\nabcdef\r\n--b--\r\n");
    }

    #[test]
    fn non_readable_source_uses_rendering() {
        let bytes = render(vec![part(RenderedStream::new(42), Headers::new())], "b", 16);
        assert_eq!(bytes, b"--b\r\n\r\n42\r\n--b--\r\n");
    }

    #[test]
    fn forward_only_source_is_copied_once() {
        let s = ReaderStream::new(std::io::Cursor::new(b"streamed".to_vec()));
        let bytes = render(vec![part(s, Headers::new())], "b", 3);
        assert_eq!(bytes, b"--b\r\n\r\nstreamed\r\n--b--\r\n");
    }
}
