//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Read;
use std::path::PathBuf;

use formstream_core::MultipartBuilder;
use tempfile::TempDir;

/// Minimal 1x1 PNG.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// Writes `httplug.png` into a fresh temp dir. Keep the dir alive while the
/// path is in use.
pub fn png_fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("httplug.png");
    std::fs::write(&path, PNG_BYTES).unwrap();
    (dir, path)
}

/// Builds and reads the whole body back.
pub fn build_bytes(builder: &mut MultipartBuilder) -> Vec<u8> {
    let mut body = builder.build().unwrap();
    let mut out = Vec::new();
    body.read_to_end(&mut out).unwrap();
    out
}

/// Builds and decodes the body as UTF-8, lossily for binary parts.
pub fn build_string(builder: &mut MultipartBuilder) -> String {
    String::from_utf8_lossy(&build_bytes(builder)).into_owned()
}

pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Position of `needle` inside `haystack`, as bytes.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
