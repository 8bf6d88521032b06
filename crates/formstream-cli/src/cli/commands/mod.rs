//! CLI command handlers, one per file.

mod build;
mod mime;

pub use build::{run_build, BuildRequest};
pub use mime::run_mime;
