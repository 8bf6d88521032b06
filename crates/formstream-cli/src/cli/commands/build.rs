//! Build command: assemble a multipart body from fields and files.

use anyhow::{Context, Result};
use formstream_core::config::FormstreamConfig;
use formstream_core::{BodyStream, FactoryAdapter, MultipartBuilder, NamedPartOptions, RawHandle};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Parts and boundary collected from the command line.
#[derive(Debug, Default)]
pub struct BuildRequest {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, PathBuf)>,
    pub boundary: Option<String>,
}

/// Builds the body and returns it together with the Content-Type value.
pub fn assemble(cfg: &FormstreamConfig, request: &BuildRequest) -> Result<(String, BodyStream)> {
    let mut builder = MultipartBuilder::from_config(FactoryAdapter::default(), cfg);
    if let Some(boundary) = &request.boundary {
        builder.set_boundary(boundary.as_str());
    }

    for (name, value) in &request.fields {
        builder.add_named_part(name, value.as_str(), NamedPartOptions::new())?;
    }
    for (name, path) in &request.files {
        let handle =
            RawHandle::open(path).with_context(|| format!("open {}", path.display()))?;
        builder.add_named_part(name, handle, NamedPartOptions::new())?;
    }

    let body = builder.build().context("failed to build multipart body")?;
    Ok((builder.content_type(), body))
}

/// Writes the body to `output` (or stdout) and the Content-Type to stderr.
pub fn run_build(cfg: &FormstreamConfig, request: &BuildRequest, output: Option<&Path>) -> Result<()> {
    let (content_type, mut body) = assemble(cfg, request)?;

    let written = match output {
        Some(path) => {
            let mut f = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let n = io::copy(&mut body, &mut f)?;
            f.flush()?;
            n
        }
        None => {
            let mut stdout = io::stdout().lock();
            let n = io::copy(&mut body, &mut stdout)?;
            stdout.flush()?;
            n
        }
    };

    eprintln!("Content-Type: {}", content_type);
    tracing::info!(bytes = written, parts = request.fields.len() + request.files.len(), "wrote multipart body");
    Ok(())
}
