//! CLI for the formstream multipart builder.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formstream_core::config;
use std::path::PathBuf;

use commands::{run_build, run_mime, BuildRequest};

/// Top-level CLI for formstream.
#[derive(Debug, Parser)]
#[command(name = "formstream")]
#[command(about = "formstream: build multipart/form-data request bodies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build a multipart body from form fields and files.
    Build {
        /// Text field, repeatable. Fields are written before files.
        #[arg(long = "field", value_name = "NAME=VALUE", value_parser = parse_pair)]
        fields: Vec<(String, String)>,

        /// File upload, repeatable. Filename and Content-Type come from the path.
        #[arg(long = "file", value_name = "NAME=PATH", value_parser = parse_file)]
        files: Vec<(String, PathBuf)>,

        /// Use this boundary instead of a generated one.
        #[arg(long)]
        boundary: Option<String>,

        /// Write the body here instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print the MIME type each filename resolves to.
    Mime {
        /// Filenames or paths to look up.
        #[arg(required = true)]
        filenames: Vec<String>,
    },
}

/// Splits `NAME=VALUE` at the first `=`. The name must not be empty.
fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{}`", s))?;
    if name.is_empty() {
        return Err(format!("empty field name in `{}`", s));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_file(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = parse_pair(s)?;
    if path.is_empty() {
        return Err(format!("empty path in `{}`", s));
    }
    Ok((name, PathBuf::from(path)))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Build {
                fields,
                files,
                boundary,
                output,
            } => {
                let request = BuildRequest {
                    fields,
                    files,
                    boundary,
                };
                run_build(&cfg, &request, output.as_deref())?;
            }
            CliCommand::Mime { filenames } => run_mime(&cfg, &filenames)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
