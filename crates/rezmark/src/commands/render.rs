//! The `render` command: markdown in, HTML out.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `render` command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown file to render (reads stdin when omitted).
    pub(crate) input: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, env = "REZMARK_VERBOSE")]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self, out: &Output) -> Result<(), CliError> {
        let markdown = match &self.input {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        info!(bytes = markdown.len(), "rendering markdown");

        let html = rezmark_renderer::render(&markdown);

        match &self.output {
            Some(path) => {
                fs::write(path, &html)?;
                out.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
