//! The `reportcard export` command.
//!
//! Reads the text to export from a file or stdin, so the output of `find`
//! or `history` can be piped straight into a PDF.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use reportcard_core::ReportcardConfig;

use crate::form::ExportOutcome;

pub fn execute(config: &ReportcardConfig, output: PathBuf, input: Option<PathBuf>) -> Result<()> {
    let text = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let mut controller = super::controller(config);
    controller.display(text.trim_end());

    if let ExportOutcome::Exported(path) = controller.export(Some(&output))? {
        println!("PDF exported successfully: {}", path.display());
    }
    Ok(())
}
