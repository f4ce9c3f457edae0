pub mod calculate;
pub mod export;
pub mod find;
pub mod form;
pub mod history;
pub mod init;

use std::path::{Path, PathBuf};

use anyhow::Result;

use reportcard_core::{load_config_from, ReportcardConfig};

use crate::form::{ExportOutcome, FormController};

/// Load config and apply the `--history` override.
pub fn load_config(path: Option<&Path>, history: Option<PathBuf>) -> Result<ReportcardConfig> {
    let mut config = load_config_from(path)?;
    if let Some(history) = history {
        config.history_path = history;
    }
    Ok(config)
}

pub fn controller(config: &ReportcardConfig) -> FormController {
    FormController::new(config.history(), config.pdf.clone())
}

/// Print the output area, making sure it ends with a newline.
pub fn print_output(controller: &FormController) {
    let output = controller.output();
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}

/// Export the output area when `--pdf` was given.
pub fn export_requested(controller: &FormController, pdf: Option<PathBuf>) -> Result<()> {
    if pdf.is_none() {
        return Ok(());
    }
    if let ExportOutcome::Exported(path) = controller.export(pdf.as_deref())? {
        eprintln!("PDF exported successfully: {}", path.display());
    }
    Ok(())
}
