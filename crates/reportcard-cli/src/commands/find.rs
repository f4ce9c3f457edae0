//! The `reportcard find` command.

use std::path::PathBuf;

use anyhow::Result;

use reportcard_core::ReportcardConfig;

pub fn execute(config: &ReportcardConfig, name: String, pdf: Option<PathBuf>) -> Result<()> {
    let mut controller = super::controller(config);
    controller.set_name(name);
    controller.find()?;
    super::print_output(&controller);
    super::export_requested(&controller, pdf)
}
