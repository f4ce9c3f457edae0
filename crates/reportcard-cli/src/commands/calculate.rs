//! The `reportcard calculate` command.

use std::path::PathBuf;

use anyhow::Result;

use reportcard_core::{ReportcardConfig, Subject};

pub fn execute(
    config: &ReportcardConfig,
    name: String,
    scores: [String; 4],
    pdf: Option<PathBuf>,
) -> Result<()> {
    let mut controller = super::controller(config);
    controller.set_name(name);
    for (subject, raw) in Subject::ALL.into_iter().zip(scores) {
        controller.set_score(subject, raw);
    }

    let result = controller.calculate();
    // A failed history write still leaves the report on display.
    if !controller.output().is_empty() {
        super::print_output(&controller);
    }
    result?;

    super::export_requested(&controller, pdf)
}
