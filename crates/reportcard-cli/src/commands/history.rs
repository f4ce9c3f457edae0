//! The `reportcard history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use reportcard_core::{Report, ReportcardConfig, Subject};
use reportcard_export::json::reports_to_json;

use crate::form::FormError;
use crate::HistoryFormat;

pub fn execute(config: &ReportcardConfig, format: HistoryFormat, pdf: Option<PathBuf>) -> Result<()> {
    let mut controller = super::controller(config);

    match format {
        HistoryFormat::Text => controller.view_history()?,
        HistoryFormat::Table => controller.display(render_table(&saved_reports(config)?)),
        HistoryFormat::Json => controller.display(reports_to_json(&saved_reports(config)?)?),
    }

    super::print_output(&controller);
    super::export_requested(&controller, pdf)
}

/// Parsed reports, or `NoHistory` when there are none, as the text view does.
fn saved_reports(config: &ReportcardConfig) -> Result<Vec<Report>, FormError> {
    let reports = config.history().reports()?;
    if reports.is_empty() {
        return Err(FormError::NoHistory);
    }
    Ok(reports)
}

fn render_table(reports: &[Report]) -> String {
    let mut table = Table::new();
    let mut header = vec!["Student".to_string()];
    header.extend(Subject::ALL.iter().map(|s| s.to_string()));
    header.extend(["Total", "Average", "Grade"].map(String::from));
    table.set_header(header);

    for report in reports {
        let mut row = vec![Cell::new(&report.student_name)];
        row.extend(Subject::ALL.iter().map(|s| Cell::new(report.score(*s))));
        row.push(Cell::new(report.total));
        row.push(Cell::new(format!("{:.2}", report.average)));
        row.push(Cell::new(report.grade));
        table.add_row(row);
    }

    table.to_string()
}
