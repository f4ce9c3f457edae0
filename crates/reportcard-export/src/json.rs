//! JSON rendering of parsed history.

use serde::Serialize;

use reportcard_core::Report;

use crate::error::ExportError;

#[derive(Serialize)]
struct HistoryDocument<'a> {
    count: usize,
    reports: &'a [Report],
}

/// Serialize reports as a pretty-printed JSON document.
pub fn reports_to_json(reports: &[Report]) -> Result<String, ExportError> {
    let doc = HistoryDocument {
        count: reports.len(),
        reports,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
