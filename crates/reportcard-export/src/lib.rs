//! reportcard-export — PDF and JSON output for displayed reports.
//!
//! The PDF exporter renders whatever text is currently displayed; the JSON
//! writer serializes reports parsed from history.

pub mod error;
pub mod json;
pub mod pdf;

pub use error::ExportError;
pub use pdf::{export_pdf, render_pdf, with_pdf_extension};
