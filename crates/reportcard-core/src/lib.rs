//! reportcard-core — Report model, grade calculation, and history storage.
//!
//! This crate defines the student report data model, the pure grade
//! calculator, and the append-only text history that the rest of
//! reportcard builds on.

pub mod config;
pub mod error;
pub mod grade;
pub mod history;
pub mod model;

pub use config::{load_config_from, PdfOptions, ReportcardConfig};
pub use error::{HistoryError, ParseError, ValidationError};
pub use history::HistoryStore;
pub use model::{Grade, Report, Score, Subject};
