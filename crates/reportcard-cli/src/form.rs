//! Form state and the controller behind its four actions.
//!
//! [`ReportForm`] holds exactly what the user has typed: the name field,
//! the raw text of each score field, and the read-only output area.
//! [`FormController`] turns Calculate, Export, View History, and Find into
//! calls on the grade calculator, history store, and PDF exporter. Every
//! action either succeeds or returns a [`FormError`] for the front-end to
//! show; a failed action never changes the output area.

use std::path::{Path, PathBuf};

use thiserror::Error;

use reportcard_core::grade::calculate;
use reportcard_core::{HistoryError, HistoryStore, PdfOptions, Subject, ValidationError};
use reportcard_export::{export_pdf, ExportError};

/// Errors surfaced to the user as notices.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("No history found.")]
    NoHistory,

    #[error("Please enter the student's name to search.")]
    MissingSearchName,

    #[error("No report found for {0}")]
    NotFound(String),
}

/// Raw form fields and the output area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportForm {
    pub name: String,
    /// Score field text, indexed by [`Subject::index`].
    pub scores: [String; 4],
    output: String,
}

impl ReportForm {
    pub fn output(&self) -> &str {
        &self.output
    }
}

/// What an export request ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Exported(PathBuf),
    /// No destination was chosen.
    Cancelled,
}

pub struct FormController {
    form: ReportForm,
    store: HistoryStore,
    pdf: PdfOptions,
}

impl FormController {
    pub fn new(store: HistoryStore, pdf: PdfOptions) -> Self {
        Self {
            form: ReportForm::default(),
            store,
            pdf,
        }
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn output(&self) -> &str {
        self.form.output()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_score(&mut self, subject: Subject, raw: impl Into<String>) {
        self.form.scores[subject.index()] = raw.into();
    }

    /// Replace the output area, e.g. with text loaded from elsewhere.
    pub fn display(&mut self, text: impl Into<String>) {
        self.form.output = text.into();
    }

    /// Validate, compute, display, then append to history.
    ///
    /// Invalid input leaves the form and the history untouched. If the
    /// history write fails the report stays displayed and the error is
    /// still returned.
    pub fn calculate(&mut self) -> Result<(), FormError> {
        let report = calculate(&self.form.name, &self.form.scores)?;
        self.form.output = report.to_text();
        self.store.append(&report)?;
        Ok(())
    }

    /// Export the output area to `destination`; `None` means cancelled.
    pub fn export(&self, destination: Option<&Path>) -> Result<ExportOutcome, FormError> {
        if self.form.output.is_empty() {
            return Err(ExportError::NothingToExport.into());
        }
        let Some(destination) = destination else {
            return Ok(ExportOutcome::Cancelled);
        };
        let written = export_pdf(&self.form.output, destination, &self.pdf)?;
        Ok(ExportOutcome::Exported(written))
    }

    /// Display the whole history file.
    pub fn view_history(&mut self) -> Result<(), FormError> {
        match self.store.read_all()? {
            Some(content) if !content.trim().is_empty() => {
                self.form.output = content;
                Ok(())
            }
            _ => Err(FormError::NoHistory),
        }
    }

    /// Display the first history block for the name in the name field.
    pub fn find(&mut self) -> Result<(), FormError> {
        let name = self.form.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingSearchName);
        }
        match self.store.find_by_name(name)? {
            Some(block) => {
                self.form.output = block;
                Ok(())
            }
            None => Err(FormError::NotFound(name.to_string())),
        }
    }
}
