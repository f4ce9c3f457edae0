//! The `reportcard form` command: the report form as a line-driven session.
//!
//! Each input line either edits a field or presses one of the four buttons.
//! Failures are printed as notices and the session carries on.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

use reportcard_core::{ReportcardConfig, Subject};

use crate::form::{ExportOutcome, FormController, FormError};

const HELP: &str = "\
Fields:
  name <text>                 set the student name
  math|english|chemistry|science <score>
                              set a subject score (0-100)
Buttons:
  calculate                   compute, display, and save the report
  export [path]               export the displayed text as PDF (no path cancels)
  history                     show all saved reports
  find                        show the saved report for the current name
Other:
  show                        print the form
  help                        print this help
  quit                        leave the form";

pub fn execute(config: &ReportcardConfig) -> Result<()> {
    let mut controller = super::controller(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut controller, stdin.lock(), stdout.lock())
}

/// Drive `controller` from `input` until `quit` or end of input.
pub fn run_session(
    controller: &mut FormController,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "Student Report Generator")?;
    writeln!(out, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let result = match command.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                writeln!(out, "{HELP}")?;
                Ok(Shown::Nothing)
            }
            "show" => {
                show_form(controller, &mut out)?;
                Ok(Shown::Nothing)
            }
            "name" => {
                controller.set_name(rest);
                Ok(Shown::Nothing)
            }
            "calculate" | "calc" => controller.calculate().map(|()| Shown::Output),
            "export" => {
                let destination = Some(rest).filter(|r| !r.is_empty()).map(Path::new);
                controller.export(destination).map(Shown::Export)
            }
            "history" => controller.view_history().map(|()| Shown::Output),
            "find" => controller.find().map(|()| Shown::Output),
            other => {
                match other.parse::<Subject>() {
                    Ok(subject) => controller.set_score(subject, rest),
                    Err(_) => writeln!(out, "Unknown command: {other}. Type `help` for commands.")?,
                }
                Ok(Shown::Nothing)
            }
        };

        report(controller, result, &mut out)?;
    }

    Ok(())
}

/// What to print after a command succeeded.
enum Shown {
    Nothing,
    Output,
    Export(ExportOutcome),
}

fn report(
    controller: &FormController,
    result: Result<Shown, FormError>,
    out: &mut impl Write,
) -> Result<()> {
    match result {
        Ok(Shown::Nothing) => {}
        Ok(Shown::Output) => {
            writeln!(out, "{}", controller.output().trim_end())?;
        }
        Ok(Shown::Export(ExportOutcome::Exported(path))) => {
            writeln!(out, "PDF exported successfully: {}", path.display())?;
        }
        Ok(Shown::Export(ExportOutcome::Cancelled)) => {
            writeln!(out, "Export cancelled.")?;
        }
        Err(FormError::History(e)) if !controller.output().is_empty() => {
            writeln!(out, "{}", controller.output().trim_end())?;
            writeln!(out, "Notice: {e}")?;
        }
        Err(e) => {
            tracing::debug!(error = %e, "form action failed");
            writeln!(out, "Notice: {e}")?;
        }
    }
    Ok(())
}

fn show_form(controller: &FormController, out: &mut impl Write) -> Result<()> {
    let form = controller.form();
    writeln!(out, "Student Name: {}", form.name)?;
    for subject in Subject::ALL {
        writeln!(out, "{subject}: {}", form.scores[subject.index()])?;
    }
    if !form.output().is_empty() {
        writeln!(out, "--")?;
        writeln!(out, "{}", form.output().trim_end())?;
    }
    Ok(())
}
