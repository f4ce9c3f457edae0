//! Core data model types for reportcard.
//!
//! A [`Report`] is built from a student name and one [`Score`] per
//! [`Subject`]; its text form is what the history file stores and what the
//! output area displays.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Label that starts every formatted report.
pub const NAME_LABEL: &str = "Student Name: ";

/// The fixed subjects on the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    English,
    Chemistry,
    Science,
}

impl Subject {
    /// All subjects in the order they appear on the form and in reports.
    pub const ALL: [Subject; 4] = [
        Subject::Math,
        Subject::English,
        Subject::Chemistry,
        Subject::Science,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::English => "English",
            Subject::Chemistry => "Chemistry",
            Subject::Science => "Science",
        }
    }

    /// Position of this subject in [`Subject::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "math" | "maths" => Ok(Subject::Math),
            "english" => Ok(Subject::English),
            "chemistry" | "chem" => Ok(Subject::Chemistry),
            "science" => Ok(Subject::Science),
            other => Err(format!("unknown subject: {other}")),
        }
    }
}

/// A single subject score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const MAX: u8 = 100;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= Self::MAX {
            Ok(Score(value))
        } else {
            Err(format!("score {value} is outside 0-{}", Self::MAX))
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> u8 {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter grade derived from the average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => Err(format!("unknown grade: {other}")),
        }
    }
}

/// The computed record for one student submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Trimmed student name.
    pub student_name: String,
    /// One score per subject, in [`Subject::ALL`] order.
    pub scores: [Score; 4],
    /// Sum of all scores.
    pub total: u32,
    /// `total / 4`.
    pub average: f64,
    pub grade: Grade,
}

impl Report {
    /// Score for a given subject.
    pub fn score(&self, subject: Subject) -> Score {
        self.scores[subject.index()]
    }

    /// Human-readable text form, as displayed and stored in history.
    ///
    /// Every line, including the last, ends with `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        text.push_str(&format!("{NAME_LABEL}{}\n", self.student_name));
        for subject in Subject::ALL {
            text.push_str(&format!("{subject}: {}\n", self.score(subject)));
        }
        text.push_str(&format!("Total: {}\n", self.total));
        text.push_str(&format!("Average: {:.2}\n", self.average));
        text.push_str(&format!("Grade: {}\n", self.grade));
        text
    }

    /// Parse a block produced by [`Report::to_text`].
    ///
    /// Leading and trailing whitespace around the block is ignored; the
    /// stored total, average, and grade are taken as written.
    pub fn parse_block(block: &str) -> Result<Self, ParseError> {
        let mut lines = block.trim().lines().map(str::trim_end);

        let first = lines.next().ok_or(ParseError::MissingLine("Student Name"))?;
        let student_name = first
            .strip_prefix(NAME_LABEL)
            .ok_or_else(|| ParseError::Malformed {
                line: first.to_string(),
                expected: "Student Name: <name>",
            })?
            .to_string();

        let mut scores = [Score::ZERO; 4];
        for subject in Subject::ALL {
            let raw = field(&mut lines, subject.label())?;
            let value: u8 = raw.parse().map_err(|_| ParseError::Malformed {
                line: format!("{subject}: {raw}"),
                expected: "a score between 0 and 100",
            })?;
            scores[subject.index()] =
                Score::try_from(value).map_err(|_| ParseError::Malformed {
                    line: format!("{subject}: {raw}"),
                    expected: "a score between 0 and 100",
                })?;
        }

        let raw_total = field(&mut lines, "Total")?;
        let total = raw_total.parse().map_err(|_| ParseError::Malformed {
            line: format!("Total: {raw_total}"),
            expected: "an integer total",
        })?;

        let raw_average = field(&mut lines, "Average")?;
        let average = raw_average.parse().map_err(|_| ParseError::Malformed {
            line: format!("Average: {raw_average}"),
            expected: "a decimal average",
        })?;

        let raw_grade = field(&mut lines, "Grade")?;
        let grade = raw_grade.parse().map_err(|_| ParseError::Malformed {
            line: format!("Grade: {raw_grade}"),
            expected: "a letter grade A-F",
        })?;

        Ok(Report {
            student_name,
            scores,
            total,
            average,
            grade,
        })
    }
}

/// Pull the next `<label>: <value>` line and return the value.
fn field<'a>(
    lines: &mut impl Iterator<Item = &'a str>,
    label: &'static str,
) -> Result<&'a str, ParseError> {
    let line = lines.next().ok_or(ParseError::MissingLine(label))?;
    line.split_once(": ")
        .filter(|(name, _)| *name == label)
        .map(|(_, value)| value.trim())
        .ok_or_else(|| ParseError::Malformed {
            line: line.to_string(),
            expected: label,
        })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [u8; 4]) -> [Score; 4] {
        values.map(|v| Score::try_from(v).unwrap())
    }

    fn alice() -> Report {
        Report {
            student_name: "Alice".into(),
            scores: scores([80, 70, 60, 90]),
            total: 300,
            average: 75.0,
            grade: Grade::A,
        }
    }

    #[test]
    fn subject_display_and_parse() {
        assert_eq!(Subject::Chemistry.to_string(), "Chemistry");
        assert_eq!("math".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!("SCIENCE".parse::<Subject>().unwrap(), Subject::Science);
        assert_eq!("chem".parse::<Subject>().unwrap(), Subject::Chemistry);
        assert!("history".parse::<Subject>().is_err());
        assert_eq!(Subject::Science.index(), 3);
    }

    #[test]
    fn score_bounds() {
        assert!(Score::try_from(0).is_ok());
        assert!(Score::try_from(100).is_ok());
        assert!(Score::try_from(101).is_err());
    }

    #[test]
    fn score_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Score>("100").is_ok());
        assert!(serde_json::from_str::<Score>("150").is_err());
    }

    #[test]
    fn text_format_matches_history_layout() {
        let text = alice().to_text();
        assert_eq!(
            text,
            "Student Name: Alice\nMath: 80\nEnglish: 70\nChemistry: 60\nScience: 90\n\
             Total: 300\nAverage: 75.00\nGrade: A\n"
        );
    }

    #[test]
    fn parse_block_reads_formatted_report() {
        let report = alice();
        let block = format!("\n\n{}\n", report.to_text());
        let parsed = Report::parse_block(&block).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.score(Subject::English).value(), 70);
    }

    #[test]
    fn parse_block_rejects_missing_grade() {
        let text = alice().to_text();
        let truncated = text.trim_end().trim_end_matches("Grade: A");
        assert_eq!(
            Report::parse_block(truncated),
            Err(ParseError::MissingLine("Grade"))
        );
    }

    #[test]
    fn parse_block_rejects_foreign_text() {
        let err = Report::parse_block("Report").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { .. }));
    }

    #[test]
    fn parse_block_rejects_subject_out_of_order() {
        let block = "Student Name: Bob\nEnglish: 70\nMath: 80\nChemistry: 60\nScience: 90\n\
                     Total: 300\nAverage: 75.00\nGrade: A";
        assert!(Report::parse_block(block).is_err());
    }
}
