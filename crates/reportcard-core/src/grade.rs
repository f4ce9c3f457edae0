//! Grade calculation: input validation, totals, and the letter-grade lookup.
//!
//! Everything here is pure; persistence lives in [`crate::history`].

use crate::error::ValidationError;
use crate::history::DELIMITER;
use crate::model::{Grade, Report, Score, Subject};

/// Lower bound of the average for each passing grade, highest first.
const THRESHOLDS: [(f64, Grade); 4] = [
    (70.0, Grade::A),
    (60.0, Grade::B),
    (50.0, Grade::C),
    (40.0, Grade::D),
];

impl Grade {
    /// Map an average score onto a letter grade.
    pub fn from_average(average: f64) -> Grade {
        THRESHOLDS
            .iter()
            .find(|(min, _)| average >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }
}

impl Score {
    /// Parse a raw form field for `subject`.
    ///
    /// Surrounding whitespace is ignored. Anything that is not an integer in
    /// `0..=100` is rejected.
    pub fn parse(subject: Subject, raw: &str) -> Result<Score, ValidationError> {
        let invalid = || ValidationError::InvalidScore {
            subject,
            value: raw.to_string(),
        };
        let value: i64 = raw.trim().parse().map_err(|_| invalid())?;
        u8::try_from(value)
            .ok()
            .and_then(|v| Score::try_from(v).ok())
            .ok_or_else(invalid)
    }
}

/// Validate the raw form fields.
///
/// Returns the trimmed name and one score per subject in [`Subject::ALL`]
/// order. The name is checked first, then each score in form order; the
/// first failure wins.
pub fn validate(
    name: &str,
    raw_scores: &[impl AsRef<str>; 4],
) -> Result<(String, [Score; 4]), ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    // The name must not split its own history block.
    if name.contains(DELIMITER) || name.contains(['\n', '\r']) {
        return Err(ValidationError::InvalidName(name.to_string()));
    }

    let mut scores = [Score::ZERO; 4];
    for (subject, raw) in Subject::ALL.into_iter().zip(raw_scores) {
        scores[subject.index()] = Score::parse(subject, raw.as_ref())?;
    }

    Ok((name.to_string(), scores))
}

impl Report {
    /// Compute total, average, and grade for validated scores.
    pub fn compute(student_name: impl Into<String>, scores: [Score; 4]) -> Report {
        let total: u32 = scores.iter().map(|s| u32::from(s.value())).sum();
        let average = f64::from(total) / scores.len() as f64;
        Report {
            student_name: student_name.into(),
            scores,
            total,
            average,
            grade: Grade::from_average(average),
        }
    }
}

/// Validate raw form input and compute the report in one step.
pub fn calculate(
    name: &str,
    raw_scores: &[impl AsRef<str>; 4],
) -> Result<Report, ValidationError> {
    let (name, scores) = validate(name, raw_scores)?;
    let report = Report::compute(name, scores);
    tracing::debug!(
        student = %report.student_name,
        total = report.total,
        grade = %report.grade,
        "computed report"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_average(100.0), Grade::A);
        assert_eq!(Grade::from_average(70.0), Grade::A);
        assert_eq!(Grade::from_average(69.75), Grade::B);
        assert_eq!(Grade::from_average(60.0), Grade::B);
        assert_eq!(Grade::from_average(59.99), Grade::C);
        assert_eq!(Grade::from_average(50.0), Grade::C);
        assert_eq!(Grade::from_average(49.5), Grade::D);
        assert_eq!(Grade::from_average(40.0), Grade::D);
        assert_eq!(Grade::from_average(39.75), Grade::F);
        assert_eq!(Grade::from_average(0.0), Grade::F);
    }

    #[test]
    fn grade_is_monotonic_in_average() {
        let rank = |g: Grade| match g {
            Grade::F => 0,
            Grade::D => 1,
            Grade::C => 2,
            Grade::B => 3,
            Grade::A => 4,
        };
        let mut previous = rank(Grade::from_average(0.0));
        for quarter in 0..=400 {
            let current = rank(Grade::from_average(f64::from(quarter) * 0.25));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn compute_high_scores() {
        let report = calculate("Alice", &["80", "70", "60", "90"]).unwrap();
        assert_eq!(report.total, 300);
        assert_eq!(report.average, 75.0);
        assert_eq!(report.grade, Grade::A);
        assert!(report.to_text().contains("Average: 75.00\n"));
    }

    #[test]
    fn compute_failing_scores() {
        let report = calculate("Bob", &["50", "40", "30", "20"]).unwrap();
        assert_eq!(report.total, 140);
        assert_eq!(report.average, 35.0);
        assert_eq!(report.grade, Grade::F);
    }

    #[test]
    fn compute_fractional_average() {
        let report = calculate("Cara", &["61", "60", "60", "60"]).unwrap();
        assert_eq!(report.total, 241);
        assert_eq!(report.average, 60.25);
        assert_eq!(report.grade, Grade::B);
        assert!(report.to_text().contains("Average: 60.25\n"));
    }

    #[test]
    fn validate_trims_fields() {
        let (name, scores) = validate("  Dan  ", &[" 1", "2 ", " 3 ", "4"]).unwrap();
        assert_eq!(name, "Dan");
        assert_eq!(scores.map(Score::value), [1, 2, 3, 4]);
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert_eq!(
            validate("   ", &["1", "2", "3", "4"]),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn validate_rejects_names_that_break_history_blocks() {
        for name in ["Jean---Luc", "---", "Alice\nMath: 100", "Bob\rSmith"] {
            assert_eq!(
                validate(name, &["80", "70", "60", "90"]),
                Err(ValidationError::InvalidName(name.to_string())),
                "name {name:?}"
            );
        }
        assert!(validate("Jean-Luc", &["80", "70", "60", "90"]).is_ok());
        assert!(validate("Anne--Marie", &["80", "70", "60", "90"]).is_ok());
    }

    #[test]
    fn validate_rejects_bad_scores() {
        for (bad, subject) in [
            (["101", "0", "0", "0"], Subject::Math),
            (["0", "-1", "0", "0"], Subject::English),
            (["0", "0", "abc", "0"], Subject::Chemistry),
            (["0", "0", "0", ""], Subject::Science),
            (["0", "0", "0", "85.5"], Subject::Science),
            (["0", "0", "0", "99999999999999999999"], Subject::Science),
        ] {
            let err = validate("Eve", &bad).unwrap_err();
            assert_eq!(err.subject(), Some(subject), "input {bad:?}");
        }
    }

    #[test]
    fn boundary_scores_accepted() {
        let report = calculate("Finn", &["0", "100", "0", "100"]).unwrap();
        assert_eq!(report.total, 200);
        assert_eq!(report.grade, Grade::C);
    }
}
