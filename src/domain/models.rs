use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One atomic assertion about the template, with a remediation hint
/// rendered only when the assertion fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub name: String,
    pub severity: Severity,
    pub passed: bool,
    pub hint: String,
}

impl Check {
    pub fn new(name: &str, severity: Severity, passed: bool, hint: &str) -> Self {
        Check {
            name: name.to_string(),
            severity,
            passed,
            hint: hint.to_string(),
        }
    }
}

/// Result of evaluating all checks for one challenge. `id` is 1..=3 for the
/// challenges; the cross-challenge integration verdict reuses this shape
/// with `id = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeVerdict {
    pub id: u8,
    pub title: String,
    pub checks: Vec<Check>,
    pub passed: bool,
}

impl ChallengeVerdict {
    /// Warnings never affect `passed`.
    pub fn new(id: u8, title: &str, checks: Vec<Check>) -> Self {
        let passed = checks
            .iter()
            .filter(|c| c.severity == Severity::Error)
            .all(|c| c.passed);
        ChallengeVerdict {
            id,
            title: title.to_string(),
            checks,
            passed,
        }
    }

    pub fn failed_errors(&self) -> impl Iterator<Item = &Check> {
        self.checks
            .iter()
            .filter(|c| c.severity == Severity::Error && !c.passed)
    }

    pub fn failed_warnings(&self) -> impl Iterator<Item = &Check> {
        self.checks
            .iter()
            .filter(|c| c.severity == Severity::Warning && !c.passed)
    }

    /// (passed, total) over the error-severity checks.
    pub fn error_counts(&self) -> (u32, u32) {
        let errors = self
            .checks
            .iter()
            .filter(|c| c.severity == Severity::Error);
        let mut passed = 0;
        let mut total = 0;
        for c in errors {
            total += 1;
            if c.passed {
                passed += 1;
            }
        }
        (passed, total)
    }
}

/// Aggregate of one validation run. Owns the three challenge verdicts plus
/// the integration verdict, and exposes both aggregation policies: the
/// strict per-challenge score and the granular per-check counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverallResult {
    pub challenges: Vec<ChallengeVerdict>,
    pub integration: ChallengeVerdict,
    pub passed: bool,
    pub strict_score: u32,
    pub checks_passed: u32,
    pub checks_total: u32,
    pub granular_score: u32,
}

/// Standalone granular view for the `score` command.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub checks_passed: u32,
    pub checks_total: u32,
    pub score: u32,
}
