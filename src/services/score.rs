//! Verdict aggregation and recommendation tiers.
//!
//! Two aggregation policies coexist: the strict per-challenge score used for
//! the pass/fail contract, and the granular per-check score used for finer
//! feedback. Warnings and the integration verdict count toward neither.

use crate::domain::models::{ChallengeVerdict, OverallResult, ScoreReport};

/// Build the overall result from the three challenge verdicts plus the
/// integration verdict. Scores use integer truncation, so 2 of 3 passing
/// challenges yields 66.
pub fn aggregate(challenges: Vec<ChallengeVerdict>, integration: ChallengeVerdict) -> OverallResult {
    let passed_challenges = challenges.iter().filter(|c| c.passed).count() as u32;
    let total_challenges = challenges.len() as u32;

    let mut checks_passed = 0;
    let mut checks_total = 0;
    for verdict in &challenges {
        let (p, t) = verdict.error_counts();
        checks_passed += p;
        checks_total += t;
    }

    OverallResult {
        passed: passed_challenges == total_challenges,
        strict_score: percentage(passed_challenges, total_challenges),
        checks_passed,
        checks_total,
        granular_score: percentage(checks_passed, checks_total),
        challenges,
        integration,
    }
}

pub fn score_report(result: &OverallResult) -> ScoreReport {
    ScoreReport {
        checks_passed: result.checks_passed,
        checks_total: result.checks_total,
        score: result.granular_score,
    }
}

fn percentage(passed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    passed * 100 / total
}

/// Tiered recommendation text; thresholds are inclusive lower bounds.
pub fn recommendation(score: u32) -> [&'static str; 2] {
    if score == 100 {
        [
            "Excellent work! You have mastered responsive utility breakpoints.",
            "Try the advanced challenges or help other learners.",
        ]
    } else if score >= 80 {
        [
            "Great job! You have a solid understanding of responsive design.",
            "Polish the remaining issues to achieve mastery.",
        ]
    } else if score >= 60 {
        [
            "Good progress! Review the mobile-first methodology.",
            "Focus on the failing challenges and try again.",
        ]
    } else {
        [
            "Keep learning! Responsive design takes practice.",
            "Review the lessons and work through each challenge step by step.",
        ]
    }
}
