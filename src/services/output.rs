use serde::Serialize;

use crate::domain::constants::NEXT_STEPS;
use crate::domain::models::{ChallengeVerdict, JsonOut, OverallResult};
use crate::services::score;

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

fn heading(verdict: &ChallengeVerdict) -> String {
    if verdict.id == 0 {
        verdict.title.clone()
    } else {
        format!("Challenge {}: {}", verdict.id, verdict.title)
    }
}

/// One report section: status line, then failed errors and warnings with
/// their remediation hints.
pub fn print_verdict(verdict: &ChallengeVerdict) {
    let status = if verdict.passed { "PASSED" } else { "FAILED" };
    println!("{} ... {}", heading(verdict), status);

    let errors: Vec<&str> = verdict.failed_errors().map(|c| c.hint.as_str()).collect();
    if !errors.is_empty() {
        println!("  errors:");
        for hint in errors {
            println!("    - {hint}");
        }
    }

    let warnings: Vec<&str> = verdict.failed_warnings().map(|c| c.hint.as_str()).collect();
    if !warnings.is_empty() {
        println!("  warnings:");
        for hint in warnings {
            println!("    - {hint}");
        }
    }
}

/// Full console report: section per challenge, integration section, both
/// scores, pass/fail banner, tiered recommendation, fixed next steps.
pub fn print_report(result: &OverallResult) {
    let rule = "=".repeat(60);
    println!("{rule}");
    println!("VALIDATION RESULTS");
    println!("{rule}");

    for verdict in &result.challenges {
        println!();
        print_verdict(verdict);
    }
    println!();
    print_verdict(&result.integration);

    let passed_challenges = result.challenges.iter().filter(|c| c.passed).count();
    println!();
    println!("{}", "-".repeat(60));
    println!(
        "Overall score: {}% ({}/{} challenges passed)",
        result.strict_score,
        passed_challenges,
        result.challenges.len()
    );
    println!(
        "Checks passed: {}/{} ({}%)",
        result.checks_passed, result.checks_total, result.granular_score
    );
    println!(
        "Status: {}",
        if result.passed {
            "ALL CHALLENGES PASSED"
        } else {
            "SOME CHALLENGES FAILED"
        }
    );

    println!();
    println!("Recommendations:");
    for line in score::recommendation(result.strict_score) {
        println!("  {line}");
    }

    println!();
    println!("Next steps:");
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    println!("{rule}");
}
