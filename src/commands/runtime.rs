use crate::cli::{Cli, Commands};
use crate::domain::models::JsonOut;
use crate::services::{document, output, rules, score};

/// Dispatch one CLI invocation. Returns whether the evaluated surface
/// passed, which the caller maps to the process exit code. An acquisition
/// failure propagates as an error and produces no report.
pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<bool> {
    let doc = document::load_template(&cli.template)?;

    match &cli.command {
        Commands::Validate => {
            let result = rules::evaluate_all(&doc)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &result
                    })?
                );
            } else {
                output::print_report(&result);
            }
            Ok(result.passed)
        }
        Commands::Score => {
            let result = rules::evaluate_all(&doc)?;
            let report = score::score_report(&result);
            output::print_one(cli.json, &report, |r| {
                format!("{}/{} checks passed ({}%)", r.checks_passed, r.checks_total, r.score)
            })?;
            Ok(result.passed)
        }
        Commands::Challenge { id } => {
            let verdict = rules::evaluate_challenge(*id, &doc)?;
            let passed = verdict.passed;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &verdict
                    })?
                );
            } else {
                output::print_verdict(&verdict);
            }
            Ok(passed)
        }
    }
}
