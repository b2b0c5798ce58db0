//! Service layer containing the validation logic and output helpers.
//!
//! ## Service map
//! - `document.rs` — template acquisition (filesystem read + parse).
//! - `rules.rs` — rule evaluator: one entry point per challenge + integration.
//! - `score.rs` — verdict aggregation and recommendation tiers.
//! - `output.rs` — JSON/text output helpers and the console report.
//!
//! ## Conventions
//! - Evaluation is pure: services only read the parsed document.
//! - Check failures are accumulated, never thrown; the only fatal error is
//!   a failed acquisition.
//! - Keep command handlers thin; delegate to services.

pub mod document;
pub mod output;
pub mod rules;
pub mod score;
