//! Validator for the responsive design lab template.
//!
//! The lab asks a learner to edit an HTML template until three challenges
//! (a responsive card, an adaptive navigation bar, a responsive dashboard
//! grid) carry the right breakpoint utility classes. This crate loads the
//! template, inspects it with CSS selector queries, and reports a verdict
//! per challenge plus an overall score.

pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use domain::models::{ChallengeVerdict, Check, OverallResult, Severity};
pub use services::rules::{evaluate_all, evaluate_challenge, evaluate_integration};
