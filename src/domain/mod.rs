//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep verdict/report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — check, verdict, and report structs.
//! - `constants.rs` — template path, challenge titles, fixed report text.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or parsing side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs. Keep schema-impacting
//! changes synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
