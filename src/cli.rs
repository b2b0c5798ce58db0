use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::constants::DEFAULT_TEMPLATE_PATH;

#[derive(Parser, Debug)]
#[command(name = "rwdlab", version, about = "Responsive design lab challenge validator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_TEMPLATE_PATH,
        help = "Path to the lab template under validation"
    )]
    pub template: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate every challenge and print the full report
    Validate,
    /// Print the granular check score across all challenges
    Score,
    /// Evaluate a single challenge (1, 2, or 3)
    Challenge { id: u8 },
}
