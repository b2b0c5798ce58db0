use clap::Parser;

use rwdlab::cli::Cli;
use rwdlab::commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let passed = commands::handle_runtime_commands(&cli)?;
    if !passed {
        std::process::exit(1);
    }
    Ok(())
}
