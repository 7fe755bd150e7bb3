//! Command-line interface for the `pairalign` crate.
//!
//! Subcommands are implemented in separate files (modules) under `src/bin/pairalign/`:
//! - `needle_cmd.rs`
//! - `water_cmd.rs`
//!
use clap::{Parser, Subcommand};
use anyhow::Result;

#[derive(Debug, Parser)]
#[command(name="pairalign", version=env!("CARGO_PKG_VERSION"), about="Global and local pairwise alignment with tied-optimum enumeration", disable_help_subcommand=true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Needleman–Wunsch global alignment (EMBOSS `needle` style).
    Needle(needle_cmd::NeedleCmd),
    /// Smith–Waterman local alignment (EMBOSS `water` style).
    Water(water_cmd::WaterCmd),
}

#[path = "pairalign/inputs.rs"] mod inputs;
#[path = "pairalign/needle_cmd.rs"] mod needle_cmd;
#[path = "pairalign/water_cmd.rs"] mod water_cmd;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    match cli.command {
        Command::Needle(cmd) => needle_cmd::run(cmd),
        Command::Water(cmd) => water_cmd::run(cmd),
    }
}
