use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Args;
use pairalign::*;

use crate::inputs::{load_matrix, read_first, InputArgs};

/// Options for the `water` subcommand.
#[derive(Debug, Args)]
pub struct WaterCmd {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Output file for the alignment report (overwritten).
    #[arg(long, default_value="water.txt")]
    pub outfile: PathBuf,
}

pub fn run(cmd: WaterCmd) -> Result<()> {
    let a = read_first(&cmd.inputs.asequence)?;
    let b = read_first(&cmd.inputs.bsequence)?;
    let matrix = load_matrix(&cmd.inputs)?;
    log::info!("water: {} (len {}) vs {} (len {})", a.id, a.seq.len(), b.id, b.seq.len());

    let params = WaterParams { gap_penalty: cmd.inputs.gap, max_alignments: cmd.inputs.alignments };
    let alns = water(&a.seq, &b.seq, &matrix, &params)
        .with_context(|| format!("align {} against {}", a.id, b.id))?;
    for (k, aln) in alns.iter().enumerate() {
        log::debug!("alignment {}: {} columns, {:.2}% identity", k + 1, aln.len(), aln.identity());
    }

    print_and_save(&cmd.outfile, Mode::Local.title(), &alns)
        .with_context(|| format!("write {}", cmd.outfile.display()))?;
    Ok(())
}
