use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Args;
use pairalign::*;

use crate::inputs::{load_matrix, read_first, InputArgs};

/// Options for the `needle` subcommand.
#[derive(Debug, Args)]
pub struct NeedleCmd {
    #[command(flatten)]
    pub inputs: InputArgs,
    /// Output file for the alignment report (overwritten).
    #[arg(long, default_value="needle.txt")]
    pub outfile: PathBuf,
}

pub fn run(cmd: NeedleCmd) -> Result<()> {
    let a = read_first(&cmd.inputs.asequence)?;
    let b = read_first(&cmd.inputs.bsequence)?;
    let matrix = load_matrix(&cmd.inputs)?;
    log::info!("needle: {} (len {}) vs {} (len {})", a.id, a.seq.len(), b.id, b.seq.len());

    let params = NeedleParams { gap_penalty: cmd.inputs.gap, max_alignments: cmd.inputs.alignments };
    let alns = needle(&a.seq, &b.seq, &matrix, &params)
        .with_context(|| format!("align {} against {}", a.id, b.id))?;
    for (k, aln) in alns.iter().enumerate() {
        log::debug!("alignment {}: {} columns, {:.2}% identity", k + 1, aln.len(), aln.identity());
    }

    print_and_save(&cmd.outfile, Mode::Global.title(), &alns)
        .with_context(|| format!("write {}", cmd.outfile.display()))?;
    Ok(())
}
