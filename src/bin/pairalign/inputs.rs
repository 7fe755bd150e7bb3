//! Options and loaders shared by the alignment subcommands.
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Args;
use pairalign::*;

/// Sequence and scoring inputs common to `needle` and `water`.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// A-sequence FASTA file (first record used).
    #[arg(long, value_name="FILE")]
    pub asequence: PathBuf,
    /// B-sequence FASTA file (first record used).
    #[arg(long, value_name="FILE")]
    pub bsequence: PathBuf,
    /// Substitution matrix as delimited text (header row of symbols, then one row per symbol).
    #[arg(long, value_name="FILE")]
    pub matrix: Option<PathBuf>,
    /// Alphabet for the built-in match/mismatch matrix (ignored with --matrix).
    #[arg(long, default_value="ACGTU")]
    pub alphabet: String,
    /// Match score for the built-in matrix.
    #[arg(long, default_value_t=1)]
    pub match_score: i32,
    /// Mismatch score for the built-in matrix.
    #[arg(long, default_value_t=-1, allow_negative_numbers=true)]
    pub mismatch: i32,
    /// Score per symbol aligned against a gap.
    #[arg(long, default_value_t=-2, allow_negative_numbers=true)]
    pub gap: i32,
    /// Maximum number of optimal alignments to report.
    #[arg(long, default_value_t=10)]
    pub alignments: usize,
}

pub fn read_first(path: &PathBuf) -> Result<FastaRecord> {
    let mut s = String::new();
    File::open(path).with_context(|| format!("open FASTA: {}", path.display()))?.read_to_string(&mut s)?;
    let recs = parse_fasta(&s);
    recs.into_iter().next().ok_or_else(|| anyhow::anyhow!("no FASTA records in {}", path.display()))
}

pub fn load_matrix(args: &InputArgs) -> Result<SubstitutionMatrix> {
    match &args.matrix {
        Some(path) => SubstitutionMatrix::from_path(path)
            .with_context(|| format!("load substitution matrix: {}", path.display())),
        None => Ok(SubstitutionMatrix::uniform(&args.alphabet.to_ascii_uppercase(), args.match_score, args.mismatch)),
    }
}
