//! Common helpers shared by the aligners: the crate error type, the alignment
//! mode switch, and minimal FASTA parsing.
//!
//! ## FASTA
//! The parser is intentionally permissive and suitable for small/medium files
//! and tests. It supports multi-record inputs and keeps all non‑alphabetic
//! symbols as‑is (conversion to uppercase only).
//!
//! ## Examples
//! ```rust
//! use pairalign::parse_fasta;
//! let recs = parse_fasta(">s1\nGATT\nACA\n>s2\nGCATGCU\n");
//! assert_eq!(recs.len(), 2);
//! assert_eq!(recs[0].seq, "GATTACA");
//! ```

/// Gap marker used in aligned strings.
pub const GAP: char = '-';

/// Errors that can be returned by the algorithms in this crate.
#[derive(thiserror::Error, Debug)]
pub enum AlignError {
    /// Returned when a substitution table cannot be parsed.
    #[error("malformed substitution matrix: {0}")]
    MalformedMatrix(String),
    /// Returned when a sequence symbol has no entry in the substitution table.
    #[error("missing substitution entry for ({row}, {col})")]
    MissingSubstitution { row: char, col: char },
    /// Returned when a traceback is asked to start outside the grid.
    #[error("start cell ({i}, {j}) outside {rows}x{cols} grid")]
    StartOutOfBounds { i: usize, j: usize, rows: usize, cols: usize },
    /// Returned when sequence input is empty or otherwise invalid.
    #[error("invalid sequence input: {0}")]
    InvalidSequence(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Alignment mode: end-to-end (Needleman–Wunsch) or best substring (Smith–Waterman).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Global,
    Local,
}

impl Mode {
    /// Title used by the report ("Global alignment no. 1:").
    pub fn title(self) -> &'static str {
        match self {
            Mode::Global => "Global",
            Mode::Local => "Local",
        }
    }
}

/// A simple in-memory FASTA record parsed by [`parse_fasta`].
#[derive(Clone, Debug)]
pub struct FastaRecord {
    /// Identifier from the FASTA header (text after '>').
    pub id: String,
    /// Raw sequence (uppercase).
    pub seq: String,
}

/// Parse a minimal FASTA string into a vector of [`FastaRecord`].
///
/// *Lines starting with `>` start a new record.* All other lines are appended
/// (trimmed) to the current sequence. Sequences are uppercased. Text before the
/// first header is ignored.
pub fn parse_fasta(text: &str) -> Vec<FastaRecord> {
    let mut out: Vec<FastaRecord> = vec![];
    let mut id: Option<String> = None;
    let mut seq = String::new();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix('>') {
            if let Some(prev) = id.take() {
                out.push(FastaRecord { id: prev, seq: seq.to_ascii_uppercase() });
                seq.clear();
            }
            id = Some(rest.split_whitespace().next().unwrap_or("").to_string());
        } else if id.is_some() {
            seq.push_str(line.trim());
        }
    }
    if let Some(prev) = id {
        out.push(FastaRecord { id: prev, seq: seq.to_ascii_uppercase() });
    }
    out
}
