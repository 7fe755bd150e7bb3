//! Needleman–Wunsch global alignment with a linear gap penalty, enumerating
//! every tied optimum up to a cap.
use crate::common::{AlignError, Mode};
use crate::fill::fill;
use crate::matrix::SubstitutionMatrix;
use crate::traceback::{Alignment, Tracer};

/// Parameters for `needle` (global alignment).
#[derive(Clone, Debug)]
pub struct NeedleParams {
    /// Score added per symbol aligned against a gap (usually negative).
    pub gap_penalty: i32,
    /// Maximum number of optimal alignments to return.
    pub max_alignments: usize,
}

impl Default for NeedleParams {
    fn default() -> Self {
        Self { gap_penalty: -2, max_alignments: 10 }
    }
}

/// Run Needleman–Wunsch global alignment of `a` against `b`.
///
/// Every returned alignment consumes both sequences end to end and scores the
/// grid optimum.
///
/// ```rust
/// use pairalign::{needle, NeedleParams, SubstitutionMatrix};
/// let m = SubstitutionMatrix::uniform("ACGT", 1, -1);
/// let alns = needle("ACGT", "AGT", &m, &NeedleParams::default()).unwrap();
/// assert_eq!(alns[0].first, "ACGT");
/// assert_eq!(alns[0].second, "A-GT");
/// ```
pub fn needle(a: &str, b: &str, matrix: &SubstitutionMatrix, params: &NeedleParams) -> Result<Vec<Alignment>, AlignError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let grids = fill(&a, &b, matrix, params.gap_penalty, Mode::Global)?;

    let end = grids.end_cell();
    let mut tracer = Tracer::new(&a, &b, &grids, params.max_alignments)?;
    tracer.trace_from(end, grids.score(end))?;
    let out = tracer.finish();
    log::info!("needle: score {}, {} optimal alignment(s)", grids.score(end), out.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumes_both_sequences() {
        let m = SubstitutionMatrix::uniform("ACGTU", 1, -1);
        let params = NeedleParams { gap_penalty: -1, max_alignments: 50 };
        let out = needle("GATTACA", "GCATGCU", &m, &params).unwrap();
        assert!(!out.is_empty());
        for aln in &out {
            assert_eq!(aln.score, 0);
            assert_eq!(aln.ungapped(), ("GATTACA".to_string(), "GCATGCU".to_string()));
        }
    }

    #[test]
    fn missing_symbol_is_fatal() {
        let m = SubstitutionMatrix::uniform("ACGT", 1, -1);
        assert!(matches!(
            needle("ACN", "ACG", &m, &NeedleParams::default()),
            Err(AlignError::MissingSubstitution { row: 'N', .. })
        ));
    }
}
