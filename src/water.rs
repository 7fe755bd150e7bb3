//! Smith–Waterman local alignment with a linear gap penalty, enumerating
//! every tied optimum up to a cap.
use crate::common::{AlignError, Mode};
use crate::fill::fill;
use crate::matrix::SubstitutionMatrix;
use crate::traceback::{Alignment, Tracer};

/// Parameters for `water` Smith–Waterman.
#[derive(Clone, Debug)]
pub struct WaterParams {
    /// Score added per symbol aligned against a gap (usually negative).
    pub gap_penalty: i32,
    /// Maximum number of optimal alignments to return.
    pub max_alignments: usize,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self { gap_penalty: -2, max_alignments: 10 }
    }
}

/// Run Smith–Waterman local alignment of `a` against `b`.
///
/// Tracebacks start from every cell holding the grid maximum, in row-major
/// order, and share one capped collection. When nothing scores above zero
/// the single result is the empty alignment with score 0.
pub fn water(a: &str, b: &str, matrix: &SubstitutionMatrix, params: &WaterParams) -> Result<Vec<Alignment>, AlignError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let grids = fill(&a, &b, matrix, params.gap_penalty, Mode::Local)?;

    let (best, starts) = grids.best_cells();
    log::debug!("water: max score {best} at {} cell(s)", starts.len());

    let mut tracer = Tracer::new(&a, &b, &grids, params.max_alignments)?;
    for start in starts {
        if tracer.is_full() {
            break;
        }
        tracer.trace_from(start, best)?;
    }
    let out = tracer.finish();
    log::info!("water: score {best}, {} optimal alignment(s)", out.len());
    Ok(out)
}
