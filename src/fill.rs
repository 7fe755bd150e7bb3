//! Matrix fill for linear-gap global and local alignment.
//!
//! For every interior cell the three candidate scores are
//!
//! ```text
//! diag = S[i-1][j-1] + sub(a[i-1], b[j-1])
//! up   = S[i-1][j]   + gap
//! left = S[i][j-1]   + gap
//! ```
//!
//! The cell keeps their maximum (floored at zero in local mode) and every move
//! whose candidate equals the stored value. A local cell floored to zero keeps
//! an empty direction set and acts as an alignment start.
use crate::common::{AlignError, Mode};
use crate::grid::{Cell, Direction, Directions, Grid, Grids};
use crate::matrix::SubstitutionMatrix;

/// Build the scoring and direction grids for `a` (rows) against `b` (columns).
///
/// Fails with [`AlignError::MissingSubstitution`] before any cell is computed
/// if a compared symbol has no table entry.
pub fn fill(
    a: &[char],
    b: &[char],
    matrix: &SubstitutionMatrix,
    gap: i32,
    mode: Mode,
) -> Result<Grids, AlignError> {
    let n = a.len();
    let m = b.len();
    let sub = matrix.pair_scores(a, b)?;

    let mut scores = Grid::new(n + 1, m + 1, 0i32);
    let mut directions = Grid::new(n + 1, m + 1, Directions::EMPTY);

    if mode == Mode::Global {
        for i in 1..=n {
            scores[Cell::new(i, 0)] = scores[Cell::new(i - 1, 0)] + gap;
            directions[Cell::new(i, 0)] = Directions::single(Direction::Up);
        }
        for j in 1..=m {
            scores[Cell::new(0, j)] = scores[Cell::new(0, j - 1)] + gap;
            directions[Cell::new(0, j)] = Directions::single(Direction::Left);
        }
    }

    for i in 1..=n {
        for j in 1..=m {
            let diag = scores[Cell::new(i - 1, j - 1)] + sub[(i - 1) * m + (j - 1)];
            let up = scores[Cell::new(i - 1, j)] + gap;
            let left = scores[Cell::new(i, j - 1)] + gap;

            let mut value = diag.max(up).max(left);
            if mode == Mode::Local {
                value = value.max(0);
            }

            let mut dirs = Directions::EMPTY;
            if diag == value {
                dirs.insert(Direction::Diagonal);
            }
            if up == value {
                dirs.insert(Direction::Up);
            }
            if left == value {
                dirs.insert(Direction::Left);
            }

            let cell = Cell::new(i, j);
            scores[cell] = value;
            directions[cell] = dirs;
        }
    }

    let grids = Grids { mode, scores, directions };
    log::debug!(
        "{:?} fill {}x{}: end score {}",
        mode,
        n + 1,
        m + 1,
        grids.score(grids.end_cell())
    );
    Ok(grids)
}
