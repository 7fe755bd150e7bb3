//! Enumeration of tied optimal alignments.
//!
//! The walk starts at a chosen cell and follows every move recorded in the
//! direction grid, branching wherever several moves tie. It is a depth-first
//! search over an explicit stack, so path length never touches the call
//! stack. Moves are visited Diagonal, Up, Left.
//!
//! A branch ends at `(0, 0)` in global mode and at any zero-scoring cell in
//! local mode. The collection is capped: once it holds `max_count`
//! alignments the walk stops, so it never grows past the cap and a cap of zero
//! yields nothing. Identical alignments reached through different paths are
//! kept once.
use std::collections::HashSet;

use crate::common::{AlignError, Mode, GAP};
use crate::grid::{Cell, Direction, Grids};

/// One optimal alignment.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alignment {
    /// Aligned first sequence, gaps as `-`.
    pub first: String,
    /// Aligned second sequence, gaps as `-`.
    pub second: String,
    pub score: i32,
}

impl Alignment {
    /// Number of aligned columns.
    pub fn len(&self) -> usize {
        self.first.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    /// Both rows with gap markers removed.
    pub fn ungapped(&self) -> (String, String) {
        (
            self.first.chars().filter(|&c| c != GAP).collect(),
            self.second.chars().filter(|&c| c != GAP).collect(),
        )
    }

    /// Percent of columns where both rows carry the same symbol.
    pub fn identity(&self) -> f64 {
        let cols = self.len();
        if cols == 0 {
            return 0.0;
        }
        let ident = self
            .first
            .chars()
            .zip(self.second.chars())
            .filter(|&(x, y)| x != GAP && x == y)
            .count();
        ident as f64 * 100.0 / cols as f64
    }
}

/// Pending branch: where it stands and what it has built so far, reversed.
struct Frame {
    cell: Cell,
    first: Vec<char>,
    second: Vec<char>,
}

/// Owns the result collection for one enumeration. Several start cells may
/// be traced into the same collection before calling [`Tracer::finish`].
pub struct Tracer<'a> {
    a: &'a [char],
    b: &'a [char],
    grids: &'a Grids,
    max_count: usize,
    found: Vec<Alignment>,
    seen: HashSet<Alignment>,
}

impl<'a> Tracer<'a> {
    pub fn new(a: &'a [char], b: &'a [char], grids: &'a Grids, max_count: usize) -> Result<Self, AlignError> {
        if grids.scores.rows() != a.len() + 1 || grids.scores.cols() != b.len() + 1 {
            return Err(AlignError::InvalidSequence("sequence lengths do not match the grids"));
        }
        Ok(Self { a, b, grids, max_count, found: Vec::new(), seen: HashSet::new() })
    }

    pub fn is_full(&self) -> bool {
        self.found.len() >= self.max_count
    }

    /// Enumerate alignments ending at `start`.
    ///
    /// In local mode every alignment emitted here carries `start_score`. In
    /// global mode the score is always the grid's final cell and
    /// `start_score` is ignored.
    pub fn trace_from(&mut self, start: Cell, start_score: i32) -> Result<(), AlignError> {
        if !self.grids.scores.contains(start) {
            return Err(AlignError::StartOutOfBounds {
                i: start.i,
                j: start.j,
                rows: self.grids.scores.rows(),
                cols: self.grids.scores.cols(),
            });
        }
        let score = match self.grids.mode {
            Mode::Global => self.grids.score(self.grids.end_cell()),
            Mode::Local => start_score,
        };
        let before = self.found.len();
        let mut visited = 0usize;

        let mut stack = vec![Frame { cell: start, first: Vec::new(), second: Vec::new() }];
        while let Some(frame) = stack.pop() {
            if self.is_full() {
                break;
            }
            visited += 1;
            if self.is_terminal(frame.cell) {
                self.emit(frame, score);
                continue;
            }

            let Frame { cell, mut first, mut second } = frame;
            let dirs = self.grids.directions[cell];
            if dirs.is_empty() {
                log::trace!("dead end at ({}, {})", cell.i, cell.j);
                continue;
            }
            // Reverse push so Diagonal is popped first.
            let mut moves = dirs.iter().rev().peekable();
            while let Some(d) = moves.next() {
                let (mut f, mut s) = if moves.peek().is_none() {
                    (std::mem::take(&mut first), std::mem::take(&mut second))
                } else {
                    (first.clone(), second.clone())
                };
                if let Some(next) = self.step(cell, d, &mut f, &mut s) {
                    stack.push(Frame { cell: next, first: f, second: s });
                }
            }
        }

        log::debug!(
            "traceback from ({}, {}): {} new alignment(s), {} cell(s) visited",
            start.i,
            start.j,
            self.found.len() - before,
            visited
        );
        Ok(())
    }

    pub fn finish(self) -> Vec<Alignment> {
        self.found
    }

    fn is_terminal(&self, cell: Cell) -> bool {
        match self.grids.mode {
            Mode::Global => cell.i == 0 && cell.j == 0,
            Mode::Local => self.grids.score(cell) == 0,
        }
    }

    /// Apply one move, writing the consumed column. `None` if the move would
    /// leave the grid.
    fn step(&self, cell: Cell, d: Direction, first: &mut Vec<char>, second: &mut Vec<char>) -> Option<Cell> {
        let Cell { i, j } = cell;
        match d {
            Direction::Diagonal if i > 0 && j > 0 => {
                first.push(self.a[i - 1]);
                second.push(self.b[j - 1]);
                Some(Cell::new(i - 1, j - 1))
            }
            Direction::Up if i > 0 => {
                first.push(self.a[i - 1]);
                second.push(GAP);
                Some(Cell::new(i - 1, j))
            }
            Direction::Left if j > 0 => {
                first.push(GAP);
                second.push(self.b[j - 1]);
                Some(Cell::new(i, j - 1))
            }
            _ => None,
        }
    }

    fn emit(&mut self, frame: Frame, score: i32) {
        let aln = Alignment {
            first: frame.first.into_iter().rev().collect(),
            second: frame.second.into_iter().rev().collect(),
            score,
        };
        if self.seen.insert(aln.clone()) {
            self.found.push(aln);
        }
    }
}

/// Enumerate up to `max_count` alignments from a single start cell.
pub fn traceback(
    a: &[char],
    b: &[char],
    grids: &Grids,
    start: Cell,
    start_score: i32,
    max_count: usize,
) -> Result<Vec<Alignment>, AlignError> {
    let mut tracer = Tracer::new(a, b, grids, max_count)?;
    tracer.trace_from(start, start_score)?;
    Ok(tracer.finish())
}
