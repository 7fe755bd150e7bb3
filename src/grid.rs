//! Dynamic-programming grids.
//!
//! Both grids are `(len1 + 1) x (len2 + 1)`, stored flat in row-major order.
//! Row 0 and column 0 stand for "before the sequence".
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::common::Mode;

/// One traceback move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Consume a symbol from both sequences.
    Diagonal,
    /// Consume a symbol from the first sequence only (gap in the second).
    Up,
    /// Consume a symbol from the second sequence only (gap in the first).
    Left,
}

impl Direction {
    const ALL: [Direction; 3] = [Direction::Diagonal, Direction::Up, Direction::Left];

    fn bit(self) -> u8 {
        match self {
            Direction::Diagonal => 0b001,
            Direction::Up => 0b010,
            Direction::Left => 0b100,
        }
    }
}

/// Set of moves attaining a cell's score.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directions(u8);

impl Directions {
    pub const EMPTY: Directions = Directions(0);

    pub fn single(d: Direction) -> Self {
        Directions(d.bit())
    }

    pub fn insert(&mut self, d: Direction) {
        self.0 |= d.bit();
    }

    pub fn contains(self, d: Direction) -> bool {
        self.0 & d.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in Diagonal, Up, Left order.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl fmt::Debug for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Grid coordinates: `i` indexes the first sequence, `j` the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub i: usize,
    pub j: usize,
}

impl Cell {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

/// Dense row-major 2-D array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self { rows, cols, data: vec![fill; rows * cols] }
    }
}

impl<T> Grid<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.i < self.rows && cell.j < self.cols
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}

impl<T> Index<Cell> for Grid<T> {
    type Output = T;

    fn index(&self, cell: Cell) -> &T {
        &self.data[cell.i * self.cols + cell.j]
    }
}

impl<T> IndexMut<Cell> for Grid<T> {
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        &mut self.data[cell.i * self.cols + cell.j]
    }
}

/// Scoring grid plus the parallel direction grid, built once per input and
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct Grids {
    pub mode: Mode,
    pub scores: Grid<i32>,
    pub directions: Grid<Directions>,
}

impl Grids {
    /// `(len1, len2)`: where a global traceback starts.
    pub fn end_cell(&self) -> Cell {
        Cell::new(self.scores.rows() - 1, self.scores.cols() - 1)
    }

    pub fn score(&self, cell: Cell) -> i32 {
        self.scores[cell]
    }

    /// Maximum score and every cell holding it, in row-major order.
    ///
    /// When nothing scores above zero the only start reported is `(0, 0)`,
    /// which traces back to the empty alignment.
    pub fn best_cells(&self) -> (i32, Vec<Cell>) {
        let mut best = 0;
        let mut cells = vec![Cell::new(0, 0)];
        for i in 0..self.scores.rows() {
            for (j, &v) in self.scores.row(i).iter().enumerate() {
                if v > best {
                    best = v;
                    cells.clear();
                    cells.push(Cell::new(i, j));
                } else if v == best && best > 0 {
                    cells.push(Cell::new(i, j));
                }
            }
        }
        (best, cells)
    }
}
