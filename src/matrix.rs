//! Substitution score tables.
//!
//! A table is read from comma-delimited text: the first record is a header
//! whose cells after the first name the column symbols, and every following
//! record starts with a row symbol followed by integer scores aligned with the
//! header. All cells are whitespace-trimmed.
//!
//! ```text
//!  ,A,C,G,T
//! A, 1,-1,-1,-1
//! C,-1, 1,-1,-1
//! G,-1,-1, 1,-1
//! T,-1,-1,-1, 1
//! ```
//!
//! Tables need not be symmetric; `score(row, col)` reads the cell in the row
//! labelled `row` and the column labelled `col`.
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::common::AlignError;

/// Symbol-pair → integer score lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionMatrix {
    rows: HashMap<char, usize>,
    cols: HashMap<char, usize>,
    /// Row-major, `rows.len() * cols.len()` entries.
    scores: Vec<i32>,
}

impl SubstitutionMatrix {
    /// Square table over `alphabet` with one score for identical symbols and
    /// another for every other pair.
    ///
    /// ```rust
    /// use pairalign::SubstitutionMatrix;
    /// let m = SubstitutionMatrix::uniform("ACGT", 1, -1);
    /// assert_eq!(m.score('A', 'A').unwrap(), 1);
    /// assert_eq!(m.score('A', 'T').unwrap(), -1);
    /// ```
    pub fn uniform(alphabet: &str, match_score: i32, mismatch: i32) -> Self {
        let mut symbols: Vec<char> = Vec::new();
        for c in alphabet.chars() {
            if !symbols.contains(&c) {
                symbols.push(c);
            }
        }
        let index: HashMap<char, usize> = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        let mut scores = Vec::with_capacity(symbols.len() * symbols.len());
        for x in &symbols {
            for y in &symbols {
                scores.push(if x == y { match_score } else { mismatch });
            }
        }
        Self { rows: index.clone(), cols: index, scores }
    }

    /// Load a table from a delimited file.
    pub fn from_path(path: &Path) -> Result<Self, AlignError> {
        Self::from_reader(File::open(path)?)
    }

    /// Load a table from any reader. The table is returned only if every
    /// record parses; nothing partial escapes.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AlignError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = rdr.records();

        let header = match records.next() {
            Some(rec) => rec?,
            None => return Err(AlignError::MalformedMatrix("empty input".into())),
        };
        let mut cols = HashMap::new();
        for (idx, cell) in header.iter().skip(1).enumerate() {
            let sym = symbol(cell, 1)?;
            if cols.insert(sym, idx).is_some() {
                return Err(AlignError::MalformedMatrix(format!("duplicate column symbol '{sym}'")));
            }
        }
        let width = cols.len();

        let mut rows = HashMap::new();
        let mut scores = Vec::new();
        for (n, rec) in records.enumerate() {
            let rec = rec?;
            let line = n + 2;
            // Blank lines come back as a single empty field.
            if rec.len() == 1 && rec[0].trim().is_empty() {
                continue;
            }
            let sym = symbol(rec.get(0).unwrap_or(""), line)?;
            if rec.len() - 1 != width {
                return Err(AlignError::MalformedMatrix(format!(
                    "line {line}: expected {width} scores, found {}",
                    rec.len() - 1
                )));
            }
            for cell in rec.iter().skip(1) {
                let value = cell.trim().parse::<i32>().map_err(|_| {
                    AlignError::MalformedMatrix(format!("line {line}: '{}' is not an integer", cell.trim()))
                })?;
                scores.push(value);
            }
            if rows.insert(sym, rows.len()).is_some() {
                return Err(AlignError::MalformedMatrix(format!("duplicate row symbol '{sym}'")));
            }
        }
        log::debug!("loaded substitution matrix: {} rows x {} columns", rows.len(), width);
        Ok(Self { rows, cols, scores })
    }

    /// Score for aligning `row` (a symbol of the first sequence) against `col`
    /// (a symbol of the second).
    pub fn score(&self, row: char, col: char) -> Result<i32, AlignError> {
        match (self.rows.get(&row), self.cols.get(&col)) {
            (Some(&r), Some(&c)) => Ok(self.scores[r * self.cols.len() + c]),
            _ => Err(AlignError::MissingSubstitution { row, col }),
        }
    }

    /// Resolve every pair between `a` and `b` into a dense `a.len() x b.len()`
    /// table, failing on the first symbol without an entry.
    pub(crate) fn pair_scores(&self, a: &[char], b: &[char]) -> Result<Vec<i32>, AlignError> {
        if a.is_empty() || b.is_empty() {
            return Ok(Vec::new());
        }
        let row_idx = a
            .iter()
            .map(|&x| self.rows.get(&x).copied().ok_or(AlignError::MissingSubstitution { row: x, col: b[0] }))
            .collect::<Result<Vec<_>, _>>()?;
        let col_idx = b
            .iter()
            .map(|&y| self.cols.get(&y).copied().ok_or(AlignError::MissingSubstitution { row: a[0], col: y }))
            .collect::<Result<Vec<_>, _>>()?;
        let width = self.cols.len();
        let mut out = Vec::with_capacity(a.len() * b.len());
        for &r in &row_idx {
            out.extend(col_idx.iter().map(|&c| self.scores[r * width + c]));
        }
        Ok(out)
    }
}

fn symbol(cell: &str, line: usize) -> Result<char, AlignError> {
    let cell = cell.trim();
    let mut it = cell.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(AlignError::MalformedMatrix(format!("line {line}: '{cell}' is not a single symbol"))),
    }
}
