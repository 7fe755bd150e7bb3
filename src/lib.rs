//! # pairalign
//!
//! Pairwise alignment of two symbol sequences by dynamic programming, in the
//! spirit of EMBOSS `needle` (global) and `water` (local), with a linear gap
//! penalty and a user-supplied substitution table.
//!
//! Unlike a single-traceback aligner, every optimal alignment is enumerated:
//! the fill records *all* moves that attain each cell's score, and the
//! traceback branches at every tie, up to a caller-chosen cap.
//!
//! ## Pipeline
//! 1. [`SubstitutionMatrix`]: symbol-pair scores, loaded from a delimited file
//!    or built from match/mismatch values.
//! 2. [`fill`]: scoring grid plus direction grid.
//! 3. [`traceback`] / [`Tracer`]: capped, deduplicated enumeration from a
//!    start cell.
//! 4. [`write_report`] / [`print_and_save`]: text report.
//!
//! [`needle`] and [`water`] run steps 2 and 3 for the two modes.
//!
//! ### Example
//! ```
//! use pairalign::{water, SubstitutionMatrix, WaterParams};
//! let m = SubstitutionMatrix::uniform("ACGT", 1, -1);
//! let alns = water("TTACGTT", "GACGG", &m, &WaterParams::default()).unwrap();
//! assert_eq!(alns[0].first, "ACG");
//! assert_eq!(alns[0].score, 3);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod common;
pub mod fill;
pub mod grid;
pub mod matrix;
pub mod needle;
pub mod report;
pub mod traceback;
pub mod water;

pub use common::*;
pub use fill::fill;
pub use grid::{Cell, Direction, Directions, Grid, Grids};
pub use matrix::SubstitutionMatrix;
pub use needle::*;
pub use report::{print_and_save, write_report};
pub use traceback::{traceback, Alignment, Tracer};
pub use water::*;
