//! Attempt grid
//!
//! A grid is a fixed number of rows, each [`WIDTH`] cells wide. Cells in a row
//! fill left to right and empty right to left, so filled cells are always a
//! prefix of the row.

use super::alphabet::Letter;
use super::word::{WIDTH, Word};

/// A single grid cell: empty, or one uppercase letter
pub type Cell = Option<Letter>;

/// One attempt row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; WIDTH],
    filled: usize,
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WIDTH] {
        &self.cells
    }

    /// Number of filled cells
    #[inline]
    #[must_use]
    pub const fn filled(&self) -> usize {
        self.filled
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.filled == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.filled == WIDTH
    }

    /// Write `letter` into the first empty cell
    ///
    /// Returns `false` if the row is already full.
    pub(crate) fn push(&mut self, letter: Letter) -> bool {
        if self.is_full() {
            return false;
        }
        self.cells[self.filled] = Some(letter);
        self.filled += 1;
        true
    }

    /// Clear the last filled cell
    pub(crate) fn pop(&mut self) -> Option<Letter> {
        if self.is_blank() {
            return None;
        }
        self.filled -= 1;
        self.cells[self.filled].take()
    }

    /// Letters of a full row, or `None` while any cell is empty
    #[must_use]
    pub fn letters(&self) -> Option<[Letter; WIDTH]> {
        let letters: Vec<Letter> = self.cells.iter().copied().collect::<Option<_>>()?;
        letters.try_into().ok()
    }

    /// The row as a word, once full
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        self.letters().map(Word::from_letters)
    }
}

/// The full attempt grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Create an empty grid with `tries` rows
    #[must_use]
    pub fn new(tries: usize) -> Self {
        Self {
            rows: vec![Row::default(); tries],
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Number of rows, i.e. the attempt limit
    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.rows.len()
    }

    /// Letter in a cell, if any
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.row(row)
            .and_then(|r| r.cells().get(column).copied())
            .flatten()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(Row::is_blank)
    }
}
