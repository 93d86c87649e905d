//! Outward spiral walk over an `n x n` grid.
//!
//! The cursor starts at the centre cell and walks straight segments of
//! length 1, 1, 2, 2, 3, 3, ... turning right, down, left, up in that order.
//! Positions outside the grid are stepped over without being reported. The
//! walk ends at the first segment boundary where the cursor lies outside the
//! grid; since the spiral only grows outward it can never come back.

use std::iter::FusedIterator;

use crate::error::SpiralResult;
use crate::matrix::check_dimension;

/// Unit steps as `(d_row, d_col)`: right, down, left, up.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Segments walked before the segment length grows by one.
const SEGMENTS_PER_LENGTH: usize = 2;

/// Returns the row (and column) of the start cell for dimension `n`.
///
/// For even `n` this is the top-left of the four central cells.
/// `n` must be at least 1.
pub fn center(n: usize) -> usize {
    debug_assert!(n >= 1);
    if n % 2 == 0 { n / 2 - 1 } else { n / 2 }
}

/// Outcome of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// The cursor left this in-bounds cell.
    Visit(usize, usize),
    /// The cursor left a position outside the grid.
    Skip,
    /// The walk is over.
    Done,
}

/// Transient state of the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WalkState {
    n: isize,
    row: isize,
    col: isize,
    /// Index into [`DIRECTIONS`].
    dir: usize,
    segment_len: usize,
    /// Segments completed at the current length, modulo [`SEGMENTS_PER_LENGTH`].
    segment_counter: usize,
    /// Steps left in the current segment; zero at a segment boundary.
    remaining: usize,
}

impl WalkState {
    /// Places the cursor on the centre cell, facing right.
    ///
    /// `n` must already be validated.
    pub fn new(n: usize) -> Self {
        let start = center(n) as isize;
        Self {
            n: n as isize,
            row: start,
            col: start,
            dir: 0,
            segment_len: 1,
            segment_counter: 0,
            remaining: 0,
        }
    }

    #[inline]
    fn in_bounds(&self) -> bool {
        (0..self.n).contains(&self.row) && (0..self.n).contains(&self.col)
    }

    /// Moves the cursor one cell, reporting the cell it left.
    pub fn advance(&mut self) -> Step {
        if self.remaining == 0 {
            if !self.in_bounds() {
                return Step::Done;
            }
            self.remaining = self.segment_len;
        }

        let left = if self.in_bounds() {
            Step::Visit(self.row as usize, self.col as usize)
        } else {
            Step::Skip
        };

        let (dr, dc) = DIRECTIONS[self.dir];
        self.row += dr;
        self.col += dc;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.turn();
        }

        left
    }

    fn turn(&mut self) {
        self.dir = (self.dir + 1) % DIRECTIONS.len();
        self.segment_counter = (self.segment_counter + 1) % SEGMENTS_PER_LENGTH;
        if self.segment_counter == 0 {
            self.segment_len += 1;
        }
    }

    #[cfg(test)]
    pub(crate) fn segment_len(&self) -> usize {
        self.segment_len
    }
}

/// An iterator over the in-bounds cells of the spiral, in visiting order.
///
/// Yields `(row, col)` pairs; every cell of the grid appears exactly once.
///
/// # Example
///
/// ```
/// use spiral_matrix::SpiralWalk;
///
/// let cells: Vec<_> = SpiralWalk::new(2).unwrap().collect();
/// assert_eq!(cells, [(0, 0), (0, 1), (1, 1), (1, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct SpiralWalk {
    state: WalkState,
    left: usize,
}

impl SpiralWalk {
    /// Starts a walk over an `n x n` grid.
    ///
    /// Fails with [`SpiralError::InvalidArgument`](crate::SpiralError) if `n`
    /// is zero or larger than [`MAX_DIMENSION`](crate::MAX_DIMENSION).
    pub fn new(n: usize) -> SpiralResult<Self> {
        check_dimension(n)?;
        Ok(Self {
            state: WalkState::new(n),
            left: n * n,
        })
    }
}

impl Iterator for SpiralWalk {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state.advance() {
                Step::Visit(r, c) => {
                    self.left = self.left.saturating_sub(1);
                    return Some((r, c));
                }
                Step::Skip => continue,
                Step::Done => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl ExactSizeIterator for SpiralWalk {}

impl FusedIterator for SpiralWalk {}
