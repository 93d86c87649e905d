use std::fmt;
use std::mem::size_of;

use tracing::debug;

use crate::error::{SpiralError, SpiralResult};
use crate::printer::{FormatParams, write_rows};
use crate::walk::SpiralWalk;

/// Largest supported dimension. `n²` must fit in a `u32` cell.
///
/// Targets with a narrow address space reject smaller orders too: the whole
/// grid must fit in one allocation.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Largest allocation a `Vec` may request on this target.
const MAX_GRID_BYTES: usize = isize::MAX as usize;

/// A square matrix of order `n` numbered `1..=n²` along an outward spiral.
///
/// Value 1 sits at the centre cell (the top-left of the four central cells
/// when `n` is even), and each following value sits one step further along
/// the spiral: right, down, left, up, with straight runs of length
/// 1, 1, 2, 2, 3, 3, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpiralMatrix {
    n: usize,
    cells: Vec<u32>,
}

impl SpiralMatrix {
    /// Generates the spiral matrix of order `n`.
    ///
    /// Equivalent to [`generate`].
    pub fn new(n: usize) -> SpiralResult<Self> {
        generate(n)
    }

    /// Returns the order of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the value at position `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= n` or `c >= n`.
    pub fn get(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.n && c < self.n, "index out of bounds");
        self.cells[r * self.n + c]
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * n + c`.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        self.cells.chunks_exact(self.n)
    }

    /// Returns the largest value in the matrix, `n²`.
    pub fn max_value(&self) -> u32 {
        (self.n * self.n) as u32
    }

    /// Returns the position holding `value`, or `None` if it is not in `1..=n²`.
    pub fn position_of(&self, value: u32) -> Option<(usize, usize)> {
        let idx = self.cells.iter().position(|&v| v == value)?;
        Some((idx / self.n, idx % self.n))
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Returns true if the cells are a permutation of `1..=n²`.
    ///
    /// Test-only helper. Generation guarantees this by construction.
    #[cfg(test)]
    pub(crate) fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.cells.len()];
        for &v in &self.cells {
            let Some(slot) = (v as usize).checked_sub(1) else {
                return false;
            };
            if slot >= seen.len() || seen[slot] {
                return false;
            }
            seen[slot] = true;
        }
        true
    }
}

impl fmt::Display for SpiralMatrix {
    /// Writes the rows with the default field width, without the leading
    /// blank line that [`format`](crate::format) emits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self, &FormatParams::default())
    }
}

/// Validates a dimension requested as a signed integer.
///
/// Fails with [`SpiralError::InvalidArgument`] unless `1 <= n <= MAX_DIMENSION`.
pub fn validate_dimension(n: i64) -> SpiralResult<usize> {
    let n = usize::try_from(n).map_err(|_| SpiralError::InvalidArgument {
        n,
        reason: "must be at least 1",
    })?;
    check_dimension(n)?;
    Ok(n)
}

pub(crate) fn check_dimension(n: usize) -> SpiralResult<()> {
    if n == 0 {
        return Err(SpiralError::InvalidArgument {
            n: 0,
            reason: "must be at least 1",
        });
    }
    if n > MAX_DIMENSION {
        return Err(SpiralError::InvalidArgument {
            n: i64::try_from(n).unwrap_or(i64::MAX),
            reason: "exceeds the largest supported dimension (65535)",
        });
    }
    if !grid_fits(n, MAX_GRID_BYTES) {
        return Err(SpiralError::InvalidArgument {
            n: n as i64,
            reason: "grid does not fit in the address space",
        });
    }
    Ok(())
}

/// Returns true if an `n x n` grid of `u32` cells takes at most `max_bytes`.
fn grid_fits(n: usize, max_bytes: usize) -> bool {
    n.checked_mul(n)
        .and_then(|cells| cells.checked_mul(size_of::<u32>()))
        .is_some_and(|bytes| bytes <= max_bytes)
}

/// Generates the spiral matrix of order `n`.
///
/// # Errors
/// Returns [`SpiralError::InvalidArgument`] if `n` is zero, larger than
/// [`MAX_DIMENSION`], or the grid cannot be allocated.
///
/// # Example
///
/// ```
/// let m = spiral_matrix::generate(3).unwrap();
/// assert_eq!(m.cells(), &[7, 8, 9, 6, 1, 2, 5, 4, 3][..]);
/// ```
pub fn generate(n: usize) -> SpiralResult<SpiralMatrix> {
    let walk = SpiralWalk::new(n)?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(n * n)
        .map_err(|_| SpiralError::InvalidArgument {
            n: n as i64,
            reason: "not enough memory for the grid",
        })?;
    cells.resize(n * n, 0u32);
    for ((r, c), value) in walk.zip(1u32..) {
        cells[r * n + c] = value;
    }
    debug!(n, cells = cells.len(), "spiral generated");
    Ok(SpiralMatrix { n, cells })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::center;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn order_one_is_single_cell() {
        let m = generate(1).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1u32]]);
    }

    #[test]
    fn order_two_starts_top_left() {
        let m = generate(2).unwrap();
        assert_eq!(m.to_rows(), vec![vec![1u32, 2], vec![4, 3]]);
    }

    #[test]
    fn order_three_starts_at_centre_moving_right() {
        let m = generate(3).unwrap();
        assert_eq!(m.get(1, 1), 1);
        assert_eq!(m.get(1, 2), 2);
        assert_eq!(m.cells(), &[7u32, 8, 9, 6, 1, 2, 5, 4, 3][..]);
    }

    #[test]
    fn order_four_uses_biased_centre() {
        let m = generate(4).unwrap();
        let expected: Vec<Vec<u32>> = vec![
            vec![7, 8, 9, 10],
            vec![6, 1, 2, 11],
            vec![5, 4, 3, 12],
            vec![16, 15, 14, 13],
        ];
        assert_eq!(m.to_rows(), expected);
    }

    #[test]
    fn values_are_permutation_up_to_twenty() {
        for n in 1..=20 {
            let m = generate(n).unwrap();
            assert!(m.is_permutation(), "n={} is not a permutation of 1..=n²", n);
        }
    }

    #[test]
    fn random_orders_are_permutations() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..20 {
            let n = rng.random_range(21..=200);
            let m = generate(n).unwrap();
            assert!(m.is_permutation(), "n={} is not a permutation of 1..=n²", n);
            let start = center(n);
            assert_eq!(m.position_of(1), Some((start, start)));
        }
    }

    #[test]
    fn consecutive_values_are_neighbours() {
        let m = generate(9).unwrap();
        for v in 1..m.max_value() {
            let (r0, c0) = m.position_of(v).unwrap();
            let (r1, c1) = m.position_of(v + 1).unwrap();
            assert_eq!(r0.abs_diff(r1) + c0.abs_diff(c1), 1, "value {}", v);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for n in [1, 5, 6, 12] {
            assert_eq!(generate(n).unwrap(), generate(n).unwrap());
        }
    }

    #[test]
    fn position_of_outside_range_is_none() {
        let m = generate(3).unwrap();
        assert_eq!(m.position_of(0), None);
        assert_eq!(m.position_of(10), None);
        assert_eq!(m.position_of(9), Some((0, 2)));
    }

    #[test]
    fn rows_match_cells() {
        let m = generate(5).unwrap();
        assert_eq!(m.rows().len(), 5);
        let flat: Vec<u32> = m.rows().flatten().copied().collect();
        assert_eq!(flat, m.cells());
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            generate(0),
            Err(SpiralError::InvalidArgument {
                n: 0,
                reason: "must be at least 1"
            })
        );
        assert!(validate_dimension(0).is_err());
        assert!(validate_dimension(-3).is_err());
        assert_eq!(validate_dimension(12), Ok(12));
    }

    #[test]
    fn rejects_oversized_dimension() {
        assert!(generate(MAX_DIMENSION + 1).is_err());
        assert!(validate_dimension(MAX_DIMENSION as i64 + 1).is_err());
        assert_eq!(validate_dimension(MAX_DIMENSION as i64), Ok(MAX_DIMENSION));
    }

    #[test]
    fn grid_size_is_bounded_by_address_space() {
        // isize::MAX on 32-bit targets.
        let narrow = i32::MAX as usize;
        assert!(grid_fits(23_170, narrow));
        assert!(!grid_fits(23_171, narrow));
        assert!(!grid_fits(30_000, narrow));
        assert!(!grid_fits(usize::MAX, usize::MAX));
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn narrow_targets_reject_oversized_grids() {
        assert_eq!(
            generate(30_000),
            Err(SpiralError::InvalidArgument {
                n: 30_000,
                reason: "grid does not fit in the address space",
            })
        );
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn wide_targets_accept_every_supported_order() {
        assert!(grid_fits(MAX_DIMENSION, MAX_GRID_BYTES));
        assert!(check_dimension(MAX_DIMENSION).is_ok());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn get_out_of_bounds_panics() {
        generate(2).unwrap().get(2, 0);
    }
}
