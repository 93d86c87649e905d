use std::fmt::{self, Write};

use tracing::trace;

use crate::SpiralMatrix;

/// Formatting parameters for [`format`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatParams {
    /// Minimum width of every field; values are right-aligned within it.
    ///
    /// If `None`, uses [`field_width`] of the matrix order, so that every
    /// column lines up. A smaller width is honoured; wider values simply
    /// overflow their field. `u16` is the widest padding `std::fmt` accepts.
    pub field_width: Option<u16>,
}

impl FormatParams {
    /// Params with an explicit field width.
    pub fn with_width(width: u16) -> Self {
        Self {
            field_width: Some(width),
        }
    }

    fn width_for(&self, n: usize) -> usize {
        self.field_width.map_or_else(|| field_width(n), usize::from)
    }
}

/// Returns the number of decimal digits in `n²`, the largest value of a
/// spiral matrix of order `n`.
///
/// Defined for every `usize`, including orders beyond [`MAX_DIMENSION`](crate::MAX_DIMENSION).
pub fn field_width(n: usize) -> usize {
    let n = n as u128;
    (n * n).checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Renders the matrix as text.
///
/// The block starts with a blank line, followed by one line per row. Fields
/// are right-aligned and separated by a single space.
///
/// # Example
///
/// ```
/// use spiral_matrix::{FormatParams, format, generate};
///
/// let m = generate(3).unwrap();
/// assert_eq!(format(&m, &FormatParams::default()), "\n7 8 9\n6 1 2\n5 4 3\n");
/// ```
pub fn format(matrix: &SpiralMatrix, params: &FormatParams) -> String {
    format!("\n{}", Block { matrix, params })
}

/// Rows of a matrix rendered with explicit params.
struct Block<'a> {
    matrix: &'a SpiralMatrix,
    params: &'a FormatParams,
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.matrix, self.params)
    }
}

/// Writes the rows of `matrix` to `w`, each terminated by a newline.
pub(crate) fn write_rows<W: Write>(
    w: &mut W,
    matrix: &SpiralMatrix,
    params: &FormatParams,
) -> fmt::Result {
    let width = params.width_for(matrix.n());
    trace!(n = matrix.n(), width, "formatting rows");
    for row in matrix.rows() {
        for (c, value) in row.iter().enumerate() {
            if c > 0 {
                w.write_char(' ')?;
            }
            write!(w, "{value:>width$}")?;
        }
        w.write_char('\n')?;
    }
    Ok(())
}
