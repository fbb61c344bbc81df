// stencil.rs - 3x3 discrete Laplacian over one chemical field

use crate::grid::{Buffer, Cell};

/// Which chemical a stencil pass reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    A,
    B,
}

impl Field {
    #[inline]
    pub fn of(self, cell: Cell) -> f64 {
        match self {
            Field::A => cell.a,
            Field::B => cell.b,
        }
    }
}

pub const W_CENTER: f64 = -1.0;
pub const W_ORTHOGONAL: f64 = 0.2;
pub const W_DIAGONAL: f64 = 0.05;

/// Kernel indexed `[dy + 1][dx + 1]`. The weights sum to zero.
#[rustfmt::skip]
pub const KERNEL: [[f64; 3]; 3] = [
    [W_DIAGONAL,   W_ORTHOGONAL, W_DIAGONAL  ],
    [W_ORTHOGONAL, W_CENTER,     W_ORTHOGONAL],
    [W_DIAGONAL,   W_ORTHOGONAL, W_DIAGONAL  ],
];

/// Weighted sum of `field` over the 3x3 neighbourhood of `(x, y)`.
///
/// Reads all eight neighbours with no wraparound, so `(x, y)` must be an interior
/// cell: `1 <= x <= width - 2` and `1 <= y <= height - 2`.
pub fn laplacian(buffer: &Buffer, field: Field, x: usize, y: usize) -> f64 {
    debug_assert!(
        buffer.interior_x().contains(&x) && buffer.interior_y().contains(&y),
        "laplacian at ({x}, {y}) outside interior of {}x{}",
        buffer.width(),
        buffer.height()
    );

    let mut sum = 0.0;
    for (ky, row) in KERNEL.iter().enumerate() {
        for (kx, weight) in row.iter().enumerate() {
            let cell = buffer.get(x + kx - 1, y + ky - 1);
            sum += weight * field.of(cell);
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(width: usize, height: usize, f: impl Fn(usize, usize) -> Cell) -> Buffer {
        let mut buf = Buffer::filled(width, height, Cell::BACKGROUND);
        for y in 0..height {
            for x in 0..width {
                buf.set(x, y, f(x, y));
            }
        }
        buf
    }

    #[test]
    fn test_kernel_sums_to_zero() {
        let total: f64 = KERNEL.iter().flatten().sum();
        assert!(total.abs() < 1e-12, "kernel sum {total}");
    }

    #[test]
    fn test_uniform_field_has_zero_laplacian() {
        let buf = Buffer::filled(5, 5, Cell { a: 0.7, b: 0.3 });
        for y in 1..4 {
            for x in 1..4 {
                assert!(laplacian(&buf, Field::A, x, y).abs() < 1e-12);
                assert!(laplacian(&buf, Field::B, x, y).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_single_spike() {
        let buf = buffer_with(3, 3, |x, y| if (x, y) == (1, 1) { Cell::SATURATED } else { Cell::BACKGROUND });
        assert!((laplacian(&buf, Field::B, 1, 1) - -1.0).abs() < 1e-12);
        assert!(laplacian(&buf, Field::A, 1, 1).abs() < 1e-12);
    }

    #[test]
    fn test_neighbour_weights() {
        // b = 1 only at the orthogonal neighbour to the right
        let buf = buffer_with(3, 3, |x, y| Cell { a: 1.0, b: if (x, y) == (2, 1) { 1.0 } else { 0.0 } });
        assert!((laplacian(&buf, Field::B, 1, 1) - W_ORTHOGONAL).abs() < 1e-12);

        // b = 1 only at a diagonal corner
        let buf = buffer_with(3, 3, |x, y| Cell { a: 1.0, b: if (x, y) == (0, 2) { 1.0 } else { 0.0 } });
        assert!((laplacian(&buf, Field::B, 1, 1) - W_DIAGONAL).abs() < 1e-12);
    }

    #[test]
    fn test_fields_are_independent() {
        // a varies along x, b along y
        let buf = buffer_with(4, 4, |x, y| Cell { a: x as f64 * x as f64 * 0.1, b: y as f64 * 0.2 });
        let lap_a = laplacian(&buf, Field::A, 1, 1);
        let lap_b = laplacian(&buf, Field::B, 1, 1);
        // second difference of 0.1 x^2 is 0.2, each outer kernel column carries 0.3
        assert!((lap_a - 0.06).abs() < 1e-12, "lap_a = {lap_a}");
        // b is linear, so it cancels
        assert!(lap_b.abs() < 1e-12, "lap_b = {lap_b}");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside interior")]
    fn test_border_cell_rejected() {
        let buf = Buffer::filled(5, 5, Cell::BACKGROUND);
        laplacian(&buf, Field::A, 0, 2);
    }
}
