// grid.rs - Grid types for the Gray-Scott reaction-diffusion model

use std::ops::Range;

use crate::config::NextInit;
use crate::error::{Result, SimError};

/// Half-extent of the centred square seeded with chemical B at startup.
pub const SEED_HALF_EXTENT: usize = 10;
/// Width of the frame that the reaction update never touches.
pub const BORDER: usize = 1;

/// Concentrations of the two chemicals at one site, both kept in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub a: f64,
    pub b: f64,
}

impl Cell {
    pub const BACKGROUND: Cell = Cell { a: 1.0, b: 0.0 };
    pub const SATURATED: Cell = Cell { a: 1.0, b: 1.0 };
}

/// One W x H field of cells, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y), "({x}, {y}) outside {}x{}", self.width, self.height);
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    #[inline]
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let i = self.idx(x, y);
        &mut self.cells[i]
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x < BORDER || y < BORDER || x + BORDER >= self.width || y + BORDER >= self.height
    }

    /// Columns the stencil may be centred on. Empty when the grid is narrower than 3.
    pub fn interior_x(&self) -> Range<usize> {
        BORDER..self.width.saturating_sub(BORDER)
    }

    /// Rows the stencil may be centred on. Empty when the grid is shorter than 3.
    pub fn interior_y(&self) -> Range<usize> {
        BORDER..self.height.saturating_sub(BORDER)
    }
}

/// Whether `(x, y)` lies in the centred seed square: `|x - w/2| < h && |y - h/2| < h`.
pub fn in_seed_region(x: usize, y: usize, width: usize, height: usize, half_extent: usize) -> bool {
    x.abs_diff(width / 2) < half_extent && y.abs_diff(height / 2) < half_extent
}

/// Rejects sizes that are empty or whose RGBA frame (`width * height * 4` bytes)
/// cannot be addressed.
pub fn check_dimensions(width: usize, height: usize) -> Result<()> {
    let addressable = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .is_some();
    if width == 0 || height == 0 || !addressable {
        return Err(SimError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// The current/next buffer pair. `current` is what readers see, `next` is scratch
/// space written by a step and swapped in afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    current: Buffer,
    next: Buffer,
}

impl Grid {
    pub fn new(width: usize, height: usize, seed_half_extent: usize, next_init: NextInit) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self::seeded(width, height, seed_half_extent, next_init))
    }

    /// Builds the initial distribution. Dimensions must already be known to be non-zero.
    pub(crate) fn seeded(width: usize, height: usize, seed_half_extent: usize, next_init: NextInit) -> Self {
        let mut current = Buffer::filled(width, height, Cell::BACKGROUND);
        for y in 0..height {
            for x in 0..width {
                if in_seed_region(x, y, width, height, seed_half_extent) {
                    current.set(x, y, Cell::SATURATED);
                }
            }
        }

        Self {
            current,
            next: Buffer::filled(width, height, next_init.cell()),
        }
    }

    pub fn width(&self) -> usize {
        self.current.width
    }

    pub fn height(&self) -> usize {
        self.current.height
    }

    pub fn current(&self) -> &Buffer {
        &self.current
    }

    /// Scratch buffer as left by the last step (or initialization).
    pub fn next_buffer(&self) -> &Buffer {
        &self.next
    }

    pub(crate) fn current_mut(&mut self) -> &mut Buffer {
        &mut self.current
    }

    /// Read-only current alongside the writable next buffer.
    pub(crate) fn buffers_mut(&mut self) -> (&Buffer, &mut Buffer) {
        (&self.current, &mut self.next)
    }

    /// The written next buffer becomes current; the old current is reused as scratch.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Mean of `a` and `b` over the current buffer.
    pub fn mean_concentrations(&self) -> (f64, f64) {
        let n = self.current.cells.len() as f64;
        let (sum_a, sum_b) = self
            .current
            .cells
            .iter()
            .fold((0.0, 0.0), |(sa, sb), c| (sa + c.a, sb + c.b));
        (sum_a / n, sum_b / n)
    }
}

/// A grid with the default seed square and a background-filled next buffer.
pub fn initialize(width: usize, height: usize) -> Result<Grid> {
    Grid::new(width, height, SEED_HALF_EXTENT, NextInit::Background)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_region_at_canvas_size() {
        let grid = initialize(400, 400).unwrap();
        assert_eq!(grid.current().get(200, 200), Cell::SATURATED);
        assert_eq!(grid.current().get(0, 0), Cell::BACKGROUND);
    }

    #[test]
    fn test_seed_region_edges() {
        let grid = initialize(400, 400).unwrap();
        let cur = grid.current();
        // |x - 200| < 10 is open at 10
        assert_eq!(cur.get(191, 200), Cell::SATURATED);
        assert_eq!(cur.get(209, 200), Cell::SATURATED);
        assert_eq!(cur.get(190, 200), Cell::BACKGROUND);
        assert_eq!(cur.get(210, 200), Cell::BACKGROUND);
        assert_eq!(cur.get(200, 190), Cell::BACKGROUND);

        let seeded = cur.cells().iter().filter(|c| **c == Cell::SATURATED).count();
        assert_eq!(seeded, 19 * 19);
    }

    #[test]
    fn test_seed_covers_small_grid() {
        let grid = initialize(6, 5).unwrap();
        assert!(grid.current().cells().iter().all(|c| *c == Cell::SATURATED));
    }

    #[test]
    fn test_custom_half_extent() {
        let grid = Grid::new(10, 10, 1, NextInit::Background).unwrap();
        let seeded: Vec<_> = (0..10)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.current().get(x, y) == Cell::SATURATED)
            .collect();
        assert_eq!(seeded, vec![(5, 5)]);
    }

    #[test]
    fn test_next_buffer_defaults() {
        let grid = Grid::new(30, 30, SEED_HALF_EXTENT, NextInit::Background).unwrap();
        assert!(grid.next_buffer().cells().iter().all(|c| *c == Cell::BACKGROUND));

        let grid = Grid::new(30, 30, SEED_HALF_EXTENT, NextInit::Saturated).unwrap();
        assert!(grid.next_buffer().cells().iter().all(|c| *c == Cell::SATURATED));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            initialize(0, 10).unwrap_err(),
            SimError::InvalidDimensions { width: 0, height: 10 }
        );
        assert!(initialize(10, 0).is_err());
        assert!(initialize(1, 1).is_ok());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert_eq!(
            initialize(usize::MAX / 2, 3).unwrap_err(),
            SimError::InvalidDimensions { width: usize::MAX / 2, height: 3 }
        );
        // cells fit, RGBA bytes do not
        assert!(check_dimensions(usize::MAX / 4 + 1, 1).is_err());
        assert!(check_dimensions(usize::MAX / 4, 1).is_ok());
    }

    #[test]
    fn test_border_and_interior() {
        let buf = Buffer::filled(5, 4, Cell::BACKGROUND);
        assert!(buf.is_border(0, 2));
        assert!(buf.is_border(4, 2));
        assert!(buf.is_border(2, 0));
        assert!(buf.is_border(2, 3));
        assert!(!buf.is_border(1, 1));
        assert_eq!(buf.interior_x(), 1..4);
        assert_eq!(buf.interior_y(), 1..3);

        let tiny = Buffer::filled(2, 1, Cell::BACKGROUND);
        assert!(tiny.interior_x().is_empty());
        assert!(tiny.interior_y().is_empty());
    }

    #[test]
    fn test_swap_exchanges_buffers() {
        let mut grid = initialize(40, 40).unwrap();
        let before_current = grid.current().clone();
        let before_next = grid.next_buffer().clone();
        grid.swap();
        assert_eq!(grid.current(), &before_next);
        assert_eq!(grid.next_buffer(), &before_current);
    }

    #[test]
    fn test_mean_concentrations() {
        let grid = initialize(4, 4).unwrap();
        assert_eq!(grid.mean_concentrations(), (1.0, 1.0));

        let grid = initialize(400, 400).unwrap();
        let (a, b) = grid.mean_concentrations();
        assert_eq!(a, 1.0);
        assert!((b - 361.0 / 160_000.0).abs() < 1e-12);
    }
}
