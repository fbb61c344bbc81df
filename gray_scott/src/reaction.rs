// reaction.rs - Gray-Scott kinetics and the per-generation update

use serde::{Deserialize, Serialize};

use crate::config::BorderPolicy;
use crate::error::{Result, SimError};
use crate::grid::{Buffer, Cell, Grid};
use crate::stencil::{laplacian, Field};

/// Rate constants of the model. Changed only by re-initializing the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Diffusion rate of chemical A.
    pub d_a: f64,
    /// Diffusion rate of chemical B.
    pub d_b: f64,
    pub feed: f64,
    pub kill: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            d_a: 1.5,
            d_b: 0.1,
            feed: 0.055,
            kill: 0.062,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("d_a", self.d_a),
            ("d_b", self.d_b),
            ("feed", self.feed),
            ("kill", self.kill),
        ];
        for (name, value) in named {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Next state of one cell given its Laplacians, clamped to [0, 1] per chemical.
#[inline]
pub fn react(cell: Cell, lap_a: f64, lap_b: f64, params: &Params) -> Cell {
    let Cell { a, b } = cell;
    let reaction = a * b * b;
    Cell {
        a: (a + params.d_a * lap_a - reaction + params.feed * (1.0 - a)).clamp(0.0, 1.0),
        b: (b + params.d_b * lap_b + reaction - (params.kill + params.feed) * b).clamp(0.0, 1.0),
    }
}

/// Writes the reaction update of every interior cell of `current` into `next`.
///
/// `current` is only read, so every cell sees the pre-step state of its neighbours.
/// What happens to the one-cell frame of `next` is decided by `border`.
pub fn step(current: &Buffer, next: &mut Buffer, params: &Params, border: BorderPolicy) {
    debug_assert_eq!(
        (current.width(), current.height()),
        (next.width(), next.height())
    );

    for y in current.interior_y() {
        for x in current.interior_x() {
            let lap_a = laplacian(current, Field::A, x, y);
            let lap_b = laplacian(current, Field::B, x, y);
            next.set(x, y, react(current.get(x, y), lap_a, lap_b, params));
        }
    }

    match border {
        BorderPolicy::CopyForward => copy_border(current, next),
        BorderPolicy::Retain => {}
    }
}

fn copy_border(current: &Buffer, next: &mut Buffer) {
    let w = current.width();
    for y in 0..current.height() {
        if current.interior_y().contains(&y) {
            next.set(0, y, current.get(0, y));
            next.set(w - 1, y, current.get(w - 1, y));
        } else {
            for x in 0..w {
                next.set(x, y, current.get(x, y));
            }
        }
    }
}

/// One full generation: step into the next buffer, then swap it in.
pub fn advance(grid: &mut Grid, params: &Params, border: BorderPolicy) {
    let (current, next) = grid.buffers_mut();
    step(current, next, params, border);
    grid.swap();
}
