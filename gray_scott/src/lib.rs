//! Gray-Scott reaction-diffusion on a fixed 2D grid.
//!
//! [`Simulation`] owns a double-buffered [`Grid`] and advances it one generation per
//! [`tick`](SimulationControls::tick) while running. Each generation applies the 3x3
//! [`laplacian`] and the Gray-Scott kinetics to every interior cell, clamps both
//! chemicals to [0, 1], swaps the buffers and repaints a grayscale [`Frame`].

pub mod config;
pub mod error;
pub mod grid;
pub mod intensity;
pub mod presets;
pub mod reaction;
pub mod simulation;
pub mod stencil;

pub use config::{BorderPolicy, NextInit, SimConfig};
pub use error::{Result, SimError};
pub use grid::{initialize, Buffer, Cell, Grid};
pub use intensity::{render_rgba, to_intensity, Frame};
pub use presets::{find_preset, Preset, PRESETS};
pub use reaction::{advance, react, step, Params};
pub use simulation::{Action, RunState, Simulation, SimulationControls};
pub use stencil::{laplacian, Field, KERNEL};
