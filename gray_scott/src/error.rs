// error.rs - Error types for the Gray-Scott simulation

use thiserror::Error;

/// Precondition violations rejected at the simulation boundary.
///
/// The numeric core itself never fails; these only come out of construction,
/// reconfiguration and seed injection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid parameter {name} = {value}: must be finite and non-negative")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("seed coordinate ({x}, {y}) outside {width}x{height} grid")]
    SeedOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, SimError>;
