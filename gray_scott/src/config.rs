// config.rs - Simulation configuration, fixed before the first tick

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{check_dimensions, Cell, SEED_HALF_EXTENT};
use crate::reaction::Params;

/// Contents of the next buffer right after (re-)initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextInit {
    /// `{a: 1, b: 0}` everywhere.
    #[default]
    Background,
    /// `{a: 1, b: 1}` everywhere.
    Saturated,
}

impl NextInit {
    pub fn cell(self) -> Cell {
        match self {
            NextInit::Background => Cell::BACKGROUND,
            NextInit::Saturated => Cell::SATURATED,
        }
    }
}

/// How the one-cell frame, which the stencil cannot update, moves between buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderPolicy {
    /// Copy the frame of current into next before every swap.
    #[default]
    CopyForward,
    /// Never write the frame of next. Whatever the scratch buffer held shows up at the
    /// edge after the swap, so border values alternate between the two buffers. This only
    /// approximates a single aliased buffer, where the frame would keep next's initial
    /// value and a seed on the edge would stay put.
    Retain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    pub params: Params,
    pub seed_half_extent: usize,
    pub next_init: NextInit,
    pub border_policy: BorderPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            params: Params::default(),
            seed_half_extent: SEED_HALF_EXTENT,
            next_init: NextInit::default(),
            border_policy: BorderPolicy::default(),
        }
    }
}

impl SimConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        self.params.validate()
    }
}
