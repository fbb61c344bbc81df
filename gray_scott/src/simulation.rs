// simulation.rs - Run/pause/reset controller around the double-buffered grid

use log::{debug, info, trace};

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::grid::Grid;
use crate::intensity::{render_into, render_rgba, Frame};
use crate::reaction::{advance, Params};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

/// Zero-argument actions offered by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play,
    Pause,
    Reset,
}

/// The surface a front end drives once per frame and from its input handlers.
pub trait SimulationControls {
    fn play(&mut self);
    fn pause(&mut self);
    /// Back to `Running` with a freshly initialized grid.
    fn reset(&mut self);
    /// Advances one generation and repaints the frame if running. Returns whether it stepped.
    fn tick(&mut self) -> bool;
    /// Forces `b = 1` at one cell of the current buffer, whatever the run state.
    fn inject_seed(&mut self, x: usize, y: usize) -> Result<()>;
}

/// Owns the grid pair, the displayed frame and the run state.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    frame: Frame,
    state: RunState,
    generation: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::seeded(
            config.width,
            config.height,
            config.seed_half_extent,
            config.next_init,
        );
        let frame = render_rgba(grid.current());
        info!(
            "initialized {}x{} grid (d_a={}, d_b={}, feed={}, kill={})",
            config.width, config.height, config.params.d_a, config.params.d_b, config.params.feed, config.params.kill
        );

        Ok(Self {
            config,
            grid,
            frame,
            state: RunState::Running,
            generation: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn params(&self) -> &Params {
        &self.config.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The last rendered frame. Left untouched while paused.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play => self.play(),
            Action::Pause => self.pause(),
            Action::Reset => self.reset(),
        }
    }

    /// Swaps in new rate constants. Parameters only change through re-initialization,
    /// so this also resets the grid.
    pub fn reconfigure(&mut self, params: Params) -> Result<()> {
        params.validate()?;
        info!(
            "reconfigured: d_a={}, d_b={}, feed={}, kill={}",
            params.d_a, params.d_b, params.feed, params.kill
        );
        self.config.params = params;
        self.reset();
        Ok(())
    }

    /// Seeds every cell within `radius` of `(x, y)`; cells that fall off the grid are skipped.
    /// Returns how many cells were seeded.
    pub fn inject_seed_disc(&mut self, x: usize, y: usize, radius: usize) -> Result<usize> {
        self.check_in_bounds(x, y)?;

        let (width, height) = (self.grid.width(), self.grid.height());
        // no disc wider than the grid reaches further cells
        let r = radius.min(width.max(height));
        let r_sq = (r as u128).pow(2);

        let mut seeded = 0;
        for cy in y.saturating_sub(r)..=y.saturating_add(r).min(height - 1) {
            for cx in x.saturating_sub(r)..=x.saturating_add(r).min(width - 1) {
                let (dx, dy) = (cx.abs_diff(x) as u128, cy.abs_diff(y) as u128);
                if dx * dx + dy * dy <= r_sq {
                    self.grid.current_mut().cell_mut(cx, cy).b = 1.0;
                    seeded += 1;
                }
            }
        }
        Ok(seeded)
    }

    fn check_in_bounds(&self, x: usize, y: usize) -> Result<()> {
        let (width, height) = (self.grid.width(), self.grid.height());
        if x >= width || y >= height {
            debug!("rejected seed at ({x}, {y})");
            return Err(SimError::SeedOutOfBounds { x, y, width, height });
        }
        Ok(())
    }
}

impl SimulationControls for Simulation {
    fn play(&mut self) {
        debug!("play at generation {}", self.generation);
        self.state = RunState::Running;
    }

    fn pause(&mut self) {
        debug!("pause at generation {}", self.generation);
        self.state = RunState::Paused;
    }

    fn reset(&mut self) {
        let SimConfig { width, height, seed_half_extent, next_init, .. } = self.config;
        self.grid = Grid::seeded(width, height, seed_half_extent, next_init);
        render_into(self.grid.current(), &mut self.frame);
        self.generation = 0;
        self.state = RunState::Running;
        info!("reset {width}x{height} grid");
    }

    fn tick(&mut self) -> bool {
        if self.state == RunState::Paused {
            return false;
        }
        advance(&mut self.grid, &self.config.params, self.config.border_policy);
        render_into(self.grid.current(), &mut self.frame);
        self.generation += 1;
        trace!("generation {}", self.generation);
        true
    }

    fn inject_seed(&mut self, x: usize, y: usize) -> Result<()> {
        self.check_in_bounds(x, y)?;
        self.grid.current_mut().cell_mut(x, y).b = 1.0;
        Ok(())
    }
}
