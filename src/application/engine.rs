use std::time::Duration;

use anyhow::Result;
use rand::Rng;
use tracing::{debug, info, trace};

use super::Config;
use crate::domain::{Algorithm, Cell, DeathPolicy, Grid};

/// The single outstanding timer slot. Present exactly while running;
/// `stop` drops it, so nothing from an earlier run can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ScheduledTick {
    remaining: Duration,
    /// False until the first `advance` after `start`. The time handed to
    /// that call elapsed before the tick was scheduled and is not counted.
    armed: bool,
}

impl ScheduledTick {
    const fn after_start(interval: Duration) -> Self {
        Self {
            remaining: interval,
            armed: false,
        }
    }

    const fn after_tick(interval: Duration) -> Self {
        Self {
            remaining: interval,
            armed: true,
        }
    }
}

/// LifeEngine owns the grid and drives generations.
/// It is pumped cooperatively by the host loop through `advance`.
pub struct LifeEngine {
    grid: Grid,
    generation: u64,
    running: bool,
    death_policy: DeathPolicy,
    algorithm: Algorithm,
    tick_interval: Duration,
    random_density: f64,
    pending: Option<ScheduledTick>,
}

impl LifeEngine {
    /// Create an engine with default settings and an all-dead `size`×`size` grid
    pub fn new(size: usize) -> Result<Self> {
        Self::with_config(&Config {
            size,
            ..Config::default()
        })
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.size),
            generation: 0,
            running: false,
            death_policy: config.death_policy,
            algorithm: config.algorithm,
            tick_interval: config.tick_interval,
            random_density: config.random_density,
            pending: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn death_policy(&self) -> DeathPolicy {
        self.death_policy
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Advance one generation and commit it
    fn tick(&mut self) {
        self.grid = self.algorithm.step(&self.grid, self.death_policy);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "tick"
        );
    }

    /// Start running: one tick now, then one every interval. No-op if running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        info!(generation = self.generation, "simulation started");
        self.tick();
        self.pending = Some(ScheduledTick::after_start(self.tick_interval));
    }

    /// Stop running and drop any scheduled tick. Idempotent.
    pub fn stop(&mut self) {
        if self.running {
            info!(generation = self.generation, "simulation stopped");
        }
        self.running = false;
        self.pending = None;
    }

    /// Flip between running and stopped
    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Exactly one tick, without touching the running state or the timer
    pub fn step_once(&mut self) {
        self.tick();
    }

    /// Feed elapsed wall-clock time to the timer.
    /// Fires at most one tick per call; the next one is due a full interval
    /// after this one completes. The first call after `start` only arms the
    /// timer. Returns whether a tick fired.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if !pending.armed {
            self.pending = Some(ScheduledTick { armed: true, ..pending });
            return false;
        }

        let remaining = pending.remaining.saturating_sub(elapsed);
        if !remaining.is_zero() {
            self.pending = Some(ScheduledTick { remaining, ..pending });
            return false;
        }

        self.tick();
        self.pending = Some(ScheduledTick::after_tick(self.tick_interval));
        true
    }

    /// Stop and clear the board back to generation 0
    pub fn reset(&mut self) {
        self.stop();
        self.grid = Grid::new(self.grid.size());
        self.generation = 0;
        info!(size = self.grid.size(), "grid reset");
    }

    /// Stop and seed the board randomly at the configured density
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.stop();
        self.grid = Grid::random(self.grid.size(), self.random_density, rng);
        self.generation = 0;
        info!(population = self.grid.population(), "grid randomized");
    }

    /// Replace one cell. Out-of-range coordinates panic.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.grid = self.grid.with_cell(row, col, cell);
        trace!(row, col, ?cell, "cell set");
    }

    /// Alive or Dying becomes Dead, Dead becomes Alive
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let cell = self.grid.get(row, col).toggle();
        self.set_cell(row, col, cell);
    }

    /// Switching to `Instant` clears any Dying cells still on the board
    pub fn set_death_policy(&mut self, policy: DeathPolicy) {
        if policy == self.death_policy {
            return;
        }
        self.death_policy = policy;
        if policy == DeathPolicy::Instant {
            self.grid = self.grid.purged();
        }
        info!(policy = policy.name(), "death policy changed");
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        info!(algorithm = algorithm.name(), "algorithm changed");
    }
}
