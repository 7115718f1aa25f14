//! Algorithm enum for selecting how a generation is evaluated.
//!
//! Both variants perform the same single full-grid pass over an immutable
//! snapshot; they differ only in whether rows are spread across threads.

use super::{DeathPolicy, Grid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell by cell on the calling thread
    #[default]
    Serial,
    /// Rows evaluated on the rayon pool
    Parallel,
}

impl Algorithm {
    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Algorithm::Serial => Algorithm::Parallel,
            Algorithm::Parallel => Algorithm::Serial,
        }
    }

    /// Compute the next generation of `grid` with this algorithm
    pub fn step(self, grid: &Grid, policy: DeathPolicy) -> Grid {
        match self {
            Algorithm::Serial => grid.step(policy),
            Algorithm::Parallel => grid.step_parallel(policy),
        }
    }
}
