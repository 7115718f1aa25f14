mod cell;
mod grid;
mod algorithm;

pub use cell::{Cell, DeathPolicy};
pub use grid::Grid;
pub use algorithm::Algorithm;
