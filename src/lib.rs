// Domain layer - cells, grid, transition rule
pub mod domain;

// Application layer - engine, timer, configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, DeathPolicy, Grid};
pub use application::{Config, LifeEngine};
