mod button;

pub use button::Button;

use crate::application::LifeEngine;
use crate::domain::{Algorithm, DeathPolicy};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const MARGIN: f32 = 10.0;
/// Pixel budget for the board; cells shrink to fit on large grids
pub const BOARD_PIXELS: f32 = 880.0;
pub const MAX_CELL_SIZE: f32 = 22.0;
pub const MIN_PANEL_HEIGHT: f32 = 640.0;

/// Something the user can ask the engine or the view to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    RunStop,
    Step,
    Reset,
    Random,
    XRay,
    Fade,
    Parallel,
}

/// Side length in pixels of one cell, including its 1px border
pub fn cell_size(grid_size: usize) -> f32 {
    (BOARD_PIXELS / grid_size as f32).clamp(2.0, MAX_CELL_SIZE).floor()
}

/// Width and height of the board in pixels
pub fn board_pixels(grid_size: usize) -> f32 {
    cell_size(grid_size) * grid_size as f32
}

/// X position where the control panel starts
pub fn panel_x(grid_size: usize) -> f32 {
    MARGIN * 2.0 + board_pixels(grid_size)
}

/// Window dimensions for a board of `grid_size` cells
pub fn window_size(grid_size: usize) -> (i32, i32) {
    let width = panel_x(grid_size) + PANEL_WIDTH + MARGIN;
    let height = (board_pixels(grid_size) + MARGIN * 2.0).max(MIN_PANEL_HEIGHT);
    (width as i32, height as i32)
}

/// Map a pointer position to the (row, col) under it, if it is on the board
pub fn cell_at(mouse_pos: (f32, f32), grid_size: usize) -> Option<(usize, usize)> {
    let size = cell_size(grid_size);
    let x = mouse_pos.0 - MARGIN;
    let y = mouse_pos.1 - MARGIN;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (row, col) = ((y / size) as usize, (x / size) as usize);
    (row < grid_size && col < grid_size).then_some((row, col))
}

/// Transient view state that never reaches the engine
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    /// Render the raw numeric cell value over each cell
    pub x_ray: bool,
    /// Last cell touched by the drag gesture in progress
    pub drawing_at: Option<(usize, usize)>,
}

/// Create the control buttons. Labels and highlights follow the current state.
pub fn create_buttons(engine: &LifeEngine, view: &ViewState) -> Vec<Button> {
    let px = panel_x(engine.size());
    let width = PANEL_WIDTH - MARGIN;
    let button = |i: usize, text: &str, action: Action| {
        let y = MARGIN + i as f32 * (BUTTON_HEIGHT + 8.0);
        Button::new(px, y, width, BUTTON_HEIGHT, text, action)
    };
    let run_label = if engine.is_running() { "Stop" } else { "Run" };
    let fading = engine.death_policy() == DeathPolicy::Fading;
    let parallel = engine.algorithm() == Algorithm::Parallel;

    vec![
        button(0, run_label, Action::RunStop),
        button(1, "Step", Action::Step),
        button(2, "Reset", Action::Reset),
        button(3, "Random", Action::Random),
        button(4, "X-Ray", Action::XRay).with_active(view.x_ray),
        button(5, "Fade", Action::Fade).with_active(fading),
        button(6, "Parallel", Action::Parallel).with_active(parallel),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_uses_full_cells() {
        assert_eq!(cell_size(40), 22.0);
        assert_eq!(board_pixels(40), 880.0);
    }

    #[test]
    fn test_large_grid_shrinks_cells() {
        assert_eq!(cell_size(440), 2.0);
        assert_eq!(cell_size(1000), 2.0);
        assert_eq!(cell_size(100), 8.0);
    }

    #[test]
    fn test_cell_at_maps_row_first() {
        let size = cell_size(40);
        let pos = (MARGIN + 3.5 * size, MARGIN + 7.5 * size);
        assert_eq!(cell_at(pos, 40), Some((7, 3)));
        assert_eq!(cell_at((MARGIN, MARGIN), 40), Some((0, 0)));
    }

    #[test]
    fn test_cell_at_off_board() {
        assert_eq!(cell_at((0.0, 0.0), 40), None);
        assert_eq!(cell_at((panel_x(40) + 5.0, 50.0), 40), None);
        assert_eq!(cell_at((50.0, MARGIN + board_pixels(40) + 1.0), 40), None);
    }

    #[test]
    fn test_run_button_label_follows_state() {
        let view = ViewState::default();
        let mut engine = LifeEngine::new(40).unwrap();
        let stopped = create_buttons(&engine, &view);
        engine.start();
        let running = create_buttons(&engine, &view);
        assert_eq!(stopped[0].label(), "Run");
        assert_eq!(running[0].label(), "Stop");
        assert_eq!(stopped.len(), 7);
        assert_eq!(stopped[6].action(), Action::Parallel);
    }
}
