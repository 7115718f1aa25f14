use macroquad::prelude::*;

use crate::application::LifeEngine;
use crate::domain::{Cell, Grid};
use crate::ui::{self, Button, ViewState, BUTTON_HEIGHT, MARGIN, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0); // #333
const ALIVE_XRAY_COLOR: Color = Color::new(0.667, 0.667, 0.667, 1.0); // #aaa
const DYING_COLOR: Color = PINK;
const BORDER_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const BACKGROUND: Color = WHITE;

/// Fill color for a cell, `None` for background
pub fn cell_color(cell: Cell, x_ray: bool) -> Option<Color> {
    match cell {
        Cell::Dying => Some(DYING_COLOR),
        Cell::Alive if x_ray => Some(ALIVE_XRAY_COLOR),
        Cell::Alive => Some(ALIVE_COLOR),
        Cell::Dead => None,
    }
}

/// Draw every cell as a bordered box; x-ray adds the raw value on top
pub fn draw_grid(grid: &Grid, x_ray: bool) {
    let size = ui::cell_size(grid.size());
    let draw_borders = size >= 6.0;

    for (row, col, cell) in grid.iter_cells() {
        let x = MARGIN + col as f32 * size;
        let y = MARGIN + row as f32 * size;

        if let Some(color) = cell_color(cell, x_ray) {
            draw_rectangle(x, y, size, size, color);
        }
        if draw_borders {
            draw_rectangle_lines(x, y, size, size, 1.0, BORDER_COLOR);
        }
        if x_ray && size >= 12.0 {
            draw_text(&cell.value().to_string(), x + 3.0, y + size - 5.0, size * 0.7, BLACK);
        }
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and status
pub fn draw_controls(
    engine: &LifeEngine,
    view: &ViewState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = ui::panel_x(engine.size());
    let top = MARGIN + buttons.len() as f32 * (BUTTON_HEIGHT + 8.0) + 20.0;

    let status = if engine.is_running() { "Running" } else { "Stopped" };
    let labels = [
        format!("Generation {}", engine.generation()),
        format!("Population {}", engine.population()),
        format!("Status: {status}"),
        format!("Death: {}", engine.death_policy().name()),
        format!("Algorithm: {}", engine.algorithm().name()),
        format!("Grid: {0}x{0}", engine.size()),
        format!("X-Ray: {}", if view.x_ray { "on" } else { "off" }),
    ];
    labels.iter().enumerate().for_each(|(i, text)| {
        draw_text_label(text, px, top + i as f32 * 22.0, 18.0, DARKGRAY);
    });

    let help_top = top + labels.len() as f32 * 22.0 + 16.0;
    let help = [
        "Click/drag: toggle",
        "Space: run/stop",
        "S: step  C: reset",
        "R: random  X: x-ray",
        "F: fade  P: parallel",
    ];
    help.iter().enumerate().for_each(|(i, text)| {
        draw_text_label(text, px, help_top + i as f32 * 16.0, 14.0, GRAY);
    });
}

/// Full frame: background, board, panel
pub fn draw_frame(
    engine: &LifeEngine,
    view: &ViewState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    clear_background(BACKGROUND);
    draw_rectangle(
        ui::panel_x(engine.size()) - MARGIN / 2.0,
        0.0,
        PANEL_WIDTH + MARGIN,
        screen_height(),
        Color::new(0.95, 0.95, 0.95, 1.0),
    );
    draw_grid(engine.grid(), view.x_ray);
    draw_controls(engine, view, buttons, mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_colors() {
        assert_eq!(cell_color(Cell::Dead, false), None);
        assert_eq!(cell_color(Cell::Dead, true), None);
        assert_eq!(cell_color(Cell::Alive, false), Some(ALIVE_COLOR));
        assert_eq!(cell_color(Cell::Alive, true), Some(ALIVE_XRAY_COLOR));
        assert_eq!(cell_color(Cell::Dying, false), Some(PINK));
    }
}
