use macroquad::prelude::*;

use crate::application::LifeEngine;
use crate::ui::{self, Action, Button, ViewState};

/// Pointer pressed on a cell: remember it and return it for toggling
pub fn begin_drawing(
    view: &mut ViewState,
    cell: Option<(usize, usize)>,
) -> Option<(usize, usize)> {
    view.drawing_at = cell;
    cell
}

/// Pointer moved while pressed. Returns the cell to toggle only when the
/// pointer entered a different cell than the last one touched.
pub fn continue_drawing(
    view: &mut ViewState,
    cell: Option<(usize, usize)>,
) -> Option<(usize, usize)> {
    let (Some(_), Some(cell)) = (view.drawing_at, cell) else {
        return None;
    };
    if view.drawing_at == Some(cell) {
        return None;
    }
    view.drawing_at = Some(cell);
    Some(cell)
}

pub fn end_drawing(view: &mut ViewState) {
    view.drawing_at = None;
}

/// Apply a control to the engine or the view
pub fn apply_action(engine: &mut LifeEngine, view: &mut ViewState, action: Action) {
    match action {
        Action::RunStop => engine.toggle_running(),
        Action::Step => engine.step_once(),
        Action::Reset => engine.reset(),
        Action::Random => engine.randomize(&mut ::rand::rng()),
        Action::XRay => view.x_ray = !view.x_ray,
        Action::Fade => engine.set_death_policy(engine.death_policy().toggled()),
        Action::Parallel => engine.set_algorithm(engine.algorithm().toggled()),
    }
}

/// Handle click and drag drawing on the board
pub fn handle_mouse_draw(engine: &mut LifeEngine, view: &mut ViewState, mouse_pos: (f32, f32)) {
    let hovered = ui::cell_at(mouse_pos, engine.size());

    let target = if is_mouse_button_pressed(MouseButton::Left) {
        begin_drawing(view, hovered)
    } else if is_mouse_button_down(MouseButton::Left) {
        continue_drawing(view, hovered)
    } else {
        end_drawing(view);
        None
    };

    if let Some((row, col)) = target {
        engine.toggle_cell(row, col);
    }
}

/// Keyboard shortcuts for every control
pub fn process_keyboard_input(engine: &mut LifeEngine, view: &mut ViewState) {
    const KEYS: [(KeyCode, Action); 7] = [
        (KeyCode::Space, Action::RunStop),
        (KeyCode::S, Action::Step),
        (KeyCode::C, Action::Reset),
        (KeyCode::R, Action::Random),
        (KeyCode::X, Action::XRay),
        (KeyCode::F, Action::Fade),
        (KeyCode::P, Action::Parallel),
    ];

    KEYS.iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|&(_, action)| apply_action(engine, view, action));
}

/// Process button clicks
pub fn process_button_clicks(
    engine: &mut LifeEngine,
    view: &mut ViewState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .for_each(|btn| apply_action(engine, view, btn.action()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_toggles_pressed_cell() {
        let mut view = ViewState::default();
        assert_eq!(begin_drawing(&mut view, Some((2, 3))), Some((2, 3)));
        assert_eq!(view.drawing_at, Some((2, 3)));
    }

    #[test]
    fn test_moving_inside_same_cell_does_nothing() {
        let mut view = ViewState::default();
        begin_drawing(&mut view, Some((2, 3)));
        assert_eq!(continue_drawing(&mut view, Some((2, 3))), None);
        assert_eq!(continue_drawing(&mut view, Some((2, 4))), Some((2, 4)));
        assert_eq!(continue_drawing(&mut view, Some((2, 4))), None);
        assert_eq!(view.drawing_at, Some((2, 4)));
    }

    #[test]
    fn test_no_drawing_without_press() {
        let mut view = ViewState::default();
        assert_eq!(continue_drawing(&mut view, Some((1, 1))), None);

        // pressed off the board: dragging onto it draws nothing
        begin_drawing(&mut view, None);
        assert_eq!(continue_drawing(&mut view, Some((1, 1))), None);
    }

    #[test]
    fn test_release_ends_gesture() {
        let mut view = ViewState::default();
        begin_drawing(&mut view, Some((0, 0)));
        end_drawing(&mut view);
        assert_eq!(view.drawing_at, None);
        assert_eq!(continue_drawing(&mut view, Some((0, 1))), None);
    }

    #[test]
    fn test_drag_across_board_toggles_each_cell_once() {
        let mut engine = LifeEngine::new(10).unwrap();
        let mut view = ViewState::default();
        let path = [(4, 4), (4, 4), (4, 5), (4, 5), (4, 6)];

        let mut targets = vec![begin_drawing(&mut view, Some(path[0]))];
        targets.extend(path[1..].iter().map(|&c| continue_drawing(&mut view, Some(c))));
        targets
            .into_iter()
            .flatten()
            .for_each(|(row, col)| engine.toggle_cell(row, col));

        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn test_actions_drive_engine_and_view() {
        let mut engine = LifeEngine::new(10).unwrap();
        let mut view = ViewState::default();

        apply_action(&mut engine, &mut view, Action::RunStop);
        assert!(engine.is_running());
        apply_action(&mut engine, &mut view, Action::RunStop);
        assert!(!engine.is_running());

        apply_action(&mut engine, &mut view, Action::Step);
        assert_eq!(engine.generation(), 2);

        apply_action(&mut engine, &mut view, Action::XRay);
        assert!(view.x_ray);

        apply_action(&mut engine, &mut view, Action::Fade);
        assert_eq!(engine.death_policy(), crate::domain::DeathPolicy::Fading);

        apply_action(&mut engine, &mut view, Action::Parallel);
        assert_eq!(engine.algorithm(), crate::domain::Algorithm::Parallel);

        apply_action(&mut engine, &mut view, Action::Reset);
        assert_eq!(engine.generation(), 0);
    }
}
