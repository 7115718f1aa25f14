use std::time::Duration;

use macroquad::prelude::*;
use macroquad::Window;
use tracing::error;
use tracing_subscriber::EnvFilter;

use life::{
    input, rendering,
    ui::{self, ViewState},
    Config, LifeEngine,
};

fn window_conf(grid_size: usize) -> Conf {
    let (width, height) = ui::window_size(grid_size);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(mut engine: LifeEngine) {
    let mut view = ViewState::default();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&engine, &view);

        input::process_button_clicks(&mut engine, &mut view, &buttons, mouse_pos);
        input::handle_mouse_draw(&mut engine, &mut view, mouse_pos);
        input::process_keyboard_input(&mut engine, &mut view);

        engine.advance(Duration::from_secs_f32(get_frame_time()));

        // rebuild so the Run/Stop label reflects this frame's changes
        let buttons = ui::create_buttons(&engine, &view);
        rendering::draw_frame(&engine, &view, &buttons, mouse_pos);

        next_frame().await;
    }
}

fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(Some(config)) => config,
        Ok(None) => return,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(2);
        }
    };
    let engine = match LifeEngine::with_config(&config) {
        Ok(engine) => engine,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };

    Window::from_config(window_conf(config.size), run(engine));
}
