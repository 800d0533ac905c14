use cave_app::app_loop::{AppMode, AppState};
use cave_app::logging;
use cave_core::LevelSession;
use macroquad::prelude::next_frame;
use macroquad::window::Conf;

mod frame_input;
mod render;
mod window_config;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();
    let mut session = LevelSession::default();
    let mut app = AppState::new();

    loop {
        let input = frame_input::capture_frame_input();
        app.tick(&mut session, &input);

        match app.mode {
            AppMode::Menu => render::draw_menu(&app),
            AppMode::Playing => render::draw_game(&app, &session),
            AppMode::Exiting => break,
        }

        next_frame().await
    }
}
