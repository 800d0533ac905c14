//! Window configuration for the desktop app.

use cave_app::{APP_NAME, TILE_SIZE};
use cave_core::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use macroquad::window::Conf;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: (DEFAULT_WIDTH as f32 * TILE_SIZE) as i32,
        window_height: (DEFAULT_HEIGHT as f32 * TILE_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}
