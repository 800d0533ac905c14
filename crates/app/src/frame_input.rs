//! Keyboard input collection for one rendered frame.

use std::time::Duration;

use cave_app::app_loop::FrameInput;
use macroquad::prelude::{
    KeyCode, get_char_pressed, get_frame_time, is_key_down, is_key_pressed,
};

const PRESS_KEYS: [KeyCode; 4] = [KeyCode::Enter, KeyCode::Backspace, KeyCode::Escape, KeyCode::Q];
const HOLD_KEYS: [KeyCode; 4] = [KeyCode::W, KeyCode::S, KeyCode::A, KeyCode::D];

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = PRESS_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    let keys_down = HOLD_KEYS.into_iter().filter(|&key| is_key_down(key)).collect();

    let mut typed = Vec::new();
    while let Some(ch) = get_char_pressed() {
        if !ch.is_control() {
            typed.push(ch);
        }
    }

    let dt = Duration::try_from_secs_f32(get_frame_time()).unwrap_or(Duration::ZERO);

    FrameInput { keys_pressed, keys_down, typed, dt }
}
