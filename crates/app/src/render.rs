//! Menu and game-view drawing.

use cave_app::app_loop::AppState;
use cave_app::{TILE_SIZE, format_depth, format_seed};
use cave_core::{LevelSession, TileKind};
use macroquad::prelude::*;

const BACKGROUND: Color = Color::new(0.10, 0.10, 0.10, 1.0);
const FLOOR: Color = Color::new(0.42, 0.31, 0.20, 1.0);
const WALL: Color = Color::new(0.35, 0.35, 0.38, 1.0);
const PLAYER: Color = Color::new(0.91, 0.30, 0.24, 1.0);
const GOAL: Color = Color::new(0.18, 0.80, 0.44, 1.0);
const TEXT_MAIN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
const TEXT_DIM: Color = Color::new(0.71, 0.71, 0.71, 1.0);

pub fn draw_menu(app: &AppState) {
    clear_background(BACKGROUND);
    let centre = screen_width() / 2.0;

    draw_centred_text("CAVE EXPLORER", centre, 100.0, 48.0, TEXT_MAIN);

    draw_rectangle_lines(centre - 150.0, 190.0, 300.0, 50.0, 2.0, WHITE);
    draw_text(app.seed_input.text(), centre - 140.0, 224.0, 28.0, WHITE);
    draw_centred_text("type a seed or leave blank", centre, 270.0, 20.0, TEXT_DIM);
    draw_centred_text("ENTER: Play | ESC: Quit", centre, 330.0, 28.0, TEXT_MAIN);

    if let Some(status) = &app.status {
        draw_centred_text(status, centre, 400.0, 18.0, PLAYER);
    }
}

pub fn draw_game(app: &AppState, session: &LevelSession) {
    clear_background(BACKGROUND);
    let Some(level) = session.level() else {
        return;
    };

    let grid = level.grid();
    for pos in grid.positions() {
        let color = match grid.tile_at(pos) {
            TileKind::Floor => FLOOR,
            TileKind::Wall => WALL,
        };
        let (x, y) = (pos.x as f32 * TILE_SIZE, pos.y as f32 * TILE_SIZE);
        draw_rectangle(x, y, TILE_SIZE, TILE_SIZE, color);
    }

    let pulse = (get_time() * 5.0).sin().abs() as f32 * 6.0;
    let goal = level.goal();
    draw_rectangle(
        goal.x as f32 * TILE_SIZE + 4.0 - pulse / 2.0,
        goal.y as f32 * TILE_SIZE + 4.0 - pulse / 2.0,
        TILE_SIZE - 8.0 + pulse,
        TILE_SIZE - 8.0 + pulse,
        GOAL,
    );

    let half = TILE_SIZE / 2.0;
    let (px, py) = (app.player.x as f32 * TILE_SIZE, app.player.y as f32 * TILE_SIZE);
    draw_circle(px + half, py + half, 12.0, PLAYER);

    draw_text(&format_depth(level.depth()), 10.0, 30.0, 28.0, TEXT_MAIN);
    draw_text("ESC: Menu | Q: Quit", 10.0, screen_height() - 12.0, 20.0, TEXT_DIM);
    if let Some(choice) = &app.run_seed {
        let label = format_seed(choice);
        let width = measure_text(&label, None, 20, 1.0).width;
        draw_text(&label, screen_width() - width - 10.0, screen_height() - 12.0, 20.0, TEXT_DIM);
    }
}

fn draw_centred_text(text: &str, centre: f32, y: f32, font_size: f32, color: Color) {
    let width = measure_text(text, None, font_size as u16, 1.0).width;
    draw_text(text, centre - width / 2.0, y, font_size, color);
}
