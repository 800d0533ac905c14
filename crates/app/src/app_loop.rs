use std::time::Duration;

use cave_core::{
    LevelSession, Pos, SeedChoice, SessionError, generate_fallback_seed, resolve_seed,
};
use macroquad::prelude::KeyCode;
use tracing::warn;

use crate::seed_input::SeedInput;

const REFERENCE_FRAME_NANOS: u64 = 16_666_667;

/// One frame at 60 Hz, the rate the movement delay is tuned against.
pub const REFERENCE_FRAME: Duration = Duration::from_nanos(REFERENCE_FRAME_NANOS);

/// Reference frames a held movement key waits after each successful step.
pub const MOVE_DELAY_FRAMES: u32 = 7;

/// Time a held movement key waits after each successful step, whatever the refresh rate.
pub const MOVE_DELAY: Duration =
    Duration::from_nanos(MOVE_DELAY_FRAMES as u64 * REFERENCE_FRAME_NANOS);

/// Held movement keys in priority order; only the first held one moves the player.
const MOVE_KEYS: [(KeyCode, Pos); 4] = [
    (KeyCode::W, Pos::new(0, -1)),
    (KeyCode::S, Pos::new(0, 1)),
    (KeyCode::A, Pos::new(-1, 0)),
    (KeyCode::D, Pos::new(1, 0)),
];

/// Input gathered for one rendered frame.
#[derive(Debug, Default, Clone)]
pub struct FrameInput {
    /// Keys that went down this frame.
    pub keys_pressed: Vec<KeyCode>,
    /// Keys currently held.
    pub keys_down: Vec<KeyCode>,
    /// Printable characters typed this frame.
    pub typed: Vec<char>,
    /// Time since the previous frame.
    pub dt: Duration,
}

#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub enum AppMode {
    #[default]
    Menu,
    Playing,
    Exiting,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    pub seed_input: SeedInput,
    /// Seed of the active run and whether the player typed it.
    pub run_seed: Option<SeedChoice>,
    /// The traveller's position. The session only validates moves; the shell owns this.
    pub player: Pos,
    /// Last generation failure, shown on the menu.
    pub status: Option<String>,
    move_cooldown: Duration,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process input and logic for a single frame.
    pub fn tick(&mut self, session: &mut LevelSession, input: &FrameInput) {
        match self.mode {
            AppMode::Menu => self.tick_menu(session, input),
            AppMode::Playing => self.tick_playing(session, input),
            AppMode::Exiting => {}
        }
    }

    fn tick_menu(&mut self, session: &mut LevelSession, input: &FrameInput) {
        if input.keys_pressed.contains(&KeyCode::Escape) {
            self.mode = AppMode::Exiting;
            return;
        }
        for &ch in &input.typed {
            self.seed_input.push(ch);
        }
        if input.keys_pressed.contains(&KeyCode::Backspace) {
            self.seed_input.backspace();
        }
        if input.keys_pressed.contains(&KeyCode::Enter) {
            self.start_run(session);
        }
    }

    fn start_run(&mut self, session: &mut LevelSession) {
        let choice = resolve_seed(self.seed_input.text(), generate_fallback_seed);
        match session.start_new_run(choice.seed().clone()) {
            Ok(level) => {
                self.player = level.start();
                self.move_cooldown = Duration::ZERO;
                self.status = None;
                self.run_seed = Some(choice);
                self.mode = AppMode::Playing;
            }
            Err(error) => self.fail(session, &error),
        }
    }

    fn tick_playing(&mut self, session: &mut LevelSession, input: &FrameInput) {
        if input.keys_pressed.contains(&KeyCode::Q) {
            self.mode = AppMode::Exiting;
            return;
        }
        if input.keys_pressed.contains(&KeyCode::Escape) {
            session.end_run();
            self.run_seed = None;
            self.mode = AppMode::Menu;
            return;
        }

        self.handle_movement(session, input);

        let reached_goal = session.level().is_some_and(|level| level.is_goal(self.player));
        if reached_goal {
            match session.advance_level() {
                Ok(level) => self.player = level.start(),
                Err(error) => self.fail(session, &error),
            }
        }
    }

    fn handle_movement(&mut self, session: &LevelSession, input: &FrameInput) {
        if !self.move_cooldown.is_zero() {
            self.move_cooldown = self.move_cooldown.saturating_sub(input.dt);
            return;
        }
        let Some(&(_, delta)) = MOVE_KEYS.iter().find(|(key, _)| input.keys_down.contains(key))
        else {
            return;
        };
        if !session.is_valid_move(self.player, delta) {
            return;
        }
        if let Some(next) = self.player.offset(delta) {
            self.player = next;
            self.move_cooldown = MOVE_DELAY;
        }
    }

    fn fail(&mut self, session: &mut LevelSession, error: &SessionError) {
        warn!(%error, "level generation failed; returning to menu");
        session.end_run();
        self.run_seed = None;
        self.status = Some(error.to_string());
        self.mode = AppMode::Menu;
    }
}
