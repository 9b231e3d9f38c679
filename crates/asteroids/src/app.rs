//! Engine application wrapping a [`Game`]

use rust_engine::config::ConfigError;
use rust_engine::{Application, AppError, Engine};

use crate::config::GameConfig;
use crate::controls::Controls;
use crate::game::Game;

/// Asteroids application
///
/// Maps engine input onto the game: quit stops the engine, fire and restart
/// are one-shot presses handled in the order they arrived, and the
/// turn/thrust keys are read as held state.
pub struct AsteroidsApp {
    game: Game,
    frames: u64,
    matches_played: u32,
    best_score: u32,
}

impl AsteroidsApp {
    /// Create the application around a fresh match
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_game(Game::new(config)?))
    }

    /// Create the application around an existing match
    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            frames: 0,
            matches_played: 1,
            best_score: 0,
        }
    }

    /// The running match
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable access to the running match
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Matches started, including the current one
    pub fn matches_played(&self) -> u32 {
        self.matches_played
    }

    /// Highest score reached in any match of this session
    pub fn best_score(&self) -> u32 {
        self.best_score.max(self.game.state().score)
    }
}

impl Application for AsteroidsApp {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        let state = self.game.state();
        log::info!(
            "Asteroids ready: {} asteroids, {} lives",
            state.asteroids.len(),
            state.lives
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        let bindings = self.game.config().controls.clone();
        let pressed = engine.input().pressed_keys().to_vec();

        for key in pressed {
            if key == bindings.quit {
                engine.quit();
                return Ok(());
            } else if key == bindings.fire {
                self.game.fire();
            } else if key == bindings.restart && self.game.is_game_over() {
                self.best_score = self.best_score();
                self.matches_played += 1;
                self.game.restart();
            }
        }

        self.game.set_controls(Controls::from_input(engine.input(), &bindings));
        self.game.update(delta_time);
        self.frames += 1;
        Ok(())
    }

    fn render(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        self.game.draw(engine.renderer_mut())?;
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        log::info!(
            "Session over after {} frames: {} matches, best score {}",
            self.frames,
            self.matches_played,
            self.best_score()
        );
    }
}
