//! Core engine implementation

use crate::{
    application::{Application, AppEvent},
    events::EventSource,
    foundation::time::{FrameLimiter, Timer},
    input::InputManager,
    render::{RenderError, Renderer},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns the collaborators a game talks to (renderer, input,
/// clock) and drives the main loop.
pub struct Engine {
    /// Input handling system
    pub input: InputManager,

    /// Renderer the application draws through
    renderer: Box<dyn Renderer>,

    /// Where events come from
    events: Box<dyn EventSource>,

    /// Frame timing
    timer: Timer,

    /// Frame rate cap
    limiter: FrameLimiter,

    /// Engine configuration
    config: EngineConfig,

    /// Frames completed so far
    frame: u64,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(
        config: EngineConfig,
        renderer: Box<dyn Renderer>,
        events: Box<dyn EventSource>,
    ) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");

        if let Some(step) = config.fixed_timestep {
            if !(step.is_finite() && step > 0.0) {
                return Err(EngineError::InitializationFailed(format!(
                    "fixed timestep must be positive, got {step}"
                )));
            }
        }

        Ok(Self {
            input: InputManager::new(),
            renderer,
            events,
            timer: Timer::new(),
            limiter: FrameLimiter::new(config.target_fps),
            config,
            frame: 0,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        app.initialize(self)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");

        while self.running {
            for event in self.events.poll_events(self.frame) {
                app.handle_event(self, event)
                    .map_err(|e| EngineError::ApplicationError(format!("App event: {e}")))?;
            }
            if !self.running {
                break;
            }

            let delta_time = self.next_delta_time();

            app.update(self, delta_time)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

            app.render(self)
                .map_err(|e| EngineError::ApplicationError(format!("App render: {e}")))?;
            self.renderer.present()?;

            self.input.end_frame();
            self.frame += 1;

            if self.config.max_frames.is_some_and(|max| self.frame >= max) {
                log::info!("Reached frame limit ({})", self.frame);
                self.running = false;
            }

            self.limiter.wait();
        }

        app.cleanup(self);

        log::info!("Engine shutdown complete after {} frames", self.frame);
        Ok(())
    }

    /// Delta time for the frame about to run
    fn next_delta_time(&mut self) -> f32 {
        let measured = self.timer.update();
        self.config.fixed_timestep.unwrap_or(measured)
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WindowCloseRequested => {
                self.quit();
            }
            AppEvent::WindowUnfocused => {
                self.input.reset();
            }
            AppEvent::KeyPressed(key) => {
                self.input.handle_key_input(key, true);
            }
            AppEvent::KeyReleased(key) => {
                self.input.handle_key_input(key, false);
            }
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop is still going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Get the renderer
    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    /// Get mutable access to the renderer
    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        self.renderer.as_mut()
    }

    /// Number of frames completed
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Frame rate cap; 0 runs uncapped
    pub target_fps: u32,

    /// Use this delta time every frame instead of the measured one
    pub fixed_timestep: Option<f32>,

    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            fixed_timestep: None,
            max_frames: None,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Rendering error
    #[error("Rendering error: {0}")]
    RenderError(#[from] RenderError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppError;
    use crate::events::EventQueue;
    use crate::foundation::math::Vec2;
    use crate::input::KeyCode;
    use crate::render::{Color, RecordingRenderer, TextAnchor};

    #[derive(Default)]
    struct CountingApp {
        initialized: bool,
        updates: u32,
        total_time: f32,
        space_presses: u32,
        cleaned_up: bool,
    }

    impl Application for CountingApp {
        fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
            self.initialized = true;
            Ok(())
        }

        fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
            self.updates += 1;
            self.total_time += delta_time;
            if engine.input().was_key_pressed(KeyCode::Space) {
                self.space_presses += 1;
            }
            if engine.input().was_key_pressed(KeyCode::Escape) {
                engine.quit();
            }
            Ok(())
        }

        fn render(&mut self, engine: &mut Engine) -> Result<(), AppError> {
            let renderer = engine.renderer_mut();
            renderer.clear(Color::BLACK)?;
            renderer.draw_text(
                &self.updates.to_string(),
                Vec2::zeros(),
                TextAnchor::TopLeft,
                Color::WHITE,
            )?;
            Ok(())
        }

        fn cleanup(&mut self, _engine: &mut Engine) {
            self.cleaned_up = true;
        }
    }

    fn headless_config(max_frames: Option<u64>) -> EngineConfig {
        EngineConfig {
            target_fps: 0,
            fixed_timestep: Some(0.5),
            max_frames,
        }
    }

    #[test]
    fn test_runs_until_frame_limit() {
        let mut engine = Engine::new(
            headless_config(Some(3)),
            Box::new(RecordingRenderer::new()),
            Box::new(EventQueue::new()),
        )
        .unwrap();
        let mut app = CountingApp::default();

        engine.run(&mut app).unwrap();

        assert!(app.initialized && app.cleaned_up);
        assert_eq!(app.updates, 3);
        assert_eq!(app.total_time, 1.5);
        assert_eq!(engine.frame_count(), 3);

        let recorder = engine
            .renderer()
            .as_any()
            .downcast_ref::<RecordingRenderer>()
            .unwrap();
        assert_eq!(recorder.frames_presented(), 3);
        assert_eq!(recorder.last_frame().texts(), vec!["3"]);
    }

    #[test]
    fn test_close_request_stops_before_update() {
        let mut events = EventQueue::new();
        events.push_at(2, AppEvent::WindowCloseRequested);
        let mut engine = Engine::new(
            headless_config(None),
            Box::new(RecordingRenderer::new()),
            Box::new(events),
        )
        .unwrap();
        let mut app = CountingApp::default();

        engine.run(&mut app).unwrap();

        assert_eq!(app.updates, 2);
        assert!(!engine.is_running());
    }

    #[test]
    fn test_key_presses_reach_the_app_once() {
        let mut events = EventQueue::new();
        events.push_at(0, AppEvent::KeyPressed(KeyCode::Space));
        events.push_at(3, AppEvent::KeyPressed(KeyCode::Escape));
        let mut engine = Engine::new(
            headless_config(Some(10)),
            Box::new(RecordingRenderer::new()),
            Box::new(events),
        )
        .unwrap();
        let mut app = CountingApp::default();

        engine.run(&mut app).unwrap();

        assert_eq!(app.space_presses, 1);
        assert!(engine.input().is_key_down(KeyCode::Space));
        assert_eq!(app.updates, 4);
    }

    #[test]
    fn test_rejects_non_positive_timestep() {
        let config = EngineConfig {
            fixed_timestep: Some(0.0),
            ..Default::default()
        };
        let result = Engine::new(
            config,
            Box::new(RecordingRenderer::new()),
            Box::new(EventQueue::new()),
        );

        assert!(matches!(result, Err(EngineError::InitializationFailed(_))));
    }
}
