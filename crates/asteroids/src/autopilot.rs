//! Scripted pilot for headless sessions
//!
//! The autopilot stands in for a keyboard. It loops through a fixed
//! manoeuvre cycle, taps fire on a steady cadence, taps restart now and then
//! (the game ignores it unless the match is over) and finally asks the
//! engine to close. Only key transitions are emitted, the same way a window
//! backend reports them.

use rust_engine::events::EventSource;
use rust_engine::input::KeyCode;
use rust_engine::AppEvent;

use crate::config::ControlsConfig;

/// Frames between fire taps
pub const FIRE_INTERVAL: u64 = 12;

/// Frames between restart taps
pub const RESTART_INTERVAL: u64 = 240;

/// One step of the flight pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Manoeuvre {
    /// Turn clockwise
    TurnRight,
    /// Accelerate
    Thrust,
    /// Drift with no input
    Coast,
    /// Turn counter-clockwise
    TurnLeft,
}

/// Flight pattern as `(manoeuvre, frames)` pairs, repeated forever
const CYCLE: [(Manoeuvre, u64); 4] = [
    (Manoeuvre::TurnRight, 30),
    (Manoeuvre::Thrust, 45),
    (Manoeuvre::Coast, 30),
    (Manoeuvre::TurnLeft, 20),
];

/// Scripted event source
#[derive(Debug, Clone)]
pub struct Autopilot {
    bindings: ControlsConfig,
    close_after: u64,
    held: Vec<KeyCode>,
    close_sent: bool,
}

impl Autopilot {
    /// Fly with `bindings` and request close once `close_after` frames have run
    pub fn new(bindings: ControlsConfig, close_after: u64) -> Self {
        Self {
            bindings,
            close_after,
            held: Vec::new(),
            close_sent: false,
        }
    }

    /// Manoeuvre flown during `frame`
    pub fn manoeuvre_at(frame: u64) -> Manoeuvre {
        let cycle_length: u64 = CYCLE.iter().map(|(_, frames)| frames).sum();
        let mut offset = frame % cycle_length;
        for (manoeuvre, frames) in CYCLE {
            if offset < frames {
                return manoeuvre;
            }
            offset -= frames;
        }
        Manoeuvre::Coast
    }

    /// Keys that should be down during `frame`
    fn keys_for(&self, frame: u64) -> Vec<KeyCode> {
        let mut keys = Vec::with_capacity(3);
        let mut hold = |key: KeyCode| {
            if !keys.contains(&key) {
                keys.push(key);
            }
        };

        match Self::manoeuvre_at(frame) {
            Manoeuvre::TurnRight => hold(self.bindings.rotate_right),
            Manoeuvre::Thrust => hold(self.bindings.thrust),
            Manoeuvre::Coast => {}
            Manoeuvre::TurnLeft => hold(self.bindings.rotate_left),
        }
        if frame % FIRE_INTERVAL == 0 {
            hold(self.bindings.fire);
        }
        if frame > 0 && frame % RESTART_INTERVAL == 0 {
            hold(self.bindings.restart);
        }

        keys
    }
}

impl EventSource for Autopilot {
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent> {
        if frame >= self.close_after {
            if self.close_sent {
                return Vec::new();
            }
            log::debug!("Autopilot finished at frame {frame}");
            self.close_sent = true;
            return vec![AppEvent::WindowCloseRequested];
        }

        let wanted = self.keys_for(frame);
        let mut events: Vec<AppEvent> = self
            .held
            .iter()
            .filter(|key| !wanted.contains(key))
            .map(|&key| AppEvent::KeyReleased(key))
            .collect();
        events.extend(
            wanted
                .iter()
                .filter(|key| !self.held.contains(key))
                .map(|&key| AppEvent::KeyPressed(key)),
        );

        self.held = wanted;
        events
    }
}
