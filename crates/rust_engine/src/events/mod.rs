//! Event sources
//!
//! The engine pulls [`AppEvent`]s from an [`EventSource`] once per frame.
//! A window backend would translate its native events here; headless runs
//! plug in scripted sources.

use std::collections::VecDeque;

use crate::application::AppEvent;

/// Source of application events, polled once at the start of every frame
pub trait EventSource {
    /// Drain the events that arrived for `frame`
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent>;
}

/// Event source fed by hand
///
/// Events pushed with [`EventQueue::push`] are delivered on the next poll;
/// events pushed with [`EventQueue::push_at`] wait for their frame.
#[derive(Debug, Default)]
pub struct EventQueue {
    immediate: VecDeque<AppEvent>,
    scheduled: Vec<(u64, AppEvent)>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` on the next poll
    pub fn push(&mut self, event: AppEvent) {
        self.immediate.push_back(event);
    }

    /// Deliver `event` when `frame` is polled
    pub fn push_at(&mut self, frame: u64, event: AppEvent) {
        self.scheduled.push((frame, event));
    }

    /// Number of events still waiting
    pub fn pending(&self) -> usize {
        self.immediate.len() + self.scheduled.len()
    }
}

impl EventSource for EventQueue {
    fn poll_events(&mut self, frame: u64) -> Vec<AppEvent> {
        let mut events: Vec<AppEvent> = self.immediate.drain(..).collect();

        let (due, later): (Vec<_>, Vec<_>) = std::mem::take(&mut self.scheduled)
            .into_iter()
            .partition(|(at, _)| *at <= frame);
        self.scheduled = later;
        events.extend(due.into_iter().map(|(_, event)| event));

        events
    }
}
