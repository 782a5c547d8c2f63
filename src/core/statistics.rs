use super::event::Event;
use super::render::Millis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Running totals folded over every processed event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_wait: f64,
    pub served: usize,
    pub left: usize,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &Event) {
        self.total_wait += event.waiting_time();
        self.served += event.served_count();
        self.left += event.left_count();
    }

    /// Mean wait per served customer. Reported as 0 whenever no wait was
    /// accumulated at all.
    pub fn average_wait(&self) -> f64 {
        if self.total_wait > 0.0 {
            self.total_wait / self.served as f64
        } else {
            0.0
        }
    }

    /// Customers accounted for so far.
    pub fn resolved(&self) -> usize {
        self.served + self.left
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", Millis(self.average_wait()), self.served, self.left)
    }
}
