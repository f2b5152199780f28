//! Transient hint messages with automatic expiry.
//!
//! Expiry is driven by the host: it calls [`HintNotifier::tick`] from the same
//! loop that delivers key events, so a timer firing and a new hint being set
//! are always applied in the order they were observed. Time comes from a
//! [`Clock`], which lets tests move time forward by hand.

use crate::constants::HINT_DURATION;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// A single cancelable deadline.
///
/// Arming replaces any pending deadline and bumps the generation, so a fire
/// belonging to an older arm can be told apart from the current one.
#[derive(Debug, Clone, Default)]
pub struct ExpiryTimer {
    deadline: Option<Instant>,
    generation: u64,
}

impl ExpiryTimer {
    pub fn arm(&mut self, deadline: Instant) -> u64 {
        self.generation += 1;
        self.deadline = Some(deadline);
        self.generation
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Fire at most once: returns the generation that expired and disarms
    pub fn fire_if_due(&mut self, now: Instant) -> Option<u64> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(self.generation)
            }
            _ => None,
        }
    }
}

/// The status-line hint and its expiry timer
pub struct HintNotifier {
    message: String,
    timer: ExpiryTimer,
    duration: Duration,
    clock: Arc<dyn Clock>,
}

impl Default for HintNotifier {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), HINT_DURATION)
    }
}

impl std::fmt::Debug for HintNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintNotifier")
            .field("message", &self.message)
            .field("timer", &self.timer)
            .field("duration", &self.duration)
            .finish()
    }
}

impl HintNotifier {
    pub fn new(clock: Arc<dyn Clock>, duration: Duration) -> Self {
        Self {
            message: String::new(),
            timer: ExpiryTimer::default(),
            duration,
            clock,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Replace the message. A non-empty message arms a fresh expiry.
    pub fn set(&mut self, message: impl Into<String>) {
        self.timer.cancel();
        self.message = message.into();
        if !self.message.is_empty() {
            self.timer.arm(self.clock.now() + self.duration);
        }
    }

    pub fn clear(&mut self) {
        self.set(String::new());
    }

    /// Clear the message if its deadline has passed. Returns true when it did.
    pub fn tick(&mut self) -> bool {
        if self.timer.fire_if_due(self.clock.now()).is_some() {
            self.message.clear();
            return true;
        }
        false
    }
}
