#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use retry_ticker::Backoff;

/// Policy replaying a fixed script; `None` entries (or running past the end) stop.
pub struct Scripted {
    script: Vec<Option<Duration>>,
    pos: usize,
    pub calls: Arc<AtomicUsize>,
    pub resets: Arc<AtomicUsize>,
}

impl Scripted {
    pub fn new(script: Vec<Option<Duration>>) -> Self {
        Self {
            script,
            pos: 0,
            calls: Arc::new(AtomicUsize::new(0)),
            resets: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Counters to keep after the policy is moved into a ticker.
    pub fn probes(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (Arc::clone(&self.calls), Arc::clone(&self.resets))
    }
}

impl Backoff for Scripted {
    fn next_delay(&mut self) -> Option<Duration> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.get(self.pos).copied().flatten();
        self.pos += 1;
        next
    }

    fn reset(&mut self) {
        self.resets.fetch_add(1, Ordering::SeqCst);
        self.pos = 0;
    }
}

/// Constant delay that counts how often it was consulted.
pub struct Counting {
    delay: Duration,
    pub calls: Arc<AtomicUsize>,
}

impl Counting {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Backoff for Counting {
    fn next_delay(&mut self) -> Option<Duration> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Some(self.delay)
    }

    fn reset(&mut self) {}
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn load(c: &AtomicUsize) -> usize {
    c.load(Ordering::SeqCst)
}
