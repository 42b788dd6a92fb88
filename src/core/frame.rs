use std::time::Instant;

/// Frame metadata - number and timing of the frame being built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }

    /// Frame zero, used by tests and tools that don't care about timing
    pub fn first() -> Self {
        Self::new(0, 0.0, 0.0)
    }
}

/// Infinite iterator over frame timings
/// Drive the frame loop with it: `for frame in FrameIterator::new().take(n) { ... }`
pub struct FrameIterator {
    next_number: u64,
    start: Instant,
    last: Instant,
}

impl FrameIterator {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            next_number: 0,
            start: now,
            last: now,
        }
    }

    /// Number the next yielded frame will carry
    pub fn next_number(&self) -> u64 {
        self.next_number
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameIterator {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let info = FrameInfo::new(
            self.next_number,
            now.duration_since(self.start).as_secs_f32(),
            now.duration_since(self.last).as_secs_f32(),
        );

        self.next_number += 1;
        self.last = now;

        Some(info)
    }
}
