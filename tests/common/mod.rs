//! Shared test infrastructure for pixel-patterns integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pixel_patterns::{PixelStrip, RandomSource, Rgb32, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

/// Mock pixel strip that buffers colors, records writes and counts flushes
pub struct MockStrip<const N: usize> {
    pixels: [Rgb32; N],
    writes: heapless::Vec<(u16, Rgb32), 512>,
    show_count: u32,
}

impl<const N: usize> MockStrip<N> {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb32::new(0, 0, 0); N],
            writes: heapless::Vec::new(),
            show_count: 0,
        }
    }

    /// All pixel writes observed so far, oldest first
    pub fn writes(&self) -> &[(u16, Rgb32)] {
        &self.writes
    }

    /// Number of times the buffer was flushed
    pub fn show_count(&self) -> u32 {
        self.show_count
    }

    /// The buffered frame as a slice
    pub fn pixels(&self) -> &[Rgb32] {
        &self.pixels
    }
}

impl<const N: usize> PixelStrip for MockStrip<N> {
    fn len(&self) -> u16 {
        N as u16
    }

    fn pixel(&self, index: u16) -> Rgb32 {
        self.pixels
            .get(index as usize)
            .copied()
            .unwrap_or(Rgb32::new(0, 0, 0))
    }

    fn set_pixel(&mut self, index: u16, color: Rgb32) {
        // Out-of-range writes are ignored, per the PixelStrip contract.
        if let Some(pixel) = self.pixels.get_mut(index as usize) {
            *pixel = color;
        }
        let _ = self.writes.push((index, color));
    }

    fn show(&mut self) {
        self.show_count += 1;
    }
}

// ============================================================================
// Scripted RNG
// ============================================================================

/// Random source replaying a fixed tape of draw results, wrapping at the end
pub struct ScriptedRng {
    tape: heapless::Vec<u8, 64>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(tape: &[u8]) -> Self {
        Self {
            tape: heapless::Vec::from_slice(tape).unwrap(),
            pos: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn random_in_range(&mut self, low: u8, high: u8) -> u8 {
        let value = self.tape[self.pos % self.tape.len()];
        self.pos += 1;
        value.clamp(low, high)
    }
}

// ============================================================================
// Test Helper Colors
// ============================================================================

pub const BLACK: Rgb32 = Rgb32::new(0, 0, 0);
pub const WHITE: Rgb32 = Rgb32::new(255, 255, 255);
pub const RED: Rgb32 = Rgb32::new(255, 0, 0);
pub const GREEN: Rgb32 = Rgb32::new(0, 255, 0);
pub const BLUE: Rgb32 = Rgb32::new(0, 0, 255);
