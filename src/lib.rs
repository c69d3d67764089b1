#![cfg_attr(not(feature = "std"), no_std)]

//! Non-blocking animation patterns for addressable LED strips.
//!
//! Drives a strip of N pixels through named visual patterns (color wipes,
//! chases, fades, scanners, flicker effects) one frame at a time, at a
//! caller-specified interval. The engine never blocks or sleeps: call
//! [`PatternEngine::update`] from your main loop and it renders a frame only
//! when the interval has elapsed, so the loop stays free for other work.
//!
//! # Core Concepts
//!
//! - **`PatternEngine`**: Drives a single strip through the active pattern
//! - **`Pattern`**: The active animation, carrying its reference colors
//! - **`Direction`**: Whether the step index counts up or down
//! - **`Rgb32`**: NeoPixel-style packed 32-bit color (`0x00RRGGBB`)
//! - **`PixelStrip`**: Trait to implement for your strip hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`RandomSource`**: Trait for the entropy the flicker effects consume
//!
//! Hardware, clock and randomness are all injected capabilities, so the
//! engine runs unchanged on any platform and is fully deterministic in tests.
//! An optional completion callback, registered at construction time, fires
//! once per full pattern cycle.

pub mod color;
pub mod engine;
pub mod random;
pub mod strip;
pub mod time;

pub use color::Rgb32;
pub use engine::{Direction, Pattern, PatternEngine, PatternError};
pub use random::RandomSource;
pub use strip::PixelStrip;
pub use time::{TimeDuration, TimeInstant, TimeSource};

/// All components off.
pub const COLOR_OFF: Rgb32 = Rgb32::new(0, 0, 0);
