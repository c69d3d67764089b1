//! LED strip pattern engine with interval-gated frame stepping.
//!
//! Provides [`PatternEngine`] which drives a single addressable strip through
//! named animation patterns, one frame per elapsed interval, without blocking
//! the caller's control loop. The engine owns the strip and random source and
//! borrows the time source, mirroring the capability seams in [`strip`],
//! [`random`] and [`time`].
//!
//! [`strip`]: crate::strip
//! [`random`]: crate::random
//! [`time`]: crate::time

use crate::color::{self, Rgb32};
use crate::random::RandomSource;
use crate::strip::PixelStrip;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// The dim gray used by the shuttle approach chasers.
pub const SHUTTLE_GRAY: Rgb32 = Rgb32::new(25, 25, 25);

/// Direction a pattern steps through its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Index counts up toward the last step.
    #[default]
    Forward,
    /// Index counts down toward zero.
    Reverse,
}

/// The active animation pattern.
///
/// Each variant carries only the reference colors that pattern consumes; the
/// shared stepping state (index, step count, direction) lives on the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// No pattern active. Updates render nothing.
    #[default]
    None,
    /// Continuously shifting full-spectrum gradient.
    RainbowCycle,
    /// Marquee chase alternating two colors with period three.
    TheaterChase {
        /// Color of the moving chase pixels.
        color1: Rgb32,
        /// Background color.
        color2: Rgb32,
    },
    /// Fills the strip one pixel per frame, keeping previously set pixels lit.
    ColorWipe {
        /// Fill color.
        color: Rgb32,
    },
    /// Two echo points sweeping across the strip with fading trails.
    Scanner {
        /// Color of the scanning points.
        color: Rgb32,
    },
    /// Uniform linear fade between two colors across the whole strip.
    Fade {
        /// Fade start color.
        from: Rgb32,
        /// Fade end color.
        to: Rgb32,
    },
    /// Fire-like random flicker converging on a target color.
    FadeFlicker {
        /// Color captured from the strip when the fade began.
        from: Rgb32,
        /// Target color.
        to: Rgb32,
    },
    /// Continuous random flicker around one color. Never steps or completes.
    Flicker {
        /// Base color each pixel flickers around.
        color: Rgb32,
    },
    /// Mirrored chasers running toward the strip center, with corner marker
    /// flashes on fixed pixels.
    ShuttleApproach {
        /// Chaser color.
        color: Rgb32,
    },
}

/// Pattern initialization errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// A step count of zero was supplied.
    ///
    /// The fade interpolation divides by the step count, so zero-step fades
    /// are rejected at initialization instead of degenerating at render time.
    ZeroSteps,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::ZeroSteps => {
                write!(f, "pattern step count must be nonzero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}

/// Drives a single addressable LED strip through animation patterns.
///
/// Call one of the pattern initializers to configure a fresh run, then invoke
/// [`update`](PatternEngine::update) from your main loop. When the configured
/// interval has elapsed the engine renders exactly one frame of the active
/// pattern into the strip buffer, flushes it, and advances the step index.
/// When the index wraps around, the completion callback (if any) fires once.
///
/// Switching patterns is just calling another initializer; it overwrites the
/// pattern, interval and stepping state within that one call.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Pixel strip implementation type
/// * `T` - Time source implementation type
/// * `R` - Random source implementation type
/// * `C` - Completion callback type
pub struct PatternEngine<'t, I, S, T, R, C = fn()>
where
    I: TimeInstant,
    S: PixelStrip,
    T: TimeSource<I>,
    R: RandomSource,
    C: FnMut(),
{
    strip: S,
    time_source: &'t T,
    rng: R,
    pattern: Pattern,
    direction: Direction,
    interval: I::Duration,
    last_update: Option<I>,
    total_steps: u16,
    index: u16,
    on_complete: Option<C>,
}

impl<'t, I, S, T, R> PatternEngine<'t, I, S, T, R>
where
    I: TimeInstant,
    S: PixelStrip,
    T: TimeSource<I>,
    R: RandomSource,
{
    /// Creates an idle engine without a completion callback.
    pub fn new(strip: S, time_source: &'t T, rng: R) -> Self {
        Self {
            strip,
            time_source,
            rng,
            pattern: Pattern::None,
            direction: Direction::Forward,
            interval: I::Duration::ZERO,
            last_update: None,
            total_steps: 0,
            index: 0,
            on_complete: None,
        }
    }
}

impl<'t, I, S, T, R, C> PatternEngine<'t, I, S, T, R, C>
where
    I: TimeInstant,
    S: PixelStrip,
    T: TimeSource<I>,
    R: RandomSource,
    C: FnMut(),
{
    /// Creates an idle engine whose callback fires on every cycle completion.
    ///
    /// The callback is invoked synchronously from within
    /// [`update`](PatternEngine::update), after the index has been reset to
    /// its start value for the current direction.
    pub fn with_callback(strip: S, time_source: &'t T, rng: R, on_complete: C) -> Self {
        Self {
            strip,
            time_source,
            rng,
            pattern: Pattern::None,
            direction: Direction::Forward,
            interval: I::Duration::ZERO,
            last_update: None,
            total_steps: 0,
            index: 0,
            on_complete: Some(on_complete),
        }
    }

    /// Advances the animation if the update interval has elapsed.
    ///
    /// Reads the clock once; if less than the interval has passed since the
    /// last rendered frame this is a fast no-op, keeping the caller's loop
    /// responsive. Otherwise exactly one frame of the active pattern is
    /// rendered and flushed. With [`Pattern::None`] active nothing is drawn.
    pub fn update(&mut self) {
        let now = self.time_source.now();
        if let Some(last) = self.last_update {
            if now.duration_since(last).as_millis() < self.interval.as_millis() {
                return;
            }
        }
        self.last_update = Some(now);

        match self.pattern {
            Pattern::None => {}
            Pattern::RainbowCycle => self.rainbow_cycle_frame(),
            Pattern::TheaterChase { color1, color2 } => self.theater_chase_frame(color1, color2),
            Pattern::ColorWipe { color } => self.color_wipe_frame(color),
            Pattern::Scanner { color } => self.scanner_frame(color),
            Pattern::Fade { from, to } => self.fade_frame(from, to),
            Pattern::FadeFlicker { from, to } => self.fade_flicker_frame(from, to),
            Pattern::Flicker { color } => self.flicker_frame(color),
            Pattern::ShuttleApproach { color } => self.shuttle_approach_frame(color),
        }
    }

    /// Configures a rainbow cycle: a full-spectrum gradient shifting one hue
    /// step per frame. One cycle is 255 steps.
    pub fn rainbow_cycle(&mut self, interval: I::Duration, direction: Direction) {
        self.pattern = Pattern::RainbowCycle;
        self.interval = interval;
        self.total_steps = 255;
        self.index = 0;
        self.direction = direction;
    }

    /// Configures a theater chase: every third pixel lit with `color1` against
    /// a `color2` background, marching one pixel per frame.
    pub fn theater_chase(
        &mut self,
        color1: Rgb32,
        color2: Rgb32,
        interval: I::Duration,
        direction: Direction,
    ) {
        self.pattern = Pattern::TheaterChase { color1, color2 };
        self.interval = interval;
        self.total_steps = self.strip.len();
        self.index = 0;
        self.direction = direction;
    }

    /// Configures a color wipe: one pixel set per frame until the strip is
    /// filled. Relies on the strip buffer keeping earlier pixels lit.
    pub fn color_wipe(&mut self, color: Rgb32, interval: I::Duration, direction: Direction) {
        self.pattern = Pattern::ColorWipe { color };
        self.interval = interval;
        self.total_steps = self.strip.len();
        self.index = 0;
        self.direction = direction;
    }

    /// Configures a scanner: two bright points sweeping toward each other and
    /// back apart, leaving dimming trails. Direction is unused; the sweep
    /// covers both directions within the `(len - 1) * 2` step range.
    pub fn scanner(&mut self, color: Rgb32, interval: I::Duration) {
        self.pattern = Pattern::Scanner { color };
        self.interval = interval;
        self.total_steps = (self.strip.len().saturating_sub(1)) * 2;
        self.index = 0;
    }

    /// Configures the shuttle approach: dim gray chasers mirrored around the
    /// strip center, with hue flashes on the four corner marker pixels every
    /// fifth step. Assumes a strip of at least 32 pixels.
    ///
    /// The index deliberately starts at the pixel count, outside the
    /// `0..total_steps` range the shared stepper maintains, and the current
    /// direction is kept. Under Forward stepping the first frame therefore
    /// wraps straight to step zero and fires the completion callback.
    pub fn shuttle_approach(&mut self, interval: I::Duration) {
        self.pattern = Pattern::ShuttleApproach {
            color: SHUTTLE_GRAY,
        };
        self.interval = interval;
        self.total_steps = self.strip.len() / 2;
        self.index = self.strip.len();
    }

    /// Configures a uniform fade from `from` to `to` over `steps` frames.
    ///
    /// # Errors
    /// [`PatternError::ZeroSteps`] if `steps` is zero.
    pub fn fade(
        &mut self,
        from: Rgb32,
        to: Rgb32,
        steps: u16,
        interval: I::Duration,
        direction: Direction,
    ) -> Result<(), PatternError> {
        if steps == 0 {
            return Err(PatternError::ZeroSteps);
        }

        self.pattern = Pattern::Fade { from, to };
        self.interval = interval;
        self.total_steps = steps;
        self.index = 0;
        self.direction = direction;
        Ok(())
    }

    /// Configures a flickering fade toward `to` over `steps` frames.
    ///
    /// The fade start is captured from pixel 0's current buffered color, so
    /// the effect picks up from whatever is already displayed. Every pixel
    /// flickers independently around the interpolated target each frame.
    ///
    /// # Errors
    /// [`PatternError::ZeroSteps`] if `steps` is zero.
    pub fn fade_flicker(
        &mut self,
        to: Rgb32,
        steps: u16,
        interval: I::Duration,
    ) -> Result<(), PatternError> {
        if steps == 0 {
            return Err(PatternError::ZeroSteps);
        }

        self.pattern = Pattern::FadeFlicker {
            from: self.strip.pixel(0),
            to,
        };
        self.interval = interval;
        self.total_steps = steps;
        self.index = 0;
        self.direction = Direction::Forward;
        Ok(())
    }

    /// Configures a continuous flicker around `color`.
    ///
    /// This effect redraws every pixel with a fresh random attenuation each
    /// frame and never advances the step index, so it runs until another
    /// initializer or [`stop`](PatternEngine::stop) replaces it. The
    /// completion callback never fires while it is active.
    pub fn flicker(&mut self, color: Rgb32, interval: I::Duration) {
        self.pattern = Pattern::Flicker { color };
        self.interval = interval;
    }

    /// Deactivates the current pattern. Subsequent updates render nothing.
    ///
    /// The strip buffer is left as-is; blank it through
    /// [`strip_mut`](PatternEngine::strip_mut) if you want the pixels off.
    pub fn stop(&mut self) {
        self.pattern = Pattern::None;
    }

    /// Flips the stepping direction and resets the index to the start
    /// boundary for the new direction.
    pub fn reverse(&mut self) {
        match self.direction {
            Direction::Forward => {
                self.direction = Direction::Reverse;
                self.index = self.total_steps.saturating_sub(1);
            }
            Direction::Reverse => {
                self.direction = Direction::Forward;
                self.index = 0;
            }
        }
    }

    /// Returns the active pattern.
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Returns the stepping direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the current step index.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Returns the step count of one full cycle of the active pattern.
    pub fn total_steps(&self) -> u16 {
        self.total_steps
    }

    /// Returns the configured frame interval.
    pub fn interval(&self) -> I::Duration {
        self.interval
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Advances the step index, wrapping at the cycle boundary and firing the
    /// completion callback once per wrap.
    ///
    /// Every frame generator except the continuous flicker calls this exactly
    /// once as its last action.
    fn increment(&mut self) {
        match self.direction {
            Direction::Forward => {
                self.index += 1;
                if self.index >= self.total_steps {
                    self.index = 0;
                    self.notify_complete();
                }
            }
            Direction::Reverse => {
                self.index = self.index.saturating_sub(1);
                if self.index == 0 {
                    self.index = self.total_steps.saturating_sub(1);
                    self.notify_complete();
                }
            }
        }
    }

    fn notify_complete(&mut self) {
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }
    }

    fn rainbow_cycle_frame(&mut self) {
        let len = self.strip.len();
        for i in 0..len {
            let pos = (i as u32 * 256 / len as u32 + self.index as u32) & 255;
            self.strip.set_pixel(i, color::wheel(pos as u8));
        }
        self.strip.show();
        self.increment();
    }

    fn theater_chase_frame(&mut self, color1: Rgb32, color2: Rgb32) {
        for i in 0..self.strip.len() {
            if (i as u32 + self.index as u32) % 3 == 0 {
                self.strip.set_pixel(i, color1);
            } else {
                self.strip.set_pixel(i, color2);
            }
        }
        self.strip.show();
        self.increment();
    }

    fn color_wipe_frame(&mut self, color: Rgb32) {
        self.strip.set_pixel(self.index, color);
        self.strip.show();
        self.increment();
    }

    fn scanner_frame(&mut self, color: Rgb32) {
        for i in 0..self.strip.len() {
            if i == self.index || i == self.total_steps - self.index {
                self.strip.set_pixel(i, color);
            } else {
                self.strip.set_pixel(i, self.strip.pixel(i).dim());
            }
        }
        self.strip.show();
        self.increment();
    }

    fn shuttle_approach_frame(&mut self, color: Rgb32) {
        // Corner marker pixels; hard-coded for a 32-pixel shuttle layout.
        const MARKERS: [u16; 4] = [0, 31, 15, 16];

        let len = self.strip.len();
        for i in 0..len {
            // Mirror pixel; pixels near both ends chase toward the center.
            let j = len - i - 1;
            if i == self.index {
                self.strip.set_pixel(i, color);
                self.strip.set_pixel(j, color);
            } else {
                self.strip.set_pixel(i, self.strip.pixel(i).dim());
                self.strip.set_pixel(j, self.strip.pixel(j).dim());
            }
        }

        if !MARKERS.contains(&self.index) && self.index % 5 == 0 {
            self.strip.set_pixel(MARKERS[0], color::wheel(20));
            self.strip.set_pixel(MARKERS[1], color::wheel(20));
            self.strip.set_pixel(MARKERS[2], color::wheel(60));
            self.strip.set_pixel(MARKERS[3], color::wheel(60));
        }

        self.strip.show();
        self.increment();
    }

    fn fade_frame(&mut self, from: Rgb32, to: Rgb32) {
        let target = color::lerp(from, to, self.index, self.total_steps);
        self.strip.fill(target);
        self.strip.show();
        self.increment();
    }

    fn fade_flicker_frame(&mut self, from: Rgb32, to: Rgb32) {
        let target = color::lerp(from, to, self.index, self.total_steps);
        for i in 0..self.strip.len() {
            let flicker = self.rng.random_in_range(60, 99);
            self.strip.set_pixel(i, target.scale(flicker));
        }
        self.strip.show();
        self.increment();
    }

    fn flicker_frame(&mut self, color: Rgb32) {
        for i in 0..self.strip.len() {
            let flicker = self.rng.random_in_range(70, 99);
            self.strip.set_pixel(i, color.scale(flicker));
        }
        self.strip.show();
        // Continuous effect: no step advance, no completion.
    }
}
