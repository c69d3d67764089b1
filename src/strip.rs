//! Pixel buffer abstraction for addressable LED strips.

use crate::color::Rgb32;

/// Trait for abstracting an addressable pixel buffer.
///
/// Implement this for your strip driver (SPI, RMT, bit-banged, ...) to let the
/// engine render into it. The buffer holds one color per pixel between frames;
/// several patterns (wipes, fading trails) deliberately build on what previous
/// frames left behind, so implementations must preserve pixel contents across
/// [`show`](PixelStrip::show) calls.
pub trait PixelStrip {
    /// Returns the number of pixels in the strip.
    fn len(&self) -> u16;

    /// Returns the buffered color of the pixel at `index`.
    fn pixel(&self, index: u16) -> Rgb32;

    /// Sets the pixel at `index` to `color`.
    ///
    /// The engine does not bounds-check pixel indexes; implementations must
    /// ignore writes past the end of the strip.
    fn set_pixel(&mut self, index: u16, color: Rgb32);

    /// Flushes the buffer to the hardware.
    fn show(&mut self);

    /// Returns true if the strip has no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets every pixel to the same color.
    fn fill(&mut self, color: Rgb32) {
        for i in 0..self.len() {
            self.set_pixel(i, color);
        }
    }
}
