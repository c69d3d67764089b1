//! Packed 32-bit color and the utilities shared by the frame generators.
//!
//! Colors travel through the engine in the NeoPixel-style packed layout
//! (`0x00RRGGBB`). This module also provides HSV convenience constructors via
//! `palette` for callers who prefer picking colors by hue; they land in the
//! packed format.

use palette::{FromColor, Hsv, Srgb};

/// A packed 32-bit RGB color: red in bits 16-23, green in 8-15, blue in 0-7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb32(u32);

impl Rgb32 {
    /// Creates a packed color from three 8-bit components.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Wraps an already-packed value.
    #[inline]
    pub const fn from_packed(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the packed value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Returns the red component.
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Returns the green component.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Returns the blue component.
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Returns the color attenuated to 95%, truncating each component.
    ///
    /// Repeated application decays any lit pixel toward black, which is what
    /// the trailing effects rely on. Black is a fixed point.
    pub fn dim(self) -> Self {
        self.scale(95)
    }

    /// Scales each component by `percent / 100`, truncating.
    pub fn scale(self, percent: u8) -> Self {
        let f = percent as u16;
        Self::new(
            (self.red() as u16 * f / 100) as u8,
            (self.green() as u16 * f / 100) as u8,
            (self.blue() as u16 * f / 100) as u8,
        )
    }
}

impl From<u32> for Rgb32 {
    fn from(raw: u32) -> Self {
        Self::from_packed(raw)
    }
}

/// Maps a position in `[0, 256)` onto a color wheel cycling red-green-blue-red.
///
/// Three 85-wide linear ramps; two components ramp against each other while
/// the third stays at zero.
pub fn wheel(pos: u8) -> Rgb32 {
    let pos = 255 - pos;
    if pos < 85 {
        Rgb32::new(255 - pos * 3, 0, pos * 3)
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb32::new(0, pos * 3, 255 - pos * 3)
    } else {
        let pos = pos - 170;
        Rgb32::new(pos * 3, 255 - pos * 3, 0)
    }
}

/// Linearly interpolates between two colors at `index / total`.
///
/// Component-wise `(from * (total - index) + to * index) / total` with the
/// operand order chosen to minimize truncation error. `total` must be nonzero
/// and `index` must not exceed `total`.
pub fn lerp(from: Rgb32, to: Rgb32, index: u16, total: u16) -> Rgb32 {
    let mix = |a: u8, b: u8| {
        ((a as u32 * (total - index) as u32 + b as u32 * index as u32) / total as u32) as u8
    };
    Rgb32::new(
        mix(from.red(), to.red()),
        mix(from.green(), to.green()),
        mix(from.blue(), to.blue()),
    )
}

/// Converts a `palette` sRGB color (0.0-1.0 components) to the packed format.
#[inline]
pub fn from_srgb(color: Srgb) -> Rgb32 {
    let c: Srgb<u8> = color.into_format();
    Rgb32::new(c.red, c.green, c.blue)
}

/// Creates a packed color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Rgb32 {
    let hsv = Hsv::new(hue, saturation, value);
    from_srgb(Srgb::from_color(hsv))
}

/// Creates a packed color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Rgb32 {
    hsv(hue, 1.0, 1.0)
}
