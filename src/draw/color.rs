//! RGBA color type, HSV conversions, and tolerance equality.

/// Per-channel tolerance used by [`Color::approx_eq`].
///
/// Flood fill treats two colors as the same region when every channel is
/// within this distance. Not intended for general-purpose comparisons.
pub const COLOR_TOLERANCE: f64 = 0.0001;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum). Callers
/// own clamping; the conversions here assume pre-clamped input.
///
/// # Examples
///
/// ```
/// use pixelpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    ///
    /// All values should be in the range 0.0 to 1.0.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Tolerance equality: true iff every channel differs by at most
    /// [`COLOR_TOLERANCE`].
    pub fn approx_eq(self, other: Color) -> bool {
        (self.r - other.r).abs() <= COLOR_TOLERANCE
            && (self.g - other.g).abs() <= COLOR_TOLERANCE
            && (self.b - other.b).abs() <= COLOR_TOLERANCE
            && (self.a - other.a).abs() <= COLOR_TOLERANCE
    }

    /// Converts to HSV, discarding alpha.
    ///
    /// Degenerate inputs (grays, black) have no well-defined hue; this
    /// implementation reports h = 0 for them. Saturation is 0 when the
    /// color is black.
    pub fn to_hsv(self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == self.r {
            ((self.g - self.b) / delta).rem_euclid(6.0) / 6.0
        } else if max == self.g {
            (((self.b - self.r) / delta) + 2.0) / 6.0
        } else {
            (((self.r - self.g) / delta) + 4.0) / 6.0
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv { h, s, v: max }
    }
}

/// Hue/saturation/value color representation.
///
/// All three components are normalized to [0, 1]; `h` is a full-circle
/// fraction rather than degrees, with the seam at h = 0/1 on pure red.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Creates an HSV triple. Components should be pre-clamped to [0, 1].
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Converts to RGB with the given alpha.
    ///
    /// Inverse of [`Color::to_hsv`] up to floating-point rounding for
    /// s > 0 and v > 0.
    pub fn to_rgb(self, alpha: f64) -> Color {
        let h6 = self.h * 6.0;
        let chroma = self.v * self.s;
        let x = chroma * (1.0 - ((h6 % 2.0) - 1.0).abs());
        let m = self.v - chroma;
        let (r, g, b) = match h6 as i32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        Color::new(r + m, g + m, b + m, alpha)
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Fully transparent color; every canvas pixel starts as this, and the
/// erasers stamp it.
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

/// Predefined opaque red (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined opaque blue (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined opaque white (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined opaque black (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
