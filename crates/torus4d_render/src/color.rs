//! Colors and the per-object palettes
//!
//! Colors are 8-bit RGB with a fractional alpha, matching the CSS
//! `rgba(r, g, b, a)` strings a 2D canvas consumes.

use std::f64::consts::{PI, TAU};
use std::fmt;

use torus4d_math::Angles4D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in [0, 1]
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Channels normalized to [0, 1] for GPU vertex data
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a.clamp(0.0, 1.0),
        ]
    }

    /// Component-wise interpolation in normalized space
    pub fn lerp_f32(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
        let t = t.clamp(0.0, 1.0);
        [
            a[0] + (b[0] - a[0]) * t,
            a[1] + (b[1] - a[1]) * t,
            a[2] + (b[2] - a[2]) * t,
            a[3] + (b[3] - a[3]) * t,
        ]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Floor to a channel value, saturating at the byte range
#[inline]
fn channel(v: f32) -> u8 {
    v.floor().clamp(0.0, 255.0) as u8
}

/// Polar ice
pub const ICE: Rgba = Rgba::opaque(200, 230, 255);
/// Terrain below the land band
pub const DARK_TERRAIN: Rgba = Rgba::opaque(70, 80, 60);

/// Phase offsets of the green and blue channels (about 120° apart)
const GREEN_PHASE: f64 = 2.09;
const BLUE_PHASE: f64 = 4.18;

/// Opaque color of sphere face `(u, v)` at the given sphere spin
///
/// Latitudes outside [0.35, 0.65] are ice. Inside, a longitude stripe
/// pattern picks water, land or dark terrain.
pub fn sphere_face_color(u: f32, v: f32, sphere_rotation_x: f64) -> Rgba {
    if !(0.35..=0.65).contains(&v) {
        return ICE;
    }

    let lat = ((f64::from(v) - 0.5) * PI).sin() as f32;
    // The spin is unbounded; keep the sum in f64
    let pattern = (f64::from(u) * PI * 4.0 + sphere_rotation_x * 2.0).sin() as f32;

    if pattern > 0.3 {
        // Water
        Rgba::opaque(
            channel(20.0 + 60.0 * lat),
            channel(100.0 + 80.0 * lat),
            channel(180.0 + 60.0 * lat),
        )
    } else if pattern > -0.2 {
        // Land
        Rgba::opaque(
            channel(50.0 + 100.0 * pattern),
            channel(100.0 + 50.0 * pattern),
            channel(40.0 + 30.0 * pattern),
        )
    } else {
        DARK_TERRAIN
    }
}

/// Opaque color of tesseract `index` out of `count`
///
/// Three sinusoids 120° apart, driven by the 4D orientation and the
/// placement index.
pub fn tesseract_color(index: usize, count: usize, angles_4d: &Angles4D) -> Rgba {
    let t = (angles_4d.w + angles_4d.x) / 2.0;
    let phase = if count == 0 {
        0.0
    } else {
        (index as f64 / count as f64) * TAU
    };
    let wave = |offset: f64| channel(128.0 + 127.0 * (t + phase + offset).sin() as f32);
    Rgba::opaque(wave(0.0), wave(GREEN_PHASE), wave(BLUE_PHASE))
}
