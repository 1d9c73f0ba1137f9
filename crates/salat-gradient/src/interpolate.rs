//! Linear per-channel blending between period palettes.
//!
//! Blending stays in sRGB space rather than a perceptual one so that the
//! output matches the channel arithmetic below exactly.

use salat_types::{PrayerPeriod, Theme};
use tracing::trace;

use crate::palette::{reference_palette, GradientPalette, Rgb};

/// Clamps a progress fraction to `[0, 1]`; NaN counts as 0.
fn unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// `round(clamp(a + (b - a) * t, 0, 255))`.
pub fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (f64::from(a), f64::from(b));
    (a + (b - a) * t).clamp(0.0, 255.0).round() as u8
}

pub fn lerp_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = unit(t);
    Rgb::new(
        lerp_channel(a.r, b.r, t),
        lerp_channel(a.g, b.g, t),
        lerp_channel(a.b, b.b, t),
    )
}

/// Blends two palettes stop by stop. Missing `via` stops read as `from`,
/// so the result always carries all three stops.
pub fn lerp_palette(a: &GradientPalette, b: &GradientPalette, t: f64) -> GradientPalette {
    GradientPalette::new(
        lerp_color(a.from, b.from, t),
        lerp_color(a.via_or_from(), b.via_or_from(), t),
        lerp_color(a.to, b.to, t),
    )
}

/// Interpolates from `current`'s reference palette toward `next`'s.
///
/// # Example
/// ```rust
/// use salat_gradient::interpolate;
/// use salat_types::{PrayerPeriod, Theme};
///
/// let p = interpolate(PrayerPeriod::Dhuhr, PrayerPeriod::Asr, 0.5, Theme::Dark);
/// assert_eq!(p.from.to_string(), "#1b1200");
/// ```
pub fn interpolate(
    current: PrayerPeriod,
    next: PrayerPeriod,
    progress: f64,
    theme: Theme,
) -> GradientPalette {
    let palette = lerp_palette(
        &reference_palette(current, theme),
        &reference_palette(next, theme),
        progress,
    );
    trace!(%current, %next, progress, ?theme, from = %palette.from, "interpolated gradient");
    palette
}
