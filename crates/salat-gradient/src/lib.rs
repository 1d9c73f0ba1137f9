//! Ambient gradient engine.
//!
//! Each of the seven periods has an authored palette per theme; the
//! displayed palette is a linear blend between the current period's and
//! the next one's, driven by the schedule engine's progress fraction.

pub mod interpolate;
pub mod palette;

pub use interpolate::{interpolate, lerp_channel, lerp_color, lerp_palette};
pub use palette::{reference_palette, GradientPalette, Rgb};
