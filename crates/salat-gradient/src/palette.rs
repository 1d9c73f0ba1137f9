//! Colors, three-stop palettes and the reference table per period.

use salat_types::{PrayerPeriod, SalatError, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// From a packed `0xRRGGBB` literal.
    pub const fn hex(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = SalatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(SalatError::invalid_config(format!("Invalid color: {}", s)));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::hex)
            .map_err(|_| SalatError::invalid_config(format!("Invalid color: {}", s)))
    }
}

impl TryFrom<String> for Rgb {
    type Error = SalatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

/// A three-stop gradient. A missing `via` stop reads as `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientPalette {
    pub from: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub via: Option<Rgb>,
    pub to: Rgb,
}

impl GradientPalette {
    pub const fn new(from: Rgb, via: Rgb, to: Rgb) -> Self {
        Self { from, via: Some(via), to }
    }

    pub const fn two_stop(from: Rgb, to: Rgb) -> Self {
        Self { from, via: None, to }
    }

    pub fn via_or_from(&self) -> Rgb {
        self.via.unwrap_or(self.from)
    }

    /// The same palette with `via` always present.
    pub fn filled(self) -> Self {
        Self {
            via: Some(self.via_or_from()),
            ..self
        }
    }

    /// CSS custom properties consumed by the rendering layer.
    pub fn css_vars(&self) -> [(&'static str, String); 3] {
        [
            ("--gradient-from", self.from.to_string()),
            ("--gradient-via", self.via_or_from().to_string()),
            ("--gradient-to", self.to.to_string()),
        ]
    }
}

struct ThemedPalette {
    dark: GradientPalette,
    light: GradientPalette,
}

const fn themed(dark: [u32; 3], light: [u32; 3]) -> ThemedPalette {
    ThemedPalette {
        dark: GradientPalette::new(Rgb::hex(dark[0]), Rgb::hex(dark[1]), Rgb::hex(dark[2])),
        light: GradientPalette::new(Rgb::hex(light[0]), Rgb::hex(light[1]), Rgb::hex(light[2])),
    }
}

/// Indexed by `PrayerPeriod::index()`.
const REFERENCE: [ThemedPalette; 7] = [
    // pre-fajr
    themed([0x020409, 0x0a0a1a, 0x0d0520], [0x1a1a3e, 0x2d2b5e, 0x1a0a2e]),
    // Fajr
    themed([0x0f0c29, 0x302b63, 0x24243e], [0x2d2b6b, 0x5048a8, 0x3d3980]),
    // Sunrise
    themed([0x1a0a00, 0x6b2f0a, 0xc4720a], [0xff6b35, 0xf7931e, 0xffd700]),
    // Dhuhr
    themed([0x1c1400, 0x3d2f00, 0x4a3800], [0xb8860b, 0xdaa520, 0xffd700]),
    // Asr
    themed([0x1a0f00, 0x4a2e00, 0x6b4400], [0xcd7f32, 0xb8860b, 0x8b6914]),
    // Maghrib
    themed([0x2d0a00, 0x6b1f1f, 0x2e0a4a], [0xdc143c, 0xc2185b, 0x6a0080]),
    // Isha
    themed([0x020409, 0x0d1b2a, 0x0a0a1e], [0x1a1a3e, 0x0d1b2a, 0x120a2e]),
];

/// The authored palette for a period in a theme.
pub fn reference_palette(period: PrayerPeriod, theme: Theme) -> GradientPalette {
    let entry = &REFERENCE[period.index()];
    match theme {
        Theme::Dark => entry.dark,
        Theme::Light => entry.light,
    }
}
