//! Random hex colours and one-way colour-space conversion.
//!
//! A [`HexColour`] is generated from a random source, decoded into an
//! [`Rgb`] triple, and converted from there into CMYK, HSV, or HSL. Every
//! step is a pure value-to-value computation; nothing is cached between
//! calls.

use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::math;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Error type for hex decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    /// Input was not exactly 6 hexadecimal digits.
    #[error("invalid hex colour {0:?}: expected exactly 6 hex digits")]
    InvalidFormat(String),
}

/// Output notation for [`random_colour`](crate::random_colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourFormat {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r,g,b)` with integer 0–255 channels
    Rgb,
    /// `cmyk(c%,m%,y%,k%)`
    Cmyk,
    /// `hsv(h,s%,v%)`
    Hsv,
    /// `hsl(h,s%,l%)`
    Hsl,
}

/// A colour as 6 lowercase hexadecimal digits, two per RGB channel.
///
/// The `#` prefix is never stored; `Display` adds it at the output boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexColour(String);

impl HexColour {
    /// Draw 6 hex digits, each uniform over 0–15, from the given source.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut hex = String::with_capacity(6);
        for _ in 0..6 {
            hex.push(HEX_DIGITS[rng.random_range(0..16)] as char);
        }
        Self(hex)
    }

    /// The raw 6 digits without the `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Integer RGB channels, 0–255 each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Decode a 6-digit hex string (a leading `#` is allowed and stripped).
    ///
    /// Anything other than 6 hex digits is [`ColourError::InvalidFormat`];
    /// malformed input fails fast instead of producing garbage channels.
    pub fn from_hex(hex: &str) -> Result<Self, ColourError> {
        let stripped = hex.strip_prefix('#').unwrap_or(hex);
        if stripped.len() != 6 || !stripped.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColourError::InvalidFormat(hex.to_string()));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColourError::InvalidFormat(hex.to_string()))
        };
        Ok(Self {
            r: channel(&stripped[0..2])?,
            g: channel(&stripped[2..4])?,
            b: channel(&stripped[4..6])?,
        })
    }

    /// Convert to CMYK percentages.
    ///
    /// Black short-circuits to `(0, 0, 0, 100)`; the key normalization below
    /// would otherwise divide by zero.
    pub fn to_cmyk(self) -> Cmyk {
        if self.r == 0 && self.g == 0 && self.b == 0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 100.0,
            };
        }

        let raw_c = 1.0 - f64::from(self.r) / 255.0;
        let raw_m = 1.0 - f64::from(self.g) / 255.0;
        let raw_y = 1.0 - f64::from(self.b) / 255.0;
        let k = raw_c.min(raw_m.min(raw_y));

        Cmyk {
            c: (raw_c - k) / (1.0 - k) * 100.0,
            m: (raw_m - k) / (1.0 - k) * 100.0,
            y: (raw_y - k) / (1.0 - k) * 100.0,
            k: k * 100.0,
        }
    }

    /// Convert to HSV. Hue is the raw sector value (see [`Hsv::h`]).
    pub fn to_hsv(self) -> Hsv {
        let n = math::normalize(self.r, self.g, self.b);
        if n.min == n.max {
            return Hsv {
                h: 0.0,
                s: 0.0,
                v: n.max * 100.0,
            };
        }
        Hsv {
            h: math::sector_hue(n),
            s: (n.max - n.min) / n.max * 100.0,
            v: n.max * 100.0,
        }
    }

    /// Convert to HSL. Hue is the raw sector value (see [`Hsl::h`]).
    pub fn to_hsl(self) -> Hsl {
        let n = math::normalize(self.r, self.g, self.b);
        let l = (n.min + n.max) / 2.0 * 100.0;
        if n.min == n.max {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        // Two-branch saturation depending on which side of the midpoint
        // lightness falls.
        let s = if (n.min + n.max) / 2.0 > 0.5 {
            (n.max - n.min) / (2.0 - n.max - n.min)
        } else {
            (n.max - n.min) / (n.max + n.min)
        };

        Hsl {
            h: math::sector_hue(n),
            s: s * 100.0,
            l,
        }
    }
}

impl From<&HexColour> for Rgb {
    fn from(hex: &HexColour) -> Self {
        // HexColour only ever holds 6 lowercase hex digits, so the nibble
        // math is total.
        let nibble = |b: u8| match b {
            b'0'..=b'9' => b - b'0',
            _ => b - b'a' + 10,
        };
        let bytes = hex.0.as_bytes();
        let pair = |i: usize| nibble(bytes[i]) * 16 + nibble(bytes[i + 1]);
        Self {
            r: pair(0),
            g: pair(2),
            b: pair(4),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// CMYK percentages. No rounding or clamping is applied; values are whatever
/// the conversion produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    /// Components as `%`-suffixed strings in C, M, Y, K order.
    pub fn components(&self) -> [String; 4] {
        [
            format!("{}%", self.c),
            format!("{}%", self.m),
            format!("{}%", self.y),
            format!("{}%", self.k),
        ]
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cmyk({})", self.components().join(","))
    }
}

/// HSV components: hue in degrees, saturation and value as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Raw sector hue; may be negative or ≥ 360 (not wrapped).
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Components as strings in H, S, V order; hue carries no `%`.
    pub fn components(&self) -> [String; 3] {
        [
            self.h.to_string(),
            format!("{}%", self.s),
            format!("{}%", self.v),
        ]
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({})", self.components().join(","))
    }
}

/// HSL components: hue in degrees, saturation and lightness as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Raw sector hue; may be negative or ≥ 360 (not wrapped).
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Components as strings in H, S, L order; hue carries no `%`.
    pub fn components(&self) -> [String; 3] {
        [
            self.h.to_string(),
            format!("{}%", self.s),
            format!("{}%", self.l),
        ]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({})", self.components().join(","))
    }
}
