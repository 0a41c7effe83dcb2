//! # qol
//!
//! A small grab-bag of quality-of-life utilities: a random colour generator
//! with hex/RGB/CMYK/HSV/HSL output, a date formatter, a thousands
//! delimiter, a process/timing logger, and an async delay helper.
//!
//! The modules are independent; each call is self-contained and the only
//! shared resource is the process-wide random source.
//!
//! ## Usage
//!
//! ```rust
//! use qol::{num_parse, random_colour, ColourFormat, Delimiter};
//!
//! let hex = random_colour(ColourFormat::Hex); // e.g. "#3b82f6"
//! assert!(hex.starts_with('#'));
//!
//! assert_eq!(num_parse(1_234_567, Delimiter::Comma), "1,234,567");
//! ```

mod colour;
mod date;
mod logger;
mod math;
mod num;
mod sleep;

pub use colour::{ColourError, ColourFormat, Cmyk, HexColour, Hsl, Hsv, Rgb};
pub use date::{parse_date, DateFormat, DateParts, DayParts, MonthParts, YearParts};
pub use logger::{LogLevel, Logger};
pub use num::{num_parse, Delimiter};
pub use sleep::{sleep, SleepError};

use rand::Rng;

/// Generate a random colour in the requested notation.
///
/// Draws from the process-wide random source; use [`random_colour_with`] to
/// inject your own (a seeded one in tests, say).
pub fn random_colour(format: ColourFormat) -> String {
    random_colour_with(&mut rand::rng(), format)
}

/// [`random_colour`] with an explicit random source.
pub fn random_colour_with<R: Rng + ?Sized>(rng: &mut R, format: ColourFormat) -> String {
    let hex = HexColour::random(rng);
    match format {
        ColourFormat::Hex => hex.to_string(),
        ColourFormat::Rgb => Rgb::from(&hex).to_string(),
        ColourFormat::Cmyk => Rgb::from(&hex).to_cmyk().to_string(),
        ColourFormat::Hsv => Rgb::from(&hex).to_hsv().to_string(),
        ColourFormat::Hsl => Rgb::from(&hex).to_hsl().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xC0FFEE)
    }

    #[test]
    fn hex_shape() {
        let mut rng = rng();
        for _ in 0..50 {
            let out = random_colour_with(&mut rng, ColourFormat::Hex);
            assert_eq!(out.len(), 7);
            assert!(out.starts_with('#'));
            assert!(out[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn default_format_is_hex() {
        let mut rng = rng();
        let out = random_colour_with(&mut rng, ColourFormat::default());
        assert_eq!(out.len(), 7);
        assert!(out.starts_with('#'));
    }

    #[test]
    fn rgb_shape() {
        let mut rng = rng();
        for _ in 0..50 {
            let out = random_colour_with(&mut rng, ColourFormat::Rgb);
            let inner = out
                .strip_prefix("rgb(")
                .and_then(|s| s.strip_suffix(')'))
                .unwrap();
            let channels: Vec<u8> = inner.split(',').map(|n| n.parse().unwrap()).collect();
            assert_eq!(channels.len(), 3);
        }
    }

    #[test]
    fn cmyk_shape() {
        let mut rng = rng();
        let out = random_colour_with(&mut rng, ColourFormat::Cmyk);
        let inner = out
            .strip_prefix("cmyk(")
            .and_then(|s| s.strip_suffix(')'))
            .unwrap();
        let parts: Vec<&str> = inner.split(',').collect();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.ends_with('%')));
    }

    #[test]
    fn hs_shapes() {
        let mut rng = rng();
        for (format, prefix) in [(ColourFormat::Hsv, "hsv("), (ColourFormat::Hsl, "hsl(")] {
            let out = random_colour_with(&mut rng, format);
            let inner = out
                .strip_prefix(prefix)
                .and_then(|s| s.strip_suffix(')'))
                .unwrap();
            let parts: Vec<&str> = inner.split(',').collect();
            assert_eq!(parts.len(), 3);
            // Hue carries no %, the other two do.
            assert!(!parts[0].ends_with('%'));
            assert!(parts[1].ends_with('%'));
            assert!(parts[2].ends_with('%'));
        }
    }

    #[test]
    fn seeded_source_is_deterministic() {
        let a = random_colour_with(&mut rng(), ColourFormat::Hsl);
        let b = random_colour_with(&mut rng(), ColourFormat::Hsl);
        assert_eq!(a, b);
    }
}
