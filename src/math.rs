//! Colour math shared by the CMYK and HS* conversions.
//! Channels are normalized f64 in 0.0–1.0 for internal use.

/// RGB channels normalized to 0.0–1.0, with their min and max.
///
/// The precursor for both the HSV and HSL conversions; computed once so the
/// hue-sector derivation is not duplicated between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Normalized {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub min: f64,
    pub max: f64,
}

/// Normalize 0–255 channels to 0.0–1.0 and take their min/max.
pub(crate) fn normalize(r: u8, g: u8, b: u8) -> Normalized {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;
    Normalized {
        r,
        g,
        b,
        min: r.min(g.min(b)),
        max: r.max(g.max(b)),
    }
}

/// Hue in degrees from the minimum-channel sector shortcut.
///
/// Picks a 120° sector from whichever channel is smallest (three cases
/// instead of the conventional six keyed on the largest channel). The result
/// is not wrapped into [0, 360): callers get the raw sector value, which can
/// be negative or ≥ 360.
///
/// Caller must guarantee `max > min` (the achromatic case is handled before
/// this is reached).
pub(crate) fn sector_hue(n: Normalized) -> f64 {
    let (x, y) = if n.r == n.min {
        (n.g - n.b, 3.0)
    } else if n.b == n.min {
        (n.r - n.g, 1.0)
    } else {
        (n.b - n.r, 5.0)
    };
    60.0 * (y - x / (n.max - n.min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_bounds() {
        let n = normalize(0, 128, 255);
        assert_eq!(n.r, 0.0);
        assert_eq!(n.b, 1.0);
        assert_eq!(n.min, 0.0);
        assert_eq!(n.max, 1.0);
        assert_eq!(n.g, 128.0 / 255.0);
    }

    #[test]
    fn pure_red_hue_is_zero() {
        // red is not the min here; blue is checked before green, so
        // x = r - g = 1, y = 1, hue = 60 * (1 - 1/1) = 0.
        let n = normalize(255, 0, 0);
        assert_eq!(sector_hue(n), 0.0);
    }

    #[test]
    fn pure_green_hue() {
        // blue is min: x = r - g = -1, y = 1, hue = 60 * (1 + 1) = 120.
        let n = normalize(0, 255, 0);
        assert_eq!(sector_hue(n), 120.0);
    }

    #[test]
    fn pure_blue_hue() {
        // red is min: x = g - b = -1, y = 3, hue = 60 * (3 + 1) = 240.
        let n = normalize(0, 0, 255);
        assert_eq!(sector_hue(n), 240.0);
    }

    #[test]
    fn hue_is_not_wrapped() {
        // Near-magenta with green as the only minimum lands in the y = 5
        // sector and runs past 240 with no mod-360 normalization.
        let n = normalize(255, 0, 254);
        let h = sector_hue(n);
        assert!(h > 240.0, "expected raw sector hue, got {h}");
    }
}
