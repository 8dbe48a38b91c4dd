//! Color values and the formatting rules for clipboard payloads.
//!
//! Channels are stored as floats in `[0, 1]`. The two integer conversions
//! deliberately differ: hex strings round each channel while RGB tuples
//! truncate toward zero, so `0.999` shows up as `ff` in hex but `254` in a
//! tuple.

/// An RGB color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// A color in HSV space. Hue is in degrees `[0, 360)`, saturation and
/// value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { r, g, b }
    }

    /// Convert to HSV. Achromatic colors (zero delta) get hue 0, and pure
    /// black gets saturation 0 as well.
    pub fn to_hsv(self) -> Hsv {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == self.r {
            let mut h = 60.0 * (((self.g - self.b) / delta) % 6.0);
            if h < 0.0 {
                h += 360.0;
            }
            h
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv { h, s, v: max }
    }

    /// Lowercase `#rrggbb` with each channel scaled by 255 and rounded.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }

    /// 8-bit channels, truncated toward zero: `0.503 * 255 = 128.265`
    /// becomes `128`, and `0.999 * 255 = 254.745` becomes `254`.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        )
    }

    /// Decimal tuple text, e.g. `(255, 0, 0)`.
    pub fn to_rgb_tuple(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("({}, {}, {})", r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_to_hsv_primaries() {
        let red = Rgb::new(1.0, 0.0, 0.0).to_hsv();
        assert_close(red.h, 0.0);
        assert_close(red.s, 1.0);
        assert_close(red.v, 1.0);

        let green = Rgb::new(0.0, 1.0, 0.0).to_hsv();
        assert_close(green.h, 120.0);

        let blue = Rgb::new(0.0, 0.0, 1.0).to_hsv();
        assert_close(blue.h, 240.0);
    }

    #[test]
    fn test_to_hsv_gray_is_achromatic() {
        let gray = Rgb::new(0.5, 0.5, 0.5).to_hsv();
        assert_close(gray.h, 0.0);
        assert_close(gray.s, 0.0);
        assert_close(gray.v, 0.5);
    }

    #[test]
    fn test_to_hsv_black_has_zero_saturation() {
        let black = Rgb::new(0.0, 0.0, 0.0).to_hsv();
        assert_close(black.s, 0.0);
        assert_close(black.v, 0.0);
    }

    #[test]
    fn test_to_hsv_hue_wraps_into_range() {
        // Red-max with blue > green lands in the negative branch.
        let rose = Rgb::new(1.0, 0.0, 0.5).to_hsv();
        assert_close(rose.h, 330.0);
    }

    #[test]
    fn test_to_hex_rounds_channels() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Rgb::new(0.999, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Rgb::new(0.5, 0.0, 0.0).to_hex(), "#800000");
    }

    #[test]
    fn test_to_rgb8_truncates_toward_zero() {
        assert_eq!(Rgb::new(0.503, 0.0, 0.0).to_rgb8().0, 128);
        assert_eq!(Rgb::new(0.499, 0.0, 0.0).to_rgb8().0, 127);
        // Where rounding and truncation disagree, truncation wins.
        assert_eq!(Rgb::new(0.999, 0.0, 0.0).to_rgb8().0, 254);
    }

    #[test]
    fn test_to_rgb_tuple_format() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.0).to_rgb_tuple(), "(255, 0, 0)");
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_rgb_tuple(), "(0, 0, 0)");
    }

    #[test]
    fn test_from_hex_roundtrips_exactly() {
        // k/255 * 255 is exact in f32, so table colors survive truncation.
        assert_eq!(Rgb::from_hex(0x450a0f).to_rgb8(), (0x45, 0x0a, 0x0f));
        assert_eq!(Rgb::from_hex(0xffffff).to_rgb8(), (255, 255, 255));
    }
}
