use std::fmt;
use std::str::FromStr;

use super::ColorParseError;

/// Premultiplied RGBA color with sRGB-encoded channels in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Interpolation ([`lerp`](Self::lerp)) works on the straight-alpha channels so
/// that animating between two opaque colors moves each channel linearly,
/// exactly as the hex values would suggest.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Opaque gray with every channel set to `level` (clamped to `[0, 1]`).
    #[inline]
    pub fn gray(level: f32) -> Self {
        let v = level.clamp(0.0, 1.0);
        Self { r: v, g: v, b: v, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha sRGB bytes, rounded to nearest.
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::new(s, "expected a leading '#'"))?;

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(s, "non-hex digit"));
        }

        // All digits are ASCII, so byte slicing below stays on char boundaries.
        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let parsed = match digits.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(ColorParseError::new(s, "expected 3, 4, 6 or 8 hex digits")),
        };

        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::from_srgb_u8(r, g, b, a)),
            _ => Err(ColorParseError::new(s, "non-hex digit")),
        }
    }

    /// Formats as lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_srgb_u8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Interpolates every straight-alpha channel independently.
    ///
    /// `t == 0` yields `self`, `t == 1` yields `other`. `t` is not clamped.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let (r0, g0, b0, a0) = self.to_straight();
        let (r1, g1, b1, a1) = other.to_straight();
        let mix = |from: f32, to: f32| from + (to - from) * t;
        Color::from_straight(mix(r0, r1), mix(g0, g1), mix(b0, b1), mix(a0, a1))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hex parsing ───────────────────────────────────────────────────────

    #[test]
    fn parses_six_digit_hex() {
        let c = Color::from_hex("#2b32b2").unwrap();
        assert_eq!(c.to_srgb_u8(), [0x2b, 0x32, 0xb2, 0xff]);
    }

    #[test]
    fn parses_uppercase_and_short_forms() {
        assert_eq!(Color::from_hex("#F37144").unwrap().to_srgb_u8(), [0xf3, 0x71, 0x44, 255]);
        assert_eq!(Color::from_hex("#fa0").unwrap().to_srgb_u8(), [0xff, 0xaa, 0x00, 255]);
        assert_eq!(Color::from_hex("#fa08").unwrap().to_srgb_u8()[3], 0x88);
    }

    #[test]
    fn parses_eight_digit_alpha() {
        let c = Color::from_hex("#ff000080").unwrap();
        assert_eq!(c.to_srgb_u8(), [255, 0, 0, 0x80]);
        // Stored premultiplied.
        assert!((c.r - c.a).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_literals() {
        assert!(Color::from_hex("2b32b2").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#xyzxyz").is_err());
        assert!(Color::from_hex("#").is_err());
    }

    #[test]
    fn hex_round_trips_through_display() {
        assert_eq!(Color::from_hex("#1488CC").unwrap().to_string(), "#1488cc");
        assert_eq!(Color::from_hex("#11223344").unwrap().to_string(), "#11223344");
    }

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Color::from_hex("#2b32b2").unwrap();
        let b = Color::from_hex("#f37144").unwrap();
        assert_eq!(a.lerp(b, 0.0).to_hex(), "#2b32b2");
        assert_eq!(a.lerp(b, 1.0).to_hex(), "#f37144");
    }

    #[test]
    fn lerp_midpoint_is_channel_average() {
        let a = Color::from_srgb_u8(0, 100, 200, 255);
        let b = Color::from_srgb_u8(200, 100, 0, 255);
        assert_eq!(a.lerp(b, 0.5).to_srgb_u8(), [100, 100, 100, 255]);
    }

    #[test]
    fn lerp_uses_straight_alpha() {
        // Half-transparent red to opaque red keeps the hue: only alpha moves.
        let a = Color::from_srgb_u8(255, 0, 0, 128);
        let b = Color::from_srgb_u8(255, 0, 0, 255);
        let (r, g, _, alpha) = a.lerp(b, 0.5).to_straight();
        assert!((r - 1.0).abs() < 1e-5);
        assert_eq!(g, 0.0);
        assert!((alpha - (128.0 / 255.0 + 1.0) / 2.0).abs() < 1e-5);
    }

    #[test]
    fn gray_is_opaque_and_clamped() {
        assert_eq!(Color::gray(2.0), Color::from_straight(1.0, 1.0, 1.0, 1.0));
        assert_eq!(Color::gray(0.5).a, 1.0);
    }
}
