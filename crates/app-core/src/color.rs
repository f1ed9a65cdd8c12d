use crate::error::{Result, SceneError};
use std::fmt;
use std::str::FromStr;

/// Linear-ish RGB color in \[0, 1\] per channel, as edited in the debug panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SceneError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| SceneError::InvalidColor(s.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", q(self.r), q(self.g), q(self.b))
    }

    /// Decode sRGB channels to linear for lighting on an sRGB swapchain.
    pub fn to_linear(self) -> Self {
        fn decode(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        Self::new(decode(self.r), decode(self.g), decode(self.b))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self> {
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

    #[test]
    fn parses_default_material_color() {
        let c = Color::from_hex("#ffeded").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.g - 237.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.to_hex(), "#ffeded");
    }

    #[test]
    fn linear_keeps_endpoints() {
        let lin = Color::from_hex("#ff0080").unwrap().to_linear();
        assert_eq!(lin.r, 1.0);
        assert_eq!(lin.g, 0.0);
        assert!(lin.b > 0.2 && lin.b < 0.23);
    }

    #[test]
    fn accepts_missing_hash() {
        assert_eq!(Color::from_hex("000000").unwrap(), Color::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn rejects_bad_input() {
        for bad in ["", "#fff", "#gggggg", "#ffeded00", "red"] {
            assert!(Color::from_hex(bad).is_err(), "accepted {bad:?}");
        }
    }
}
