//! RGBA colors and hex-string normalization.

use std::fmt;

/// Errors produced while parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The string does not start with `#`.
    #[error("\"{input}\" is not a valid hex color: expected a leading '#'")]
    MissingHash { input: String },

    /// The digit count is not 3, 6 or 8.
    #[error("cannot convert \"{input}\" to a six-digit hex color: {len} digits")]
    InvalidLength { input: String, len: usize },

    /// A character after `#` is not a hex digit.
    #[error("\"{input}\" contains a non-hexadecimal digit")]
    InvalidDigit { input: String },
}

/// Normalize a hex color to the `#rrggbb` form.
///
/// `#rgb` is expanded by doubling every digit, `#rrggbb` is kept, and the
/// alpha byte of `#rrggbbaa` is dropped. Output is lowercase.
///
/// ```
/// use linegraph_core::color::normalize_hex;
///
/// assert_eq!(normalize_hex("#abc").unwrap(), "#aabbcc");
/// assert!(normalize_hex("abc").is_err());
/// ```
pub fn normalize_hex(input: &str) -> Result<String, ColorError> {
    let digits = hex_digits(input)?;
    let mut out = String::with_capacity(7);
    out.push('#');
    match digits.len() {
        3 => {
            for c in digits.chars() {
                out.push(c);
                out.push(c);
            }
        }
        6 | 8 => out.push_str(&digits[..6]),
        len => {
            return Err(ColorError::InvalidLength {
                input: input.to_owned(),
                len,
            });
        }
    }
    Ok(out.to_ascii_lowercase())
}

fn hex_digits(input: &str) -> Result<&str, ColorError> {
    let Some(digits) = input.strip_prefix('#') else {
        return Err(ColorError::MissingHash {
            input: input.to_owned(),
        });
    };
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit {
            input: input.to_owned(),
        });
    }
    Ok(digits)
}

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// Colors can be constructed from floats, `u8` values, packed hex integers or
/// `#`-prefixed hex strings:
///
/// ```
/// use linegraph_core::Color;
///
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// let from_hex = Color::from_hex(0xFF8800);
/// let parsed = Color::parse_hex("#ff8800").unwrap();
/// assert_eq!(from_hex, parsed);
/// ```
///
/// The struct is `#[repr(C)]` and implements `bytemuck::Pod`, so hosts can
/// upload it directly into uniform buffers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values (0–255 mapped to 0.0–1.0).
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from 8-bit RGB values with full opacity.
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgb_u8(r, g, b)
    }

    /// Create a color from a 32-bit RGBA hex value (e.g. `0xFF880080`).
    pub fn from_hex_alpha(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as u8;
        let g = ((hex >> 16) & 0xFF) as u8;
        let b = ((hex >> 8) & 0xFF) as u8;
        let a = (hex & 0xFF) as u8;
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse_hex(input: &str) -> Result<Self, ColorError> {
        let digits = hex_digits(input)?;
        let value = |s: &str| {
            u32::from_str_radix(s, 16).map_err(|_| ColorError::InvalidDigit {
                input: input.to_owned(),
            })
        };
        match digits.len() {
            3 | 6 => {
                let six = normalize_hex(input)?;
                Ok(Self::from_hex(value(&six[1..])?))
            }
            8 => Ok(Self::from_hex_alpha(value(digits)?)),
            len => Err(ColorError::InvalidLength {
                input: input.to_owned(),
                len,
            }),
        }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Components as 8-bit values.
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbbaa`.
    pub fn to_hex_string(self) -> String {
        let [r, g, b, a] = self.to_rgba_u8();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// CSS functional notation: `rgba(r, g, b, a)` when alpha > 0, else `rgb(r, g, b)`.
    pub fn to_css(self) -> String {
        let [r, g, b, _] = self.to_rgba_u8();
        if self.a > 0.0 {
            format!("rgba({r}, {g}, {b}, {})", self.a)
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    /// Convert to an `[r, g, b, a]` array.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl From<[f32; 4]> for Color {
    fn from(arr: [f32; 4]) -> Self {
        Self {
            r: arr[0],
            g: arr[1],
            b: arr[2],
            a: arr[3],
        }
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}
