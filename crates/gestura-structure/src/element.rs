//! Element table: van der Waals radii and CPK colors

use serde::{Deserialize, Serialize};

/// Radius for elements missing from the table (Å)
pub const DEFAULT_RADIUS: f32 = 1.5;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Color for elements missing from the table (hot pink)
pub const DEFAULT_COLOR: Rgb = Rgb::new(0xFF, 0x69, 0xB4);

/// Van der Waals radius in Å (case-insensitive symbol)
pub fn van_der_waals_radius(symbol: &str) -> f32 {
    match symbol.to_ascii_uppercase().as_str() {
        "H" => 1.2,
        "C" => 1.7,
        "N" => 1.55,
        "O" => 1.52,
        "S" => 1.8,
        "P" => 1.8,
        _ => DEFAULT_RADIUS,
    }
}

/// CPK color (case-insensitive symbol)
pub fn cpk_color(symbol: &str) -> Rgb {
    match symbol.to_ascii_uppercase().as_str() {
        "H" => Rgb::new(0xFF, 0xFF, 0xFF),
        "C" => Rgb::new(0x90, 0x90, 0x90),
        "N" => Rgb::new(0x30, 0x50, 0xF8),
        "O" => Rgb::new(0xFF, 0x0D, 0x0D),
        "S" => Rgb::new(0xFF, 0xFF, 0x30),
        "P" => Rgb::new(0xFF, 0xA5, 0x00),
        "F" => Rgb::new(0x90, 0xE0, 0x50),
        "CL" => Rgb::new(0x1F, 0xF0, 0x1F),
        "BR" => Rgb::new(0xA6, 0x29, 0x29),
        "I" => Rgb::new(0x94, 0x00, 0x94),
        "FE" => Rgb::new(0xE0, 0x66, 0x33),
        "CA" => Rgb::new(0x3D, 0xFF, 0x00),
        _ => DEFAULT_COLOR,
    }
}
