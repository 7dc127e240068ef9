use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 33, g: 128, b: 239 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 176, b: 59 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const PLACEHOLDER: Color = Color::BrightBlack;
pub const COORDINATES: Color = Color::Cyan;
