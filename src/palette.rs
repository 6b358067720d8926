//! Verdict severity levels and their banner colors.

use genpdf::style::Color;

/// Severity classification of a scan result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerdictLevel {
    /// Active threat found.
    Red,
    /// Suspicious findings, manual review advised.
    Yellow,
    /// Clean scan.
    Green,
    /// Anything the scanner reported that is not one of the known levels.
    #[default]
    Unknown,
}

impl VerdictLevel {
    /// Parses a raw scanner level case-insensitively.
    ///
    /// Unrecognized or empty input yields [`VerdictLevel::Unknown`] rather
    /// than an error; the report still renders, just with the neutral color.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "RED" => Self::Red,
            "YELLOW" => Self::Yellow,
            "GREEN" => Self::Green,
            _ => Self::Unknown,
        }
    }
}

/// Immutable mapping from verdict levels to banner fill colors.
///
/// Kept as an explicit value rather than inline literals so the table can be
/// unit-tested and swapped without touching the rendering pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct VerdictPalette {
    red: Color,
    yellow: Color,
    green: Color,
    /// Fill used for unrecognized levels.
    fallback: Color,
}

impl Default for VerdictPalette {
    fn default() -> Self {
        Self {
            red: Color::Rgb(220, 53, 69),
            yellow: Color::Rgb(255, 193, 7),
            green: Color::Rgb(40, 167, 69),
            fallback: Color::Rgb(108, 117, 125),
        }
    }
}

impl VerdictPalette {
    /// Returns the banner fill color for the given level.
    pub fn color_for(&self, level: VerdictLevel) -> Color {
        match level {
            VerdictLevel::Red => self.red,
            VerdictLevel::Yellow => self.yellow,
            VerdictLevel::Green => self.green,
            VerdictLevel::Unknown => self.fallback,
        }
    }

    /// Convenience lookup that parses the raw level string first.
    pub fn color_for_raw(&self, raw: &str) -> Color {
        self.color_for(VerdictLevel::parse(raw))
    }
}
