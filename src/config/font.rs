//! Font descriptor used by the log font preference.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A font family name plus a fractional point size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Family name, e.g. `monospace` or `DejaVu Sans Mono`.
    pub family: String,
    /// Point size, possibly fractional.
    pub point_size: f64,
}

impl FontDescriptor {
    /// Creates a font descriptor.
    #[must_use]
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self {
            family: family.into(),
            point_size,
        }
    }
}

/// Formats as a Pango-style font description, e.g. `Serif 12.5`.
impl Display for FontDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.family, self.point_size)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::font::FontDescriptor;

    #[test]
    fn test_font_descriptor_display() {
        let font = FontDescriptor::new("Serif", 12.5);
        assert_eq!(font.to_string(), "Serif 12.5");
        assert_eq!(FontDescriptor::new("Monospace", 9.0).to_string(), "Monospace 9");
    }
}
