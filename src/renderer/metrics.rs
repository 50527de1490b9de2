//! Font-metrics provider boundary.
//!
//! The engine never selects or loads fonts; it is handed a resolved
//! [`FontSpec`] per staff and asks a [`FontMetrics`] implementation for
//! tight bounding boxes in the same unit space as the rest of the layout.

use serde::{Deserialize, Serialize};

use crate::geom::Size;

/// A resolved font descriptor, as chosen by the host per staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub point_size: f64,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, point_size: f64) -> Self {
        Self { family: family.into(), point_size }
    }
}

/// Provider of tight text bounding boxes.
///
/// A missing glyph may legitimately report a zero-size box; layout
/// tolerates that and produces a zero-width digit box rather than failing.
pub trait FontMetrics {
    fn tight_bounding_box(&self, font: &FontSpec, text: &str) -> Size;
}

/// Built-in metrics for the digit strings this engine renders.
///
/// Approximates a serif text face: digits are tabular at roughly half an
/// em, with cap-height boxes. Good enough for self-contained rendering;
/// hosts with a real text stack supply their own [`FontMetrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDigitMetrics;

impl BuiltinDigitMetrics {
    const DIGIT_WIDTH_EM: f64 = 0.5;
    const CAP_HEIGHT_EM: f64 = 0.72;
}

impl FontMetrics for BuiltinDigitMetrics {
    fn tight_bounding_box(&self, font: &FontSpec, text: &str) -> Size {
        let width = text.chars().count() as f64 * Self::DIGIT_WIDTH_EM * font.point_size;
        let height = if text.is_empty() {
            0.0
        } else {
            Self::CAP_HEIGHT_EM * font.point_size
        };
        Size::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_metrics_scale_with_point_size() {
        let m = BuiltinDigitMetrics;
        let small = m.tight_bounding_box(&FontSpec::new("serif", 10.0), "5");
        let large = m.tight_bounding_box(&FontSpec::new("serif", 20.0), "5");
        assert_eq!(large.width, small.width * 2.0);
        assert_eq!(large.height, small.height * 2.0);
    }

    #[test]
    fn builtin_metrics_empty_string_is_zero_size() {
        let m = BuiltinDigitMetrics;
        let size = m.tight_bounding_box(&FontSpec::new("serif", 26.0), "");
        assert_eq!(size, Size::new(0.0, 0.0));
    }
}
