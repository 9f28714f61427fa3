//! Text measurement used for intrinsic widths.

/// Measures text for min/max width computation.
pub trait FontMetrics {
    /// Advance width of `text` set at `font_size` px.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Fixed-ratio metrics for when no font data is available.
///
/// [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
///
/// "CSS assumes that every font has font metrics that specify a
/// characteristic height above the baseline and a depth below it."
///
/// The average advance of Latin glyphs in a proportional face is close to
/// 0.6× the font size, so every character is measured at that width.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontMetrics;

impl FontMetrics for ApproximateFontMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        const CHAR_WIDTH_RATIO: f32 = 0.6;
        text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximate_width_scales_with_chars_and_size() {
        let metrics = ApproximateFontMetrics;
        assert!((metrics.text_width("abcde", 10.0) - 30.0).abs() < 1e-4);
        assert!(metrics.text_width("", 16.0).abs() < f32::EPSILON);
    }
}
