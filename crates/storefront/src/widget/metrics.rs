//! Text measurement used by widget layout and hit testing.

/// Measures rendered text.
///
/// Hosts with a real text shaper implement this so layout matches what
/// they draw.
pub trait TextMetrics: Send + Sync {
    /// Width of `text` laid out on a single line at `font_size` pixels.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Measures every character as a fixed fraction of the font size.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMetrics {
    /// Advance per character, as a multiple of the font size.
    pub advance_ratio: f32,
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self { advance_ratio: 0.6 }
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.advance_ratio
    }
}
