use unicode_width::UnicodeWidthStr;

use colfit_app::ports::ContentMeasurer;
use colfit_domain::MeasuredSizes;

pub const DEFAULT_CELL_PX: f64 = 8.0;
pub const DEFAULT_PADDING_PX: f64 = 8.0;

/// Measures text in a fixed-pitch font: terminal display columns times the
/// pixel width of one column, plus horizontal padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    cell_px: f64,
    padding_px: f64,
}

impl MonospaceMeasurer {
    /// Non-finite or negative inputs are treated as zero.
    pub fn new(cell_px: f64, padding_px: f64) -> Self {
        Self {
            cell_px: sanitize(cell_px),
            padding_px: sanitize(padding_px),
        }
    }

    pub fn text_width(&self, text: &str) -> f64 {
        // Multi-line content is as wide as its widest line.
        let columns = text.lines().map(|line| line.width()).max().unwrap_or(0);
        columns as f64 * self.cell_px + self.padding_px
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_PX, DEFAULT_PADDING_PX)
    }
}

impl ContentMeasurer for MonospaceMeasurer {
    fn measure(&self, header: &str, cells: &[&str]) -> MeasuredSizes {
        let cell = cells
            .iter()
            .map(|text| self.text_width(text))
            .fold(0.0, f64::max);
        MeasuredSizes::new(cell, self.text_width(header))
    }
}

fn sanitize(px: f64) -> f64 {
    if px.is_finite() && px > 0.0 { px } else { 0.0 }
}
