use crate::column::ColumnId;

/// Tolerance used when comparing summed widths against the viewport.
pub const WIDTH_EPSILON: f64 = 1e-6;

/// Which side, if any, a column's pre-clamp width fell outside of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClampFlags {
    pub at_min: bool,
    pub at_max: bool,
}

impl ClampFlags {
    pub fn is_clamped(&self) -> bool {
        self.at_min || self.at_max
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumn {
    pub id: ColumnId,
    pub width: f64,
    pub star: bool,
    /// Collapsed columns are listed with width 0 so publishing covers every column.
    pub visible: bool,
    pub clamp: ClampFlags,
}

/// Result of one width resolution, columns listed in display order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedLayout {
    pub columns: Vec<ResolvedColumn>,
    pub viewport_width: f64,
    /// Sum of the non-star columns' widths.
    pub reserved: f64,
    /// Space handed to the star pool: `max(0, viewport - reserved)`.
    pub remaining: f64,
    pub total_width: f64,
}

impl ResolvedLayout {
    pub fn get(&self, id: &ColumnId) -> Option<&ResolvedColumn> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn width_of(&self, id: &ColumnId) -> Option<f64> {
        self.get(id).map(|c| c.width)
    }

    pub fn widths(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.width).collect()
    }

    pub fn star_total(&self) -> f64 {
        self.columns
            .iter()
            .filter(|c| c.star && c.visible)
            .map(|c| c.width)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when the columns need more room than the viewport offers and the
    /// caller has to scroll horizontally.
    pub fn is_overflowing(&self) -> bool {
        self.total_width > self.viewport_width + WIDTH_EPSILON
    }

    pub fn overflow_amount(&self) -> f64 {
        (self.total_width - self.viewport_width).max(0.0)
    }

    pub fn any_clamped(&self) -> bool {
        self.columns.iter().any(|c| c.clamp.is_clamped())
    }
}
