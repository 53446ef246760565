use crate::column::ColumnSpec;
use crate::error::{InvalidRange, check_non_negative};

pub const DEFAULT_MIN_COLUMN_WIDTH: f64 = 20.0;
pub const DEFAULT_MAX_COLUMN_WIDTH: f64 = f64::INFINITY;

/// Grid-level width defaults, inherited by every column without an explicit bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDefaults {
    min_column_width: f64,
    max_column_width: f64,
    star_max_width: Option<f64>,
}

impl GridDefaults {
    pub fn new(min_column_width: f64, max_column_width: f64) -> Result<Self, InvalidRange> {
        check_bounds(min_column_width, max_column_width)?;
        Ok(Self {
            min_column_width,
            max_column_width,
            star_max_width: None,
        })
    }

    /// Caps star columns that have no explicit max, on top of the grid max.
    pub fn with_star_max_width(mut self, star_max: Option<f64>) -> Result<Self, InvalidRange> {
        if let Some(cap) = star_max {
            check_non_negative(cap)?;
        }
        self.star_max_width = star_max;
        Ok(self)
    }

    pub fn min_column_width(&self) -> f64 {
        self.min_column_width
    }

    pub fn max_column_width(&self) -> f64 {
        self.max_column_width
    }

    pub fn star_max_width(&self) -> Option<f64> {
        self.star_max_width
    }

    pub fn with_min_column_width(self, min: f64) -> Result<Self, InvalidRange> {
        check_bounds(min, self.max_column_width)?;
        Ok(Self {
            min_column_width: min,
            ..self
        })
    }

    pub fn with_max_column_width(self, max: f64) -> Result<Self, InvalidRange> {
        check_bounds(self.min_column_width, max)?;
        Ok(Self {
            max_column_width: max,
            ..self
        })
    }
}

impl Default for GridDefaults {
    fn default() -> Self {
        Self {
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            star_max_width: None,
        }
    }
}

fn check_bounds(min: f64, max: f64) -> Result<(), InvalidRange> {
    check_non_negative(min)?;
    if min.is_infinite() {
        return Err(InvalidRange::Infinite);
    }
    check_non_negative(max)?;
    if min > max {
        return Err(InvalidRange::Inverted { min, max });
    }
    Ok(())
}

/// Closed interval a column's width must land in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthBounds {
    pub min: f64,
    pub max: f64,
}

impl WidthBounds {
    /// Builds bounds where the floor wins a collision: `max` is raised to `min`.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    pub fn is_below(&self, value: f64) -> bool {
        value < self.min
    }

    pub fn is_above(&self, value: f64) -> bool {
        value > self.max
    }

    /// True for a finite value inside the interval. NaN and infinities never
    /// count as a valid width, even against an unbounded max.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && !self.is_below(value) && !self.is_above(value)
    }
}

/// Immutable snapshot of everything besides the columns that width
/// resolution reads. Rebuilt for every resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    viewport_width: f64,
    defaults: GridDefaults,
}

impl LayoutContext {
    pub fn new(
        viewport_width: f64,
        global_min_column_width: f64,
        global_max_column_width: f64,
    ) -> Result<Self, InvalidRange> {
        let defaults = GridDefaults::new(global_min_column_width, global_max_column_width)?;
        Self::from_defaults(viewport_width, defaults)
    }

    pub fn from_defaults(viewport_width: f64, defaults: GridDefaults) -> Result<Self, InvalidRange> {
        check_non_negative(viewport_width)?;
        if viewport_width.is_infinite() {
            return Err(InvalidRange::Infinite);
        }
        Ok(Self {
            viewport_width,
            defaults,
        })
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    pub fn global_min_column_width(&self) -> f64 {
        self.defaults.min_column_width
    }

    pub fn global_max_column_width(&self) -> f64 {
        self.defaults.max_column_width
    }

    pub fn defaults(&self) -> GridDefaults {
        self.defaults
    }

    /// Explicit per-column min if set, otherwise the grid default.
    pub fn effective_min(&self, column: &ColumnSpec) -> f64 {
        column
            .min_width()
            .unwrap_or(self.defaults.min_column_width)
    }

    /// Explicit per-column max if set, otherwise the grid default, further
    /// capped by the star default for star columns.
    pub fn effective_max(&self, column: &ColumnSpec) -> f64 {
        match column.max_width() {
            Some(max) => max,
            None => match self.defaults.star_max_width {
                Some(cap) if column.width().is_star() => cap.min(self.defaults.max_column_width),
                _ => self.defaults.max_column_width,
            },
        }
    }

    pub fn effective_bounds(&self, column: &ColumnSpec) -> WidthBounds {
        WidthBounds::new(self.effective_min(column), self.effective_max(column))
    }
}
