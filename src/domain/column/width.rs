use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidRange, check_non_negative};

pub const DEFAULT_STAR_WEIGHT: f64 = 1.0;

/// How a column's width is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthMode {
    /// Absolute width in pixels.
    Pixel,
    /// Widest of the measured cell and header content.
    Auto,
    /// Measured cell content only.
    SizeToCells,
    /// Measured header content only.
    SizeToHeader,
    /// Proportional share of the space left over by the other columns.
    #[default]
    Star,
}

impl WidthMode {
    pub fn is_star(self) -> bool {
        matches!(self, Self::Star)
    }
}

/// Sizing rule of one column: a mode plus its mode-dependent value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnWidth {
    pub mode: WidthMode,
    pub value: f64,
}

impl ColumnWidth {
    /// Validating constructor. Only `Pixel` values are checked; a star weight
    /// of zero or below is accepted and later treated as the default weight.
    pub fn new(mode: WidthMode, value: f64) -> Result<Self, InvalidRange> {
        if mode == WidthMode::Pixel {
            check_non_negative(value)?;
            if value.is_infinite() {
                return Err(InvalidRange::Infinite);
            }
        }
        Ok(Self { mode, value })
    }

    pub fn pixel(value: f64) -> Result<Self, InvalidRange> {
        Self::new(WidthMode::Pixel, value)
    }

    pub fn star(weight: f64) -> Self {
        Self {
            mode: WidthMode::Star,
            value: weight,
        }
    }

    pub fn auto() -> Self {
        Self {
            mode: WidthMode::Auto,
            value: 0.0,
        }
    }

    pub fn size_to_cells() -> Self {
        Self {
            mode: WidthMode::SizeToCells,
            value: 0.0,
        }
    }

    pub fn size_to_header() -> Self {
        Self {
            mode: WidthMode::SizeToHeader,
            value: 0.0,
        }
    }

    pub fn is_star(&self) -> bool {
        self.mode.is_star()
    }

    /// Weight used by star distribution. Non-positive or non-finite weights
    /// fall back to [`DEFAULT_STAR_WEIGHT`].
    pub fn star_weight(&self) -> f64 {
        if self.value.is_finite() && self.value > 0.0 {
            self.value
        } else {
            DEFAULT_STAR_WEIGHT
        }
    }
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::star(DEFAULT_STAR_WEIGHT)
    }
}

impl fmt::Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            WidthMode::Pixel => write!(f, "{}px", self.value),
            WidthMode::Auto => write!(f, "auto"),
            WidthMode::SizeToCells => write!(f, "cells"),
            WidthMode::SizeToHeader => write!(f, "header"),
            WidthMode::Star => {
                if self.star_weight() == DEFAULT_STAR_WEIGHT {
                    write!(f, "*")
                } else {
                    write!(f, "{}*", self.star_weight())
                }
            }
        }
    }
}
