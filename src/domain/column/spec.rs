use serde::{Deserialize, Serialize};

use super::id::ColumnId;
use super::width::ColumnWidth;
use crate::error::{InvalidRange, check_non_negative};
use crate::resolved::ResolvedColumn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    /// Takes no space and is skipped by width resolution.
    Collapsed,
}

/// Content sizes reported by a measure pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasuredSizes {
    pub cell: f64,
    pub header: f64,
}

impl MeasuredSizes {
    pub fn new(cell: f64, header: f64) -> Self {
        Self { cell, header }
    }
}

/// Sizing state of one grid column.
///
/// `min_width` / `max_width` are `None` while the column inherits the
/// grid-level default. All setters validate first and mutate only on success.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    id: ColumnId,
    width: ColumnWidth,
    min_width: Option<f64>,
    max_width: Option<f64>,
    measured: MeasuredSizes,
    resolved_width: f64,
    pub can_user_resize: bool,
    pub display_index: usize,
    pub is_frozen: bool,
    pub visibility: Visibility,
}

impl ColumnSpec {
    pub fn new(id: impl Into<ColumnId>, width: ColumnWidth) -> Self {
        Self {
            id: id.into(),
            width,
            min_width: None,
            max_width: None,
            measured: MeasuredSizes::default(),
            resolved_width: 0.0,
            can_user_resize: true,
            display_index: 0,
            is_frozen: false,
            visibility: Visibility::Visible,
        }
    }

    /// Column with a freshly generated id.
    pub fn with_generated_id(width: ColumnWidth) -> Self {
        Self::new(ColumnId::generate(), width)
    }

    pub fn with_min_width(mut self, min: f64) -> Result<Self, InvalidRange> {
        self.set_min_width(Some(min))?;
        Ok(self)
    }

    pub fn with_max_width(mut self, max: f64) -> Result<Self, InvalidRange> {
        self.set_max_width(Some(max))?;
        Ok(self)
    }

    pub fn with_measured(mut self, cell: f64, header: f64) -> Self {
        self.set_measured_sizes(cell, header);
        self
    }

    pub fn with_display_index(mut self, display_index: usize) -> Self {
        self.display_index = display_index;
        self
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn width(&self) -> ColumnWidth {
        self.width
    }

    pub fn min_width(&self) -> Option<f64> {
        self.min_width
    }

    pub fn max_width(&self) -> Option<f64> {
        self.max_width
    }

    pub fn measured(&self) -> MeasuredSizes {
        self.measured
    }

    pub fn desired_cell_width(&self) -> f64 {
        self.measured.cell
    }

    pub fn desired_header_width(&self) -> f64 {
        self.measured.header
    }

    /// Last width published by width resolution; 0 before the first pass.
    pub fn resolved_width(&self) -> f64 {
        self.resolved_width
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn set_width(&mut self, width: ColumnWidth) -> Result<(), InvalidRange> {
        // Re-run validation: struct literals bypass `ColumnWidth::new`.
        let width = ColumnWidth::new(width.mode, width.value)?;
        self.width = width;
        Ok(())
    }

    pub fn set_min_width(&mut self, min: Option<f64>) -> Result<(), InvalidRange> {
        if let Some(min) = min {
            check_non_negative(min)?;
            if min.is_infinite() {
                return Err(InvalidRange::Infinite);
            }
            if let Some(max) = self.max_width
                && min > max
            {
                return Err(InvalidRange::Inverted { min, max });
            }
        }
        self.min_width = min;
        Ok(())
    }

    pub fn set_max_width(&mut self, max: Option<f64>) -> Result<(), InvalidRange> {
        if let Some(max) = max {
            check_non_negative(max)?;
            if let Some(min) = self.min_width
                && max < min
            {
                return Err(InvalidRange::Inverted { min, max });
            }
        }
        self.max_width = max;
        Ok(())
    }

    /// Stores content sizes from a measure pass.
    ///
    /// The measuring collaborator guarantees finite, non-negative values.
    pub fn set_measured_sizes(&mut self, cell: f64, header: f64) {
        debug_assert!(
            cell.is_finite() && cell >= 0.0,
            "measured cell width must be finite and non-negative"
        );
        debug_assert!(
            header.is_finite() && header >= 0.0,
            "measured header width must be finite and non-negative"
        );
        self.measured = MeasuredSizes { cell, header };
    }

    /// Writes back the engine's result for this column. Ignores entries for
    /// other columns.
    pub fn publish(&mut self, resolved: &ResolvedColumn) {
        if resolved.id == self.id {
            self.resolved_width = resolved.width;
        }
    }
}
