//! Ordered collection of column specs.
//!
//! Columns are stored in display order and their `display_index` is kept
//! dense (`0..len`) after every structural change.

use colfit_domain::{ColumnId, ColumnSpec, ColumnWidth, ResolvedLayout, Visibility};

use crate::error::GridError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnStore {
    columns: Vec<ColumnSpec>,
}

impl ColumnStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from columns already in display order.
    pub fn from_columns(columns: Vec<ColumnSpec>) -> Result<Self, GridError> {
        let mut store = Self::new();
        for column in columns {
            store.add(column)?;
        }
        Ok(store)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, id: &ColumnId) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.id() == id)
    }

    pub fn position(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &ColumnId> {
        self.columns.iter().map(|c| c.id())
    }

    /// Appends a column at the end of the display order.
    pub fn add(&mut self, column: ColumnSpec) -> Result<(), GridError> {
        self.insert(self.columns.len(), column)
    }

    /// Inserts at `display_index`; indices past the end append.
    pub fn insert(&mut self, display_index: usize, column: ColumnSpec) -> Result<(), GridError> {
        if self.position(column.id()).is_some() {
            return Err(GridError::DuplicateColumn(column.id().clone()));
        }
        let at = display_index.min(self.columns.len());
        self.columns.insert(at, column);
        self.renumber();
        Ok(())
    }

    pub fn remove(&mut self, id: &ColumnId) -> Result<ColumnSpec, GridError> {
        let at = self.require(id)?;
        let removed = self.columns.remove(at);
        self.renumber();
        Ok(removed)
    }

    /// Moves a column to `display_index`, clamped to the last slot.
    /// Returns whether the order changed.
    pub fn move_to(&mut self, id: &ColumnId, display_index: usize) -> Result<bool, GridError> {
        let from = self.require(id)?;
        let to = display_index.min(self.columns.len() - 1);
        if from == to {
            return Ok(false);
        }
        let column = self.columns.remove(from);
        self.columns.insert(to, column);
        self.renumber();
        Ok(true)
    }

    pub fn set_width(&mut self, id: &ColumnId, width: ColumnWidth) -> Result<(), GridError> {
        self.require_mut(id)?.set_width(width)?;
        Ok(())
    }

    pub fn set_min_width(&mut self, id: &ColumnId, min: Option<f64>) -> Result<(), GridError> {
        self.require_mut(id)?.set_min_width(min)?;
        Ok(())
    }

    pub fn set_max_width(&mut self, id: &ColumnId, max: Option<f64>) -> Result<(), GridError> {
        self.require_mut(id)?.set_max_width(max)?;
        Ok(())
    }

    pub fn set_measured_sizes(
        &mut self,
        id: &ColumnId,
        cell: f64,
        header: f64,
    ) -> Result<(), GridError> {
        self.require_mut(id)?.set_measured_sizes(cell, header);
        Ok(())
    }

    /// Returns whether the visibility actually changed.
    pub fn set_visibility(
        &mut self,
        id: &ColumnId,
        visibility: Visibility,
    ) -> Result<bool, GridError> {
        let column = self.require_mut(id)?;
        if column.visibility == visibility {
            return Ok(false);
        }
        column.visibility = visibility;
        Ok(true)
    }

    /// Writes resolved widths back onto the matching columns.
    pub fn publish(&mut self, layout: &ResolvedLayout) {
        for resolved in &layout.columns {
            if let Some(column) = self.columns.iter_mut().find(|c| c.id() == &resolved.id) {
                column.publish(resolved);
            }
        }
    }

    fn require(&self, id: &ColumnId) -> Result<usize, GridError> {
        self.position(id)
            .ok_or_else(|| GridError::ColumnNotFound(id.clone()))
    }

    fn require_mut(&mut self, id: &ColumnId) -> Result<&mut ColumnSpec, GridError> {
        self.columns
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| GridError::ColumnNotFound(id.clone()))
    }

    fn renumber(&mut self) {
        for (index, column) in self.columns.iter_mut().enumerate() {
            column.display_index = index;
        }
    }
}
