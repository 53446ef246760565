//! Host-side owner of the column store, layout context and scheduler.

use colfit_domain::{
    ColumnId, ColumnSpec, ColumnWidth, GridDefaults, LayoutContext, ResolvedLayout, Visibility,
};

use crate::column_store::ColumnStore;
use crate::error::GridError;
use crate::ports::{ContentMeasurer, GridDefaultsError, GridDefaultsSource};
use crate::resolve::resolve;
use crate::scheduler::{InvalidationReason, LayoutScheduler, SchedulerStats};

/// A grid's columns plus everything needed to lay them out.
///
/// Every successful mutation invalidates; [`GridLayout::layout_pass`] resolves
/// at most once per call and publishes the result back onto the columns.
#[derive(Debug, Clone)]
pub struct GridLayout {
    columns: ColumnStore,
    context: LayoutContext,
    scheduler: LayoutScheduler,
    layout: ResolvedLayout,
}

impl GridLayout {
    pub fn new(viewport_width: f64) -> Result<Self, GridError> {
        Self::with_defaults(viewport_width, GridDefaults::default())
    }

    pub fn with_defaults(viewport_width: f64, defaults: GridDefaults) -> Result<Self, GridError> {
        Ok(Self {
            columns: ColumnStore::new(),
            context: LayoutContext::from_defaults(viewport_width, defaults)?,
            scheduler: LayoutScheduler::new(),
            layout: ResolvedLayout::default(),
        })
    }

    pub fn from_source(
        viewport_width: f64,
        source: &dyn GridDefaultsSource,
    ) -> Result<Self, GridDefaultsError> {
        let defaults = source.load()?;
        let context = LayoutContext::from_defaults(viewport_width, defaults)?;
        Ok(Self {
            columns: ColumnStore::new(),
            context,
            scheduler: LayoutScheduler::new(),
            layout: ResolvedLayout::default(),
        })
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        self.columns.columns()
    }

    pub fn column(&self, id: &ColumnId) -> Option<&ColumnSpec> {
        self.columns.get(id)
    }

    pub fn context(&self) -> &LayoutContext {
        &self.context
    }

    pub fn viewport_width(&self) -> f64 {
        self.context.viewport_width()
    }

    pub fn defaults(&self) -> GridDefaults {
        self.context.defaults()
    }

    pub fn add_column(&mut self, column: ColumnSpec) -> Result<(), GridError> {
        self.columns.add(column)?;
        self.scheduler.invalidate(InvalidationReason::ColumnAdded);
        Ok(())
    }

    /// Appends an unnamed column and returns the id it was given.
    pub fn push_column(&mut self, width: ColumnWidth) -> Result<ColumnId, GridError> {
        let column = ColumnSpec::with_generated_id(width);
        let id = column.id().clone();
        self.add_column(column)?;
        Ok(id)
    }

    pub fn insert_column(
        &mut self,
        display_index: usize,
        column: ColumnSpec,
    ) -> Result<(), GridError> {
        self.columns.insert(display_index, column)?;
        self.scheduler.invalidate(InvalidationReason::ColumnAdded);
        Ok(())
    }

    pub fn remove_column(&mut self, id: &ColumnId) -> Result<ColumnSpec, GridError> {
        let removed = self.columns.remove(id)?;
        self.scheduler.invalidate(InvalidationReason::ColumnRemoved);
        Ok(removed)
    }

    pub fn move_column(&mut self, id: &ColumnId, display_index: usize) -> Result<(), GridError> {
        if self.columns.move_to(id, display_index)? {
            self.scheduler.invalidate(InvalidationReason::ColumnMoved);
        }
        Ok(())
    }

    pub fn set_width(&mut self, id: &ColumnId, width: ColumnWidth) -> Result<(), GridError> {
        self.columns.set_width(id, width)?;
        self.scheduler.invalidate(InvalidationReason::WidthChanged);
        Ok(())
    }

    pub fn set_min_width(&mut self, id: &ColumnId, min: Option<f64>) -> Result<(), GridError> {
        self.columns.set_min_width(id, min)?;
        self.scheduler.invalidate(InvalidationReason::MinWidthChanged);
        Ok(())
    }

    pub fn set_max_width(&mut self, id: &ColumnId, max: Option<f64>) -> Result<(), GridError> {
        self.columns.set_max_width(id, max)?;
        self.scheduler.invalidate(InvalidationReason::MaxWidthChanged);
        Ok(())
    }

    pub fn set_measured_sizes(
        &mut self,
        id: &ColumnId,
        cell: f64,
        header: f64,
    ) -> Result<(), GridError> {
        self.columns.set_measured_sizes(id, cell, header)?;
        self.scheduler.invalidate(InvalidationReason::ContentMeasured);
        Ok(())
    }

    pub fn set_visibility(
        &mut self,
        id: &ColumnId,
        visibility: Visibility,
    ) -> Result<(), GridError> {
        if self.columns.set_visibility(id, visibility)? {
            self.scheduler.invalidate(InvalidationReason::VisibilityChanged);
        }
        Ok(())
    }

    /// Re-measures one column's content through `measurer`.
    pub fn measure_column(
        &mut self,
        id: &ColumnId,
        measurer: &dyn ContentMeasurer,
        header: &str,
        cells: &[&str],
    ) -> Result<(), GridError> {
        if self.columns.get(id).is_none() {
            return Err(GridError::ColumnNotFound(id.clone()));
        }
        let sizes = measurer.measure(header, cells);
        self.set_measured_sizes(id, sizes.cell, sizes.header)
    }

    pub fn set_viewport_width(&mut self, viewport_width: f64) -> Result<(), GridError> {
        if viewport_width == self.context.viewport_width() {
            return Ok(());
        }
        self.context = LayoutContext::from_defaults(viewport_width, self.context.defaults())?;
        self.scheduler.invalidate(InvalidationReason::ViewportResized);
        Ok(())
    }

    pub fn set_defaults(&mut self, defaults: GridDefaults) -> Result<(), GridError> {
        if defaults == self.context.defaults() {
            return Ok(());
        }
        self.context = LayoutContext::from_defaults(self.context.viewport_width(), defaults)?;
        self.scheduler.invalidate(InvalidationReason::GridDefaultsChanged);
        Ok(())
    }

    pub fn set_global_min_column_width(&mut self, min: f64) -> Result<(), GridError> {
        let defaults = self.context.defaults().with_min_column_width(min)?;
        self.set_defaults(defaults)
    }

    pub fn set_global_max_column_width(&mut self, max: f64) -> Result<(), GridError> {
        let defaults = self.context.defaults().with_max_column_width(max)?;
        self.set_defaults(defaults)
    }

    pub fn is_dirty(&self) -> bool {
        self.scheduler.is_dirty()
    }

    pub fn pending_invalidations(&self) -> &[InvalidationReason] {
        self.scheduler.pending()
    }

    pub fn scheduler_stats(&self) -> SchedulerStats {
        self.scheduler.stats()
    }

    /// Resolves if anything changed since the last pass, publishes the widths
    /// onto the columns and returns the current layout.
    pub fn layout_pass(&mut self) -> &ResolvedLayout {
        let columns = self.columns.columns();
        let context = &self.context;
        if let Some(layout) = self.scheduler.run_pass(|| resolve(columns, context)) {
            self.columns.publish(&layout);
            self.layout = layout;
        }
        &self.layout
    }

    /// Layout published by the most recent pass, possibly stale.
    pub fn layout(&self) -> &ResolvedLayout {
        &self.layout
    }
}
