//! Pure data model for column width resolution: column sizing rules, the
//! per-resolve layout context and the resolved output.

pub mod column;
pub mod error;
pub mod layout;
pub mod resolved;

pub use column::{
    ColumnId, ColumnSpec, ColumnWidth, DEFAULT_STAR_WEIGHT, MeasuredSizes, Visibility, WidthMode,
};
pub use error::InvalidRange;
pub use layout::{
    DEFAULT_MAX_COLUMN_WIDTH, DEFAULT_MIN_COLUMN_WIDTH, GridDefaults, LayoutContext, WidthBounds,
};
pub use resolved::{ClampFlags, ResolvedColumn, ResolvedLayout, WIDTH_EPSILON};
