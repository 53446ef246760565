mod id;
mod spec;
mod width;

pub use id::ColumnId;
pub use spec::{ColumnSpec, MeasuredSizes, Visibility};
pub use width::{ColumnWidth, DEFAULT_STAR_WEIGHT, WidthMode};
