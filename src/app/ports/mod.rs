pub mod content_measurer;
pub mod grid_defaults;

pub use content_measurer::ContentMeasurer;
pub use grid_defaults::{GridDefaultsError, GridDefaultsSource};
