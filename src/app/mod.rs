//! Column layout services: the resolution engine, the column store and the
//! invalidation scheduler, plus the ports the host plugs adapters into.

pub mod column_store;
pub mod error;
pub mod grid;
pub mod ports;
pub mod resolve;
pub mod scheduler;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use column_store::ColumnStore;
pub use error::GridError;
pub use grid::GridLayout;
pub use resolve::resolve;
pub use scheduler::{InvalidationReason, LayoutScheduler, LayoutState, SchedulerStats};
