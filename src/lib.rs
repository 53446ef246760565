//! Column-width resolution for data grids.
//!
//! Columns are sized in pixels, from measured content, or as weighted shares
//! of the leftover space ("star" columns), all under per-column and
//! grid-wide min/max constraints. Start with [`GridLayout`] for a stateful
//! grid or call [`resolve`] directly on a column snapshot.

pub use colfit_app as app;
pub use colfit_domain as domain;
pub use colfit_infra as infra;

pub use colfit_app::{GridError, GridLayout, resolve};
pub use colfit_domain::{
    ColumnId, ColumnSpec, ColumnWidth, GridDefaults, LayoutContext, ResolvedLayout, Visibility,
    WidthMode,
};

use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG`. Does nothing if a global
/// subscriber is already set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
