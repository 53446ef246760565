//! Adapters for the layout ports: TOML-backed grid defaults and a
//! fixed-pitch content measurer.

pub mod adapters;
pub mod config;
pub mod measure;

pub use adapters::TomlGridDefaultsStore;
pub use measure::MonospaceMeasurer;
