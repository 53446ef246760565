pub mod monospace;

pub use monospace::MonospaceMeasurer;
