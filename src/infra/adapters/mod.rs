pub mod defaults_store;

pub use defaults_store::TomlGridDefaultsStore;
