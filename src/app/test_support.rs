//! In-memory port implementations for tests.

use std::path::PathBuf;
use std::sync::Mutex;

use colfit_domain::{GridDefaults, MeasuredSizes};

use crate::ports::{ContentMeasurer, GridDefaultsError, GridDefaultsSource};

/// Measures one fixed width per character.
#[derive(Debug, Clone, Copy)]
pub struct CharCountMeasurer {
    px_per_char: f64,
}

impl CharCountMeasurer {
    pub fn new(px_per_char: f64) -> Self {
        Self { px_per_char }
    }

    fn width_of(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.px_per_char
    }
}

impl ContentMeasurer for CharCountMeasurer {
    fn measure(&self, header: &str, cells: &[&str]) -> MeasuredSizes {
        let cell = cells
            .iter()
            .map(|c| self.width_of(c))
            .fold(0.0, f64::max);
        MeasuredSizes::new(cell, self.width_of(header))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryDefaults {
    stored: Mutex<Option<GridDefaults>>,
}

impl InMemoryDefaults {
    pub fn new(defaults: GridDefaults) -> Self {
        Self {
            stored: Mutex::new(Some(defaults)),
        }
    }
}

impl GridDefaultsSource for InMemoryDefaults {
    fn load(&self) -> Result<GridDefaults, GridDefaultsError> {
        let stored = self
            .stored
            .lock()
            .map_err(|e| GridDefaultsError::ReadError(e.to_string()))?;
        Ok(stored.unwrap_or_default())
    }

    fn save(&self, defaults: &GridDefaults) -> Result<(), GridDefaultsError> {
        let mut stored = self
            .stored
            .lock()
            .map_err(|e| GridDefaultsError::WriteError(e.to_string()))?;
        *stored = Some(*defaults);
        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        PathBuf::from("memory://grid.toml")
    }
}
