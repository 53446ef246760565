use serde::{Deserialize, Serialize};

use colfit_domain::{DEFAULT_MAX_COLUMN_WIDTH, DEFAULT_MIN_COLUMN_WIDTH, GridDefaults, InvalidRange};

pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct GridConfigFile {
    pub version: u32,
    #[serde(default)]
    pub grid: GridSection,
}

/// `[grid]` table. Missing keys fall back to the built-in defaults.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_column_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_column_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_max_width: Option<f64>,
}

impl GridConfigFile {
    pub fn from_defaults(defaults: &GridDefaults) -> Self {
        let max = defaults.max_column_width();
        Self {
            version: CURRENT_VERSION,
            grid: GridSection {
                min_column_width: Some(defaults.min_column_width()),
                // An unbounded max is the default; leave it out of the file.
                max_column_width: max.is_finite().then_some(max),
                star_max_width: defaults.star_max_width(),
            },
        }
    }

    pub fn to_defaults(&self) -> Result<GridDefaults, InvalidRange> {
        GridDefaults::new(
            self.grid.min_column_width.unwrap_or(DEFAULT_MIN_COLUMN_WIDTH),
            self.grid.max_column_width.unwrap_or(DEFAULT_MAX_COLUMN_WIDTH),
        )?
        .with_star_max_width(self.grid.star_max_width)
    }
}
