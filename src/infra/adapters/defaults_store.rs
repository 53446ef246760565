use std::fs;
use std::path::PathBuf;

use colfit_app::ports::{GridDefaultsError, GridDefaultsSource};
use colfit_domain::GridDefaults;

use crate::config::grid_config::{CURRENT_VERSION, GridConfigFile};

const CONFIG_FILE_NAME: &str = "grid.toml";

pub struct TomlGridDefaultsStore {
    config_dir: PathBuf,
}

impl TomlGridDefaultsStore {
    pub fn new() -> Result<Self, GridDefaultsError> {
        let config_dir = get_config_dir()?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

impl GridDefaultsSource for TomlGridDefaultsStore {
    fn load(&self) -> Result<GridDefaults, GridDefaultsError> {
        let path = self.config_file_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no grid config, using built-in defaults");
            return Ok(GridDefaults::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| GridDefaultsError::ReadError(e.to_string()))?;

        let config: GridConfigFile = toml::from_str(&content)
            .map_err(|e| GridDefaultsError::InvalidFormat(e.to_string()))?;

        if config.version != CURRENT_VERSION {
            return Err(GridDefaultsError::VersionMismatch {
                found: config.version,
                expected: CURRENT_VERSION,
            });
        }

        let defaults = config.to_defaults()?;
        tracing::debug!(path = %path.display(), ?defaults, "loaded grid defaults");
        Ok(defaults)
    }

    fn save(&self, defaults: &GridDefaults) -> Result<(), GridDefaultsError> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| GridDefaultsError::IoError(e.to_string()))?;
        }

        let config = GridConfigFile::from_defaults(defaults);
        let content = toml::to_string_pretty(&config)
            .map_err(|e| GridDefaultsError::WriteError(e.to_string()))?;

        let content_with_header = format!(
            "# colfit grid defaults\n# Widths are in pixels. Omit max_column_width for no upper bound.\n\n{}",
            content
        );

        fs::write(self.config_file_path(), content_with_header)
            .map_err(|e| GridDefaultsError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        self.config_file_path()
    }
}

fn get_config_dir() -> Result<PathBuf, GridDefaultsError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| GridDefaultsError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join("colfit"))
}
