//! Calculator configuration
//!
//! Stored in `~/.config/tabcalc/config.yaml`. Every field is optional in the
//! file; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::display::LCD_WIDTH;

/// Narrowest display the layouts fit on (`START=` plus a usable field)
pub const MIN_LCD_WIDTH: u8 = 8;

/// Most fraction digits shown for a value
pub const MAX_PRECISION: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Digits after the decimal point in results and tables
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Positions moved by the table page keys
    #[serde(default = "default_table_page_step")]
    pub table_page_step: i32,

    /// Display width in cells
    #[serde(default = "default_lcd_width")]
    pub lcd_width: u8,
}

fn default_precision() -> usize {
    4
}

fn default_table_page_step() -> i32 {
    10
}

fn default_lcd_width() -> u8 {
    LCD_WIDTH
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            table_page_step: default_table_page_step(),
            lcd_width: default_lcd_width(),
        }
    }
}

impl CalcConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<CalcConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.validated()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with their defaults
    pub fn validated(mut self) -> Self {
        if self.lcd_width < MIN_LCD_WIDTH {
            tracing::warn!(
                "lcd_width {} is below the minimum of {}, using {}",
                self.lcd_width,
                MIN_LCD_WIDTH,
                default_lcd_width()
            );
            self.lcd_width = default_lcd_width();
        }
        if self.precision > MAX_PRECISION {
            tracing::warn!(
                "precision {} is above the maximum of {}, clamping",
                self.precision,
                MAX_PRECISION
            );
            self.precision = MAX_PRECISION;
        }
        if self.table_page_step <= 0 {
            tracing::warn!(
                "table_page_step {} must be positive, using {}",
                self.table_page_step,
                default_table_page_step()
            );
            self.table_page_step = default_table_page_step();
        }
        self
    }

    /// Save config to a file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
