use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default grid height in cells.
pub const DEFAULT_GRID_ROWS: u16 = 17;

/// Default grid width in cells.
pub const DEFAULT_GRID_COLS: u16 = 17;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 70;

/// Minimum tick interval in milliseconds; eating food never drops the
/// interval below this.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Tick interval reduction per food eaten, in milliseconds.
pub const SPEEDUP_PER_FOOD_MS: u64 = 1;

/// How long the host waits for terminal events between frames.
pub const FRAME_POLL_INTERVAL_MS: u64 = 16;

/// Logical grid dimensions passed through the engine as a named type.
///
/// Replaces an anonymous `(u16, u16)` pair, making width vs. height
/// unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the center cell, the snake's spawn point.
    #[must_use]
    pub fn center(self) -> (i32, i32) {
        (i32::from(self.width / 2), i32::from(self.height / 2))
    }
}

/// Errors raised while building an engine configuration.
///
/// Construction is the only fallible stage; once an engine exists,
/// irregular conditions are state transitions, not errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: u16, rows: u16 },
    #[error("tick interval must be positive")]
    InvalidTickInterval,
    #[error("failed to read config file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine configuration accepted at construction.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Grid height in cells.
    pub rows: u16,
    /// Grid width in cells.
    pub cols: u16,
    /// Starting tick interval in milliseconds.
    pub initial_speed_ms: u64,
    /// When true, leaving the grid is lethal; when false, the snake
    /// wraps around to the opposite edge.
    pub die_from_walls: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            initial_speed_ms: DEFAULT_TICK_INTERVAL_MS,
            die_from_walls: true,
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from a JSON file. Missing fields fall back
    /// to their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates dimensions and timing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.initial_speed_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        Ok(())
    }

    /// Returns the grid dimensions as a [`GridSize`].
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.cols,
            height: self.rows,
        }
    }
}
