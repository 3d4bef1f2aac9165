use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use ratatui::symbols::border;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
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

    /// Iterates over every valid cell, row by row.
    pub fn all_cells(self) -> impl Iterator<Item = crate::snake::Position> {
        let (width, height) = (i32::from(self.width), i32::from(self.height));
        (0..height).flat_map(move |y| (0..width).map(move |x| crate::snake::Position { x, y }))
    }

    /// Returns the center cell, rounded toward the lower coordinate on
    /// even dimensions. Snakes start here.
    #[must_use]
    pub fn center(self) -> crate::snake::Position {
        crate::snake::Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 32;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Starting simulation speed in ticks per second.
pub const INITIAL_SPEED: u32 = 10;

/// Lowest speed reachable with `-`.
pub const MIN_SPEED: u32 = 5;

/// Highest speed reachable with `+`.
pub const MAX_SPEED: u32 = 20;

/// Input polling cadence while the simulation is paused, in milliseconds.
/// Keeps unpause and quit responsive without spinning.
pub const PAUSE_POLL_INTERVAL_MS: u64 = 100;

const APP_DIR_NAME: &str = "torus-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Startup settings, fixed for the process lifetime once loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_width: u16,
    pub grid_height: u16,
    pub initial_speed: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            initial_speed: INITIAL_SPEED,
        }
    }
}

/// Failure to read or parse the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Read(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Settings {
    /// Returns the platform-correct settings file path.
    #[must_use]
    pub fn path() -> PathBuf {
        let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.push(APP_DIR_NAME);
        base.push(SETTINGS_FILE_NAME);
        base
    }

    /// Loads settings from the platform config directory.
    ///
    /// A missing file yields defaults (first run). A file that exists but
    /// cannot be read or parsed is an error, so the caller can surface a
    /// warning before entering raw terminal mode.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from_path(&Self::path())
    }

    fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        let settings: Self = serde_json::from_str(&raw)?;
        Ok(settings.clamped())
    }

    /// Returns the grid dimensions as a `GridSize`.
    #[must_use]
    pub fn grid(self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    fn clamped(mut self) -> Self {
        self.grid_width = self.grid_width.max(2);
        self.grid_height = self.grid_height.max(2);
        self.initial_speed = self.initial_speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }
}

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Solid block color for the snake head.
    pub snake_head: Color,
    /// Solid block color for body segments.
    pub snake_body: Color,
    /// Solid block color for food.
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_fg: Color,
    pub hud_paused: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    border_fg: Color::Cyan,
    border_bg: Color::Black,
    hud_fg: Color::White,
    hud_paused: Color::Yellow,
};

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left/right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Glyph for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph for the snake head.
pub const GLYPH_SNAKE_HEAD: &str = "█";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "●";
