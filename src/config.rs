use std::time::Duration;

use ratatui::style::Color;

/// Immutable gameplay configuration, fixed at construction.
///
/// Replaces the module-level globals (cell size, window dimensions, speed
/// thresholds) that would otherwise leak into every entity; the controller
/// receives one copy and hands out what each collaborator needs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    /// Side length of one grid cell, in pixels. All entity coordinates are
    /// multiples of this while on the board.
    pub cell_size: i32,
    /// Playfield width in pixels.
    pub width: i32,
    /// Playfield height in pixels.
    pub height: i32,
    /// Snake length at game start and after every reset.
    pub start_length: usize,
    /// Snake length beyond which the tick delay stops shrinking.
    pub speed_floor_length: usize,
    /// How long the "New record!!!" banner stays on screen.
    pub celebration_window: Duration,
}

impl GameConfig {
    /// The classic 16×16 board: 640×640 pixels of 40-pixel cells.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            cell_size: 40,
            width: 640,
            height: 640,
            start_length: 1,
            speed_floor_length: 53,
            celebration_window: Duration::from_millis(2000),
        }
    }

    /// Number of cell columns on the board.
    #[must_use]
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows on the board.
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Colors applied to all visual elements.
///
/// Every entity renders as a solid colored block; the palette carries the
/// block color per entity plus the text colors for the HUD and overlays.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Background color of the playfield.
    pub field_bg: Color,
    /// Score and high-score text.
    pub score_fg: Color,
    /// "New record!!!" banner and game-over text.
    pub banner_fg: Color,
    /// Solid block color for snake segments.
    pub snake: Color,
    /// Solid block color for the apple.
    pub apple: Color,
    /// Playfield border.
    pub border_fg: Color,
}

/// Grass-green board with dark snake and red apple.
pub const PALETTE_CLASSIC: Palette = Palette {
    field_bg: Color::Rgb(109, 170, 45),
    score_fg: Color::Rgb(55, 112, 4),
    banner_fg: Color::Rgb(216, 245, 193),
    snake: Color::Rgb(30, 58, 10),
    apple: Color::Rgb(198, 40, 32),
    border_fg: Color::Rgb(55, 112, 4),
};

/// Terminal columns used to draw one grid cell (two keeps cells square-ish).
pub const CELL_COLUMNS: u16 = 2;

/// Solid two-column block, colored per entity by the palette.
pub const GLYPH_BLOCK: &str = "██";
