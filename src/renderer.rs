use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GameConfig, Palette, CELL_COLUMNS, GLYPH_BLOCK, PALETTE_CLASSIC};
use crate::game::{Game, GameOverSummary};
use crate::snake::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over;

/// Per-frame presentation state owned by the control loop, not the game.
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub paused: bool,
    pub game_over: Option<GameOverSummary>,
    pub now: Instant,
}

/// Renders one full frame from immutable game state.
pub fn render(frame: &mut Frame<'_>, game: &Game, view: &ViewState) {
    let palette = &PALETTE_CLASSIC;
    let config = game.config();

    let field_width = u16::try_from(config.columns()).unwrap_or(u16::MAX) * CELL_COLUMNS + 2;
    let field_height = u16::try_from(config.rows()).unwrap_or(u16::MAX) + 2;

    let area = frame.area();
    let [hud_area, field_row] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(field_height)]).areas(area);
    let [field_area] = Layout::horizontal([Constraint::Length(field_width)]).areas(field_row);

    render_hud(frame, hud_area, game, view, palette);

    let field = Block::bordered().border_style(Style::new().fg(palette.border_fg));
    let inner = field.inner(field_area);
    frame.render_widget(field, field_area);
    frame.render_widget(Block::new().style(Style::new().bg(palette.field_bg)), inner);

    render_apple(frame, inner, game, palette);
    render_snake(frame, inner, game, palette);

    if let Some(summary) = &view.game_over {
        render_game_over(frame, field_area, summary, palette);
    }
}

fn render_apple(frame: &mut Frame<'_>, inner: Rect, game: &Game, palette: &Palette) {
    let Some((x, y)) = cell_to_terminal(inner, game.config(), game.apple.position) else {
        return;
    };

    frame.buffer_mut().set_string(
        x,
        y,
        GLYPH_BLOCK,
        Style::new().fg(palette.apple).bg(palette.field_bg),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &Game, palette: &Palette) {
    let buffer = frame.buffer_mut();
    for segment in game.snake.segments() {
        // Freshly grown segments sit off-board until the next step.
        let Some((x, y)) = cell_to_terminal(inner, game.config(), *segment) else {
            continue;
        };

        buffer.set_string(
            x,
            y,
            GLYPH_BLOCK,
            Style::new().fg(palette.snake).bg(palette.field_bg),
        );
    }
}

/// Maps a board cell, in pixels, to a terminal coordinate inside `inner`.
fn cell_to_terminal(inner: Rect, config: &GameConfig, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_inside(config.width, config.height) {
        return None;
    }

    let column = u16::try_from(cell.x / config.cell_size).ok()?;
    let row = u16::try_from(cell.y / config.cell_size).ok()?;

    let x = inner.x.saturating_add(column * CELL_COLUMNS);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
