use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Palette;
use crate::game::Game;
use crate::renderer::ViewState;

/// Renders the high-score and score rows above the playfield.
///
/// The high score sits on top, `\^o^/`-prefixed as a little victory arms
/// emote, with the live score below it. While the celebration window is
/// open the score row also carries the "New record!!!" banner; the window
/// check lives in [`Game::celebration_active`], so the banner cannot outlive
/// it no matter how often this renders.
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    game: &Game,
    view: &ViewState,
    palette: &Palette,
) {
    let [record_row, score_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let score_style = Style::new().fg(palette.score_fg);
    frame.render_widget(
        Paragraph::new(Line::from(format!("\\^o^/: {}", game.highscore()))).style(score_style),
        record_row,
    );

    let mut score_line = format!("Score: {}", game.score());
    if view.paused && view.game_over.is_none() {
        score_line.push_str("  [paused]");
    }

    let mut score_widget = Paragraph::new(Line::from(score_line)).style(score_style);
    if game.celebration_active(view.now) {
        score_widget = score_widget.style(
            Style::new()
                .fg(palette.banner_fg)
                .add_modifier(Modifier::BOLD),
        );
    }
    frame.render_widget(score_widget, score_row);

    if game.celebration_active(view.now) {
        render_record_banner(frame, score_row, palette);
    }
}

fn render_record_banner(frame: &mut Frame<'_>, row: Rect, palette: &Palette) {
    const BANNER: &str = "New record!!!";

    let x = row.x.saturating_add(row.width.saturating_sub(BANNER.len() as u16));
    frame.buffer_mut().set_string(
        x,
        row.y,
        BANNER,
        Style::new()
            .fg(palette.banner_fg)
            .add_modifier(Modifier::BOLD),
    );
}
