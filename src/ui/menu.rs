use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Palette;
use crate::game::GameOverSummary;

/// Draws the game-over screen as a centered popup over the playfield.
pub fn render_game_over(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: &GameOverSummary,
    palette: &Palette,
) {
    let popup = centered_popup(area, 80, 60);
    frame.render_widget(Clear, popup);

    let mut lines = Vec::new();
    if summary.broke_record {
        lines.push(Line::from("Wow! You broke your record!").style(
            Style::new()
                .fg(palette.banner_fg)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(format!("High score: {}", summary.highscore)));
    lines.push(Line::from(format!("Score: {}", summary.score)));
    lines.push(Line::from(""));
    lines.push(Line::from("Press Enter to play again!"));
    lines.push(Line::from("Press ESC to exit"));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(palette.banner_fg).bg(palette.field_bg))
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
