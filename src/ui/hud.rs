use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::engine::{GameEngine, GameStatus};
use crate::theme::Theme;

/// Renders the one-line HUD at the bottom and returns the remaining
/// play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, engine: &GameEngine, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let line = Line::from(vec![
        Span::raw(format!("Score {}", engine.score())),
        Span::raw("  "),
        Span::raw(format!("Length {}", engine.snake_len())),
        Span::raw("  "),
        Span::raw(format!("Tick {} ms", engine.speed_ms())),
        Span::raw("  "),
        Span::raw(status_label(engine.status())),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::new().fg(theme.hud_fg)),
        hud_area,
    );

    play_area
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "idle",
        GameStatus::Running => "running",
        GameStatus::Paused => "paused",
        GameStatus::GameOver => "game over",
        GameStatus::Victory => "victory",
    }
}
