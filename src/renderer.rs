use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::GridSize;
use crate::engine::{GameEngine, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::theme::{
    Theme, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_IDLE,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
};
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Renders the full game frame from the engine's query surface.
pub fn render(frame: &mut Frame<'_>, engine: &GameEngine, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, engine, theme);
    let field = field_rect(play_area, engine.grid());

    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));
    let inner = block.inner(field);
    frame.render_widget(block, field);

    render_food(frame, inner, engine, theme);
    render_snake(frame, inner, engine, theme);

    match engine.status() {
        GameStatus::Idle => render_start_menu(frame, play_area, theme),
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            engine.score(),
            engine.death_reason(),
            theme,
        ),
        GameStatus::Victory => render_victory_menu(frame, play_area, engine.score(), theme),
        GameStatus::Running => {}
    }
}

/// Sizes the bordered field to the grid, clipped to the available area.
fn field_rect(area: Rect, grid: GridSize) -> Rect {
    Rect {
        x: area.x,
        y: area.y,
        width: area.width.min(grid.width.saturating_add(2)),
        height: area.height.min(grid.height.saturating_add(2)),
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, engine: &GameEngine, theme: &Theme) {
    let Some(food) = engine.food() else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, engine.grid(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, engine: &GameEngine, theme: &Theme) {
    let cells: Vec<Position> = engine.snake_cells().copied().collect();
    let Some(&head) = cells.first() else {
        return;
    };
    let tail = cells.last().copied();

    let buffer = frame.buffer_mut();
    for (index, cell) in cells.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, engine.grid(), *cell) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(engine.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
            continue;
        }

        if cells.len() > 1 && Some(*cell) == tail && *cell != head {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
            continue;
        }

        buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
    }
}

fn head_glyph(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::Up) => GLYPH_SNAKE_HEAD_UP,
        Some(Direction::Down) => GLYPH_SNAKE_HEAD_DOWN,
        Some(Direction::Left) => GLYPH_SNAKE_HEAD_LEFT,
        Some(Direction::Right) => GLYPH_SNAKE_HEAD_RIGHT,
        None => GLYPH_SNAKE_HEAD_IDLE,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::Position;
    use crate::theme::{GLYPH_SNAKE_HEAD_IDLE, GLYPH_SNAKE_HEAD_UP};

    use super::{field_rect, head_glyph, logical_to_terminal};

    #[test]
    fn logical_to_terminal_offsets_by_the_inner_origin() {
        let inner = Rect {
            x: 2,
            y: 3,
            width: 10,
            height: 10,
        };
        let bounds = GridSize {
            width: 10,
            height: 10,
        };

        let mapped = logical_to_terminal(inner, bounds, Position { x: 1, y: 4 });

        assert_eq!(mapped, Some((3, 7)));
    }

    #[test]
    fn out_of_bounds_positions_are_not_mapped() {
        let inner = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 5,
        };
        let bounds = GridSize {
            width: 5,
            height: 5,
        };

        assert_eq!(logical_to_terminal(inner, bounds, Position { x: -1, y: 0 }), None);
        assert_eq!(logical_to_terminal(inner, bounds, Position { x: 5, y: 0 }), None);
    }

    #[test]
    fn positions_outside_a_cramped_terminal_are_clipped() {
        let inner = Rect {
            x: 0,
            y: 0,
            width: 3,
            height: 3,
        };
        let bounds = GridSize {
            width: 10,
            height: 10,
        };

        assert_eq!(logical_to_terminal(inner, bounds, Position { x: 4, y: 1 }), None);
    }

    #[test]
    fn field_is_grid_plus_border_clipped_to_the_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let grid = GridSize {
            width: 17,
            height: 17,
        };

        let field = field_rect(area, grid);
        assert_eq!((field.width, field.height), (19, 19));

        let cramped = field_rect(
            Rect {
                x: 0,
                y: 0,
                width: 10,
                height: 10,
            },
            grid,
        );
        assert_eq!((cramped.width, cramped.height), (10, 10));
    }

    #[test]
    fn head_glyph_tracks_direction() {
        assert_eq!(head_glyph(Some(Direction::Up)), GLYPH_SNAKE_HEAD_UP);
        assert_eq!(head_glyph(None), GLYPH_SNAKE_HEAD_IDLE);
    }
}
