use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{CELL_WIDTH, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, GridSize, PALETTE};
use crate::snake::Position;
use crate::terminal_view::Scene;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from the last scene pushed by the engine.
pub fn render(frame: &mut Frame<'_>, scene: &Scene) {
    let area = board_area(frame.area(), scene.grid);
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(area);

    let block = Block::bordered()
        .border_style(Style::new().fg(PALETTE.border_fg))
        .style(Style::new().bg(PALETTE.play_bg));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, scene);
    render_snake(frame, inner, scene);
    render_hud(frame, hud_area, scene);

    if scene.restart_visible {
        render_game_over_menu(frame, play_area, scene);
    }
}

/// Centers a box just large enough for the bordered grid plus the HUD.
fn board_area(area: Rect, grid: GridSize) -> Rect {
    let width = grid
        .width
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
        .min(area.width);
    let height = grid
        .height
        .saturating_add(2 + HUD_HEIGHT)
        .min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, scene: &Scene) {
    let Some(food) = scene.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, scene.grid, food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(PALETTE.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, scene: &Scene) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins when a grown tail overlaps itself.
    for (index, segment) in scene.snake.iter().enumerate().rev() {
        let Some((x, y)) = logical_to_terminal(inner, scene.grid, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(PALETTE.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(PALETTE.snake_body));
        }
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
