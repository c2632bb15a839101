use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::PALETTE;
use crate::terminal_view::Scene;

/// Rows reserved below the board for the score line.
pub const HUD_HEIGHT: u16 = 1;

const SEPARATOR: &str = " │ ";

/// Renders the score line into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, scene: &Scene) {
    frame.render_widget(
        Paragraph::new(score_line(scene, usize::from(area.width)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(PALETTE.hud_muted)),
        area,
    );
}

/// Builds `Score: n │ Best: m │ Length: k`, falling back to one-letter
/// labels when the full line does not fit in `available_width` columns.
fn score_line(scene: &Scene, available_width: usize) -> Line<'static> {
    let full = [
        ("Score", scene.score),
        ("Best", scene.best_score),
        ("Length", distinct_len(scene)),
    ];
    let labels = if line_width(&full) > available_width {
        ["S", "B", "L"]
    } else {
        ["Score", "Best", "Length"]
    };

    let new_best = scene.score > scene.session_start_best;
    let value_style = Style::default().fg(PALETTE.hud_score);
    let best_style = if new_best {
        value_style.add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(PALETTE.hud_muted)
    };

    Line::from(vec![
        Span::raw(format!("{}: ", labels[0])),
        Span::styled(scene.score.to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{}: ", labels[1])),
        Span::styled(scene.best_score.to_string(), best_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{}: ", labels[2])),
        Span::styled(distinct_len(scene).to_string(), value_style),
    ])
}

// A freshly grown tail is stored twice; count it once.
fn distinct_len(scene: &Scene) -> u32 {
    let mut len = scene.snake.len();
    if len > 1 && scene.snake[len - 1] == scene.snake[len - 2] {
        len -= 1;
    }
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn line_width(items: &[(&str, u32)]) -> usize {
    let fields: usize = items
        .iter()
        .map(|(label, value)| format!("{label}: {value}").width())
        .sum();
    fields + SEPARATOR.width() * items.len().saturating_sub(1)
}
