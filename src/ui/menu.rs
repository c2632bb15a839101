use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::PALETTE;
use crate::game::GameOverReason;
use crate::terminal_view::Scene;

/// Draws the game-over popup carrying the restart affordance.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, scene: &Scene) {
    let popup = centered_popup(area, 90, 80);
    frame.render_widget(Clear, popup);

    frame.render_widget(
        Paragraph::new(game_over_lines(scene))
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn game_over_lines(scene: &Scene) -> Vec<Line<'static>> {
    let is_new_best = scene.score > scene.session_start_best;

    vec![
        Line::styled(
            "GAME OVER",
            Style::default()
                .fg(PALETTE.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("Score: {}", scene.score)),
        Line::from(format!("Best: {}", scene.best_score)),
        Line::from(cause_text(scene.game_over_reason)),
        Line::from(if is_new_best { "New best!" } else { "" }),
        Line::from("[Enter] Again"),
        Line::from("[Q] Quit"),
    ]
}

fn cause_text(reason: Option<GameOverReason>) -> &'static str {
    match reason {
        Some(GameOverReason::WallCollision) => "Hit the wall",
        Some(GameOverReason::SelfCollision) => "Hit yourself",
        Some(GameOverReason::BoardFilled) => "Board full!",
        Some(GameOverReason::InternalError) => "Internal error",
        None => "",
    }
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
