//! Outbound interfaces the engine pushes state into.

use crate::config::GridSize;
use crate::food::Food;
use crate::game::{GameOverReason, GameStatus};
use crate::snake::Snake;

/// Read-only snapshot handed to a [`RenderSink`].
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub grid: GridSize,
    pub snake: &'a Snake,
    pub food: &'a Food,
    pub status: GameStatus,
    pub game_over_reason: Option<GameOverReason>,
}

/// Receives the board after every state change.
pub trait RenderSink {
    fn draw(&mut self, view: BoardView<'_>);

    /// Shows or hides the restart affordance.
    fn set_restart_visible(&mut self, visible: bool);
}

/// Receives current and best score whenever either changes.
pub trait ScoreDisplay {
    fn show_scores(&mut self, score: u32, best: u32);

    /// Called once when a session (first or restarted) begins, with the best
    /// score standing at that moment.
    fn session_started(&mut self, _best: u32) {}
}
