use crate::config::GridSize;
use crate::game::{GameOverReason, GameStatus};
use crate::sink::{BoardView, RenderSink, ScoreDisplay};
use crate::snake::Position;

/// Owned copy of the last state pushed by the engine.
///
/// The terminal binary repaints from this every frame, so the engine never
/// has to know about ratatui.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scene {
    pub grid: GridSize,
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub status: GameStatus,
    pub game_over_reason: Option<GameOverReason>,
    pub score: u32,
    pub best_score: u32,
    /// Best score as it stood when the current session began.
    pub session_start_best: u32,
    pub restart_visible: bool,
}

/// Render sink and score display backed by a [`Scene`].
#[derive(Debug, Clone)]
pub struct TerminalView {
    scene: Scene,
}

impl TerminalView {
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            scene: Scene {
                grid,
                snake: Vec::new(),
                food: None,
                status: GameStatus::Running,
                game_over_reason: None,
                score: 0,
                best_score: 0,
                session_start_best: 0,
                restart_visible: false,
            },
        }
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl RenderSink for TerminalView {
    fn draw(&mut self, view: BoardView<'_>) {
        self.scene.grid = view.grid;
        self.scene.snake.clear();
        self.scene.snake.extend(view.snake.segments().copied());
        self.scene.food = Some(view.food.position);
        self.scene.status = view.status;
        self.scene.game_over_reason = view.game_over_reason;
    }

    fn set_restart_visible(&mut self, visible: bool) {
        self.scene.restart_visible = visible;
    }
}

impl ScoreDisplay for TerminalView {
    fn show_scores(&mut self, score: u32, best: u32) {
        self.scene.score = score;
        self.scene.best_score = best;
    }

    fn session_started(&mut self, best: u32) {
        self.scene.session_start_best = best;
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{GameConfig, GridSize};
    use crate::food::{Food, RandomPlacement};
    use crate::game::{GameEngine, GameOverReason, GameStatus};
    use crate::input::Direction;
    use crate::score::MemoryStore;
    use crate::sink::{RenderSink, ScoreDisplay};
    use crate::snake::Position;

    use super::TerminalView;

    fn engine() -> GameEngine<TerminalView> {
        GameEngine::new(
            GameConfig::default(),
            TerminalView::new(GridSize::square(10)),
            Box::new(MemoryStore::with_best(4)),
            Box::new(RandomPlacement::seeded(21)),
        )
        .expect("default config is valid")
    }

    #[test]
    fn scene_mirrors_the_engine_board() {
        let mut engine = engine();
        engine.food = Food::new(Position::new(7, 7));
        let _ = engine.tick();

        let scene = engine.view().scene();
        assert_eq!(
            scene.snake,
            vec![
                Position::new(3, 0),
                Position::new(2, 0),
                Position::new(1, 0)
            ]
        );
        assert_eq!(scene.food, Some(Position::new(7, 7)));
        assert_eq!(scene.best_score, 4);
        assert_eq!(scene.session_start_best, 4);
        assert!(!scene.restart_visible);
    }

    #[test]
    fn game_over_shows_restart_and_reason() {
        let mut engine = engine();
        engine.request_direction(Direction::Up);
        let _ = engine.tick();

        let scene = engine.view().scene();
        assert!(scene.restart_visible);
        assert_eq!(scene.status, GameStatus::GameOver);
        assert_eq!(scene.game_over_reason, Some(GameOverReason::WallCollision));

        assert!(engine.restart());
        let scene = engine.view().scene();
        assert!(!scene.restart_visible);
        assert_eq!(scene.status, GameStatus::Running);
        assert_eq!(scene.game_over_reason, None);
        assert_eq!(scene.snake.first(), Some(&Position::new(2, 0)));
    }

    #[test]
    fn start_best_only_moves_when_a_session_starts() {
        let mut engine = GameEngine::new(
            GameConfig::default(),
            TerminalView::new(GridSize::square(10)),
            Box::new(MemoryStore::default()),
            Box::new(RandomPlacement::seeded(21)),
        )
        .expect("default config is valid");
        engine.food = Food::new(Position::new(3, 0));
        let _ = engine.tick();
        engine.request_direction(Direction::Up);
        let _ = engine.tick();

        let scene = engine.view().scene();
        assert_eq!(scene.best_score, 1);
        assert_eq!(scene.session_start_best, 0);

        assert!(engine.restart());
        assert_eq!(engine.view().scene().session_start_best, 1);
    }

    #[test]
    fn sink_call_order_does_not_touch_start_best() {
        let mut view = TerminalView::new(GridSize::square(10));
        view.session_started(5);

        view.set_restart_visible(true);
        view.show_scores(0, 5);
        view.set_restart_visible(false);
        view.show_scores(0, 9);

        assert_eq!(view.scene().session_start_best, 5);
        assert_eq!(view.scene().best_score, 9);
    }
}
