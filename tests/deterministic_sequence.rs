use std::collections::HashSet;

use grid_snake::config::{GameConfig, GridSize};
use grid_snake::food::{Food, FoodPlacement, RandomPlacement};
use grid_snake::game::{GameEngine, GameOverReason, GameStatus, TickOutcome};
use grid_snake::input::Direction;
use grid_snake::score::MemoryStore;
use grid_snake::sink::{BoardView, RenderSink, ScoreDisplay};
use grid_snake::snake::{Position, Snake};

#[derive(Debug, Default)]
struct NullView;

impl RenderSink for NullView {
    fn draw(&mut self, _view: BoardView<'_>) {}

    fn set_restart_visible(&mut self, _visible: bool) {}
}

impl ScoreDisplay for NullView {
    fn show_scores(&mut self, _score: u32, _best: u32) {}
}

/// Places food at the bottom-right corner, away from the opening path.
struct CornerPlacement;

impl FoodPlacement for CornerPlacement {
    fn place(&mut self, grid: GridSize, occupied: &HashSet<Position>) -> Option<Position> {
        let corner = Position::new(i32::from(grid.width) - 1, i32::from(grid.height) - 1);
        (!occupied.contains(&corner)).then_some(corner)
    }
}

fn engine(placement: Box<dyn FoodPlacement>) -> GameEngine<NullView> {
    GameEngine::new(
        GameConfig::default(),
        NullView,
        Box::new(MemoryStore::default()),
        placement,
    )
    .expect("default config is valid")
}

#[test]
fn three_ticks_right_from_the_start() {
    let mut engine = engine(Box::new(CornerPlacement));

    for _ in 0..3 {
        assert_eq!(engine.tick(), TickOutcome::Moved);
    }

    assert_eq!(engine.snake.head(), Some(Position::new(5, 0)));
    assert_eq!(engine.snake.len(), 3);
    assert_eq!(engine.status(), GameStatus::Running);
}

#[test]
fn heads_advance_exactly_one_cell_per_tick() {
    let mut engine = engine(Box::new(RandomPlacement::seeded(5)));
    let turns = [
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Down,
    ];

    for turn in turns {
        let before = engine.snake.head().expect("snake has a head");
        engine.request_direction(turn);
        let outcome = engine.tick();
        // The path never revisits a cell or reaches an edge.
        assert!(
            matches!(outcome, TickOutcome::Moved | TickOutcome::AteFood),
            "unexpected {outcome:?} after turning {turn:?}"
        );

        let after = engine.snake.head().expect("snake has a head");
        assert_eq!(after, before.offset(engine.snake.direction()));
        assert!(!engine.snake.occupies(engine.food.position));
    }
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut engine = engine(Box::new(RandomPlacement::seeded(42)));
    engine.food = Food::new(Position::new(3, 0));

    assert_eq!(engine.tick(), TickOutcome::AteFood);
    assert_eq!(engine.score(), 1);
    assert!(!engine.snake.occupies(engine.food.position));

    engine.food = Food::new(Position::new(9, 9));
    engine.request_direction(Direction::Down);
    assert_eq!(engine.tick(), TickOutcome::Moved);
    assert_eq!(engine.snake.head(), Some(Position::new(3, 1)));
    assert_eq!(engine.snake.len(), 4);

    engine.request_direction(Direction::Left);
    for _ in 0..3 {
        assert_eq!(engine.tick(), TickOutcome::Moved);
    }
    assert_eq!(engine.snake.head(), Some(Position::new(0, 1)));

    assert_eq!(
        engine.tick(),
        TickOutcome::GameOver(GameOverReason::WallCollision)
    );
    assert_eq!(engine.best_score(), 1);
}

#[test]
fn looping_back_onto_the_body_ends_the_game() {
    let mut engine = engine(Box::new(CornerPlacement));
    engine.snake = Snake::from_segments(
        vec![
            Position::new(4, 2),
            Position::new(3, 2),
            Position::new(2, 2),
            Position::new(1, 2),
            Position::new(0, 2),
        ],
        Direction::Right,
    )
    .expect("segments are non-empty");

    engine.request_direction(Direction::Down);
    assert_eq!(engine.tick(), TickOutcome::Moved);
    engine.request_direction(Direction::Left);
    assert_eq!(engine.tick(), TickOutcome::Moved);
    engine.request_direction(Direction::Up);

    assert_eq!(
        engine.tick(),
        TickOutcome::GameOver(GameOverReason::SelfCollision)
    );
}
