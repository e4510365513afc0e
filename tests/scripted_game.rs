use gridsnake::config::EngineConfig;
use gridsnake::engine::{AdvanceResult, DeathReason, GameEngine, GameStatus, TickOutcome};
use gridsnake::input::Direction;
use gridsnake::snake::Position;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let config = EngineConfig {
        cols: 6,
        rows: 4,
        initial_speed_ms: 35,
        die_from_walls: true,
    };
    let mut engine = GameEngine::with_seed(config, 42).expect("config is valid");

    engine.start();
    assert!(engine.place_food(Position { x: 4, y: 2 }));
    engine.set_direction(Direction::Right);

    // The snake spawns at the grid center (3,2); the first tick passes
    // the interval gate and lands on the food.
    let outcome = engine.advance(0);
    assert_eq!(
        outcome,
        AdvanceResult::Moved(TickOutcome {
            head: Position { x: 4, y: 2 },
            removed_tail: None,
            ate_food: true,
        })
    );
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.snake_len(), 2);
    assert_eq!(engine.speed_ms(), 34);

    // Within the tick interval nothing happens.
    assert_eq!(engine.advance(5), AdvanceResult::Skipped);
    assert_eq!(engine.snake_len(), 2);

    assert!(engine.place_food(Position { x: 4, y: 0 }));
    engine.set_direction(Direction::Up);

    let outcome = engine.advance(40);
    assert!(matches!(
        outcome,
        AdvanceResult::Moved(TickOutcome {
            head: Position { x: 4, y: 1 },
            ate_food: false,
            ..
        })
    ));

    let outcome = engine.advance(80);
    assert!(matches!(
        outcome,
        AdvanceResult::Moved(TickOutcome { ate_food: true, .. })
    ));
    assert_eq!(engine.score(), 2);
    assert_eq!(engine.snake_len(), 3);

    // The next tick runs off the top edge.
    assert_eq!(
        engine.advance(120),
        AdvanceResult::Collided(DeathReason::WallCollision)
    );
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert_eq!(engine.advance(200), AdvanceResult::Skipped);

    // A reset always recovers into a fresh running game.
    engine.reset();
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.snake_len(), 1);
    assert_eq!(engine.speed_ms(), 35);
}

#[test]
fn wrapping_walk_crosses_both_edges() {
    let config = EngineConfig {
        cols: 5,
        rows: 5,
        initial_speed_ms: 40,
        die_from_walls: false,
    };
    let mut engine = GameEngine::with_seed(config, 7).expect("config is valid");

    engine.start();
    assert!(engine.place_food(Position { x: 0, y: 0 }));
    engine.set_direction(Direction::Left);

    // (2,2) -> (1,2) -> (0,2), then across the left edge.
    assert!(matches!(engine.advance(0), AdvanceResult::Moved(_)));
    assert!(matches!(engine.advance(40), AdvanceResult::Moved(_)));
    let outcome = engine.advance(80);
    assert!(matches!(
        outcome,
        AdvanceResult::Moved(TickOutcome {
            head: Position { x: 4, y: 2 },
            ..
        })
    ));
    assert_eq!(engine.status(), GameStatus::Running);

    engine.set_direction(Direction::Up);

    // (4,1), (4,0), then across the top edge.
    assert!(matches!(engine.advance(120), AdvanceResult::Moved(_)));
    assert!(matches!(engine.advance(160), AdvanceResult::Moved(_)));
    let outcome = engine.advance(200);
    assert!(matches!(
        outcome,
        AdvanceResult::Moved(TickOutcome {
            head: Position { x: 4, y: 4 },
            ..
        })
    ));
    assert_eq!(engine.status(), GameStatus::Running);
    assert_eq!(engine.snake_len(), 1);
}
