use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a food position uniformly over the cells not occupied by the
/// snake. Returns `None` when the snake covers the entire grid.
///
/// Enumerating free cells up front keeps the draw uniform and always
/// terminates, unlike rejection sampling on a nearly full board.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(snake.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;

    use super::spawn_position;
    use crate::snake::{Position, Snake};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);

        for _ in 0..100 {
            let position = spawn_position(
                &mut rng,
                GridSize {
                    width: 8,
                    height: 6,
                },
                &snake,
            )
            .expect("board has free cells");
            assert!(!snake.occupies(position));
        }
    }

    #[test]
    fn full_board_yields_no_position() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
        ]);

        let position = spawn_position(
            &mut rng,
            GridSize {
                width: 2,
                height: 1,
            },
            &snake,
        );

        assert_eq!(position, None);
    }

    #[test]
    fn single_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
        ]);

        let position = spawn_position(
            &mut rng,
            GridSize {
                width: 2,
                height: 2,
            },
            &snake,
        );

        assert_eq!(position, Some(Position { x: 0, y: 1 }));
    }
}
