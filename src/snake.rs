use std::collections::{HashSet, VecDeque};

use crate::error::GameError;
use crate::grid::{Board, Coord};

/// The snake body: segment coordinates in body order with the head at the
/// front, mirrored by a set of occupied cells for O(1) containment queries.
/// All mutation goes through [`Snake::advance`].
#[derive(Debug)]
pub struct Snake {
    segments: VecDeque<Coord>,
    occupied: HashSet<Coord>,
}

impl Snake {
    /// A length-1 snake at `head`. An out-of-bounds cell is a caller bug and
    /// comes back as `InvalidPosition`.
    pub fn new(head: Coord, board: &Board) -> Result<Self, GameError> {
        if !board.contains(head) {
            return Err(GameError::InvalidPosition {
                x: head.x,
                y: head.y,
                width: board.width,
                height: board.height,
            });
        }

        let mut segments = VecDeque::new();
        segments.push_front(head);
        let mut occupied = HashSet::new();
        occupied.insert(head);
        Ok(Snake { segments, occupied })
    }

    /// Moves the head to `new_head`. Without `grow` the tail is dropped
    /// before the head lands, so stepping into the just-vacated tail cell is
    /// legal. Performs no bounds or collision validation; the caller checks
    /// bounds before calling and collisions after.
    pub fn advance(&mut self, new_head: Coord, grow: bool) {
        if !grow {
            if let Some(tail) = self.segments.pop_back() {
                self.occupied.remove(&tail);
            }
        }
        self.segments.push_front(new_head);
        self.occupied.insert(new_head);
    }

    /// True iff the head sits on some other segment. The occupied set
    /// collapses the duplicated head, which is the only duplicate a
    /// reachable body can contain, so a size mismatch is the collision.
    pub fn self_collision(&self) -> bool {
        self.occupied.len() < self.segments.len()
    }

    pub fn head(&self) -> Coord {
        *self.segments.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Unordered view of the body, for rendering and food placement.
    pub fn occupied_cells(&self) -> &HashSet<Coord> {
        &self.occupied
    }

    /// Segments in body order, head first.
    pub fn segments(&self) -> impl Iterator<Item = Coord> + '_ {
        self.segments.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(20, 20)
    }

    fn at(x: i16, y: i16) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn starts_with_a_single_segment() {
        let snake = Snake::new(at(10, 10), &board()).unwrap();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), at(10, 10));
        assert!(snake.occupied_cells().contains(&at(10, 10)));
    }

    #[test]
    fn rejects_out_of_bounds_construction() {
        let err = Snake::new(at(20, 5), &board()).unwrap_err();
        assert!(matches!(err, GameError::InvalidPosition { x: 20, y: 5, .. }));
    }

    #[test]
    fn non_growing_advance_keeps_the_length() {
        let mut snake = Snake::new(at(10, 10), &board()).unwrap();
        snake.advance(at(11, 10), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), at(11, 10));
        assert!(!snake.occupied_cells().contains(&at(10, 10)));
    }

    #[test]
    fn growing_advance_adds_a_segment() {
        let mut snake = Snake::new(at(10, 10), &board()).unwrap();
        snake.advance(at(11, 10), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), at(11, 10));
        assert!(snake.occupied_cells().contains(&at(10, 10)));
    }

    #[test]
    fn occupied_count_is_stable_across_many_moves() {
        let mut snake = Snake::new(at(0, 0), &board()).unwrap();
        snake.advance(at(1, 0), true);
        snake.advance(at(2, 0), true);
        for x in 3..15 {
            snake.advance(at(x, 0), false);
        }
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.occupied_cells().len(), 3);
        let body: Vec<Coord> = snake.segments().collect();
        assert_eq!(body, vec![at(14, 0), at(13, 0), at(12, 0)]);
    }

    #[test]
    fn head_on_body_is_a_collision() {
        // Square loop: the head re-enters the cell behind the neck.
        let mut snake = Snake::new(at(3, 5), &board()).unwrap();
        snake.advance(at(4, 5), true);
        snake.advance(at(4, 6), true);
        snake.advance(at(5, 6), true);
        snake.advance(at(5, 5), true);
        assert!(!snake.self_collision());

        snake.advance(at(5, 6), false);
        assert!(snake.self_collision());
    }

    #[test]
    fn moving_into_the_vacated_tail_cell_is_legal() {
        let mut snake = Snake::new(at(5, 5), &board()).unwrap();
        snake.advance(at(6, 5), true);
        snake.advance(at(6, 6), true);
        snake.advance(at(5, 6), true);
        // Tail is at (5, 5) and gets popped before the head lands there.
        snake.advance(at(5, 5), false);
        assert!(!snake.self_collision());
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn growing_into_the_tail_cell_is_a_collision() {
        let mut snake = Snake::new(at(5, 5), &board()).unwrap();
        snake.advance(at(6, 5), true);
        snake.advance(at(6, 6), true);
        snake.advance(at(5, 6), true);
        snake.advance(at(5, 5), true);
        assert!(snake.self_collision());
    }
}
