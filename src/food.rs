use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::GameError;
use crate::grid::{Board, Coord};

/// Picks a uniformly random free cell for the next piece of food. A board
/// with no free cell means the caller let the snake fill it, which reachable
/// play never does, so that comes back as `BoardFull` instead of looping.
pub fn spawn(
    board: Board,
    occupied: &HashSet<Coord>,
    rng: &mut impl Rng,
) -> Result<Coord, GameError> {
    board
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .choose(rng)
        .ok_or(GameError::BoardFull)
}
