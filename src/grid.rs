use Direction::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    pub fn new(x: i16, y: i16) -> Self {
        Coord { x, y }
    }

    /// The neighbouring cell one step along `dir`. May fall off the board;
    /// callers check with [`Board::contains`].
    pub fn step(self, dir: Direction) -> Coord {
        let (dx, dy) = dir.delta();
        Coord::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Terminal rows grow downward, so Up is negative y.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i16,
    pub height: i16,
}

impl Board {
    pub fn new(width: i16, height: i16) -> Self {
        Board { width, height }
    }

    pub fn contains(self, cell: Coord) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn center(self) -> Coord {
        Coord::new(self.width / 2, self.height / 2)
    }

    /// Every cell of the board, row by row.
    pub fn cells(self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposites_pair_up() {
        for dir in [Up, Down, Left, Right].iter() {
            assert_eq!(dir.opposite().opposite(), *dir);
        }
        assert_eq!(Up.opposite(), Down);
        assert_eq!(Left.opposite(), Right);
    }

    #[test]
    fn stepping_follows_the_heading() {
        let cell = Coord::new(4, 4);
        assert_eq!(cell.step(Up), Coord::new(4, 3));
        assert_eq!(cell.step(Down), Coord::new(4, 5));
        assert_eq!(cell.step(Left), Coord::new(3, 4));
        assert_eq!(cell.step(Right), Coord::new(5, 4));
    }

    #[test]
    fn bounds_are_half_open() {
        let board = Board::new(20, 10);
        assert!(board.contains(Coord::new(0, 0)));
        assert!(board.contains(Coord::new(19, 9)));
        assert!(!board.contains(Coord::new(20, 9)));
        assert!(!board.contains(Coord::new(19, 10)));
        assert!(!board.contains(Coord::new(-1, 5)));
    }

    #[test]
    fn cells_cover_the_whole_board() {
        let board = Board::new(5, 3);
        let cells: Vec<Coord> = board.cells().collect();
        assert_eq!(cells.len(), 15);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[14], Coord::new(4, 2));
    }
}
