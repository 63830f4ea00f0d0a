use std::collections::HashSet;
use std::thread::sleep;
use std::time::Duration;

use log::info;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::food;
use crate::grid::{Board, Coord, Direction};
use crate::snake::Snake;

/// One key read from the player, already mapped out of the backend's event
/// type. `Other` is any key that never affects play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Quit,
    Other,
}

impl Key {
    fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Quit | Key::Other => None,
        }
    }
}

/// Where the state machine stands. `Over` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Running,
    Over(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    WallCollision,
    SelfCollision,
    Quit,
}

impl Outcome {
    /// The message printed on the restored screen. A player quit says
    /// nothing.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::WallCollision => Some("boink!!! You Hit the wall."),
            Outcome::SelfCollision => Some("Game Over! Snake ate itself."),
            Outcome::Quit => None,
        }
    }
}

/// Supplies player keys. `poll_key` hands out at most one buffered key and
/// never waits; `wait_key` blocks once, for the start screen.
pub trait InputSource {
    fn poll_key(&mut self) -> Result<Option<Key>, GameError>;
    fn wait_key(&mut self) -> Result<Key, GameError>;
}

/// Draws one complete frame from the current state, clear-then-draw.
pub trait Renderer {
    fn draw_frame(
        &mut self,
        board: Board,
        head: Coord,
        body: &HashSet<Coord>,
        food: Coord,
    ) -> Result<(), GameError>;
}

pub struct Game<R = ThreadRng> {
    board: Board,
    snake: Snake,
    heading: Direction,
    food: Coord,
    phase: Phase,
    tick_interval: Duration,
    rng: R,
}

impl Game<ThreadRng> {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Game::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Game<R>, GameError> {
        let board = Board::new(config.width, config.height);
        let snake = Snake::new(board.center(), &board)?;
        let food = food::spawn(board, snake.occupied_cells(), &mut rng)?;

        Ok(Game {
            board,
            snake,
            heading: Direction::Right,
            food,
            phase: Phase::Starting,
            tick_interval: config.tick_interval,
            rng,
        })
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coord {
        self.food
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// One movement step: steer, compute the candidate head, check the wall,
    /// move, check self-collision, respawn food on a grow. Pure state
    /// transition; drawing and pacing belong to [`Game::run`].
    pub fn tick(&mut self, key: Option<Key>) -> Result<Phase, GameError> {
        if let Phase::Over(_) = self.phase {
            return Ok(self.phase);
        }
        self.phase = Phase::Running;

        match key {
            Some(Key::Quit) => {
                self.phase = Phase::Over(Outcome::Quit);
                return Ok(self.phase);
            }
            Some(key) => {
                if let Some(dir) = key.direction() {
                    // A straight reversal would walk the head into the neck.
                    if dir != self.heading.opposite() {
                        self.heading = dir;
                    }
                }
            }
            None => {}
        }

        let candidate = self.snake.head().step(self.heading);
        if !self.board.contains(candidate) {
            info!("hit the wall at ({}, {})", candidate.x, candidate.y);
            self.phase = Phase::Over(Outcome::WallCollision);
            return Ok(self.phase);
        }

        let grow = candidate == self.food;
        self.snake.advance(candidate, grow);

        if self.snake.self_collision() {
            info!("ran into own body at ({}, {})", candidate.x, candidate.y);
            self.phase = Phase::Over(Outcome::SelfCollision);
            return Ok(self.phase);
        }

        if grow {
            info!(
                "food eaten at ({}, {}), length now {}",
                candidate.x,
                candidate.y,
                self.snake.len()
            );
            self.food = food::spawn(self.board, self.snake.occupied_cells(), &mut self.rng)?;
            info!("food spawned at ({}, {})", self.food.x, self.food.y);
        }

        Ok(self.phase)
    }

    /// Real-time driver: waits once for the start key, then draws a frame,
    /// sleeps out the tick interval, polls one key and ticks, until a
    /// terminal phase ends the loop.
    pub fn run(&mut self, term: &mut (impl InputSource + Renderer)) -> Result<Outcome, GameError> {
        if self.phase == Phase::Starting {
            if term.wait_key()? == Key::Quit {
                self.phase = Phase::Over(Outcome::Quit);
                return Ok(Outcome::Quit);
            }
            self.phase = Phase::Running;
            self.draw(term)?;
        }

        loop {
            sleep(self.tick_interval);
            let key = term.poll_key()?;
            if let Phase::Over(outcome) = self.tick(key)? {
                info!("game over: {:?}", outcome);
                return Ok(outcome);
            }
            self.draw(term)?;
        }
    }

    fn draw(&self, term: &mut impl Renderer) -> Result<(), GameError> {
        term.draw_frame(
            self.board,
            self.snake.head(),
            self.snake.occupied_cells(),
            self.food,
        )
    }
}
