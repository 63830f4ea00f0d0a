use std::collections::HashSet;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};
use log::error;

use crate::error::GameError;
use crate::game::{InputSource, Key, Renderer};
use crate::grid::{Board, Coord};

const HEAD_CHAR: char = '@';
const BODY_CHAR: char = '█';
const FOOD_CHAR: char = 'O';

/// A raw-mode alternate-screen session. Dropping it restores the terminal,
/// so the shell comes back intact on every exit path.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Result<Self, GameError> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        terminal::enable_raw_mode()?;
        Ok(Terminal { stdout })
    }

    /// Current terminal dimensions in columns and rows. Checked before the
    /// session starts, so this is an associated function.
    pub fn size() -> Result<(u16, u16), GameError> {
        Ok(terminal::size()?)
    }

    /// Centered intro text over the board area; the first frame overwrites
    /// it.
    pub fn banner(&mut self, board: Board, lines: &[&str]) -> Result<(), GameError> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        let mid_x = (board.width + 2) / 2;
        let top = ((board.height + 2) / 2 - lines.len() as i16 / 2).max(0);
        for (i, line) in lines.iter().enumerate() {
            let x = (mid_x - line.len() as i16 / 2).max(0);
            queue!(
                self.stdout,
                cursor::MoveTo(x as u16, (top + i as i16) as u16),
                style::Print(line)
            )?;
        }

        self.stdout.flush()?;
        Ok(())
    }

    // Board cell (x, y) sits at screen (x + 1, y + 1); the border takes the
    // outermost ring.
    fn queue_cell(&mut self, cell: Coord, ch: char) -> Result<(), GameError> {
        self.queue_at(cell.x as u16 + 1, cell.y as u16 + 1, ch)
    }

    fn queue_at(&mut self, x: u16, y: u16, ch: char) -> Result<(), GameError> {
        queue!(self.stdout, cursor::MoveTo(x, y), style::Print(ch))?;
        Ok(())
    }

    fn queue_border(&mut self, board: Board) -> Result<(), GameError> {
        let end_x = board.width as u16 + 1;
        let end_y = board.height as u16 + 1;

        for x in 0..=end_x {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            self.queue_at(x, 0, ch)?;
            self.queue_at(x, end_y, ch)?;
        }
        for y in 1..end_y {
            self.queue_at(0, y, '|')?;
            self.queue_at(end_x, y, '|')?;
        }

        Ok(())
    }
}

impl Renderer for Terminal {
    fn draw_frame(
        &mut self,
        board: Board,
        head: Coord,
        body: &HashSet<Coord>,
        food: Coord,
    ) -> Result<(), GameError> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        self.queue_border(board)?;

        self.queue_cell(food, FOOD_CHAR)?;
        for cell in body {
            self.queue_cell(*cell, BODY_CHAR)?;
        }
        // Head last, in case the state is mid-collision.
        self.queue_cell(head, HEAD_CHAR)?;

        self.stdout.flush()?;
        Ok(())
    }
}

impl InputSource for Terminal {
    fn poll_key(&mut self) -> Result<Option<Key>, GameError> {
        if poll(Duration::from_secs(0))? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(map_key(&ev)));
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> Result<Key, GameError> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(map_key(&ev));
            }
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        // Restore failures leave nothing to recover; log them and move on.
        if let Err(err) = terminal::disable_raw_mode() {
            error!("failed to disable raw mode: {}", err);
        }
        if let Err(err) = execute!(self.stdout, LeaveAlternateScreen, cursor::Show) {
            error!("failed to restore the screen: {}", err);
        }
    }
}

fn map_key(ev: &KeyEvent) -> Key {
    if is_ctrl_c(ev) {
        return Key::Quit;
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Key::Up,
        KeyCode::Char('s') | KeyCode::Down => Key::Down,
        KeyCode::Char('a') | KeyCode::Left => Key::Left,
        KeyCode::Char('d') | KeyCode::Right => Key::Right,
        KeyCode::Char('q') | KeyCode::Esc => Key::Quit,
        _ => Key::Other,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(
        ev,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }
    )
}
