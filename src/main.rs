use std::fs::File;

use anyhow::{ensure, Context, Result};
use log::{info, LevelFilter};
use simplelog::{Config as LogConfig, WriteLogger};

use slither::config::GameConfig;
use slither::game::Game;
use slither::term::Terminal;

fn main() -> Result<()> {
    // The alternate screen owns stdout while the game runs, so diagnostics
    // go to a file.
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create("slither.log")?,
    )
    .context("failed to initialize the logger")?;

    let config = GameConfig::default();
    info!(
        "starting slither on a {}x{} board",
        config.width, config.height
    );

    let (cols, rows) = Terminal::size()?;
    ensure!(
        cols as i16 >= config.width + 2 && rows as i16 >= config.height + 2,
        "terminal is {}x{} but the board plus border needs {}x{}",
        cols,
        rows,
        config.width + 2,
        config.height + 2
    );

    let mut game = Game::new(config)?;
    let outcome = {
        let mut term = Terminal::new()?;
        term.banner(
            game.board(),
            &[
                "Arrow keys or WASD to move",
                "q or CTRL+C to quit",
                "",
                "Press any key to begin",
            ],
        )?;
        game.run(&mut term)?
        // Terminal drops here, restoring the screen before anything prints.
    };

    info!("session over: {:?}", outcome);
    if let Some(message) = outcome.message() {
        println!("{}", message);
    }
    Ok(())
}
