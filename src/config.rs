use std::time::Duration;

/// Session-wide settings. The board shape never changes once play begins.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub width: i16,
    pub height: i16,
    pub tick_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 20,
            height: 20,
            tick_interval: Duration::from_millis(100),
        }
    }
}
