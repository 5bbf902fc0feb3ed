pub struct Config;

impl Config {
    /// Field dimensions, border included.
    pub const HEIGHT: usize = 10;
    pub const WIDTH: usize = 10;

    /// Upper bound on generations rendered per second.
    pub const MAX_FPS: f64 = 30.;

    /// Probability for an interior cell to start alive.
    pub const FILL_RATE: f64 = 0.5;

    pub const ALIVE_GLYPH: char = '#';
    pub const DEAD_GLYPH: char = '.';
}
