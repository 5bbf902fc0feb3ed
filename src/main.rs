#![warn(clippy::all)]

use termlife::{Config, Error, FpsLimiter, Simulation, TermRenderer};

fn main() -> Result<(), Error> {
    println!("Starting Game of Life...");

    let mut sim = Simulation::new(Config::HEIGHT, Config::WIDTH, None, Config::FILL_RATE)?;
    let mut renderer = TermRenderer::new();
    let mut limiter = FpsLimiter::new(Config::MAX_FPS);

    sim.run(&mut renderer, &mut limiter)?;
    Ok(())
}
