use crate::engine::{is_stable, Grid};
use crate::render::Render;
use crate::utils::FpsLimiter;
use crate::Error;

/// Where the simulation is in its lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Running,
    Stopped,
}

/// Advances the field one generation at a time and stops once it stills.
///
/// At most two generations are held at once: the current field and the one
/// before it, retained for the stillness check. Each committed generation
/// is a fresh value produced by [`Grid::step`], never an in-place edit.
pub struct Simulation {
    previous: Option<Grid>,
    current: Grid,
    generation: u64,
    status: Status,
}

impl Simulation {
    /// Seed a fresh simulation with a random field.
    pub fn new(
        height: usize,
        width: usize,
        seed: Option<u64>,
        fill_rate: f64,
    ) -> Result<Self, Error> {
        Ok(Self::from_grid(Grid::random(height, width, seed, fill_rate)?))
    }

    /// Start from a prepared field instead of a random one.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            previous: None,
            current: grid,
            generation: 0,
            status: Status::Running,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Advance by one generation.
    ///
    /// Computes the next field; if it reproduces both retained generations
    /// the simulation stops with the field and counter left as they are.
    /// Otherwise the new field is committed. Ticking a stopped simulation
    /// is a no-op.
    pub fn tick(&mut self) -> Status {
        if self.status == Status::Stopped {
            return self.status;
        }
        let next = self.current.step();
        if is_stable(self.previous.as_ref(), &self.current, &next) {
            self.status = Status::Stopped;
        } else {
            self.previous = Some(std::mem::replace(&mut self.current, next));
            self.generation += 1;
        }
        self.status
    }

    /// Render, tick and pace until the field stills.
    ///
    /// Returns the generation at which stability was detected. Runs
    /// indefinitely for a field that never stills (e.g. one that settles
    /// into an oscillator).
    pub fn run(
        &mut self,
        renderer: &mut impl Render,
        limiter: &mut FpsLimiter,
    ) -> Result<u64, Error> {
        loop {
            renderer.frame(&self.current, self.generation)?;
            if self.tick() == Status::Stopped {
                renderer.finished(self.generation)?;
                return Ok(self.generation);
            }
            limiter.delay();
        }
    }
}
