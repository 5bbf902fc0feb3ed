use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{self, ClearType},
};

use crate::engine::Grid;
use crate::utils::Config;

/// Display surface for the field.
///
/// Implementations only read the grid; a frame must never change it.
pub trait Render {
    /// Draw one generation.
    fn frame(&mut self, grid: &Grid, generation: u64) -> io::Result<()>;

    /// Announce that the field stilled and the loop is exiting.
    fn finished(&mut self, generation: u64) -> io::Result<()>;
}

/// Renders the field to the terminal, one character per cell.
pub struct TermRenderer {
    out: Stdout,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for TermRenderer {
    fn frame(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        let (width, height) = grid.size();
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        for y in 0..height {
            let row: String = (0..width)
                .map(|x| {
                    if grid.get(x, y) {
                        Config::ALIVE_GLYPH
                    } else {
                        Config::DEAD_GLYPH
                    }
                })
                .collect();
            queue!(self.out, Print(row), Print("\n"))?;
        }
        queue!(
            self.out,
            Print(format!(
                "\nGeneration: {}    Population: {}\n",
                generation,
                grid.population()
            ))
        )?;
        self.out.flush()
    }

    fn finished(&mut self, generation: u64) -> io::Result<()> {
        queue!(
            self.out,
            Print(format!(
                "Field is still, stopping at generation {}.\n",
                generation
            ))
        )?;
        self.out.flush()
    }
}
