mod grid;

pub use grid::{is_stable, Grid};
