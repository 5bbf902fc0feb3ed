use std::io;

use termlife::{FpsLimiter, Grid, Render, Simulation, Status};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.5;

/// Test double for the display: records every frame instead of drawing.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<(Grid, u64)>,
    stopped_at: Option<u64>,
}

impl Render for RecordingRenderer {
    fn frame(&mut self, grid: &Grid, generation: u64) -> io::Result<()> {
        self.frames.push((grid.clone(), generation));
        Ok(())
    }

    fn finished(&mut self, generation: u64) -> io::Result<()> {
        self.stopped_at = Some(generation);
        Ok(())
    }
}

fn block_6x6() -> Grid {
    let mut g = Grid::blank(6, 6).unwrap();
    for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
        g.set(x, y, true);
    }
    g
}

fn blinker_7x7() -> Grid {
    let mut g = Grid::blank(7, 7).unwrap();
    for x in [2, 3, 4] {
        g.set(x, 3, true);
    }
    g
}

#[test]
fn still_life_run_stops_after_one_commit() {
    // The first tick commits an identical generation; the second sees
    // three equal fields and stops.
    let mut sim = Simulation::from_grid(block_6x6());
    let mut renderer = RecordingRenderer::default();
    let mut limiter = FpsLimiter::new(1000.);

    let stopped_at = sim.run(&mut renderer, &mut limiter).unwrap();

    assert_eq!(stopped_at, 1);
    assert_eq!(sim.status(), Status::Stopped);
    assert_eq!(sim.generation(), 1);
    assert_eq!(
        renderer.frames.iter().map(|(_, n)| *n).collect::<Vec<_>>(),
        vec![0, 1]
    );
    assert_eq!(renderer.stopped_at, Some(1));
    assert_eq!(sim.grid(), &block_6x6());
}

#[test]
fn empty_field_is_immediately_still() {
    let mut sim = Simulation::from_grid(Grid::blank(10, 10).unwrap());
    let mut renderer = RecordingRenderer::default();
    let mut limiter = FpsLimiter::new(1000.);

    assert_eq!(sim.run(&mut renderer, &mut limiter).unwrap(), 1);
    assert_eq!(sim.grid().population(), 0);
}

#[test]
fn blinker_never_stops() {
    let mut sim = Simulation::from_grid(blinker_7x7());
    for generation in 1..=128 {
        assert_eq!(sim.tick(), Status::Running);
        assert_eq!(sim.generation(), generation);
    }
    // An even number of ticks lands back on the starting phase.
    assert_eq!(sim.grid(), &blinker_7x7());
}

#[test]
fn tick_after_stop_is_a_noop() {
    let mut sim = Simulation::from_grid(block_6x6());
    assert_eq!(sim.tick(), Status::Running);
    assert_eq!(sim.tick(), Status::Stopped);
    let frozen = sim.grid().clone();
    assert_eq!(sim.tick(), Status::Stopped);
    assert_eq!(sim.generation(), 1);
    assert_eq!(sim.grid(), &frozen);
}

#[test]
fn rendering_does_not_change_the_field() {
    let sim = Simulation::new(10, 10, Some(SEED), FILL_RATE).unwrap();
    let before = sim.grid().clone();
    let mut renderer = RecordingRenderer::default();
    renderer.frame(sim.grid(), sim.generation()).unwrap();
    assert_eq!(sim.grid(), &before);
}

#[test]
fn seeded_run_commits_one_fresh_generation_per_frame() {
    let mut sim = Simulation::new(10, 10, Some(SEED), FILL_RATE).unwrap();
    let mut renderer = RecordingRenderer::default();

    let mut rendered = vec![(sim.grid().clone(), sim.generation())];
    // A random soup may settle into an oscillator and run forever, so the
    // walk is capped rather than driven to stability.
    for _ in 0..256 {
        if sim.tick() == Status::Stopped {
            break;
        }
        rendered.push((sim.grid().clone(), sim.generation()));
    }
    for (grid, generation) in &rendered {
        renderer.frame(grid, *generation).unwrap();
    }

    assert_eq!(renderer.frames.len(), rendered.len());
    for (i, (grid, generation)) in renderer.frames.iter().enumerate() {
        assert_eq!(*generation, i as u64);
        let (w, h) = grid.size();
        assert!((0..w).all(|x| !grid.get(x, 0) && !grid.get(x, h - 1)));
        assert!((0..h).all(|y| !grid.get(0, y) && !grid.get(w - 1, y)));
    }
}

#[test]
fn invalid_dimensions_fail_at_seeding() {
    assert!(Simulation::new(2, 10, Some(SEED), FILL_RATE).is_err());
    assert!(Simulation::new(10, 2, Some(SEED), FILL_RATE).is_err());
}
