//! Kink–antikink collision on a periodic line.
//!
//! Runs the reference scenario (512 points on [-20, 20], kinks at ±5, t in
//! [0, 100]) and prints where the two kinks sit at every sampled step.
//!
//! # Usage
//!
//! ```text
//! cargo run --example kink_antikink
//! cargo run --example kink_antikink -- 0.1
//! ```
//!
//! The optional argument is the time step. Try `0.05` (default), `0.1`, and
//! anything above the grid spacing (≈ 0.078) to watch the stability guard
//! stop the run.

use std::error::Error;

use sine_gordon_core::{Grid, Interrupt, KinkAntikink};
use sine_gordon_observers::Recorder;
use sine_gordon_solvers::{
    analysis::{energy, stability::max_abs},
    simulation::{self, Config, Status},
};

fn main() -> Result<(), Box<dyn Error>> {
    let dt = std::env::args()
        .nth(1)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step size, expected a number such as 0.05");
            std::process::exit(1);
        })
        .unwrap_or(0.05);

    let grid = Grid::new(-20.0, 20.0, 512)?;
    let config = Config::with_dt(0.0, 100.0, dt, 8)?;
    let mut recorder = Recorder::new();

    let solution = simulation::run(
        &grid,
        &KinkAntikink::default(),
        &config,
        &Interrupt::new(),
        &mut recorder,
    );

    println!("{:>10} {:>10} {:>10} {:>10}", "t", "kink", "antikink", "gap");
    for sample in &solution.solitons {
        println!(
            "{:>10.3} {:>10.4} {:>10.4} {:>10.4}",
            sample.time,
            sample.first,
            sample.second,
            sample.second - sample.first,
        );
    }

    if let Some(frame) = recorder.latest() {
        println!();
        println!(
            "last frame: step {} at t = {:.3}, total energy {:.5}",
            frame.step,
            frame.time,
            energy::total(&grid, &frame.energy),
        );
    }

    match solution.status {
        Status::Completed => println!(
            "completed {} steps, max |u| = {:.3}",
            solution.steps,
            max_abs(solution.state.u())
        ),
        Status::Unstable => println!(
            "unstable after {} steps at t = {:.3}; decrease the step size",
            solution.steps,
            solution.state.t()
        ),
        Status::Interrupted => println!("interrupted after {} steps", solution.steps),
    }

    Ok(())
}
