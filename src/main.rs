use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use fastrand::Rng;
use swarmfit::core::{CtrlCAbortSignal, TrackingObserver};
use swarmfit::objectives::{Bowl, Schwefel};
use swarmfit::prelude::*;

const N_PARTICLES: usize = 200;
const N_ITERATIONS: usize = 500;

fn run_demo<O: Objective + 'static>(
    name: &str,
    objective: O,
    limit: Float,
    seed: u64,
) -> Result<(), Box<dyn Error>> {
    let config = SwarmConfig::default()
        .with_n_particles(N_PARTICLES)
        .with_bounds(vec![(-limit, limit); 2]);
    let mut swarm = Swarm::new(config, objective, Rng::with_seed(seed))?;

    // Record every frame a viewer would draw
    let tracker = TrackingObserver::build();
    let callbacks = Callbacks::empty()
        .with_terminator(MaxSteps(N_ITERATIONS))
        .with_observer(tracker.clone());

    let summary = swarm
        .run(callbacks, &CtrlCAbortSignal::new())
        .with_parameter_names(&["X".to_string(), "Y".to_string()]);
    println!("{name}\n{summary}");

    // Export the trajectory to a Python .pkl file to replay it in a viewer
    let mut writer = BufWriter::new(File::create(Path::new(&format!("{name}.pkl")))?);
    serde_pickle::to_writer(&mut writer, &*tracker.read(), Default::default())?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    run_demo("paraboloid", Bowl, 100.0, 0)?;
    run_demo("schwefel", Schwefel::new(), 500.0, 0)?;
    Ok(())
}
