use approx::assert_relative_eq;
use fastrand::Rng;
use nalgebra::dvector;
use parking_lot::RwLock;
use std::sync::Arc;
use swarmfit::{
    core::{NopAbortSignal, TrackingObserver},
    objectives::{Bowl, Rastrigin, Schwefel},
    prelude::*,
    swarm::{SwarmPositionInitializer, SwarmVelocityInitializer},
    DVector,
};

fn bowl_config() -> SwarmConfig {
    SwarmConfig::default()
        .with_n_particles(50)
        .with_bounds(vec![(-100.0, 100.0); 2])
        .with_omega(0.5)
        .with_c1(1.5)
        .with_c2(1.5)
}

#[test]
fn single_particle_without_attraction_keeps_its_start() {
    let config = SwarmConfig::default()
        .with_n_particles(1)
        .with_bounds(vec![(-10.0, 10.0)])
        .with_c1(0.0)
        .with_c2(0.0)
        .with_position_initializer(SwarmPositionInitializer::Custom(vec![dvector![5.0]]))
        .with_velocity_initializer(SwarmVelocityInitializer::Zero);
    let mut swarm = Swarm::new(config, Bowl, Rng::with_seed(0)).unwrap();
    assert_eq!(swarm.global_best(), (dvector![5.0], 25.0));
    for _ in 0..1000 {
        swarm.advance_iteration();
        let (x, fx) = swarm.global_best();
        assert_eq!(fx, 25.0);
        assert_eq!(x, dvector![5.0]);
        assert!(swarm.positions()[0][0] >= -10.0 && swarm.positions()[0][0] <= 10.0);
    }
}

#[test]
fn single_particle_with_inertia_only_stays_in_bounds() {
    let config = SwarmConfig::default()
        .with_n_particles(1)
        .with_bounds(vec![(-10.0, 10.0)])
        .with_omega(1.0)
        .with_c1(0.0)
        .with_c2(0.0)
        .with_position_initializer(SwarmPositionInitializer::Custom(vec![dvector![5.0]]))
        .with_velocity_initializer(SwarmVelocityInitializer::Uniform(3.0, 4.0));
    let mut swarm = Swarm::new(config, Bowl, Rng::with_seed(0)).unwrap();
    for _ in 0..100 {
        swarm.advance_iteration();
        let x = swarm.positions()[0][0];
        assert!((-10.0..=10.0).contains(&x));
        // moving right from 5.0 never improves on the bowl
        assert_eq!(swarm.global_best().1, 25.0);
    }
    assert_eq!(swarm.positions()[0], dvector![10.0]);
}

#[test]
fn bowl_converges_to_origin() {
    let mut swarm = Swarm::new(bowl_config(), Bowl, Rng::with_seed(0)).unwrap();
    for _ in 0..500 {
        swarm.advance_iteration();
    }
    let (x, fx) = swarm.global_best();
    assert!(fx < 1.0, "global best {fx} at {x:?}");
    assert!(fx >= 0.0);
}

#[test]
fn bowl_converges_for_several_seeds_and_both_update_methods() {
    for seed in 0..5 {
        for method in [SwarmUpdateMethod::Asynchronous, SwarmUpdateMethod::Synchronous] {
            let mut swarm = Swarm::new(
                bowl_config().with_update_method(method),
                Bowl,
                Rng::with_seed(seed),
            )
            .unwrap();
            let summary = swarm.run(MaxSteps(500), &NopAbortSignal::new());
            assert!(summary.fx < 1.0, "seed {seed}: {}", summary.fx);
        }
    }
}

#[test]
fn schwefel_improves_monotonically_and_never_passes_the_minimum() {
    let config = SwarmConfig::default()
        .with_n_particles(200)
        .with_bounds(vec![(-500.0, 500.0); 2]);
    let mut swarm = Swarm::new(config, Schwefel::new(), Rng::with_seed(0)).unwrap();
    let tracker = TrackingObserver::build();
    let callbacks = Callbacks::empty()
        .with_terminator(MaxSteps(2000))
        .with_observer(tracker.clone());
    let summary = swarm.run(callbacks, &NopAbortSignal::new());

    let tracker = tracker.read();
    assert_eq!(tracker.best_history.len(), 2000);
    for pair in tracker.best_history.windows(2) {
        assert!(pair[1].fx <= pair[0].fx);
    }
    let global_minimum = -418.982_887_272_433_8 * 2.0;
    assert!(summary.fx >= global_minimum - 1e-6);
    assert!(summary.fx < -600.0, "stuck at {}", summary.fx);
}

fn ordered_starts(method: SwarmUpdateMethod, seed: u64) -> Swarm {
    let config = SwarmConfig::default()
        .with_n_particles(3)
        .with_bounds(vec![(-100.0, 100.0)])
        .with_update_method(method)
        .with_position_initializer(SwarmPositionInitializer::Custom(vec![
            dvector![50.0],
            dvector![80.0],
            dvector![90.0],
        ]))
        .with_velocity_initializer(SwarmVelocityInitializer::Zero);
    Swarm::new(config, Bowl, Rng::with_seed(seed)).unwrap()
}

#[test]
fn later_particles_see_improvements_from_the_same_pass() {
    let mut improved_within_pass = 0;
    for seed in 0..50 {
        let mut asynchronous = ordered_starts(SwarmUpdateMethod::Asynchronous, seed);
        let mut synchronous = ordered_starts(SwarmUpdateMethod::Synchronous, seed);
        asynchronous.advance_iteration();
        synchronous.advance_iteration();

        // particle 0 sits on the global best with no velocity, so it stays put in both modes
        assert_eq!(asynchronous.positions()[0], dvector![50.0]);
        assert_eq!(asynchronous.positions()[1], synchronous.positions()[1]);
        assert_eq!(
            asynchronous.particles()[1].best(),
            synchronous.particles()[1].best()
        );

        // the global best particle 2 was attracted to in each mode
        let after_first_two = asynchronous.particles()[1].best().x[0];
        let seen_async = if after_first_two.abs() < 50.0 {
            after_first_two
        } else {
            50.0
        };
        let seen_sync = 50.0;

        // both modes share the same random draws, so particle 2 moved by 1.5 r (g - 90)
        let moved_async = asynchronous.positions()[2][0] - 90.0;
        let moved_sync = synchronous.positions()[2][0] - 90.0;
        assert_relative_eq!(
            moved_async * (seen_sync - 90.0),
            moved_sync * (seen_async - 90.0),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
        if seen_async != seen_sync {
            improved_within_pass += 1;
            assert_ne!(asynchronous.positions()[2], synchronous.positions()[2]);
        }
    }
    assert!(improved_within_pass > 0);
}

#[test]
fn seeded_runs_are_identical() {
    let run = |seed| {
        let mut swarm = Swarm::new(
            SwarmConfig::default()
                .with_n_particles(30)
                .with_bounds(vec![(-5.12, 5.12); 3]),
            Rastrigin,
            Rng::with_seed(seed),
        )
        .unwrap();
        let mut trajectory = vec![swarm.positions()];
        for _ in 0..50 {
            swarm.advance_iteration();
            trajectory.push(swarm.positions());
        }
        (trajectory, swarm.global_best())
    };
    let (a, best_a) = run(11);
    let (b, best_b) = run(11);
    assert_eq!(a, b);
    assert_eq!(best_a, best_b);
    let (c, _) = run(12);
    assert_ne!(a, c);
}

#[test]
fn cloned_swarms_continue_identically() {
    let mut a = Swarm::new(bowl_config(), Bowl, Rng::with_seed(5)).unwrap();
    a.advance_iteration();
    let mut b = a.clone();
    for _ in 0..20 {
        a.advance_iteration();
        b.advance_iteration();
    }
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.global_best(), b.global_best());
}

#[derive(Default)]
struct InvariantChecker {
    last_best: Option<Float>,
    visited_minimum: Vec<Float>,
}
impl Observer for InvariantChecker {
    fn observe(&mut self, _iteration: usize, swarm: &Swarm) {
        let (x, fx) = swarm.global_best();
        if let Some(last) = self.last_best {
            assert!(fx <= last);
        }
        self.last_best = Some(fx);
        assert_eq!(swarm.fitness(&x).unwrap(), fx);
        if self.visited_minimum.is_empty() {
            self.visited_minimum = swarm
                .particles()
                .iter()
                .map(|p| p.best().fx)
                .collect();
        }
        for (p, lowest) in swarm.particles().iter().zip(self.visited_minimum.iter_mut()) {
            *lowest = lowest.min(p.position().fx);
            assert!(swarm.bounds().contains(&p.position().x));
            assert!(p.best().fx <= *lowest);
            assert_eq!(p.best().fx, *lowest);
            assert_eq!(swarm.fitness(&p.best().x).unwrap(), p.best().fx);
            assert!(fx <= p.best().fx);
        }
    }
}

#[test]
fn invariants_hold_on_every_surface() {
    let objectives: Vec<(Box<dyn Objective>, Float)> = vec![
        (Box::new(Bowl), 100.0),
        (Box::new(Schwefel::new()), 500.0),
        (Box::new(Schwefel::shifted()), 500.0),
        (Box::new(Rastrigin), 5.12),
    ];
    for (objective, limit) in objectives {
        let config = SwarmConfig::default()
            .with_n_particles(25)
            .with_bounds(vec![(-limit, limit); 2])
            .with_velocity_initializer(SwarmVelocityInitializer::Uniform(-limit, limit));
        let mut swarm = Swarm::from_boxed(config, objective, Rng::with_seed(9)).unwrap();
        let checker = Arc::new(RwLock::new(InvariantChecker::default()));
        let callbacks = Callbacks::empty()
            .with_observer(checker.clone())
            .with_terminator(MaxSteps(200));
        swarm.run(callbacks, &NopAbortSignal::new());
        assert!(checker.read().last_best.is_some());
    }
}

#[test]
fn new_objectives_need_no_swarm_changes() {
    // a shifted bowl written as a closure
    let shifted = |x: &DVector<Float>| (x[0] - 3.0).powi(2) + (x[1] + 2.0).powi(2);
    let mut swarm = Swarm::new(bowl_config(), shifted, Rng::with_seed(4)).unwrap();
    for _ in 0..500 {
        swarm.advance_iteration();
    }
    let (x, fx) = swarm.global_best();
    assert!(fx < 1.0);
    assert!((x[0] - 3.0).abs() < 1.0 && (x[1] + 2.0).abs() < 1.0);
}

#[test]
fn boundary_minimum_is_found_without_penalty() {
    // the plane's minimum is the corner (-1, -1), on the edge of the box
    let plane = |x: &DVector<Float>| x.sum();
    let config = SwarmConfig::default()
        .with_n_particles(30)
        .with_bounds(vec![(-1.0, 1.0); 2]);
    let mut swarm = Swarm::new(config, plane, Rng::with_seed(8)).unwrap();
    for _ in 0..300 {
        swarm.advance_iteration();
    }
    let (x, fx) = swarm.global_best();
    assert!(swarm.bounds().contains(&x));
    // reaching the edge costs nothing
    assert_eq!(swarm.fitness(&x).unwrap(), x.sum());
    assert!(fx < -1.9, "global best {fx} at {x:?}");
}

#[test]
fn nan_objective_does_not_panic() {
    let nan_left = |x: &DVector<Float>| if x[0] < 0.0 { Float::NAN } else { x[0] };
    let config = SwarmConfig::default()
        .with_n_particles(10)
        .with_bounds(vec![(-10.0, 10.0)]);
    let mut swarm = Swarm::new(config, nan_left, Rng::with_seed(1)).unwrap();
    for _ in 0..50 {
        swarm.advance_iteration();
    }
    let (_, fx) = swarm.global_best();
    assert!(!fx.is_nan());
    assert!(fx >= 0.0);
}

#[test]
fn configuration_errors_surface_at_construction() {
    assert!(matches!(
        Swarm::new(bowl_config().with_n_particles(0), Bowl, Rng::with_seed(0)),
        Err(SwarmError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Swarm::new(
            bowl_config().with_bounds(Vec::<(Float, Float)>::new()),
            Bowl,
            Rng::with_seed(0)
        ),
        Err(SwarmError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        Swarm::new(
            bowl_config()
                .with_n_particles(1)
                .with_position_initializer(SwarmPositionInitializer::Custom(vec![dvector![1.0]])),
            Bowl,
            Rng::with_seed(0)
        ),
        Err(SwarmError::InvalidDimension {
            expected: 2,
            actual: 1
        })
    ));
}
