use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fastrand::Rng;
use swarmfit::{
    objectives::{Bowl, Schwefel},
    swarm::{Swarm, SwarmConfig, SwarmUpdateMethod},
    traits::Objective,
    Float,
};

fn bench_surface<O: Objective + Clone + 'static>(
    c: &mut Criterion,
    name: &str,
    objective: O,
    limit: Float,
) {
    let mut group = c.benchmark_group(name);
    for n in [2, 5, 10] {
        for method in [SwarmUpdateMethod::Asynchronous, SwarmUpdateMethod::Synchronous] {
            let cfg = SwarmConfig::default()
                .with_n_particles(100)
                .with_bounds(vec![(-limit, limit); n])
                .with_update_method(method);
            group.bench_with_input(
                BenchmarkId::new(format!("{method:?}"), n),
                &n,
                |b, _ndim| {
                    b.iter_batched(
                        || {
                            Swarm::new(cfg.clone(), objective.clone(), Rng::with_seed(0))
                                .unwrap()
                        },
                        |mut swarm| {
                            for _ in 0..10 {
                                swarm.advance_iteration();
                            }
                            black_box(swarm.global_best());
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

fn swarm_benchmark(c: &mut Criterion) {
    bench_surface(c, "Swarm (Bowl)", Bowl, 100.0);
    bench_surface(c, "Swarm (Schwefel)", Schwefel::new(), 500.0);
}

criterion_group!(benches, swarm_benchmark);
criterion_main!(benches);
