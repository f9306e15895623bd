use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::DVector;
use hamdyn_core::State;
use hamdyn_solver::solver::{finite_difference_gradient, DoublePendulum, GradientMode, Hamiltonian,
                            HarmonicOscillator, Integrator, Solver};

pub fn gradient_bench(c: &mut Criterion) {
    let pendulum = DoublePendulum::default();
    let q = DVector::from_vec(vec![0.3, -0.2]);
    let p = DVector::from_vec(vec![0.1, 0.05]);
    c.bench_function("double pendulum analytic gradient", |b|
        b.iter(|| pendulum.analytic_gradient(black_box(&q), black_box(&p))));
    c.bench_function("double pendulum finite-difference gradient", |b|
        b.iter(|| finite_difference_gradient(&pendulum, black_box(&q), black_box(&p), 1e-4)));
}

pub fn integrator_bench(c: &mut Criterion) {
    for integrator in [Integrator::SymplecticEuler, Integrator::ExplicitMidpoint, Integrator::FiniteDifferenceRk4] {
        let state = State::new(vec![1.0, 1.0], vec![0.0, 0.0]).unwrap();
        let solver = Solver::new(state, HarmonicOscillator::new(), integrator, 1e-4).unwrap();
        c.bench_function(&format!("harmonic {} 100 steps", integrator.name()), |b| b.iter(|| {
            let mut solver = solver.clone();
            solver.update(black_box(0.01)).unwrap()
        }));
    }
    let state = State::new(vec![0.3, -0.2], vec![0.1, 0.05]).unwrap();
    let solver = Solver::new(state, DoublePendulum::default(), Integrator::ExplicitMidpoint, 1e-4)
        .unwrap()
        .with_gradient_mode(GradientMode::Analytic)
        .unwrap();
    c.bench_function("double pendulum explicit_midpoint 100 steps", |b| b.iter(|| {
        let mut solver = solver.clone();
        solver.update(black_box(0.01)).unwrap()
    }));
}

criterion_group!(solver_benches, gradient_bench, integrator_bench);
criterion_main!(solver_benches);
