//! Shared helpers for catalog integration tests

#![allow(dead_code)]

use ndarray::Array1;
use optbench_catalog::{Dimensionality, Problem, get_problem, get_problem_with_dimensions, list_functions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Dimensionalities exercised for dimension-parametric functions
pub const PARAMETRIC_DIMS: [usize; 5] = [1, 2, 3, 5, 10];

/// Every implemented problem, once per dimensionality under test
pub fn implemented_problems() -> Vec<Problem> {
    let mut problems = Vec::new();
    for info in list_functions().into_iter().filter(|info| info.implemented) {
        match info.dimensionality {
            Dimensionality::Fixed(_) => problems.push(get_problem(info.name).unwrap()),
            Dimensionality::Parametric => {
                for d in PARAMETRIC_DIMS {
                    problems.push(get_problem_with_dimensions(info.name, d).unwrap());
                }
            }
        }
    }
    problems
}

/// Uniform sample inside the bounds of `problem`
pub fn sample_in_bounds(problem: &Problem, rng: &mut StdRng) -> Array1<f64> {
    problem
        .lower_bound()
        .iter()
        .zip(problem.upper_bound().iter())
        .map(|(&lo, &hi)| rng.random_range(lo..=hi))
        .collect()
}

/// Deterministic generator for reproducible sampling
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
