//! Test functions with steep ridges and drops
//!
//! Mostly flat landscapes where the minimum sits in a small, steep basin.

use std::f64::consts::PI;

use ndarray::Array1;

use super::{HEDAR, INFINITY77, MOLGA, uniform};
use crate::problem::GlobalOptimum;
use crate::registry::{Category, Definition, Dimensionality, Entry, Status};

/// Steepness of the Michalewicz valleys
const MICHALEWICZ_M: i32 = 10;

/// Easom function - 2D
/// Global minimum: f(x) = -1 at x = (π, π)
/// Bounds: x_i in [-100, 100]
pub fn easom(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -x1.cos() * x2.cos() * (-(x1 - PI).powi(2) - (x2 - PI).powi(2)).exp()
}

/// Michalewicz function with m = 10
/// Global minimum (d = 2): f(x) = -1.8013 at x = (2.20, 1.57)
/// Bounds: x_i in [0, π]
pub fn michalewicz(x: &Array1<f64>) -> f64 {
    -x.iter()
        .enumerate()
        .map(|(i, &xi)| {
            let i = (i + 1) as f64;
            xi.sin() * (i * xi.powi(2) / PI).sin().powi(2 * MICHALEWICZ_M)
        })
        .sum::<f64>()
}

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "5.2 Easom Function",
            category: Category::SteepRidgesDrops,
            dimensionality: Dimensionality::Fixed(2),
            description: "Several local minima. The global minimum has a small area \
                relative to the search space.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: easom,
                bounds: |d| uniform(d, -100.0, 100.0),
                optimum: |_| Some(GlobalOptimum::single(vec![PI, PI], -1.0)),
            }),
        },
        Entry {
            name: "5.3 Michalewicz Function",
            category: Category::SteepRidgesDrops,
            dimensionality: Dimensionality::Parametric,
            description: "d! local minima with steep valleys and ridges. A larger m leads \
                to a more difficult search; m = 10 is used here. The minimum is only \
                known for d = 2.",
            references: &[INFINITY77, HEDAR, MOLGA],
            status: Status::Ready(Definition {
                objective: michalewicz,
                bounds: |d| uniform(d, 0.0, PI),
                optimum: |d| {
                    (d == 2).then(|| GlobalOptimum::single(vec![2.20, 1.57], -1.8013))
                },
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_easom_is_flat_far_from_basin() {
        assert!((easom(&array![PI, PI]) + 1.0).abs() < 1e-15);
        assert!(easom(&array![50.0, -50.0]).abs() < 1e-100);
    }

    #[test]
    fn test_michalewicz_documented_minimum() {
        let value = michalewicz(&array![2.20, 1.57]);
        assert!((value + 1.8013).abs() < 1e-3, "got {}", value);
        assert_eq!(michalewicz(&array![0.0, 0.0, 0.0]), 0.0);
    }
}
