//! Plate-shaped test functions
//!
//! Flat landscapes where the gradient gives little guidance near the optimum.

use ndarray::Array1;

use super::{ADORIO, HEDAR, diagonal, uniform};
use crate::problem::GlobalOptimum;
use crate::registry::{Category, Definition, Dimensionality, Entry, Status};

/// Booth function - 2D
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2)
}

/// Matyas function - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-9, 10]
pub fn matyas(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    0.26 * (x1.powi(2) + x2.powi(2)) - 0.48 * x1 * x2
}

/// McCormick function - 2D
/// Global minimum: f(x) = -1.9133 at x = (-0.54719, -1.54719)
/// Bounds: x1 in [-1.5, 4], x2 in [-3, 4]
pub fn mccormick(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (x1 + x2).sin() + (x1 - x2).powi(2) - 1.5 * x1 + 2.5 * x2 + 1.0
}

/// Zakharov function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 10]
pub fn zakharov(x: &Array1<f64>) -> f64 {
    let sum1: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum2: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| 0.5 * (i + 1) as f64 * xi)
        .sum();
    sum1 + sum2.powi(2) + sum2.powi(4)
}

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "3.1 Booth Function",
            category: Category::PlateShaped,
            dimensionality: Dimensionality::Fixed(2),
            description: "Plate-shaped quadratic with its minimum away from the origin.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: booth,
                bounds: |d| uniform(d, -10.0, 10.0),
                optimum: |_| Some(GlobalOptimum::single(vec![1.0, 3.0], 0.0)),
            }),
        },
        Entry {
            name: "3.2 Matyas Function",
            category: Category::PlateShaped,
            dimensionality: Dimensionality::Fixed(2),
            description: "No local minimum except the global one. \
                The lower bound is -9 instead of the usual -10.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: matyas,
                bounds: |d| uniform(d, -9.0, 10.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "3.3 McCormick Function",
            category: Category::PlateShaped,
            dimensionality: Dimensionality::Fixed(2),
            description: "Usually evaluated on x1 in [-1.5, 4] and x2 in [-3, 4].",
            references: &[ADORIO],
            status: Status::Ready(Definition {
                objective: mccormick,
                bounds: |_| vec![(-1.5, 4.0), (-3.0, 4.0)],
                optimum: |_| Some(GlobalOptimum::single(vec![-0.54719, -1.54719], -1.9133)),
            }),
        },
        Entry {
            name: "3.4 Power Sum Function",
            category: Category::PlateShaped,
            dimensionality: Dimensionality::Fixed(4),
            description: "Usually evaluated on [0, d] for all components.",
            references: &[HEDAR],
            status: Status::NotReady,
        },
        Entry {
            name: "3.5 Zakharov Function",
            category: Category::PlateShaped,
            dimensionality: Dimensionality::Parametric,
            description: "No local minimum except the global one.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: zakharov,
                bounds: |d| uniform(d, -5.0, 10.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_booth_minimum() {
        assert_eq!(booth(&array![1.0, 3.0]), 0.0);
        assert_eq!(booth(&array![0.0, 0.0]), 74.0);
    }

    #[test]
    fn test_matyas_is_symmetric() {
        let a = matyas(&array![1.5, -2.0]);
        let b = matyas(&array![-2.0, 1.5]);
        assert!((a - b).abs() < 1e-15);
    }

    #[test]
    fn test_mccormick_documented_minimum() {
        let value = mccormick(&array![-0.54719, -1.54719]);
        assert!((value + 1.9133).abs() < 1e-3, "got {}", value);
    }

    #[test]
    fn test_zakharov_weights() {
        // sum1 = 1, sum2 = 1 (the second component weighs 0.5 * 2)
        assert!((zakharov(&array![0.0, 1.0]) - 3.0).abs() < 1e-15);
    }
}
