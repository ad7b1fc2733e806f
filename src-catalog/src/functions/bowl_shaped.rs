//! Bowl-shaped test functions
//!
//! Convex or nearly convex landscapes with a single basin.

use std::f64::consts::PI;

use ndarray::Array1;

use super::{ADORIO, DIXON_SZEGO, HEDAR, MOLGA, PICHENY, diagonal, uniform};
use crate::problem::GlobalOptimum;
use crate::registry::{Category, Definition, Dimensionality, Entry, Status};

/// β of the Perm 0, d, β function
const PERM_0_BETA: f64 = 10.0;

/// Bohachevsky function (first of the family)
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-99, 100]
pub fn bohachevsky1(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    x1.powi(2) + 2.0 * x2.powi(2) - 0.3 * (3.0 * PI * x1).cos() - 0.4 * (4.0 * PI * x2).cos()
        + 0.7
}

/// Perm 0, d, β function with β = 10
/// Global minimum: f(x) = 0 at x = (1, 1/2, ..., 1/d)
/// Bounds: x_i in [-2, 2]
pub fn perm_0_d_beta(x: &Array1<f64>) -> f64 {
    let d = x.len();
    (1..=d as i32)
        .map(|i| {
            let inner: f64 = x
                .iter()
                .enumerate()
                .map(|(j, &xj)| {
                    let j = (j + 1) as f64;
                    (j + PERM_0_BETA) * (xj.powi(i) - (1.0 / j).powi(i))
                })
                .sum();
            inner.powi(2)
        })
        .sum()
}

/// Rotated Hyper-Ellipsoid function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-59, 60]
pub fn rotated_hyper_ellipsoid(x: &Array1<f64>) -> f64 {
    let mut partial = 0.0;
    let mut total = 0.0;
    for &xi in x.iter() {
        partial += xi.powi(2);
        total += partial;
    }
    total
}

/// Sphere function, modified form of Picheny et al. (2012), 6-D
/// Global minimum: f(x) = -1745/899 at x = (0, ..., 0)
/// Bounds: x_i in [-0.9, 1]
pub fn sphere_modified(x: &Array1<f64>) -> f64 {
    let sum: f64 = x
        .iter()
        .take(6)
        .enumerate()
        .map(|(i, &xi)| xi.powi(2) * 2f64.powi(i as i32 + 1))
        .sum();
    (sum - 1745.0) / 899.0
}

/// Sum of Different Powers function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-0.9, 1]
pub fn sum_of_different_powers(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| xi.abs().powi(i as i32 + 2))
        .sum()
}

/// Sum Squares (axis parallel hyper-ellipsoid) function
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-9, 10]
pub fn sum_squares(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (i + 1) as f64 * xi.powi(2))
        .sum()
}

/// Trid function
/// Global minimum: f(x) = -d(d+4)(d-1)/6 at x_i = i(d+1-i)
/// Bounds: x_i in [-0.9 d², d²]
pub fn trid(x: &Array1<f64>) -> f64 {
    let squares: f64 = x.iter().map(|&xi| (xi - 1.0).powi(2)).sum();
    let products: f64 = x.iter().zip(x.iter().skip(1)).map(|(a, b)| a * b).sum();
    squares - products
}

fn trid_optimum(d: usize) -> Option<GlobalOptimum> {
    let location = (1..=d).map(|i| (i * (d + 1 - i)) as f64).collect();
    let d = d as f64;
    Some(GlobalOptimum::single(location, -d * (d + 4.0) * (d - 1.0) / 6.0))
}

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "2.1 Bohachevsky Functions",
            category: Category::BowlShaped,
            dimensionality: Dimensionality::Fixed(2),
            description: "The Bohachevsky functions share a similar bowl shape; this is the first one. \
                The lower bound is -99 instead of the usual -100.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: bohachevsky1,
                bounds: |d| uniform(d, -99.0, 100.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "2.2 Perm Function 0, d, β",
            category: Category::BowlShaped,
            dimensionality: Dimensionality::Parametric,
            description: "Perm function with β = 10. Usually evaluated on [-d, d]; \
                this catalog uses [-2, 2], which contains the optimum for every d.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: perm_0_d_beta,
                bounds: |d| uniform(d, -2.0, 2.0),
                optimum: |d| {
                    let location = (1..=d).map(|i| 1.0 / i as f64).collect();
                    Some(GlobalOptimum::single(location, 0.0))
                },
            }),
        },
        Entry {
            name: "2.3 Rotated Hyper-Ellipsoid Function",
            category: Category::BowlShaped,
            dimensionality: Dimensionality::Parametric,
            description: "Continuous, convex and unimodal. An extension of the axis parallel \
                hyper-ellipsoid (Sum Squares) function.",
            references: &[MOLGA],
            status: Status::Ready(Definition {
                objective: rotated_hyper_ellipsoid,
                bounds: |d| uniform(d, -59.0, 60.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "2.4 Sphere Function Modified",
            category: Category::BowlShaped,
            dimensionality: Dimensionality::Fixed(6),
            description: "Weighted, shifted and scaled sphere in six dimensions. Continuous, \
                convex and unimodal. The lower bound is -0.9 instead of the usual -1.",
            references: &[DIXON_SZEGO, MOLGA, PICHENY],
            status: Status::Ready(Definition {
                objective: sphere_modified,
                bounds: |d| uniform(d, -0.9, 1.0),
                optimum: |d| diagonal(d, 0.0, -1745.0 / 899.0),
            }),
        },
        Entry {
            name: "2.5 Sum of Different Powers Function",
            category: Category::BowlShaped,
            dimensionality: Dimensionality::Parametric,
            description: "Unimodal. The lower bound is -0.9 instead of the usual -1.",
            references: &[MOLGA],
            status: Status::Ready(Definition {
                objective: sum_of_different_powers,
                bounds: |d| uniform(d, -0.9, 1.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "2.6 Sum Squares Function",
            category: Category::BowlShaped,
            dimensionality: Dimensionality::Parametric,
            description: "Also called the axis parallel hyper-ellipsoid. Continuous, convex and \
                unimodal. The lower bound is -9 instead of the usual -10.",
            references: &[HEDAR, MOLGA],
            status: Status::Ready(Definition {
                objective: sum_squares,
                bounds: |d| uniform(d, -9.0, 10.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "2.7 Trid Function",
            category: Category::BowlShaped,
            dimensionality: Dimensionality::Parametric,
            description: "No local minimum except the global one. \
                The lower bound is -0.9 d² instead of the usual -d².",
            references: &[ADORIO, HEDAR],
            status: Status::Ready(Definition {
                objective: trid,
                bounds: |d| {
                    let d2 = (d * d) as f64;
                    uniform(d, -0.9 * d2, d2)
                },
                optimum: trid_optimum,
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_trid_optimum_closed_form() {
        for d in 1..=8 {
            let optimum = trid_optimum(d).unwrap();
            let value = trid(&optimum.locations[0]);
            assert!(
                (value - optimum.value).abs() < 1e-9,
                "trid {}d: {} vs {}",
                d,
                value,
                optimum.value
            );
        }
        // d = 2 gives x = (2, 2), f = -2
        assert_eq!(trid_optimum(2).unwrap().locations[0], array![2.0, 2.0]);
    }

    #[test]
    fn test_perm_0_d_beta_vanishes_at_reciprocals() {
        assert!(perm_0_d_beta(&array![1.0, 0.5]).abs() < 1e-12);
        assert!(perm_0_d_beta(&array![1.0, 0.5, 1.0 / 3.0, 0.25]).abs() < 1e-12);
        // i = 1: 11 * (-0.5) + 12 * 0.5, i = 2: 11 * (-0.75) + 12 * 0.75
        assert!((perm_0_d_beta(&array![0.5, 1.0]) - 0.8125).abs() < 1e-12);
    }

    #[test]
    fn test_rotated_hyper_ellipsoid_accumulates_prefixes() {
        // (1) + (1 + 4) + (1 + 4 + 9)
        assert_eq!(rotated_hyper_ellipsoid(&array![1.0, 2.0, 3.0]), 20.0);
    }

    #[test]
    fn test_sphere_modified_weights() {
        let x = array![1.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        // 2 + 64
        assert!((sphere_modified(&x) - (66.0 - 1745.0) / 899.0).abs() < 1e-12);
    }

    #[test]
    fn test_sum_of_different_powers() {
        // |0.5|^2 + |-0.5|^3
        assert!((sum_of_different_powers(&array![0.5, -0.5]) - 0.375).abs() < 1e-15);
    }
}
