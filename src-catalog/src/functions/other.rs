//! Classical test functions that fit none of the landscape families
//!
//! Includes the Hartmann and Shekel families, whose constants come from
//! Dixon & Szego (1978).

use std::f64::consts::PI;

use ndarray::Array1;

use super::{DIXON_SZEGO, FORRESTER, HEDAR, MOLGA, PICHENY, diagonal, uniform};
use crate::problem::GlobalOptimum;
use crate::registry::{Category, Definition, Dimensionality, Entry, Status};

/// Weights shared by the Hartmann family
const HARTMANN_ALPHA: [f64; 4] = [1.0, 1.2, 3.0, 3.2];

const HARTMANN_3D_A: [[f64; 3]; 4] = [
    [3.0, 10.0, 30.0],
    [0.1, 10.0, 35.0],
    [3.0, 10.0, 30.0],
    [0.1, 10.0, 35.0],
];

/// Scaled by 1e-4 at evaluation
const HARTMANN_3D_P: [[f64; 3]; 4] = [
    [3689.0, 1170.0, 2673.0],
    [4699.0, 4387.0, 7470.0],
    [1091.0, 8732.0, 5547.0],
    [381.0, 5743.0, 8828.0],
];

const HARTMANN_6D_A: [[f64; 6]; 4] = [
    [10.0, 3.0, 17.0, 3.5, 1.7, 8.0],
    [0.05, 10.0, 17.0, 0.1, 8.0, 14.0],
    [3.0, 3.5, 1.7, 10.0, 17.0, 8.0],
    [17.0, 8.0, 0.05, 10.0, 0.1, 14.0],
];

/// Scaled by 1e-4 at evaluation
const HARTMANN_6D_P: [[f64; 6]; 4] = [
    [1312.0, 1696.0, 5569.0, 124.0, 8283.0, 5886.0],
    [2329.0, 4135.0, 8307.0, 3736.0, 1004.0, 9991.0],
    [2348.0, 1451.0, 3522.0, 2883.0, 3047.0, 6650.0],
    [4047.0, 8828.0, 8732.0, 5743.0, 1091.0, 381.0],
];

/// β of the Perm d, β function
const PERM_BETA: f64 = 0.5;

/// Shekel offsets, already scaled by 1/10
const SHEKEL_B: [f64; 10] = [0.1, 0.2, 0.2, 0.4, 0.4, 0.6, 0.3, 0.7, 0.5, 0.5];

/// Shekel centers, indexed `[component][center]`
const SHEKEL_C: [[f64; 10]; 4] = [
    [4.0, 1.0, 8.0, 6.0, 3.0, 2.0, 5.0, 8.0, 6.0, 7.0],
    [4.0, 1.0, 8.0, 6.0, 7.0, 9.0, 3.0, 1.0, 2.0, 3.6],
    [4.0, 1.0, 8.0, 6.0, 3.0, 2.0, 5.0, 8.0, 6.0, 7.0],
    [4.0, 1.0, 8.0, 6.0, 7.0, 9.0, 3.0, 1.0, 2.0, 3.6],
];

/// Beale function - 2D
/// Global minimum: f(x) = 0 at x = (3, 0.5)
/// Bounds: x_i in [-4.5, 4.5]
pub fn beale(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (1.5 - x1 + x1 * x2).powi(2)
        + (2.25 - x1 + x1 * x2.powi(2)).powi(2)
        + (2.625 - x1 + x1 * x2.powi(3)).powi(2)
}

/// Branin function - 2D
/// Global minima: f(x) = 0.397887 at x = (-π, 12.275), (π, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
pub fn branin(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let a = 1.0;
    let b = 5.1 / (4.0 * PI.powi(2));
    let c = 5.0 / PI;
    let r = 6.0;
    let s = 10.0;
    let t = 1.0 / (8.0 * PI);
    a * (x2 - b * x1.powi(2) + c * x1 - r).powi(2) + s * (1.0 - t) * x1.cos() + s
}

/// Colville function - 4D
/// Global minimum: f(x) = 0 at x = (1, 1, 1, 1)
/// Bounds: x_i in [-9, 10]
pub fn colville(x: &Array1<f64>) -> f64 {
    let (x1, x2, x3, x4) = (x[0], x[1], x[2], x[3]);
    100.0 * (x1.powi(2) - x2).powi(2)
        + (x1 - 1.0).powi(2)
        + (x3 - 1.0).powi(2)
        + 90.0 * (x3.powi(2) - x4).powi(2)
        + 10.1 * ((x2 - 1.0).powi(2) + (x4 - 1.0).powi(2))
        + 19.8 * (x2 - 1.0) * (x4 - 1.0)
}

/// Goldstein-Price function - 2D
/// Global minimum: f(x) = 3 at x = (0, -1)
/// Bounds: x_i in [-2, 2]
pub fn goldstein_price(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let a = 1.0
        + (x1 + x2 + 1.0).powi(2)
            * (19.0 - 14.0 * x1 + 3.0 * x1.powi(2) - 14.0 * x2
                + 6.0 * x1 * x2
                + 3.0 * x2.powi(2));
    let b = 30.0
        + (2.0 * x1 - 3.0 * x2).powi(2)
            * (18.0 - 32.0 * x1 + 12.0 * x1.powi(2) + 48.0 * x2 - 36.0 * x1 * x2
                + 27.0 * x2.powi(2));
    a * b
}

fn hartmann<const N: usize>(x: &Array1<f64>, a: &[[f64; N]; 4], p: &[[f64; N]; 4]) -> f64 {
    -HARTMANN_ALPHA
        .iter()
        .zip(a.iter().zip(p.iter()))
        .map(|(&alpha, (a_row, p_row))| {
            let inner: f64 = (0..N)
                .map(|j| a_row[j] * (x[j] - 1e-4 * p_row[j]).powi(2))
                .sum();
            alpha * (-inner).exp()
        })
        .sum::<f64>()
}

/// Hartmann function - 3D
/// Global minimum: f(x) = -3.86278 at x = (0.114614, 0.555649, 0.852547)
/// Bounds: x_i in [0, 1]
pub fn hartmann_3d(x: &Array1<f64>) -> f64 {
    hartmann(x, &HARTMANN_3D_A, &HARTMANN_3D_P)
}

/// Hartmann function - 6D
/// Global minimum: f(x) = -3.32237 at x = (0.20169, 0.150011, 0.476874, 0.275332, 0.311652, 0.6573)
/// Bounds: x_i in [0, 1]
pub fn hartmann_6d(x: &Array1<f64>) -> f64 {
    hartmann(x, &HARTMANN_6D_A, &HARTMANN_6D_P)
}

/// Perm d, β function with β = 0.5
/// Global minimum: f(x) = 0 at x = (1, 2, ..., d)
/// Bounds: x_i in [-d, d]
pub fn perm_d_beta(x: &Array1<f64>) -> f64 {
    let d = x.len();
    (1..=d as i32)
        .map(|i| {
            let inner: f64 = x
                .iter()
                .enumerate()
                .map(|(j, &xj)| {
                    let j = (j + 1) as f64;
                    (j.powi(i) + PERM_BETA) * ((xj / j).powi(i) - 1.0)
                })
                .sum();
            inner.powi(2)
        })
        .sum()
}

/// Shekel function with m = 10 - 4D
/// Global minimum: f(x) = -10.5364 at x = (4, 4, 4, 4)
/// Bounds: x_i in [0, 10]
pub fn shekel(x: &Array1<f64>) -> f64 {
    -(0..SHEKEL_B.len())
        .map(|i| {
            let distance: f64 = (0..4).map(|j| (x[j] - SHEKEL_C[j][i]).powi(2)).sum();
            1.0 / (distance + SHEKEL_B[i])
        })
        .sum::<f64>()
}

/// Styblinski-Tang function
/// Global minimum: f(x) = -39.16617 d at x = (-2.903534, ..., -2.903534)
/// Bounds: x_i in [-5, 5]
pub fn styblinski_tang(x: &Array1<f64>) -> f64 {
    x.iter()
        .map(|&xi| xi.powi(4) - 16.0 * xi.powi(2) + 5.0 * xi)
        .sum::<f64>()
        / 2.0
}

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "6.1 Beale Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(2),
            description: "Multimodal, with sharp peaks at the corners of the input domain.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: beale,
                bounds: |d| uniform(d, -4.5, 4.5),
                optimum: |_| Some(GlobalOptimum::single(vec![3.0, 0.5], 0.0)),
            }),
        },
        Entry {
            name: "6.2 Branin Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(2),
            description: "Three global minima. Uses the recommended constants \
                a = 1, b = 5.1/(4π²), c = 5/π, r = 6, s = 10 and t = 1/(8π).",
            references: &[DIXON_SZEGO, FORRESTER, HEDAR, MOLGA, PICHENY],
            status: Status::Ready(Definition {
                objective: branin,
                bounds: |_| vec![(-5.0, 10.0), (0.0, 15.0)],
                optimum: |_| {
                    Some(GlobalOptimum::new(
                        vec![vec![-PI, 12.275], vec![PI, 2.275], vec![9.42478, 2.475]],
                        0.397887,
                    ))
                },
            }),
        },
        Entry {
            name: "6.3 Colville Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(4),
            description: "Four-dimensional. The lower bound is -9 instead of the usual -10.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: colville,
                bounds: |d| uniform(d, -9.0, 10.0),
                optimum: |d| diagonal(d, 1.0, 0.0),
            }),
        },
        Entry {
            name: "6.4 Forrester et al. (2008) Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(1),
            description: "Simple one-dimensional multimodal function, usually evaluated on [0, 1].",
            references: &[FORRESTER],
            status: Status::NotReady,
        },
        Entry {
            name: "6.5 Goldstein-Price Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(2),
            description: "Several local minima.",
            references: &[DIXON_SZEGO, MOLGA, PICHENY],
            status: Status::Ready(Definition {
                objective: goldstein_price,
                bounds: |d| uniform(d, -2.0, 2.0),
                optimum: |_| Some(GlobalOptimum::single(vec![0.0, -1.0], 3.0)),
            }),
        },
        Entry {
            name: "6.6 Hartmann 3-D Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(3),
            description: "Four local minima.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: hartmann_3d,
                bounds: |d| uniform(d, 0.0, 1.0),
                optimum: |_| {
                    Some(GlobalOptimum::single(
                        vec![0.114614, 0.555649, 0.852547],
                        -3.86278,
                    ))
                },
            }),
        },
        Entry {
            name: "6.7 Hartmann 4-D Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(4),
            description: "Four-dimensional member of the Hartmann family, \
                rescaled to zero mean and unit variance.",
            references: &[DIXON_SZEGO, PICHENY],
            status: Status::NotReady,
        },
        Entry {
            name: "6.8 Hartmann 6-D Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(6),
            description: "Six local minima.",
            references: &[DIXON_SZEGO, HEDAR, PICHENY],
            status: Status::Ready(Definition {
                objective: hartmann_6d,
                bounds: |d| uniform(d, 0.0, 1.0),
                optimum: |_| {
                    Some(GlobalOptimum::single(
                        vec![0.20169, 0.150011, 0.476874, 0.275332, 0.311652, 0.6573],
                        -3.32237,
                    ))
                },
            }),
        },
        Entry {
            name: "6.9 Perm Function d, β",
            category: Category::Other,
            dimensionality: Dimensionality::Parametric,
            description: "Perm function with β = 0.5.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: perm_d_beta,
                bounds: |d| uniform(d, -(d as f64), d as f64),
                optimum: |d| {
                    let location = (1..=d).map(|i| i as f64).collect();
                    Some(GlobalOptimum::single(location, 0.0))
                },
            }),
        },
        Entry {
            name: "6.11 Shekel Function",
            category: Category::Other,
            dimensionality: Dimensionality::Fixed(4),
            description: "Four-dimensional with m = 10 local minima.",
            references: &[],
            status: Status::Ready(Definition {
                objective: shekel,
                bounds: |d| uniform(d, 0.0, 10.0),
                optimum: |d| diagonal(d, 4.0, -10.5364),
            }),
        },
        Entry {
            name: "6.12 Styblinski-Tang Function",
            category: Category::Other,
            dimensionality: Dimensionality::Parametric,
            description: "Usually evaluated on the hypercube [-5, 5]^d.",
            references: &[],
            status: Status::Ready(Definition {
                objective: styblinski_tang,
                bounds: |d| uniform(d, -5.0, 5.0),
                optimum: |d| diagonal(d, -2.903534, -39.16617 * d as f64),
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_branin_three_minima() {
        for x in [array![-PI, 12.275], array![PI, 2.275], array![9.42478, 2.475]] {
            let value = branin(&x);
            assert!((value - 0.397887).abs() < 1e-5, "branin({}) = {}", x, value);
        }
    }

    #[test]
    fn test_goldstein_price_minimum() {
        assert!((goldstein_price(&array![0.0, -1.0]) - 3.0).abs() < 1e-12);
        assert!(goldstein_price(&array![0.0, 0.0]) > 3.0);
    }

    #[test]
    fn test_hartmann_minima() {
        let h3 = hartmann_3d(&array![0.114614, 0.555649, 0.852547]);
        assert!((h3 + 3.86278).abs() < 1e-4, "hartmann 3d: {}", h3);

        let h6 = hartmann_6d(&array![0.20169, 0.150011, 0.476874, 0.275332, 0.311652, 0.6573]);
        assert!((h6 + 3.32237).abs() < 1e-4, "hartmann 6d: {}", h6);
    }

    #[test]
    fn test_shekel_minimum_and_far_field() {
        let value = shekel(&array![4.0, 4.0, 4.0, 4.0]);
        assert!((value + 10.5364).abs() < 1e-3, "shekel: {}", value);
        assert!(shekel(&array![10.0, 0.0, 10.0, 0.0]) > -1.0);
    }

    #[test]
    fn test_perm_d_beta_vanishes_at_indices() {
        assert_eq!(perm_d_beta(&array![1.0, 2.0, 3.0]), 0.0);
        assert!(perm_d_beta(&array![2.0, 1.0]) > 0.0);
    }

    #[test]
    fn test_styblinski_tang_scales_with_dimension() {
        let one = styblinski_tang(&array![-2.903534]);
        let three = styblinski_tang(&array![-2.903534, -2.903534, -2.903534]);
        assert!((three - 3.0 * one).abs() < 1e-9);
        assert!((one + 39.16617).abs() < 1e-4);
    }
}
