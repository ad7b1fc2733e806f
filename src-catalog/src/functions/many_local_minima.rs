//! Functions with many local minima
//!
//! These landscapes are rugged and highly multimodal; they test the global
//! search capabilities of an optimizer.

use std::f64::consts::{E, PI};

use ndarray::Array1;

use super::{
    ADORIO, BACK, GEATBX, GRAMACY_LEE, HEDAR, INFINITY77, LAGUNA_MARTI, MOLGA, POHLHEIM, RANJAN,
    WIKIPEDIA, diagonal, uniform,
};
use crate::problem::GlobalOptimum;
use crate::registry::{Category, Definition, Dimensionality, Entry, Status};

/// Ackley function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-39, 40]
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}

/// Bukin N.6 function - many local minima lying on a ridge
/// Global minimum: f(x) = 0 at x = (-10, 1)
/// Bounds: x1 in [-15, -5], x2 in [-3, 3]
pub fn bukin_n6(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    100.0 * (x2 - 0.01 * x1.powi(2)).abs().sqrt() + 0.01 * (x1 + 10.0).abs()
}

/// Cross-in-Tray function - four symmetric global minima
/// Global minimum: f(x) = -2.06261 at x = (±1.3491, ±1.3491)
/// Bounds: x_i in [-10, 10]
pub fn cross_in_tray(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let fact1 = x1.sin() * x2.sin();
    let fact2 = (100.0 - (x1.powi(2) + x2.powi(2)).sqrt() / PI).abs().exp();
    -0.0001 * ((fact1 * fact2).abs() + 1.0).powf(0.1)
}

/// Drop-Wave function
/// Global minimum: f(x) = -1 at x = (0, 0)
/// Bounds: x_i in [-1.9, 2]
pub fn drop_wave(x: &Array1<f64>) -> f64 {
    let r2 = x[0].powi(2) + x[1].powi(2);
    -(1.0 + (12.0 * r2.sqrt()).cos()) / (0.5 * r2 + 2.0)
}

/// Eggholder function - highly multimodal
/// Global minimum: f(x) = -959.6407 at x = (512, 404.2319)
/// Bounds: x_i in [-512, 512]
pub fn eggholder(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    -(x2 + 47.0) * (x2 + x1 / 2.0 + 47.0).abs().sqrt().sin()
        - x1 * (x1 - (x2 + 47.0)).abs().sqrt().sin()
}

/// Griewank function - regularly distributed local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-9, 10]
pub fn griewank(x: &Array1<f64>) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum_squares / 4000.0 - product_cos + 1.0
}

/// Holder Table function - four global minima at the corners
/// Global minimum: f(x) = -19.2085 at x = (±8.05502, ±9.66459)
/// Bounds: x_i in [-10, 10]
pub fn holder_table(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let fact1 = x1.sin() * x2.cos();
    let fact2 = (1.0 - (x1.powi(2) + x2.powi(2)).sqrt() / PI).abs().exp();
    -(fact1 * fact2).abs()
}

/// Levy function - N-dimensional
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-9, 10]
pub fn levy(x: &Array1<f64>) -> f64 {
    let w: Vec<f64> = x.iter().map(|&xi| 1.0 + (xi - 1.0) / 4.0).collect();
    let wd = w[w.len() - 1];

    let first = (PI * w[0]).sin().powi(2);
    let middle: f64 = w[..w.len() - 1]
        .iter()
        .map(|&wi| (wi - 1.0).powi(2) * (1.0 + 10.0 * (PI * wi + 1.0).sin().powi(2)))
        .sum();
    let last = (wd - 1.0).powi(2) * (1.0 + (2.0 * PI * wd).sin().powi(2));

    first + middle + last
}

/// Lévy function N.13
/// Global minimum: f(x) = 0 at x = (1, 1)
/// Bounds: x_i in [-10, 10]
pub fn levy_n13(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (3.0 * PI * x1).sin().powi(2)
        + (x1 - 1.0).powi(2) * (1.0 + (3.0 * PI * x2).sin().powi(2))
        + (x2 - 1.0).powi(2) * (1.0 + (2.0 * PI * x2).sin().powi(2))
}

/// Rastrigin function - N-dimensional, regularly spaced local minima
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-4, 5]
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Schaffer function N.2
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-4, 5]
pub fn schaffer_n2(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let numerator = (x1.powi(2) - x2.powi(2)).sin().powi(2) - 0.5;
    let denominator = (1.0 + 0.001 * (x1.powi(2) + x2.powi(2))).powi(2);
    0.5 + numerator / denominator
}

/// Schaffer function N.4
/// Global minimum: f(x) = 0.292579 at x = (0, ±1.25313) and (±1.25313, 0)
/// Bounds: x_i in [-50, 50]
pub fn schaffer_n4(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    let numerator = (x1.powi(2) - x2.powi(2)).abs().sin().cos().powi(2) - 0.5;
    let denominator = (1.0 + 0.001 * (x1.powi(2) + x2.powi(2))).powi(2);
    0.5 + numerator / denominator
}

/// Schwefel function - deceptive, optimum far from the next best minima
/// Global minimum: f(x) = 0 at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum();
    418.9829 * n - sum
}

/// Shubert function - 18 global minima among many local ones
/// Global minimum: f(x) = -186.7309 at e.g. x = (-1.425128, -0.800273)
/// Bounds: x_i in [-10, 10]
pub fn shubert(x: &Array1<f64>) -> f64 {
    let term = |xi: f64| -> f64 {
        (1..=5)
            .map(|i| {
                let i = i as f64;
                i * ((i + 1.0) * xi + i).cos()
            })
            .sum()
    };
    term(x[0]) * term(x[1])
}

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "1.1 Ackley Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Parametric,
            description: "Nearly flat outer region with a large hole at the centre. \
                Hill-climbing methods risk being trapped in one of its many local minima. \
                The lower bound is -39 instead of the usual -40.",
            references: &[ADORIO, MOLGA, BACK],
            status: Status::Ready(Definition {
                objective: ackley,
                bounds: |d| uniform(d, -39.0, 40.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "1.2 Bukin Function N. 6",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "Many local minima, all lying in a ridge.",
            references: &[INFINITY77],
            status: Status::Ready(Definition {
                objective: bukin_n6,
                bounds: |_| vec![(-15.0, -5.0), (-3.0, 3.0)],
                optimum: |_| Some(GlobalOptimum::single(vec![-10.0, 1.0], 0.0)),
            }),
        },
        Entry {
            name: "1.3 Cross-in-Tray Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "Multiple global minima arranged in a characteristic cross.",
            references: &[WIKIPEDIA],
            status: Status::Ready(Definition {
                objective: cross_in_tray,
                bounds: |d| uniform(d, -10.0, 10.0),
                optimum: |_| {
                    Some(GlobalOptimum::new(
                        vec![
                            vec![1.3491, -1.3491],
                            vec![1.3491, 1.3491],
                            vec![-1.3491, 1.3491],
                            vec![-1.3491, -1.3491],
                        ],
                        -2.06261,
                    ))
                },
            }),
        },
        Entry {
            name: "1.4 Drop-Wave Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "Multimodal and highly complex, with concentric ripples. \
                The lower bound is -1.9 instead of the usual -2.",
            references: &[INFINITY77],
            status: Status::Ready(Definition {
                objective: drop_wave,
                bounds: |d| uniform(d, -1.9, 2.0),
                optimum: |d| diagonal(d, 0.0, -1.0),
            }),
        },
        Entry {
            name: "1.5 Eggholder Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "Difficult to optimize because of the large number of local minima. \
                The optimum sits on the upper bound of the first variable.",
            references: &[INFINITY77],
            status: Status::Ready(Definition {
                objective: eggholder,
                bounds: |d| uniform(d, -512.0, 512.0),
                optimum: |_| Some(GlobalOptimum::single(vec![512.0, 404.2319], -959.6407)),
            }),
        },
        Entry {
            name: "1.6 Gramacy & Lee (2012) Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(1),
            description: "Simple one-dimensional test function.",
            references: &[GRAMACY_LEE, RANJAN],
            status: Status::NotReady,
        },
        Entry {
            name: "1.7 Griewank Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Parametric,
            description: "Many widespread, regularly distributed local minima. \
                The lower bound is -9 instead of the usual -10.",
            references: &[HEDAR, MOLGA],
            status: Status::Ready(Definition {
                objective: griewank,
                bounds: |d| uniform(d, -9.0, 10.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "1.8 Holder Table Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "Many local minima and four global minima near the corners.",
            references: &[INFINITY77, WIKIPEDIA],
            status: Status::Ready(Definition {
                objective: holder_table,
                bounds: |d| uniform(d, -10.0, 10.0),
                optimum: |_| {
                    Some(GlobalOptimum::new(
                        vec![
                            vec![8.05502, 9.66459],
                            vec![8.05502, -9.66459],
                            vec![-8.05502, 9.66459],
                            vec![-8.05502, -9.66459],
                        ],
                        -19.2085,
                    ))
                },
            }),
        },
        Entry {
            name: "1.9 Langermann Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Parametric,
            description: "Multimodal, with many unevenly distributed local minima.",
            references: &[ADORIO, MOLGA],
            status: Status::NotReady,
        },
        Entry {
            name: "1.10 Levy Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Parametric,
            description: "Usually evaluated on the hypercube. \
                The lower bound is -9 instead of the usual -10.",
            references: &[INFINITY77, LAGUNA_MARTI],
            status: Status::Ready(Definition {
                objective: levy,
                bounds: |d| uniform(d, -9.0, 10.0),
                optimum: |d| diagonal(d, 1.0, 0.0),
            }),
        },
        Entry {
            name: "1.11 Levy Function N. 13",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "Usually evaluated on the square.",
            references: &[INFINITY77],
            status: Status::Ready(Definition {
                objective: levy_n13,
                bounds: |d| uniform(d, -10.0, 10.0),
                optimum: |d| diagonal(d, 1.0, 0.0),
            }),
        },
        Entry {
            name: "1.12 Rastrigin Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Parametric,
            description: "Highly multimodal, but the minima are regularly distributed. \
                The lower bound is -4 instead of the usual -5.",
            references: &[HEDAR, POHLHEIM],
            status: Status::Ready(Definition {
                objective: rastrigin,
                bounds: |d| uniform(d, -4.0, 5.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "1.13 Schaffer Function N. 2",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "The second Schaffer function. \
                The lower bound is -4 instead of the usual -5.",
            references: &[WIKIPEDIA],
            status: Status::Ready(Definition {
                objective: schaffer_n2,
                bounds: |d| uniform(d, -4.0, 5.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "1.14 Schaffer Function N. 4",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "The fourth Schaffer function, with four symmetric global minima \
                on the axes.",
            references: &[WIKIPEDIA],
            status: Status::Ready(Definition {
                objective: schaffer_n4,
                bounds: |d| uniform(d, -50.0, 50.0),
                optimum: |_| {
                    Some(GlobalOptimum::new(
                        vec![
                            vec![0.0, 1.25313],
                            vec![0.0, -1.25313],
                            vec![1.25313, 0.0],
                            vec![-1.25313, 0.0],
                        ],
                        0.292579,
                    ))
                },
            }),
        },
        Entry {
            name: "1.15 Schwefel Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Parametric,
            description: "Complex, with many local minima far from the global one.",
            references: &[GEATBX, INFINITY77, HEDAR, LAGUNA_MARTI],
            status: Status::Ready(Definition {
                objective: schwefel,
                bounds: |d| uniform(d, -500.0, 500.0),
                optimum: |d| diagonal(d, 420.9687, 0.0),
            }),
        },
        Entry {
            name: "1.16 Shubert Function",
            category: Category::ManyLocalMinima,
            dimensionality: Dimensionality::Fixed(2),
            description: "Several local minima and many global minima.",
            references: &[HEDAR],
            status: Status::Ready(Definition {
                objective: shubert,
                bounds: |d| uniform(d, -10.0, 10.0),
                optimum: |_| {
                    Some(GlobalOptimum::single(vec![-1.425128, -0.800273], -186.7309))
                },
            }),
        },
    ]
}
