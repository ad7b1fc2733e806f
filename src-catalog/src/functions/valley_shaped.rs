//! Valley-shaped test functions
//!
//! The minimum lies inside a long, narrow, flat valley: finding the valley is
//! easy, converging along it is not.

use ndarray::Array1;

use super::{DIXON_SZEGO, HEDAR, INFINITY77, MOLGA, PICHENY, WIKIPEDIA, diagonal, uniform};
use crate::problem::GlobalOptimum;
use crate::registry::{Category, Definition, Dimensionality, Entry, Status};

/// Three-hump camel function - 2D
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-4, 5]
pub fn three_hump_camel(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    2.0 * x1.powi(2) - 1.05 * x1.powi(4) + x1.powi(6) / 6.0 + x1 * x2 + x2.powi(2)
}

/// Six-hump camel function - 2D
/// Global minima: f(x) = -1.0316 at x = (0.0898, -0.7126) and (-0.0898, 0.7126)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
pub fn six_hump_camel(x: &Array1<f64>) -> f64 {
    let (x1, x2) = (x[0], x[1]);
    (4.0 - 2.1 * x1.powi(2) + x1.powi(4) / 3.0) * x1.powi(2)
        + x1 * x2
        + (-4.0 + 4.0 * x2.powi(2)) * x2.powi(2)
}

/// Dixon-Price function
/// Global minimum: f(x) = 0 at x_i = 2^(-(2^i - 2) / 2^i)
/// Bounds: x_i in [-9, 10]
pub fn dixon_price(x: &Array1<f64>) -> f64 {
    let head = (x[0] - 1.0).powi(2);
    let tail: f64 = x
        .iter()
        .zip(x.iter().skip(1))
        .enumerate()
        .map(|(k, (&prev, &xi))| (k + 2) as f64 * (2.0 * xi.powi(2) - prev).powi(2))
        .sum();
    head + tail
}

fn dixon_price_optimum(d: usize) -> Option<GlobalOptimum> {
    let location = (1..=d as i32)
        .map(|i| {
            let p = 2f64.powi(i);
            2f64.powf(-(p - 2.0) / p)
        })
        .collect();
    Some(GlobalOptimum::single(location, 0.0))
}

/// Rosenbrock function
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5, 10]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.iter()
        .zip(x.iter().skip(1))
        .map(|(&xi, &xn)| 100.0 * (xn - xi.powi(2)).powi(2) + (xi - 1.0).powi(2))
        .sum()
}

pub(crate) fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "4.1 Three-Hump Camel Function",
            category: Category::ValleyShaped,
            dimensionality: Dimensionality::Fixed(2),
            description: "Three local minima. Usually evaluated on [-5, 5]; \
                the lower bound here is -4.",
            references: &[WIKIPEDIA],
            status: Status::Ready(Definition {
                objective: three_hump_camel,
                bounds: |d| uniform(d, -4.0, 5.0),
                optimum: |d| diagonal(d, 0.0, 0.0),
            }),
        },
        Entry {
            name: "4.2 Six-Hump Camel Function",
            category: Category::ValleyShaped,
            dimensionality: Dimensionality::Fixed(2),
            description: "Six local minima, two of which are global.",
            references: &[MOLGA],
            status: Status::Ready(Definition {
                objective: six_hump_camel,
                bounds: |_| vec![(-3.0, 3.0), (-2.0, 2.0)],
                optimum: |_| {
                    Some(GlobalOptimum::new(
                        vec![vec![0.0898, -0.7126], vec![-0.0898, 0.7126]],
                        -1.0316,
                    ))
                },
            }),
        },
        Entry {
            name: "4.3 Dixon-Price Function",
            category: Category::ValleyShaped,
            dimensionality: Dimensionality::Parametric,
            description: "Valley-shaped. The lower bound is -9 instead of the usual -10.",
            references: &[INFINITY77],
            status: Status::Ready(Definition {
                objective: dixon_price,
                bounds: |d| uniform(d, -9.0, 10.0),
                optimum: dixon_price_optimum,
            }),
        },
        Entry {
            name: "4.4 Rosenbrock Function",
            category: Category::ValleyShaped,
            dimensionality: Dimensionality::Parametric,
            description: "Also called the banana function. Unimodal; the minimum lies \
                in a narrow parabolic valley.",
            references: &[DIXON_SZEGO, HEDAR, MOLGA, PICHENY],
            status: Status::Ready(Definition {
                objective: rosenbrock,
                bounds: |d| uniform(d, -5.0, 10.0),
                optimum: |d| diagonal(d, 1.0, 0.0),
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dixon_price_optimum_generator() {
        let optimum = dixon_price_optimum(3).unwrap();
        let x = &optimum.locations[0];
        assert_eq!(x[0], 1.0);
        assert!((x[1] - 2f64.powf(-0.5)).abs() < 1e-15);
        for d in 1..=10 {
            let optimum = dixon_price_optimum(d).unwrap();
            assert!(dixon_price(&optimum.locations[0]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rosenbrock_values() {
        assert_eq!(rosenbrock(&array![1.0, 1.0, 1.0]), 0.0);
        assert_eq!(rosenbrock(&array![0.0, 0.0]), 1.0);
        // single component: empty sum
        assert_eq!(rosenbrock(&array![3.0]), 0.0);
    }

    #[test]
    fn test_six_hump_camel_symmetric_minima() {
        let a = six_hump_camel(&array![0.0898, -0.7126]);
        let b = six_hump_camel(&array![-0.0898, 0.7126]);
        assert!((a - b).abs() < 1e-12);
        assert!((a + 1.0316).abs() < 1e-3);
    }
}
