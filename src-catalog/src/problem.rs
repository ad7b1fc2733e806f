//! Problem descriptor returned by catalog lookups

use std::fmt;

use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::registry::{Category, Dimensionality, ObjectiveFn};

/// Tolerance used when comparing objective values against documented optima
///
/// Optima are published with 4 to 6 significant digits.
pub const OPTIMUM_TOLERANCE: f64 = 1e-3;

/// Constraint function (should be <= 0 when satisfied for inequalities, = 0 for equalities)
pub type ConstraintFn = fn(&Array1<f64>) -> f64;

/// Auxiliary feasibility constraints of a problem
///
/// Every function of this catalog is unconstrained, so descriptors never
/// carry one.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Inequality constraint functions
    pub inequality: Vec<ConstraintFn>,
    /// Equality constraint functions
    pub equality: Vec<ConstraintFn>,
}

/// Known global minimum of a problem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalOptimum {
    /// Equally valid locations of the minimum
    pub locations: Vec<Array1<f64>>,
    /// Objective value shared by all locations
    pub value: f64,
}

impl GlobalOptimum {
    /// Optimum attained at several symmetric locations
    pub fn new(locations: Vec<Vec<f64>>, value: f64) -> Self {
        Self {
            locations: locations.into_iter().map(Array1::from_vec).collect(),
            value,
        }
    }

    /// Optimum attained at a single location
    pub fn single(location: Vec<f64>, value: f64) -> Self {
        Self::new(vec![location], value)
    }

    /// Whether `value` matches the optimum within `tolerance`
    ///
    /// The tolerance is absolute, or relative to the optimum when that is the
    /// looser of the two.
    pub fn is_reached(&self, value: f64, tolerance: f64) -> bool {
        let error = (value - self.value).abs();
        error <= tolerance || error <= tolerance * self.value.abs()
    }
}

/// A fully populated benchmark problem
///
/// Built fresh on each lookup and never modified afterwards.
#[derive(Debug, Clone)]
pub struct Problem {
    name: &'static str,
    category: Category,
    dimensionality: Dimensionality,
    description: &'static str,
    references: &'static [&'static str],
    dimensions: usize,
    objective: ObjectiveFn,
    constraints: Option<Constraints>,
    lower_bound: Array1<f64>,
    upper_bound: Array1<f64>,
    global_optimum: Option<GlobalOptimum>,
}

impl Problem {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        name: &'static str,
        category: Category,
        dimensionality: Dimensionality,
        description: &'static str,
        references: &'static [&'static str],
        dimensions: usize,
        objective: ObjectiveFn,
        bounds: Vec<(f64, f64)>,
        global_optimum: Option<GlobalOptimum>,
    ) -> Self {
        let (lower, upper): (Vec<f64>, Vec<f64>) = bounds.into_iter().unzip();
        Self {
            name,
            category,
            dimensionality,
            description,
            references,
            dimensions,
            objective,
            constraints: None,
            lower_bound: Array1::from_vec(lower),
            upper_bound: Array1::from_vec(upper),
            global_optimum,
        }
    }

    /// Catalog identifier, e.g. `"1.12 Rastrigin Function"`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Landscape family of the function
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the dimensionality is fixed by the formula or chosen by the caller
    pub fn dimensionality(&self) -> Dimensionality {
        self.dimensionality
    }

    /// Number of variables
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Prose description of the landscape
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Literature sources of the formula and its optimum
    pub fn references(&self) -> &'static [&'static str] {
        self.references
    }

    /// Always `None`: the catalog only holds unconstrained problems
    pub fn constraints(&self) -> Option<&Constraints> {
        self.constraints.as_ref()
    }

    /// Lower bound of each variable
    pub fn lower_bound(&self) -> &Array1<f64> {
        &self.lower_bound
    }

    /// Upper bound of each variable
    pub fn upper_bound(&self) -> &Array1<f64> {
        &self.upper_bound
    }

    /// Bounds as `(lower, upper)` pairs, one per variable
    pub fn bounds(&self) -> Vec<(f64, f64)> {
        self.lower_bound
            .iter()
            .copied()
            .zip(self.upper_bound.iter().copied())
            .collect()
    }

    /// Bounds matrix for optimization (2 x n matrix)
    /// bounds[[0, i]] = lower bound, bounds[[1, i]] = upper bound
    pub fn bounds_matrix(&self) -> Array2<f64> {
        Array2::from_shape_fn((2, self.dimensions), |(i, j)| {
            if i == 0 {
                self.lower_bound[j]
            } else {
                self.upper_bound[j]
            }
        })
    }

    /// Known global minimum, `None` when it is not known for this dimensionality
    pub fn global_optimum(&self) -> Option<&GlobalOptimum> {
        self.global_optimum.as_ref()
    }

    /// Raw objective function
    ///
    /// Unlike [`Problem::evaluate`] it does not check the point length; use
    /// it with optimizers that take a plain `fn(&Array1<f64>) -> f64`.
    pub fn objective(&self) -> ObjectiveFn {
        self.objective
    }

    /// Evaluate the objective at `x`
    ///
    /// # Errors
    ///
    /// [`CatalogError::DimensionMismatch`] when `x.len()` differs from
    /// [`Problem::dimensions`]. Bounds membership is not checked.
    pub fn evaluate(&self, x: &Array1<f64>) -> Result<f64> {
        self.check_len(x.len())?;
        Ok((self.objective)(x))
    }

    /// Evaluate the objective at a point given as a slice
    pub fn evaluate_slice(&self, x: &[f64]) -> Result<f64> {
        self.check_len(x.len())?;
        Ok((self.objective)(&Array1::from_vec(x.to_vec())))
    }

    fn check_len(&self, actual: usize) -> Result<()> {
        if actual != self.dimensions {
            return Err(CatalogError::DimensionMismatch {
                expected: self.dimensions,
                actual,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        match self.dimensionality {
            Dimensionality::Fixed(n) => writeln!(f, "Dimensions: {n}")?,
            Dimensionality::Parametric => writeln!(f, "Dimensions: d (d = {})", self.dimensions)?,
        }
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        if !self.references.is_empty() {
            writeln!(f)?;
            for (i, reference) in self.references.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, reference)?;
            }
        }
        Ok(())
    }
}
