//! Read-only registry mapping function names to their definitions
//!
//! The registry is assembled once, on first use, from the entry lists of the
//! [`crate::functions`] modules and is never mutated afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use ndarray::Array1;
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::functions;
use crate::problem::{GlobalOptimum, Problem};

/// Objective function signature shared by every entry
pub type ObjectiveFn = fn(&Array1<f64>) -> f64;

/// Dimensionality used for dimension-parametric functions when none is requested
pub const DEFAULT_DIMENSIONS: usize = 2;

/// Landscape family, following the grouping of the literature catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Rugged landscapes with many local minima
    ManyLocalMinima,
    /// Bowl-shaped landscapes
    BowlShaped,
    /// Plate-shaped landscapes
    PlateShaped,
    /// Valley-shaped landscapes
    ValleyShaped,
    /// Steep ridges and drops
    SteepRidgesDrops,
    /// Everything else
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::ManyLocalMinima => "Many Local Minima",
            Category::BowlShaped => "Bowl-Shaped",
            Category::PlateShaped => "Plate-Shaped",
            Category::ValleyShaped => "Valley-Shaped",
            Category::SteepRidgesDrops => "Steep Ridges/Drops",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}

/// How the number of variables of a function is determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimensionality {
    /// The formula is defined for exactly this many variables
    Fixed(usize),
    /// The formula accepts any `d >= 1` chosen by the caller
    Parametric,
}

impl Dimensionality {
    /// Dimensionality used when the caller does not request one
    pub fn default_dimensions(self) -> usize {
        match self {
            Dimensionality::Fixed(n) => n,
            Dimensionality::Parametric => DEFAULT_DIMENSIONS,
        }
    }

    /// Dimensionality to build for `name` given the caller's request
    pub(crate) fn resolve(self, name: &str, requested: Option<usize>) -> Result<usize> {
        match (self, requested) {
            (_, None) => Ok(self.default_dimensions()),
            (Dimensionality::Fixed(n), Some(r)) if r == n => Ok(n),
            (Dimensionality::Fixed(n), Some(r)) => Err(CatalogError::FixedDimension {
                name: name.to_string(),
                intrinsic: n,
                requested: r,
            }),
            (Dimensionality::Parametric, Some(0)) => {
                Err(CatalogError::ZeroDimension(name.to_string()))
            }
            (Dimensionality::Parametric, Some(d)) => Ok(d),
        }
    }
}

/// Evaluator, bounds and optimum of a validated entry
pub(crate) struct Definition {
    pub objective: ObjectiveFn,
    /// `(lower, upper)` per variable for a given dimensionality
    pub bounds: fn(usize) -> Vec<(f64, f64)>,
    /// Known minimum for a given dimensionality, `None` when not known
    pub optimum: fn(usize) -> Option<GlobalOptimum>,
}

/// Implementation status of an entry
pub(crate) enum Status {
    Ready(Definition),
    /// Registered, but the formula was never validated against a trusted optimum
    NotReady,
}

/// One registered function
pub(crate) struct Entry {
    pub name: &'static str,
    pub category: Category,
    pub dimensionality: Dimensionality,
    pub description: &'static str,
    pub references: &'static [&'static str],
    pub status: Status,
}

impl Entry {
    fn is_implemented(&self) -> bool {
        matches!(self.status, Status::Ready(_))
    }

    fn info(&self) -> FunctionInfo {
        let global_optimum = match &self.status {
            Status::Ready(definition) => {
                (definition.optimum)(self.dimensionality.default_dimensions())
            }
            Status::NotReady => None,
        };
        FunctionInfo {
            name: self.name,
            category: self.category,
            dimensionality: self.dimensionality,
            implemented: self.is_implemented(),
            description: self.description,
            references: self.references,
            global_optimum,
        }
    }
}

/// Summary of a registered function, available without building a problem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionInfo {
    /// Catalog identifier
    pub name: &'static str,
    /// Landscape family
    pub category: Category,
    /// Fixed or caller-chosen dimensionality
    pub dimensionality: Dimensionality,
    /// Whether lookups return a problem or [`CatalogError::UnimplementedProblem`]
    pub implemented: bool,
    /// Prose description
    pub description: &'static str,
    /// Literature sources
    pub references: &'static [&'static str],
    /// Known minimum at the default dimensionality, `None` when not ready or not known
    pub global_optimum: Option<GlobalOptimum>,
}

struct Catalog {
    /// Entries in section order
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    fn build() -> Self {
        let entries: Vec<Entry> = [
            functions::many_local_minima::entries(),
            functions::bowl_shaped::entries(),
            functions::plate_shaped::entries(),
            functions::valley_shaped::entries(),
            functions::steep_ridges::entries(),
            functions::other::entries(),
        ]
        .into_iter()
        .flatten()
        .collect();

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.name, i))
            .collect();

        Self { entries, index }
    }

    fn entry(&self, name: &str) -> Result<&Entry> {
        self.index
            .get(name)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| CatalogError::UnknownProblem(name.to_string()))
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

fn build_problem(name: &str, requested: Option<usize>) -> Result<Problem> {
    let entry = CATALOG.entry(name)?;
    let Status::Ready(definition) = &entry.status else {
        return Err(CatalogError::UnimplementedProblem(entry.name.to_string()));
    };
    let dimensions = entry.dimensionality.resolve(entry.name, requested)?;

    Ok(Problem::new(
        entry.name,
        entry.category,
        entry.dimensionality,
        entry.description,
        entry.references,
        dimensions,
        definition.objective,
        (definition.bounds)(dimensions),
        (definition.optimum)(dimensions),
    ))
}

/// Look up a problem by name
///
/// Dimension-parametric functions are built with [`DEFAULT_DIMENSIONS`]
/// variables, fixed-dimension functions with their intrinsic dimensionality.
///
/// # Errors
///
/// - [`CatalogError::UnknownProblem`] when no function has this name
/// - [`CatalogError::UnimplementedProblem`] when the function is not ready
///
/// # Example
///
/// ```rust
/// use optbench_catalog::get_problem;
///
/// let problem = get_problem("1.12 Rastrigin Function")?;
/// assert_eq!(problem.evaluate_slice(&[0.0, 0.0])?, 0.0);
/// # Ok::<(), optbench_catalog::CatalogError>(())
/// ```
pub fn get_problem(name: &str) -> Result<Problem> {
    build_problem(name, None)
}

/// Look up a problem by name with an explicit number of variables
///
/// # Errors
///
/// Same as [`get_problem`], plus
/// - [`CatalogError::FixedDimension`] when `dimensions` disagrees with a fixed-dimension function
/// - [`CatalogError::ZeroDimension`] when `dimensions` is zero
pub fn get_problem_with_dimensions(name: &str, dimensions: usize) -> Result<Problem> {
    build_problem(name, Some(dimensions))
}

/// Every registered function, in section order
pub fn list_functions() -> Vec<FunctionInfo> {
    CATALOG.entries.iter().map(Entry::info).collect()
}

/// Summary of one registered function
pub fn function_info(name: &str) -> Result<FunctionInfo> {
    CATALOG.entry(name).map(Entry::info)
}

/// Whether lookups of `name` return a problem
///
/// Lets callers skip unvalidated functions without matching on
/// [`CatalogError::UnimplementedProblem`].
pub fn is_implemented(name: &str) -> Result<bool> {
    CATALOG.entry(name).map(Entry::is_implemented)
}
