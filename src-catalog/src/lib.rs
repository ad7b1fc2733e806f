//! Named catalog of classical optimization benchmark functions
//!
//! Each function is registered under its literature identifier, for example
//! `"1.12 Rastrigin Function"`, and a lookup returns a [`Problem`] carrying
//! the objective, the box bounds and the known global minimum, ready to be
//! handed to an optimizer or used to check one.
//!
//! Functions are grouped by landscape shape:
//! - Many local minima (Ackley, Rastrigin, Schwefel, ...)
//! - Bowl-shaped (Sum Squares, Trid, ...)
//! - Plate-shaped (Booth, Matyas, McCormick, Zakharov)
//! - Valley-shaped (Rosenbrock, Dixon-Price, camel functions)
//! - Steep ridges and drops (Easom, Michalewicz)
//! - Other (Branin, Hartmann, Shekel, ...)
//!
//! # Example
//!
//! ```rust
//! use optbench_catalog::{get_problem_with_dimensions, OPTIMUM_TOLERANCE};
//!
//! let problem = get_problem_with_dimensions("1.1 Ackley Function", 5)?;
//! assert_eq!(problem.lower_bound().len(), 5);
//!
//! let optimum = problem.global_optimum().expect("Ackley has a known minimum");
//! let value = problem.evaluate(&optimum.locations[0])?;
//! assert!(optimum.is_reached(value, OPTIMUM_TOLERANCE));
//! # Ok::<(), optbench_catalog::CatalogError>(())
//! ```

pub mod error;
pub mod functions;
pub mod problem;
pub mod registry;

pub use error::{CatalogError, Result};
pub use problem::{ConstraintFn, Constraints, GlobalOptimum, OPTIMUM_TOLERANCE, Problem};
pub use registry::{
    Category, DEFAULT_DIMENSIONS, Dimensionality, FunctionInfo, ObjectiveFn, function_info,
    get_problem, get_problem_with_dimensions, is_implemented, list_functions,
};
