//! Benchmark function implementations organized by landscape shape
//!
//! - `many_local_minima`: rugged, highly multimodal landscapes
//! - `bowl_shaped`: convex or nearly convex bowls
//! - `plate_shaped`: flat plates with a shallow optimum
//! - `valley_shaped`: optimum inside a long narrow valley
//! - `steep_ridges`: steep drops around a small basin
//! - `other`: classical functions that fit none of the above
//!
//! Each module also declares the registry entries for its functions.

use crate::problem::GlobalOptimum;

pub mod bowl_shaped;
pub mod many_local_minima;
pub mod other;
pub mod plate_shaped;
pub mod steep_ridges;
pub mod valley_shaped;

pub use bowl_shaped::{
    bohachevsky1, perm_0_d_beta, rotated_hyper_ellipsoid, sphere_modified,
    sum_of_different_powers, sum_squares, trid,
};
pub use many_local_minima::{
    ackley, bukin_n6, cross_in_tray, drop_wave, eggholder, griewank, holder_table, levy,
    levy_n13, rastrigin, schaffer_n2, schaffer_n4, schwefel, shubert,
};
pub use other::{
    beale, branin, colville, goldstein_price, hartmann_3d, hartmann_6d, perm_d_beta, shekel,
    styblinski_tang,
};
pub use plate_shaped::{booth, matyas, mccormick, zakharov};
pub use steep_ridges::{easom, michalewicz};
pub use valley_shaped::{dixon_price, rosenbrock, six_hump_camel, three_hump_camel};

// Literature sources shared by several entries.
pub(crate) const ADORIO: &str = "Adorio, E. P., & Diliman, U. P. MVF - Multivariate Test Functions Library in C for Unconstrained Global Optimization (2005). http://www.geocities.ws/eadorio/mvf.pdf";
pub(crate) const BACK: &str = "Back, T. (1996). Evolutionary algorithms in theory and practice: evolution strategies, evolutionary programming, genetic algorithms. Oxford University Press.";
pub(crate) const DIXON_SZEGO: &str = "Dixon, L. C. W., & Szego, G. P. (1978). The global optimization problem: an introduction. Towards global optimization, 2, 1-15.";
pub(crate) const FORRESTER: &str = "Forrester, A., Sobester, A., & Keane, A. (2008). Engineering design via surrogate modelling: a practical guide. Wiley.";
pub(crate) const GEATBX: &str = "GEATbx: Examples of Objective Functions. Retrieved September 2014, from http://www.pg.gda.pl/~mkwies/dyd/geadocu/fcnfun7.html";
pub(crate) const GRAMACY_LEE: &str = "Gramacy, R. B., & Lee, H. K. (2012). Cases for the nugget in modeling computer experiments. Statistics and Computing, 22(3), 713-722.";
pub(crate) const HEDAR: &str = "Global Optimization Test Problems. Retrieved June 2013, from http://www-optima.amp.i.kyoto-u.ac.jp/member/student/hedar/Hedar_files/TestGO.htm";
pub(crate) const INFINITY77: &str = "Global Optimization Test Functions Index. Retrieved June 2013, from http://infinity77.net/global_optimization/test_functions.html";
pub(crate) const LAGUNA_MARTI: &str = "Laguna, M., & Marti, R. Experimental Testing of Advanced Scatter Search Designs for Global Optimization of Multimodal Functions (2002). http://www.uv.es/rmarti/paper/docs/global1.pdf";
pub(crate) const MOLGA: &str = "Molga, M., & Smutnicki, C. Test functions for optimization needs (2005). http://www.zsd.ict.pwr.wroc.pl/files/docs/functions.pdf";
pub(crate) const PICHENY: &str = "Picheny, V., Wagner, T., & Ginsbourger, D. (2012). A benchmark of kriging-based infill criteria for noisy optimization.";
pub(crate) const POHLHEIM: &str = "Pohlheim, H. GEATbx Examples: Examples of Objective Functions (2005). http://www.geatbx.com/download/GEATbx_ObjFunExpl_v37.pdf";
pub(crate) const RANJAN: &str = "Ranjan, P. (2013). Comment: EI Criteria for Noisy Computer Simulators. Technometrics, 55(1), 24-28.";
pub(crate) const WIKIPEDIA: &str = "Test functions for optimization. In Wikipedia. Retrieved June 2013, from https://en.wikipedia.org/wiki/Test_functions_for_optimization";

/// Same `(lower, upper)` interval on each of the `d` components
pub(crate) fn uniform(d: usize, lower: f64, upper: f64) -> Vec<(f64, f64)> {
    vec![(lower, upper); d]
}

/// Optimum `value` at the point `(coord, ..., coord)`
pub(crate) fn diagonal(d: usize, coord: f64, value: f64) -> Option<GlobalOptimum> {
    Some(GlobalOptimum::single(vec![coord; d], value))
}
