//! Names shared by the optbench binaries

/// Environment variable naming the project root
pub const OPTBENCH_DIR: &str = "OPTBENCH_DIR";

/// Directory (relative to the project root) receiving generated artifacts
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of [`DATA_GENERATED`] receiving contour plots
pub const PLOTS: &str = "plot_functions";
