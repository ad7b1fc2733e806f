use clap::Parser;
use log::{error, info, warn};
use ndarray::Array1;
use plotly::{
    Layout, Plot, Scatter,
    common::{ColorScale, ColorScalePalette, Marker, MarkerSymbol, Mode, Title},
    contour::Contour,
};
use std::path::{Path, PathBuf};

use optbench_catalog::{Problem, get_problem, list_functions};
use optbench_env::get_plots_dir;

/// CLI arguments for plotting catalog functions
#[derive(Parser)]
#[command(name = "plot_functions")]
#[command(about = "Plot 2-D catalog functions as contour plots with Plotly")]
struct Args {
    /// Height of the plot in pixels
    #[arg(short = 'H', long, default_value = "800")]
    height: usize,

    /// Width of the plot in pixels
    #[arg(short = 'W', long, default_value = "800")]
    width: usize,

    /// Number of points along x-axis
    #[arg(short = 'x', long, default_value = "100")]
    xn: usize,

    /// Number of points along y-axis
    #[arg(short = 'y', long, default_value = "100")]
    yn: usize,

    /// Output directory for HTML files, defaults to $OPTBENCH_DIR/data_generated/plot_functions
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// List of specific functions to plot (comma-separated), if empty plots all
    #[arg(short, long)]
    functions: Option<String>,
}

/// `n` evenly spaced values from `lower` to `upper`
fn linspace(lower: f64, upper: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![lower];
    }
    (0..n)
        .map(|i| lower + (upper - lower) * i as f64 / (n - 1) as f64)
        .collect()
}

/// Add the known minima as diamond markers
fn add_global_minima(plot: &mut Plot, problem: &Problem) {
    let Some(optimum) = problem.global_optimum() else {
        return;
    };
    let x_coords: Vec<f64> = optimum.locations.iter().map(|p| p[0]).collect();
    let y_coords: Vec<f64> = optimum.locations.iter().map(|p| p[1]).collect();

    let global_minima_trace = Scatter::new(x_coords, y_coords)
        .mode(Mode::Markers)
        .name("Global Minima")
        .marker(
            Marker::new()
                .color("rgba(255, 255, 255, 1.0)") // White center
                .size(10)
                .line(
                    plotly::common::Line::new()
                        .color("rgba(255, 0, 255, 1.0)") // Magenta border
                        .width(3.0),
                )
                .symbol(MarkerSymbol::Diamond),
        );
    plot.add_trace(global_minima_trace);
}

fn plot_problem(problem: &Problem, args: &Args, output_dir: &Path) -> PathBuf {
    let x_vals = linspace(problem.lower_bound()[0], problem.upper_bound()[0], args.xn);
    let y_vals = linspace(problem.lower_bound()[1], problem.upper_bound()[1], args.yn);
    let objective = problem.objective();

    // rows follow y, columns follow x
    let z_vals: Vec<Vec<f64>> = y_vals
        .iter()
        .map(|&y| {
            x_vals
                .iter()
                .map(|&x| objective(&Array1::from(vec![x, y])))
                .collect()
        })
        .collect();

    let contour = Contour::new(x_vals, y_vals, z_vals)
        .color_scale(ColorScale::Palette(ColorScalePalette::Viridis));

    let layout = Layout::new()
        .title(Title::with_text(problem.name()))
        .width(args.width)
        .height(args.height)
        .x_axis(plotly::layout::Axis::new().title(Title::with_text("x1")))
        .y_axis(plotly::layout::Axis::new().title(Title::with_text("x2")));

    let mut plot = Plot::new();
    plot.add_trace(contour);
    add_global_minima(&mut plot, problem);
    plot.set_layout(layout);

    let filename = output_dir.join(format!("{}.html", file_stem(problem.name())));
    plot.write_html(&filename);
    filename
}

/// File name derived from a catalog name, e.g. `1.12_Rastrigin_Function`
fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let output_dir = match args.output_dir.clone() {
        Some(dir) => dir,
        None => match get_plots_dir() {
            Ok(dir) => dir,
            Err(e) => {
                error!("Error accessing data directory: {}", e);
                error!("Set OPTBENCH_DIR or pass --output-dir.");
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = std::fs::create_dir_all(&output_dir) {
        error!("Failed to create {}: {}", output_dir.display(), e);
        std::process::exit(1);
    }

    let requested: Option<Vec<&str>> = args
        .functions
        .as_deref()
        .map(|names| names.split(',').map(str::trim).collect());

    let selected: Vec<_> = list_functions()
        .into_iter()
        .filter(|info| info.implemented)
        .filter(|info| requested.as_ref().is_none_or(|r| r.contains(&info.name)))
        .collect();

    info!(
        "Plotting {} functions with {}x{} grid",
        selected.len(),
        args.xn,
        args.yn
    );

    for info in selected {
        let problem = match get_problem(info.name) {
            Ok(problem) => problem,
            Err(e) => {
                warn!("Skipping '{}': {}", info.name, e);
                continue;
            }
        };
        if problem.dimensions() != 2 {
            info!(
                "Skipping '{}': {}D input, plotting only supports 2D",
                problem.name(),
                problem.dimensions()
            );
            continue;
        }
        let filename = plot_problem(&problem, &args, &output_dir);
        info!("Wrote {}", filename.display());
    }
}
