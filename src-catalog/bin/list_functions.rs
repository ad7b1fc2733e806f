use clap::Parser;
use log::{error, info};

use optbench_catalog::{Dimensionality, FunctionInfo, list_functions};

/// CLI arguments for listing the catalog
#[derive(Parser)]
#[command(name = "list_functions")]
#[command(about = "List the registered benchmark functions")]
struct Args {
    /// Print the entries as a JSON array
    #[arg(long)]
    json: bool,

    /// Only list functions whose lookup returns a problem
    #[arg(long)]
    implemented: bool,
}

fn describe(info: &FunctionInfo) -> String {
    let dims = match info.dimensionality {
        Dimensionality::Fixed(n) => n.to_string(),
        Dimensionality::Parametric => "d".to_string(),
    };
    let status = if info.implemented { "" } else { "  (not ready)" };
    format!("{:<40} {:>2}  {}{}", info.name, dims, info.category, status)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let entries: Vec<FunctionInfo> = list_functions()
        .into_iter()
        .filter(|info| !args.implemented || info.implemented)
        .collect();
    info!("{} functions selected", entries.len());

    if args.json {
        match serde_json::to_string_pretty(&entries) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to serialize the catalog: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    for info in &entries {
        println!("{}", describe(info));
    }
}
