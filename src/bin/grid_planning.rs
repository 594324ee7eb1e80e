//! Grid planning demo
//!
//! Plans on the built-in 50x50 sample map (or a TOML map) and saves the
//! search result as an image.
//!
//! Usage:
//!   cargo run --bin grid_planning -- --algorithm dijkstra
//!   cargo run --bin grid_planning -- --config configs/two_walls.toml --show

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info, warn};

use grid_search_planner::config::{Algorithm, DemoConfig};
use grid_search_planner::utils::{GridCanvas, Visualizer};
use grid_search_planner::{GridPlanner, GridQuery, PlanningResult};

/// Dijkstra / A* grid planning demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search algorithm, overrides the config file
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// TOML config with [planner] and [map] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "img/path_planning/grid_planning.png")]
    output: PathBuf,

    /// Open an interactive gnuplot window after saving
    #[arg(long)]
    show: bool,
}

fn run(args: &Args) -> PlanningResult<()> {
    let mut config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(algorithm) = args.algorithm {
        config.planner.algorithm = algorithm;
    }

    let grid = config.build_grid()?;
    let planner = config.planner.build()?;
    let (width, height) = grid.extents();
    info!(
        "{} planning on {}x{} grid from ({}, {}) to ({}, {})",
        planner.name(),
        width,
        height,
        grid.start().x,
        grid.start().y,
        grid.goal().x,
        grid.goal().y
    );

    let mut canvas = GridCanvas::new();
    let result = planner.plan_annotated(&grid, &mut canvas)?;
    let title = match &result {
        Some(path) => {
            info!(
                "Path found: {} cells, cost {:.3}, {} cells expanded",
                path.len(),
                path.cost,
                path.nodes_expanded
            );
            format!("{} path planning", planner.name())
        }
        None => {
            warn!("No path found after expanding {} cells", canvas.visited().len());
            format!("{} path planning (no path)", planner.name())
        }
    };

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let mut vis = Visualizer::from_result(&grid, &canvas, result.as_ref(), &title);
    vis.save_png(&path_str(&args.output), 800, 800)?;
    info!("Plot saved to: {}", args.output.display());

    if args.show {
        vis.show()?;
    }
    Ok(())
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
