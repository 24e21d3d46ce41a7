use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use rn_app::{
    AppResult, load_network, load_plan_or_standard, network_summary, render_json,
    route_distance_checked, run_plan,
};
use rn_core::Metric;
use rn_graph::GraphStore;
use rn_routes::{BoundType, RouteEngine};

#[derive(Parser)]
#[command(name = "rn-cli")]
#[command(about = "RailNet CLI - route distances, trip counts, shortest paths", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a network file and summarize it
    Validate {
        /// Path to the network file (comma-separated tokens like AB5)
        network_path: PathBuf,
    },
    /// Run a query plan and print one line per query
    Report {
        /// Path to the network file
        network_path: PathBuf,
        /// Query plan (YAML or JSON); defaults to the ten standard queries
        #[arg(short, long)]
        plan: Option<PathBuf>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Total distance along a fixed route
    Distance {
        /// Path to the network file
        network_path: PathBuf,
        /// Route, e.g. ABC or A-B-C
        route: String,
    },
    /// Count trips between two stations within a bound
    Count {
        /// Path to the network file
        network_path: PathBuf,
        start: String,
        end: String,
        /// Maximum stops, or distance to stay under
        bound: Metric,
        /// What the bound measures
        #[arg(long, value_enum, default_value_t = BoundArg::Stops)]
        by: BoundArg,
        /// Only count trips that hit the bound exactly
        #[arg(long)]
        exact: bool,
    },
    /// Shortest distance between two stations (a round trip if they match)
    Shortest {
        /// Path to the network file
        network_path: PathBuf,
        start: String,
        end: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BoundArg {
    Stops,
    Distance,
}

impl From<BoundArg> for BoundType {
    fn from(arg: BoundArg) -> Self {
        match arg {
            BoundArg::Stops => BoundType::StopCount,
            BoundArg::Distance => BoundType::TotalDistance,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Report {
            network_path,
            plan,
            json,
        } => cmd_report(&network_path, plan.as_deref(), json),
        Commands::Distance {
            network_path,
            route,
        } => cmd_distance(&network_path, &route),
        Commands::Count {
            network_path,
            start,
            end,
            bound,
            by,
            exact,
        } => cmd_count(&network_path, &start, &end, bound, by.into(), exact),
        Commands::Shortest {
            network_path,
            start,
            end,
        } => cmd_shortest(&network_path, &start, &end),
    }
}

fn cmd_validate(network_path: &Path) -> AppResult<()> {
    println!("Validating network: {}", network_path.display());
    let store = load_network(network_path)?;
    let summary = network_summary(&store);
    println!("✓ Network is valid");
    println!("  Stations: {}", summary.stations.join(", "));
    println!("  Edges: {}", summary.edge_count);
    if !summary.dead_ends.is_empty() {
        println!("  No departures from: {}", summary.dead_ends.join(", "));
    }
    Ok(())
}

fn cmd_report(network_path: &Path, plan_path: Option<&Path>, json: bool) -> AppResult<()> {
    let store = load_network(network_path)?;
    let plan = load_plan_or_standard(plan_path)?;
    tracing::debug!(
        plan = %plan_path.map_or("standard".into(), |p| p.display().to_string()),
        queries = plan.queries.len(),
        "running report"
    );
    let lines = run_plan(&store, &plan);

    if json {
        println!("{}", render_json(&lines)?);
    } else {
        for line in &lines {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_distance(network_path: &Path, route: &str) -> AppResult<()> {
    let store = load_network(network_path)?;
    let distance = route_distance_checked(&store, route)?;
    println!("{}", distance);
    Ok(())
}

fn cmd_count(
    network_path: &Path,
    start: &str,
    end: &str,
    bound: Metric,
    bound_type: BoundType,
    exact: bool,
) -> AppResult<()> {
    let store = load_network(network_path)?;
    require_stations(&store, &[start, end])?;

    let count = RouteEngine::new(&store).count_routes(start, end, bound, bound_type, exact);
    println!("{}", count);
    Ok(())
}

fn cmd_shortest(network_path: &Path, start: &str, end: &str) -> AppResult<()> {
    let store = load_network(network_path)?;
    require_stations(&store, &[start, end])?;

    let length = RouteEngine::new(&store).shortest_path_length(start, end);
    println!("{}", length);
    Ok(())
}

/// Reject station names the network has never heard of.
fn require_stations(store: &GraphStore, stations: &[&str]) -> AppResult<()> {
    for station in stations {
        store.require_vertex(station)?;
    }
    Ok(())
}
