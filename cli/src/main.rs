// veilroute — path diversity front end
//
// Peripheral glue only: assembles a graph (built-in example set,
// repeated --edge args, or a JSON file), runs one diversity query, and
// prints the step trace and the scored path set. All algorithmic
// content lives in veilroute-core.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use veilroute_core::graph::loader;
use veilroute_core::{displayed_path, plan_routes, Graph, ScoredPath, Step};

#[derive(Parser)]
#[command(name = "veilroute")]
#[command(about = "Shortest paths with decoy-path traffic obfuscation", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for reproducible sampling (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query against the built-in example graph
    Demo {
        #[arg(long, default_value = "A")]
        start: String,
        #[arg(long, default_value = "E")]
        end: String,
        /// Number of decoy paths to generate
        #[arg(long, default_value = "1")]
        decoys: usize,
        /// Print the search trace step by step
        #[arg(long)]
        steps: bool,
    },
    /// Run a query against a caller-supplied graph
    Query {
        #[command(flatten)]
        source: GraphSource,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// Number of decoy paths to generate
        #[arg(long, default_value = "1")]
        decoys: usize,
        /// Print the search trace step by step
        #[arg(long)]
        steps: bool,
    },
}

#[derive(Args)]
struct GraphSource {
    /// JSON file with an `edges` list of {source, target, weight}
    #[arg(long)]
    graph: Option<std::path::PathBuf>,
    /// Edge given as "source target weight" (repeatable)
    #[arg(long = "edge")]
    edges: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Commands::Demo {
            start,
            end,
            decoys,
            steps,
        } => {
            let graph = loader::example_graph();
            run_query(&graph, &start, &end, decoys, steps, &mut rng)
        }
        Commands::Query {
            source,
            start,
            end,
            decoys,
            steps,
        } => {
            let graph = assemble_graph(&source)?;
            run_query(&graph, &start, &end, decoys, steps, &mut rng)
        }
    }
}

fn assemble_graph(source: &GraphSource) -> Result<Graph> {
    let mut graph = match &source.graph {
        Some(path) => loader::from_json_file(path)
            .with_context(|| format!("loading graph from {}", path.display()))?,
        None => Graph::new(),
    };
    for line in &source.edges {
        let (edge_source, target, weight) =
            loader::parse_edge_line(line).with_context(|| format!("parsing edge {line:?}"))?;
        graph.add_edge(edge_source, target, weight);
    }
    if graph.edge_count() == 0 {
        bail!("no graph given: pass --graph <file> or at least one --edge");
    }
    Ok(graph)
}

fn run_query(
    graph: &Graph,
    start: &str,
    end: &str,
    decoys: usize,
    show_steps: bool,
    rng: &mut StdRng,
) -> Result<()> {
    let plan = plan_routes(graph, start, end, decoys, rng)
        .with_context(|| format!("planning routes from {start} to {end}"))?;

    if show_steps {
        for step in &plan.steps {
            print_step(step);
        }
    }

    println!();
    println!("{}", "Paths".bold().underline());
    print_scored(&"shortest (reference)".cyan(), &plan.shortest);
    for (i, decoy) in plan.decoys.iter().enumerate() {
        print_scored(&format!("decoy {}", i + 1).yellow(), decoy);
    }
    // A zero-decoy query carries no reserved traffic path, so there is
    // nothing for an observer to mistake.
    if let Some(actual) = &plan.actual {
        print_scored(&"actual traffic".green(), actual);

        // Observer simulation: which path does a watcher think was chosen?
        let decoy_paths: Vec<_> = plan.decoys.iter().map(|d| d.path.clone()).collect();
        let (seen, tag) = displayed_path(&actual.path, &decoy_paths, rng);
        println!();
        println!(
            "Observer sees: {} ({})",
            seen,
            tag.to_string().magenta()
        );
    }
    Ok(())
}

fn print_scored(label: &ColoredString, scored: &ScoredPath) {
    println!("{label}: {} (cost: {})", scored.path, scored.cost);
}

fn print_step(step: &Step) {
    println!();
    println!("{} {}", "Current node:".bold(), step.current);
    println!("Distance to current: {}", format_distance(step.distance));
    println!("Node\tDistance\tPrevious");
    println!("{}", "-".repeat(40));
    for (node, distance) in &step.distances {
        let previous = step
            .predecessors
            .get(node)
            .and_then(|p| p.as_deref())
            .unwrap_or("-");
        println!("{node}\t{}\t\t{previous}", format_distance(*distance));
    }
}

fn format_distance(distance: f64) -> String {
    if distance.is_infinite() {
        "∞".to_string()
    } else {
        distance.to_string()
    }
}
