use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use waygraph::edge_list;
use waygraph::prelude::*;

/// Print a graph and the shortest path between two of its nodes
#[derive(Parser, Debug)]
#[command(name = "waygraph")]
#[command(about = "Dijkstra shortest paths over a small graph", long_about = None)]
struct Args {
    /// Start node (prompted for when omitted)
    from: Option<String>,

    /// Destination node (prompted for when omitted)
    to: Option<String>,

    /// Edge list file, `source destination [weight]` per line.
    /// Uses the built-in demo map when omitted
    #[arg(short, long)]
    edges: Option<PathBuf>,

    /// Mirror every edge
    #[arg(long)]
    undirected: bool,

    /// Ignore weights; no path is computed for unweighted graphs
    #[arg(long)]
    unweighted: bool,

    /// Minimum-selection strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Heap)]
    strategy: StrategyArg,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Heap,
    Linear,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Heap => Strategy::BinaryHeap,
            StrategyArg::Linear => Strategy::LinearScan,
        }
    }
}

fn prompt(label: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}: ", label)?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .with_context(|| format!("failed to read {}", label))?;
    Ok(line.trim().to_string())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = GraphConfig {
        directed: !args.undirected,
        weighted: !args.unweighted,
    };

    let graph = match &args.edges {
        Some(path) => edge_list::load_graph(path, config)
            .with_context(|| format!("failed to load edges from {:?}", path))?,
        None => waygraph::example_graph(config),
    };
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = config.directed,
        weighted = config.weighted,
        "graph loaded"
    );

    println!("\nGraph:\n{}\n", graph);

    let from = match args.from {
        Some(from) => from,
        None => prompt("origin")?,
    };
    let to = match args.to {
        Some(to) => to,
        None => prompt("destination")?,
    };
    debug!(%from, %to, "query");

    let outcome = graph
        .shortest_path_with(&from, &to, args.strategy.into())
        .context("shortest path query failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        PathOutcome::Found(found) => println!("{}", found),
        PathOutcome::NoPath => println!("no path from {} to {}", from, to),
        PathOutcome::NotWeighted => println!("graph is unweighted; no path computed"),
    }

    Ok(())
}
