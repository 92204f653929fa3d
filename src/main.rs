use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use anu_placement::{Optimizer, SearchResult, SwarmConfig, UpdateRule};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Search for the best placement of a target node with particle swarm optimization.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with a swarm configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    particles: Option<usize>,
    #[arg(long)]
    dimensions: Option<usize>,
    #[arg(long)]
    iterations: Option<usize>,
    #[arg(long)]
    inertia: Option<f64>,
    #[arg(long)]
    cognitive: Option<f64>,
    #[arg(long)]
    social: Option<f64>,
    /// Coverage radius around the origin
    #[arg(long)]
    radius: Option<f64>,
    /// Fixed node as comma separated coordinates, e.g. `--node 2,4`; repeatable
    #[arg(long = "node", value_parser = parse_node)]
    nodes: Vec<Node>,
    /// `faithful` or `canonical`
    #[arg(long)]
    rule: Option<UpdateRule>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Debug)]
struct Node(Vec<f64>);

fn parse_node(s: &str) -> Result<Node, String> {
    s.split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .map_err(|e| format!("bad coordinate `{c}`: {e}"))
        })
        .collect::<Result<Vec<f64>, String>>()
        .map(Node)
}

fn build_config(args: &Args) -> Result<SwarmConfig> {
    let mut config = match &args.config {
        Some(path) => SwarmConfig::from_json_file(path)?,
        None => SwarmConfig::default(),
    };

    if let Some(n) = args.particles {
        config.num_particles = n;
    }
    if let Some(n) = args.dimensions {
        config.num_dimensions = n;
    }
    if let Some(n) = args.iterations {
        config.max_iterations = n;
    }
    if let Some(w) = args.inertia {
        config.inertia_weight = w;
    }
    if let Some(c) = args.cognitive {
        config.cognitive_weight = c;
    }
    if let Some(s) = args.social {
        config.social_weight = s;
    }
    if let Some(r) = args.radius {
        config.coverage_radius = r;
    }
    if let Some(rule) = args.rule {
        config.update_rule = rule;
    }
    if !args.nodes.is_empty() {
        config.fixed_nodes = args.nodes.iter().map(|n| n.0.clone()).collect();
    }

    Ok(config)
}

fn print_position(best: &SearchResult) {
    println!("Optimal Position for Target ANU Node:");
    for (i, v) in best.value.iter().enumerate() {
        match i {
            0 => println!("X: {}", v),
            1 => println!("Y: {}", v),
            _ => println!("D{}: {}", i, v),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let start_time: Instant = Instant::now();
    let mut optimizer = Optimizer::new(&config, rng).context("invalid swarm configuration")?;
    let best = optimizer.optimize();
    let elapsed_time: Duration = start_time.elapsed();

    info!(
        fitness = best.fitness,
        found_at = best.iter,
        elapsed = ?elapsed_time,
        "search complete"
    );
    print_position(&best);

    Ok(())
}
