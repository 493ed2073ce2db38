use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use heterogeneous_motifs::count_store::CountStore;
use heterogeneous_motifs::dataset::load_dataset;
use heterogeneous_motifs::enumerator::count_edge;
use heterogeneous_motifs::graph::Graph;
use heterogeneous_motifs::hasher::MotifHasher;
use heterogeneous_motifs::report::render_global_report;
use heterogeneous_motifs::{HeterogeneousMotifError, Result};

/// Counts 3- and 4-node motifs in a heterogeneous information network.
#[derive(Parser)]
#[command(name = "heterogeneous-motifs")]
#[command(about = "Per-edge and global heterogeneous motif counting")]
#[command(version)]
struct Cli {
    /// Directory containing `nodes.csv` and `edges.csv`.
    #[arg(long)]
    dataset: PathBuf,

    /// Directory to write `orbit_counts.json`, `local_counts.json`, and
    /// `global_counts.json` into.
    #[arg(long)]
    output: PathBuf,

    /// Disable the combinatorial shortcut and traverse orbits 4, 5, 9, 11
    /// explicitly instead of deriving them algebraically.
    #[arg(long)]
    no_comb: bool,

    /// Print a human-readable table of untyped global motif totals after
    /// writing the JSON outputs.
    #[arg(long)]
    report: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.dataset.is_dir() {
        return Err(HeterogeneousMotifError::InvalidInput {
            path: cli.dataset.clone(),
            reason: "dataset path does not exist or is not a directory".to_string(),
        });
    }
    if !cli.output.is_dir() {
        return Err(HeterogeneousMotifError::InvalidInput {
            path: cli.output.clone(),
            reason: "output path does not exist or is not a directory".to_string(),
        });
    }

    let comb = !cli.no_comb;
    tracing::info!(dataset = %cli.dataset.display(), comb, "loading dataset");

    let load_start = Instant::now();
    let graph = load_dataset(&cli.dataset)?;
    tracing::debug!(elapsed = ?load_start.elapsed(), "dataset loaded");
    tracing::info!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "graph loaded"
    );

    let hasher = MotifHasher::new(&graph);

    let progress = ProgressBar::new(graph.num_edges() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} edges ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let enumerate_start = Instant::now();
    let counts = (0..graph.num_edges())
        .into_par_iter()
        .map(|edge_id| -> Result<CountStore> {
            let mut local = CountStore::new();
            count_edge(&graph, edge_id, &hasher, comb, &mut local)?;
            progress.inc(1);
            Ok(local)
        })
        .try_reduce(CountStore::new, |mut left, right| {
            left.merge(right);
            Ok(left)
        })?;
    progress.finish_and_clear();
    tracing::debug!(elapsed = ?enumerate_start.elapsed(), "enumeration complete");

    let mut counts = counts;
    counts.correct_global_counts()?;

    counts.dump_to_json(&cli.output)?;

    if cli.report {
        println!("{}", render_global_report(&counts, &hasher));
    }

    tracing::info!(
        elapsed = ?load_start.elapsed(),
        total_motifs = counts.get_total_count(None),
        "done"
    );

    Ok(())
}
