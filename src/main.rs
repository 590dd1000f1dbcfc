#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs::File;
use std::process;

use clap::Parser;
use colored::Colorize;

use cortex_graph::alphabet::canonical;
use cortex_graph::cli::Args;
use cortex_graph::config::Config;
use cortex_graph::edge_set::EdgeSet;
use cortex_graph::error::GraphError;
use cortex_graph::random_access::RandomAccess;

/// Initialize the tracing subscriber with environment filter.
///
/// Set `RUST_LOG=cortex_graph=debug` to see debug output.
#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

fn main() {
    #[cfg(feature = "tracing")]
    init_tracing();

    let args = Args::parse();

    let config = match Config::new(&args.graph.to_string_lossy(), args.record) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}\n {}",
                "Problem with arguments:".red().bold(),
                e.to_string().red()
            );
            process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!(
            "{}\n {}",
            "Application error:".red().bold(),
            e.to_string().red()
        );
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), GraphError> {
    let file = File::open(&config.graph)?;
    let mut accessor = RandomAccess::open(file)?;

    match &config.record {
        None => dump_graph(&mut accessor),
        Some(sequence) => walk_sequence(&mut accessor, sequence),
    }
}

fn dump_graph<S: std::io::Read + std::io::Seek>(
    accessor: &mut RandomAccess<S>,
) -> Result<(), GraphError> {
    for record in accessor.iter()? {
        let record = record?;
        let kmer = record.kmer_string()?;
        println!(
            "{kmer} {} {}",
            format_coverage(&record.coverage()),
            format_edges(&record.edges())
        );
    }
    Ok(())
}

fn walk_sequence<S: std::io::Read + std::io::Seek>(
    accessor: &mut RandomAccess<S>,
    sequence: &str,
) -> Result<(), GraphError> {
    let k = accessor.header().kmer_size as usize;
    let num_colors = accessor.header().num_colors as usize;

    if sequence.len() < k {
        eprintln!(
            "{}",
            format!("sequence is shorter than k ({k})").yellow()
        );
        return Ok(());
    }

    for window_start in 0..=sequence.len() - k {
        let window = &sequence[window_start..window_start + k];
        let canonical_kmer = canonical(window)?;

        match accessor.get_by_canonical(&canonical_kmer) {
            Ok(record) => {
                println!(
                    "{canonical_kmer}: {window} {} {}",
                    format_coverage(&record.coverage()),
                    format_edges(&record.edges())
                );
            }
            Err(GraphError::NotFound { .. }) => {
                let zero_coverage = vec![0u32; num_colors];
                let empty_edges = vec![EdgeSet::EMPTY; num_colors];
                println!(
                    "{canonical_kmer}: {window} {} {}",
                    format_coverage(&zero_coverage),
                    format_edges(&empty_edges)
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn format_coverage(coverage: &[u32]) -> String {
    coverage
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_edges(edges: &[EdgeSet]) -> String {
    edges
        .iter()
        .map(|edge_set| edge_set.to_str(false))
        .collect::<Vec<_>>()
        .join(" ")
}
