//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Inspect a CORTEX colored de Bruijn graph file.
///
/// With no further arguments, prints every k-mer stored in the graph
/// along with its per-color coverage and edge set. With `--record`,
/// slides a k-mer-sized window across the given sequence and prints
/// the matching graph record for each window instead.
///
/// # Examples
///
/// ```bash
/// # Dump every k-mer in the graph
/// cortex-view sample.ctx
///
/// # Walk a sequence against the graph
/// cortex-view sample.ctx --record ACCAATGG
/// ```
#[derive(Parser, Debug)]
#[command(name = "cortex-view")]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// Path to a CORTEX graph file.
    pub graph: PathBuf,

    /// Slide a k-mer-sized window across this sequence and print the
    /// matching record for each window, instead of dumping the whole graph.
    #[arg(short, long)]
    pub record: Option<String>,
}
