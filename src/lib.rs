//! # cortex-graph
//!
//! Reader and graph-traversal library for colored de Bruijn graph binary
//! files (the `CORTEX` graph format): k-mers with per-color coverage and
//! edge annotations, random access by k-mer sequence, and bounded BFS
//! traversal of the graph around a seed.
//!
//! The three collaborators are [`header`] (parses the file preamble and
//! derives record geometry), [`random_access`]/[`streaming`] (read
//! records, either by binary search or sequentially), and [`traversal`]
//! (walks the graph outward from a seed k-mer).
//!
//! ```no_run
//! use cortex_graph::random_access::RandomAccess;
//! use cortex_graph::traversal::{EngineOrientation, TraversalEngine};
//! use std::fs::File;
//!
//! # fn main() -> Result<(), cortex_graph::error::GraphError> {
//! let mut ra = RandomAccess::open(File::open("graph.ctx")?)?;
//! let engine = TraversalEngine::new(1000);
//! let graph = engine.traverse_from(&mut ra, 0, EngineOrientation::Both, "ACGT")?;
//! println!("{} nodes", graph.node_count());
//! # Ok(())
//! # }
//! ```

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod edge_set;
pub mod error;
pub mod header;
pub mod kmer_record;
pub mod random_access;
pub mod streaming;
pub mod traversal;

#[cfg(feature = "mmap")]
pub mod mmap_graph;
