//! A single linear walk: advance while exactly one neighbor exists in the
//! walking orientation, stopping at a dead end, a branch point, a node
//! already claimed by the parent graph, or the node cap.

use std::io::{Read, Seek};

use crate::alphabet::canonical;
use crate::edge_set::Orientation;
use crate::error::GraphError;
use crate::random_access::RandomAccess;

use super::graph::{add_oriented_edge, Graph};

/// The result of walking one branch.
#[derive(Debug, Clone)]
pub struct Branch {
    /// The canonical k-mer strings visited, in walk order.
    pub kmers: Vec<String>,
    /// The nodes and internal edges discovered by this walk, to be merged
    /// into the parent graph. Internal edges connect consecutive `kmers`
    /// in true sequence order, independent of walk direction.
    pub graph: Graph,
    /// The seed k-mer, canonicalized, or `None` if it was not in the graph.
    pub first_kmer_string: Option<String>,
    /// The terminal k-mer of the walk, or `None` if the seed was absent.
    pub last_kmer_string: Option<String>,
    /// The orientation this branch was walked in.
    pub orientation: Orientation,
    /// Canonical neighbors of the terminal node in `orientation`.
    pub neighbor_kmer_strings: Vec<String>,
    /// Canonical neighbors of the terminal node in the opposite orientation.
    pub reverse_neighbor_kmer_strings: Vec<String>,
}

impl Branch {
    /// Walks a branch starting at `start` in `orientation`, stopping
    /// early once `parent_graph` plus the branch so far would reach
    /// `max_nodes`.
    pub fn traverse_from<S: Read + Seek>(
        accessor: &mut RandomAccess<S>,
        color: usize,
        start: &str,
        orientation: Orientation,
        parent_graph: &Graph,
        max_nodes: u64,
    ) -> Result<Self, GraphError> {
        let start_canonical = canonical(start)?;

        let first_record = match accessor.get_by_canonical(&start_canonical) {
            Ok(record) => record,
            Err(GraphError::NotFound { .. }) => {
                return Ok(Self {
                    kmers: Vec::new(),
                    graph: Graph::new(),
                    first_kmer_string: None,
                    last_kmer_string: None,
                    orientation,
                    neighbor_kmer_strings: Vec::new(),
                    reverse_neighbor_kmer_strings: Vec::new(),
                })
            }
            Err(e) => return Err(e),
        };

        let mut kmers = vec![start_canonical.clone()];
        let mut graph = Graph::new();
        graph.add_node(start_canonical.clone());
        let mut current = start_canonical.clone();
        let mut current_record = first_record;

        loop {
            if parent_graph.node_count() as u64 + kmers.len() as u64 >= max_nodes {
                break;
            }

            let edges = current_record.edges();
            let edge_set = edges[color];
            let neighbors = edge_set.neighbor_kmer_strings(&current, orientation)?;
            if neighbors.len() != 1 {
                break;
            }

            let next = neighbors.into_iter().next().expect("checked len == 1");
            if kmers.contains(&next) || parent_graph.contains_node(&next) {
                break;
            }

            match accessor.get_by_canonical(&next) {
                Ok(record) => {
                    graph.add_node(next.clone());
                    add_oriented_edge(&mut graph, &current, &next, orientation, color);
                    current = next.clone();
                    kmers.push(next);
                    current_record = record;
                }
                Err(GraphError::NotFound { .. }) => break,
                Err(e) => return Err(e),
            }
        }

        let last_edges = current_record.edges();
        let last_edge_set = last_edges[color];
        let neighbor_kmer_strings = last_edge_set.neighbor_kmer_strings(&current, orientation)?;
        let reverse_neighbor_kmer_strings =
            last_edge_set.neighbor_kmer_strings(&current, orientation.other())?;

        Ok(Self {
            first_kmer_string: Some(start_canonical),
            last_kmer_string: Some(current),
            kmers,
            graph,
            orientation,
            neighbor_kmer_strings,
            reverse_neighbor_kmer_strings,
        })
    }
}
