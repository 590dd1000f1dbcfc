//! Breadth-first traversal over branches: orientation policy, the node
//! cap, and assembly of the output graph.

use std::collections::VecDeque;
use std::io::{Read, Seek};

use crate::alphabet::canonical;
use crate::edge_set::Orientation;
use crate::error::GraphError;
use crate::random_access::RandomAccess;

use super::branch::Branch;
use super::graph::{add_oriented_edge, Graph};

/// Traversal search policy relative to the seed k-mer's stored orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOrientation {
    /// Only walk forward from the seed.
    Original,
    /// Only walk backward from the seed.
    Reverse,
    /// Walk both directions; the initial seed also looks one step
    /// backward to pick up a unique predecessor.
    Both,
}

struct Seed {
    start: String,
    orientation: Orientation,
    connecting_node: Option<String>,
}

/// A bounded, cycle-safe breadth-first walker over a colored de Bruijn graph.
pub struct TraversalEngine {
    max_nodes: u64,
}

impl TraversalEngine {
    /// Builds an engine that stops once the output graph reaches
    /// `max_nodes` nodes.
    #[must_use]
    pub const fn new(max_nodes: u64) -> Self {
        Self { max_nodes }
    }

    /// Traverses outward from `start` in the given color and orientation,
    /// returning the assembled graph.
    pub fn traverse_from<S: Read + Seek>(
        &self,
        accessor: &mut RandomAccess<S>,
        color: usize,
        orientation: EngineOrientation,
        start: &str,
    ) -> Result<Graph, GraphError> {
        let mut graph = Graph::new();
        let mut queue: VecDeque<Seed> = VecDeque::new();

        let initial_orientation = match orientation {
            EngineOrientation::Reverse => Orientation::Reverse,
            EngineOrientation::Original | EngineOrientation::Both => Orientation::Original,
        };
        queue.push_back(Seed {
            start: start.to_string(),
            orientation: initial_orientation,
            connecting_node: None,
        });

        self.process_next(accessor, color, orientation, &mut graph, &mut queue)?;

        if orientation == EngineOrientation::Both {
            let start_canonical = canonical(start)?;
            match accessor.get_by_canonical(&start_canonical) {
                Ok(record) => {
                    let edge_set = record.edges()[color];
                    let kmer_strings =
                        edge_set.neighbor_kmer_strings(&start_canonical, Orientation::Reverse)?;
                    if kmer_strings.len() == 1 {
                        queue.push_back(Seed {
                            start: kmer_strings.into_iter().next().expect("checked len == 1"),
                            orientation: Orientation::Reverse,
                            connecting_node: Some(start_canonical),
                        });
                    }
                }
                Err(GraphError::NotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = graph.node_count(), "seeded traversal");

        while !queue.is_empty() && (graph.node_count() as u64) < self.max_nodes {
            self.process_next(accessor, color, orientation, &mut graph, &mut queue)?;
        }

        #[cfg(feature = "tracing")]
        if (graph.node_count() as u64) >= self.max_nodes {
            tracing::info!(nodes = graph.node_count(), "traversal hit node cap");
        }

        Ok(graph)
    }

    fn process_next<S: Read + Seek>(
        &self,
        accessor: &mut RandomAccess<S>,
        color: usize,
        engine_orientation: EngineOrientation,
        graph: &mut Graph,
        queue: &mut VecDeque<Seed>,
    ) -> Result<(), GraphError> {
        let Some(seed) = queue.pop_front() else {
            return Ok(());
        };

        let branch = Branch::traverse_from(
            accessor,
            color,
            &seed.start,
            seed.orientation,
            graph,
            self.max_nodes,
        )?;

        graph.absorb(&branch.graph);

        if let (Some(connecting), Some(first)) = (&seed.connecting_node, &branch.first_kmer_string)
        {
            add_oriented_edge(graph, connecting, first, seed.orientation, color);
        }

        let Some(last) = branch.last_kmer_string.clone() else {
            return Ok(());
        };

        let mut pairs = vec![(branch.orientation, branch.neighbor_kmer_strings.clone())];
        if engine_orientation == EngineOrientation::Both {
            pairs.push((
                branch.orientation.other(),
                branch.reverse_neighbor_kmer_strings.clone(),
            ));
        }

        for (orientation, neighbors) in pairs {
            for neighbor in neighbors {
                if graph.contains_node(&neighbor) {
                    add_oriented_edge(graph, &last, &neighbor, orientation, color);
                } else {
                    queue.push_back(Seed {
                        start: neighbor,
                        orientation,
                        connecting_node: Some(last.clone()),
                    });
                }
            }
        }

        Ok(())
    }
}
