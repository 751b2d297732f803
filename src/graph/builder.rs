//! Star-shaped sample graph.
//!
//! The main song is the single root; every sampled song hangs off it with
//! exactly one incoming edge. One node is created per sample record, so two
//! samples sharing a title still get separate nodes.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::{SongDetails, SongRecord};

/// Role of a node in the star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeRole {
    Main,
    Sample,
}

/// Node weight: the song plus its role
#[derive(Debug, Clone, PartialEq)]
pub struct SampleNode {
    pub record: SongRecord,
    pub role: NodeRole,
}

/// Directed graph from a main song to each song it samples
#[derive(Debug, Clone)]
pub struct SampleGraph {
    graph: DiGraph<SampleNode, ()>,
    main: NodeIndex,
}

/// Build the star graph for a main song and its samples.
pub fn build_graph(main_song: &SongRecord, sampled_songs: &[SongRecord]) -> SampleGraph {
    let mut graph = DiGraph::with_capacity(sampled_songs.len() + 1, sampled_songs.len());
    let main = graph.add_node(SampleNode {
        record: main_song.clone(),
        role: NodeRole::Main,
    });

    for sample in sampled_songs {
        let idx = graph.add_node(SampleNode {
            record: sample.clone(),
            role: NodeRole::Sample,
        });
        graph.add_edge(main, idx, ());
    }

    SampleGraph { graph, main }
}

impl SampleGraph {
    pub fn from_details(details: &SongDetails) -> Self {
        build_graph(&details.main_song, &details.sampled_songs)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn main_index(&self) -> NodeIndex {
        self.main
    }

    pub fn main_song(&self) -> &SongRecord {
        &self.graph[self.main].record
    }

    /// Sample nodes in insertion order
    pub fn sample_nodes(&self) -> impl Iterator<Item = (NodeIndex, &SampleNode)> {
        self.nodes().filter(|(_, node)| node.role == NodeRole::Sample)
    }

    /// All nodes in insertion order (main first)
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &SampleNode)> {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Edges as (source, target) pairs
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_indices()
            .filter_map(move |e| self.graph.edge_endpoints(e))
    }

    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .count()
    }
}
