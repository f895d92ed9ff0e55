//! Validated entry points over the flow core.
//!
//! Every function here builds fresh, isolated graph state from plain records
//! and rejects malformed input before any computation runs. The puzzle
//! client calls these through the WASM adapter; native embeddings and tests
//! call them directly.

use crate::algorithms::maxflow;
use crate::graph::FlowNetwork;
use crate::verify::{self, VerifyOutcome};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A directed edge with capacity, as it appears in level definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: usize,
    pub to: usize,
    pub capacity: i64,
}

/// One sparse entry of a player-supplied flow assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEntry {
    pub from: usize,
    pub to: usize,
    pub value: i64,
}

/// Input rejected before computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowInputError {
    #[error("node {node} out of range for {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("negative capacity {capacity} on edge {from} -> {to}")]
    NegativeCapacity {
        from: usize,
        to: usize,
        capacity: i64,
    },

    #[error("negative flow value {value} on edge {from} -> {to}")]
    NegativeFlowValue { from: usize, to: usize, value: i64 },

    #[error("source and sink must be distinct (both {node})")]
    SourceEqualsSink { node: usize },
}

fn check_node(node: usize, node_count: usize) -> Result<(), FlowInputError> {
    if node < node_count {
        Ok(())
    } else {
        Err(FlowInputError::NodeOutOfRange { node, node_count })
    }
}

fn build_network(
    node_count: usize,
    edges: &[EdgeSpec],
    source: usize,
    sink: usize,
) -> Result<FlowNetwork, FlowInputError> {
    check_node(source, node_count)?;
    check_node(sink, node_count)?;
    if source == sink {
        return Err(FlowInputError::SourceEqualsSink { node: source });
    }

    let mut network = FlowNetwork::new(node_count);
    for edge in edges {
        check_node(edge.from, node_count)?;
        check_node(edge.to, node_count)?;
        if edge.capacity < 0 {
            return Err(FlowInputError::NegativeCapacity {
                from: edge.from,
                to: edge.to,
                capacity: edge.capacity,
            });
        }
        network.add_edge(edge.from, edge.to, edge.capacity);
    }
    Ok(network)
}

/// Compute the maximum flow value for a network given as plain records.
pub fn compute_max_flow(
    node_count: usize,
    edges: &[EdgeSpec],
    source: usize,
    sink: usize,
) -> Result<i64, FlowInputError> {
    let mut network = build_network(node_count, edges, source, sink)?;
    Ok(maxflow::max_flow(&mut network, source, sink))
}

/// Verify a player-supplied flow assignment against the network.
pub fn verify_flow(
    node_count: usize,
    edges: &[EdgeSpec],
    source: usize,
    sink: usize,
    user_flow: &[FlowEntry],
) -> Result<VerifyOutcome, FlowInputError> {
    let network = build_network(node_count, edges, source, sink)?;

    let mut flow_map = HashMap::new();
    for entry in user_flow {
        check_node(entry.from, node_count)?;
        check_node(entry.to, node_count)?;
        if entry.value < 0 {
            return Err(FlowInputError::NegativeFlowValue {
                from: entry.from,
                to: entry.to,
                value: entry.value,
            });
        }
        // A repeated pair overwrites, same as setting the flow twice.
        flow_map.insert((entry.from, entry.to), entry.value);
    }

    Ok(verify::verify(&network, source, sink, &flow_map))
}

/// Source side of a minimum cut, for bottleneck highlighting.
pub fn min_cut_nodes(
    node_count: usize,
    edges: &[EdgeSpec],
    source: usize,
    sink: usize,
) -> Result<Vec<usize>, FlowInputError> {
    let mut network = build_network(node_count, edges, source, sink)?;
    maxflow::max_flow(&mut network, source, sink);
    Ok(maxflow::source_side_min_cut(&network, source))
}
