//! Flow assignment verification.
//!
//! Checks a player-supplied flow for conservation and capacity validity,
//! then compares its value against an independently computed maximum. The
//! reference maximum never sees the supplied flow, so a buggy or malicious
//! assignment cannot influence the answer it is judged against.

use crate::algorithms::maxflow;
use crate::graph::FlowNetwork;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of verifying a supplied flow assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyOutcome {
    /// Whether the assignment is feasible and equal in value to the maximum.
    pub is_valid: bool,
    /// Total positive flow the assignment sends out of the source.
    /// Zero when conservation is violated.
    pub user_flow_value: i64,
    /// Independently computed maximum flow value.
    pub true_max_flow_value: i64,
}

/// Verify a sparse flow assignment against the network's capacities.
///
/// Absent pairs imply flow 0. The assignment is not required to be
/// antisymmetric or complete; only the entries actually supplied are checked
/// and summed. All node indices in `user_flow` must be in range (the api
/// layer validates them first).
pub fn verify(
    network: &FlowNetwork,
    source: usize,
    sink: usize,
    user_flow: &HashMap<(usize, usize), i64>,
) -> VerifyOutcome {
    // Reference answer from the capacity structure alone, on fresh state.
    let mut reference = network.capacity_copy();
    let true_max_flow_value = maxflow::max_flow(&mut reference, source, sink);

    // Ingest the supplied entries as-is, one direction each.
    let mut supplied = network.capacity_copy();
    for (&(u, v), &value) in user_flow {
        supplied.set_flow(u, v, value);
    }

    if !conservation_holds(&supplied, source, sink) {
        // A conservation-violating assignment has no meaningful value, so
        // none is computed for it.
        return VerifyOutcome {
            is_valid: false,
            user_flow_value: 0,
            true_max_flow_value,
        };
    }

    let within_capacity = supplied
        .flow_entries()
        .all(|(u, v, f)| f >= 0 && f <= supplied.capacity(u, v));

    let user_flow_value = supplied
        .flow_entries()
        .filter(|&(u, _, f)| u == source && f > 0)
        .map(|(_, _, f)| f)
        .sum();

    VerifyOutcome {
        is_valid: within_capacity && user_flow_value == true_max_flow_value,
        user_flow_value,
        true_max_flow_value,
    }
}

/// Inflow equals outflow at every node other than source and sink, counting
/// only the entries actually supplied.
fn conservation_holds(supplied: &FlowNetwork, source: usize, sink: usize) -> bool {
    let mut balance = vec![0i64; supplied.len()];
    for (u, v, f) in supplied.flow_entries() {
        balance[u] -= f;
        balance[v] += f;
    }
    balance
        .iter()
        .enumerate()
        .all(|(node, &b)| node == source || node == sink || b == 0)
}
