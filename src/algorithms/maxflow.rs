//! Maximum flow via Edmonds–Karp.
//!
//! Ford–Fulkerson with breadth-first augmenting-path selection: BFS reaches
//! the sink along a fewest-hops path first, which is what bounds the number
//! of augmentations polynomially.

use crate::graph::FlowNetwork;
use std::collections::VecDeque;

const NO_PARENT: usize = usize::MAX;

/// BFS over positive-residual arcs, recording a parent per visited node.
///
/// Stops as soon as the sink is reached. Returns whether an augmenting path
/// exists; on success the path can be walked backwards through `parent`.
fn augmenting_path(
    network: &FlowNetwork,
    source: usize,
    sink: usize,
    parent: &mut [usize],
) -> bool {
    parent.fill(NO_PARENT);
    let mut visited = vec![false; network.len()];
    let mut queue = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for &v in network.neighbors_slice(u) {
            if !visited[v] && network.residual_capacity(u, v) > 0 {
                visited[v] = true;
                parent[v] = u;
                if v == sink {
                    return true;
                }
                queue.push_back(v);
            }
        }
    }

    false
}

/// Compute the maximum flow from `source` to `sink`.
///
/// Repeatedly augments along BFS paths until the sink is unreachable in the
/// residual graph. On return the network's flow assignment holds one valid
/// maximum-flow witness (not necessarily the only one).
///
/// `source` and `sink` must be distinct in-range indices; the api layer
/// rejects anything else before calling in.
pub fn max_flow(network: &mut FlowNetwork, source: usize, sink: usize) -> i64 {
    debug_assert!(source != sink);
    debug_assert!(source < network.len() && sink < network.len());

    let mut parent = vec![NO_PARENT; network.len()];
    let mut total = 0;

    while augmenting_path(network, source, sink, &mut parent) {
        // Bottleneck: minimum residual capacity along the path.
        let mut bottleneck = i64::MAX;
        let mut v = sink;
        while v != source {
            let u = parent[v];
            bottleneck = bottleneck.min(network.residual_capacity(u, v));
            v = u;
        }

        let mut v = sink;
        while v != source {
            let u = parent[v];
            network.push_flow(u, v, bottleneck);
            v = u;
        }

        total += bottleneck;
    }

    total
}

/// Nodes reachable from `source` through positive-residual arcs.
///
/// After `max_flow` has terminated this is the source side of a minimum cut:
/// every edge crossing out of the returned set is saturated, and their total
/// capacity equals the maximum flow value. The puzzle client uses this to
/// highlight bottleneck edges.
pub fn source_side_min_cut(network: &FlowNetwork, source: usize) -> Vec<usize> {
    let mut visited = vec![false; network.len()];
    let mut queue = VecDeque::new();
    let mut side = Vec::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        side.push(u);
        for &v in network.neighbors_slice(u) {
            if !visited[v] && network.residual_capacity(u, v) > 0 {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }

    side
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_from(node_count: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork {
        let mut network = FlowNetwork::new(node_count);
        for &(u, v, c) in edges {
            network.add_edge(u, v, c);
        }
        network
    }

    #[test]
    fn test_linear_chain_bottleneck() {
        // 0 -10-> 1 -5-> 2 -15-> 3
        let mut network = network_from(4, &[(0, 1, 10), (1, 2, 5), (2, 3, 15)]);
        assert_eq!(max_flow(&mut network, 0, 3), 5);
    }

    #[test]
    fn test_parallel_paths() {
        //     1
        //    / \
        //   0   3    all capacities 10
        //    \ /
        //     2
        let mut network = network_from(4, &[(0, 1, 10), (0, 2, 10), (1, 3, 10), (2, 3, 10)]);
        assert_eq!(max_flow(&mut network, 0, 3), 20);
    }

    #[test]
    fn test_no_edges() {
        let mut network = FlowNetwork::new(4);
        assert_eq!(max_flow(&mut network, 0, 3), 0);
    }

    #[test]
    fn test_source_without_outgoing_edges() {
        let mut network = network_from(3, &[(1, 2, 7)]);
        assert_eq!(max_flow(&mut network, 0, 2), 0);
    }

    #[test]
    fn test_sink_unreachable() {
        // 0 -> 1, 2 -> 3, no connection between the halves.
        let mut network = network_from(4, &[(0, 1, 5), (2, 3, 5)]);
        assert_eq!(max_flow(&mut network, 0, 3), 0);
    }

    #[test]
    fn test_requires_push_back() {
        // The first BFS path 0->1->2->5 saturates 2->5; the only remaining
        // augmentation 0->3->2->1->4->5 must traverse (1, 2) backwards.
        // Forward-only search would stall at 1 instead of reaching 2.
        let mut network = network_from(
            6,
            &[
                (0, 1, 1),
                (1, 2, 1),
                (2, 5, 1),
                (0, 3, 1),
                (3, 2, 1),
                (1, 4, 1),
                (4, 5, 1),
            ],
        );
        assert_eq!(max_flow(&mut network, 0, 5), 2);
    }

    #[test]
    fn test_mixed_network_with_back_edges() {
        let mut network = network_from(
            5,
            &[
                (0, 1, 16),
                (0, 2, 12),
                (1, 2, 9),
                (1, 3, 12),
                (2, 1, 3),
                (2, 4, 20),
                (3, 2, 7),
                (3, 4, 7),
                (4, 3, 4),
            ],
        );
        assert_eq!(max_flow(&mut network, 0, 4), 27);
    }

    #[test]
    fn test_network_with_bottlenecks() {
        let mut network = network_from(
            6,
            &[
                (0, 1, 10),
                (0, 2, 10),
                (1, 3, 4),
                (1, 4, 8),
                (2, 4, 9),
                (3, 5, 10),
                (4, 3, 6),
                (4, 5, 10),
                (5, 2, 2),
            ],
        );
        assert_eq!(max_flow(&mut network, 0, 5), 19);
    }

    #[test]
    fn test_saturated_source() {
        let mut network = network_from(
            7,
            &[
                (0, 1, 9),
                (0, 2, 5),
                (1, 3, 4),
                (1, 4, 8),
                (2, 1, 4),
                (2, 5, 8),
                (3, 6, 10),
                (4, 3, 3),
                (4, 5, 4),
                (5, 4, 2),
                (5, 6, 10),
                (6, 4, 2),
            ],
        );
        // Every unit the source can emit gets through.
        assert_eq!(max_flow(&mut network, 0, 6), 14);
    }

    #[test]
    fn test_value_bounded_by_source_capacity() {
        let edges = [(0, 1, 3), (0, 2, 4), (1, 3, 10), (2, 3, 10), (1, 2, 2)];
        let mut network = network_from(4, &edges);
        let value = max_flow(&mut network, 0, 3);
        let source_out: i64 = edges.iter().filter(|e| e.0 == 0).map(|e| e.2).sum();
        assert!(value <= source_out);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_accumulated_capacity_order_invariance() {
        let mut split_first = network_from(3, &[(0, 1, 3), (1, 2, 8), (0, 1, 5)]);
        let mut split_last = network_from(3, &[(1, 2, 8), (0, 1, 5), (0, 1, 3)]);
        assert_eq!(max_flow(&mut split_first, 0, 2), 8);
        assert_eq!(max_flow(&mut split_last, 0, 2), 8);
    }

    #[test]
    fn test_flow_assignment_invariants_after_run() {
        let mut network = network_from(
            6,
            &[
                (0, 1, 10),
                (0, 2, 10),
                (1, 3, 4),
                (1, 4, 8),
                (2, 4, 9),
                (3, 5, 10),
                (4, 3, 6),
                (4, 5, 10),
                (5, 2, 2),
            ],
        );
        let value = max_flow(&mut network, 0, 5);

        // Capacity bounds on every real edge.
        for (u, v, c) in network.edges() {
            let f = network.flow(u, v);
            assert!(f <= c, "flow {f} exceeds capacity {c} on ({u}, {v})");
        }
        // Antisymmetry on every touched pair.
        for (u, v, f) in network.flow_entries() {
            assert_eq!(network.flow(v, u), -f);
        }
        // Conservation at internal nodes, and value leaving the source.
        let mut balance = vec![0i64; network.len()];
        for (u, v, _) in network.edges() {
            // Negative flow on a real edge means the traffic is accounted on
            // its antiparallel twin; count each direction once.
            let f = network.flow(u, v).max(0);
            balance[u] -= f;
            balance[v] += f;
        }
        for node in 1..5 {
            assert_eq!(balance[node], 0, "conservation broken at node {node}");
        }
        assert_eq!(-balance[0], value);
        assert_eq!(balance[5], value);
    }

    #[test]
    fn test_min_cut_duality() {
        let mut network = network_from(
            7,
            &[
                (0, 1, 9),
                (0, 2, 5),
                (1, 3, 4),
                (1, 4, 8),
                (2, 1, 4),
                (2, 5, 8),
                (3, 6, 10),
                (4, 3, 3),
                (4, 5, 4),
                (5, 4, 2),
                (5, 6, 10),
                (6, 4, 2),
            ],
        );
        let value = max_flow(&mut network, 0, 6);

        let side = source_side_min_cut(&network, 0);
        let in_side = |n: usize| side.contains(&n);
        assert!(in_side(0));
        assert!(!in_side(6));

        // No residual capacity crosses the cut, and the crossing capacity
        // equals the flow value.
        let mut crossing_capacity = 0;
        for (u, v, c) in network.edges() {
            if in_side(u) && !in_side(v) {
                assert_eq!(network.residual_capacity(u, v), 0);
                crossing_capacity += c;
            }
        }
        assert_eq!(crossing_capacity, value);
    }

    #[test]
    fn test_min_cut_on_chain_is_bottleneck() {
        let mut network = network_from(4, &[(0, 1, 10), (1, 2, 5), (2, 3, 15)]);
        max_flow(&mut network, 0, 3);

        let mut side = source_side_min_cut(&network, 0);
        side.sort_unstable();
        assert_eq!(side, vec![0, 1]);
    }
}
