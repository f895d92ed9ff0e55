//! Capacitated flow network.
//!
//! Stores static edge capacities and a mutable flow assignment over nodes
//! identified by dense indices. Absent entries read as zero, so sparse
//! networks never need explicit initialization.

use std::collections::HashMap;

/// Directed network with per-edge capacities and a flow assignment.
///
/// Capacities are fixed once edges are added; the flow assignment is the only
/// mutable state. `push_flow` keeps flow antisymmetric, which is what exposes
/// residual reverse arcs for push-back during augmentation.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    node_count: usize,
    /// Residual neighbors per node, covering both arc directions.
    adjacency: Vec<Vec<usize>>,
    capacities: HashMap<(usize, usize), i64>,
    flows: HashMap<(usize, usize), i64>,
}

impl FlowNetwork {
    /// Create an empty network over `node_count` nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            adjacency: vec![Vec::new(); node_count],
            capacities: HashMap::new(),
            flows: HashMap::new(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Add a directed edge, accumulating capacity on repeated pairs.
    ///
    /// No reverse capacity is created: anti-parallel capacity needs an
    /// explicit second call, matching how real networks model it. The node
    /// `v` still becomes a residual neighbor of `u` and vice versa, so BFS
    /// can traverse a reverse arc that only exists through push-back.
    pub fn add_edge(&mut self, u: usize, v: usize, capacity: i64) {
        debug_assert!(u < self.node_count && v < self.node_count);
        debug_assert!(capacity >= 0);

        *self.capacities.entry((u, v)).or_insert(0) += capacity;
        if !self.adjacency[u].contains(&v) {
            self.adjacency[u].push(v);
        }
        if !self.adjacency[v].contains(&u) {
            self.adjacency[v].push(u);
        }
    }

    /// Capacity of the ordered pair, zero if never added.
    pub fn capacity(&self, u: usize, v: usize) -> i64 {
        self.capacities.get(&(u, v)).copied().unwrap_or(0)
    }

    /// Current flow on the ordered pair, zero if never touched.
    pub fn flow(&self, u: usize, v: usize) -> i64 {
        self.flows.get(&(u, v)).copied().unwrap_or(0)
    }

    /// Remaining capacity on the arc: `capacity - flow`.
    ///
    /// Positive on a reverse arc whose forward twin carries flow, which is
    /// exactly what lets augmentation undo earlier routing decisions.
    pub fn residual_capacity(&self, u: usize, v: usize) -> i64 {
        self.capacity(u, v) - self.flow(u, v)
    }

    /// Push `amount` units along `(u, v)` with the antisymmetric update.
    ///
    /// The engine computes bottlenecks before pushing, so a request beyond
    /// the residual capacity is an engine defect, not a runtime condition.
    pub fn push_flow(&mut self, u: usize, v: usize, amount: i64) {
        assert!(amount > 0, "push_flow amount must be positive");
        assert!(
            amount <= self.residual_capacity(u, v),
            "push_flow beyond residual capacity on ({u}, {v})"
        );
        *self.flows.entry((u, v)).or_insert(0) += amount;
        *self.flows.entry((v, u)).or_insert(0) -= amount;
    }

    /// Overwrite the flow on one direction only.
    ///
    /// Used when ingesting an externally supplied assignment, which is not
    /// required to be antisymmetric or complete.
    pub fn set_flow(&mut self, u: usize, v: usize, value: i64) {
        debug_assert!(u < self.node_count && v < self.node_count);
        self.flows.insert((u, v), value);
    }

    /// Residual neighbors of `u`, in insertion order.
    pub fn neighbors_slice(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    /// Ordered pairs with positive capacity.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.capacities
            .iter()
            .filter(|(_, &c)| c > 0)
            .map(|(&(u, v), &c)| (u, v, c))
    }

    /// Flow entries that have been explicitly written, including zeros.
    pub fn flow_entries(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.flows.iter().map(|(&(u, v), &f)| (u, v, f))
    }

    /// Copy of the capacity structure with an all-zero flow assignment.
    pub fn capacity_copy(&self) -> FlowNetwork {
        FlowNetwork {
            node_count: self.node_count,
            adjacency: self.adjacency.clone(),
            capacities: self.capacities.clone(),
            flows: HashMap::new(),
        }
    }
}
