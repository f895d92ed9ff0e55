//! JS boundary for the puzzle client.
//!
//! Thin adapter only: decode plain records, call into the core, encode the
//! result. Edge lists arrive as arrays of `{from, to, capacity}` objects;
//! player flows arrive as the client's sparse map keyed by `"u-v"` strings.

use crate::api::{self, EdgeSpec, FlowEntry};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

fn parse_edges(edges: JsValue) -> Result<Vec<EdgeSpec>, JsError> {
    serde_wasm_bindgen::from_value(edges).map_err(|e| JsError::new(&e.to_string()))
}

/// Parse the client's flow map, e.g. `{"0-1": 5, "1-2": 5}`.
fn parse_flow_map(flows: JsValue) -> Result<Vec<FlowEntry>, JsError> {
    let raw: HashMap<String, i64> =
        serde_wasm_bindgen::from_value(flows).map_err(|e| JsError::new(&e.to_string()))?;

    raw.into_iter()
        .map(|(key, value)| {
            let (from, to) = key
                .split_once('-')
                .ok_or_else(|| JsError::new(&format!("malformed flow key: {key:?}")))?;
            let from = from
                .parse()
                .map_err(|_| JsError::new(&format!("malformed flow key: {key:?}")))?;
            let to = to
                .parse()
                .map_err(|_| JsError::new(&format!("malformed flow key: {key:?}")))?;
            Ok(FlowEntry { from, to, value })
        })
        .collect()
}

/// Compute the maximum flow value for a level's network.
#[wasm_bindgen]
pub fn compute_max_flow(
    node_count: usize,
    edges: JsValue,
    source: usize,
    sink: usize,
) -> Result<i64, JsError> {
    let edges = parse_edges(edges)?;
    Ok(api::compute_max_flow(node_count, &edges, source, sink)?)
}

/// Verify a player's flow map against a level's network.
///
/// Returns `{is_valid, user_flow_value, true_max_flow_value}`.
#[wasm_bindgen]
pub fn verify_flow(
    node_count: usize,
    edges: JsValue,
    source: usize,
    sink: usize,
    flows: JsValue,
) -> Result<JsValue, JsError> {
    let edges = parse_edges(edges)?;
    let user_flow = parse_flow_map(flows)?;
    let outcome = api::verify_flow(node_count, &edges, source, sink, &user_flow)?;
    serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsError::new(&e.to_string()))
}

/// Source side of a minimum cut, for highlighting bottleneck edges.
#[wasm_bindgen]
pub fn min_cut_nodes(
    node_count: usize,
    edges: JsValue,
    source: usize,
    sink: usize,
) -> Result<Vec<u32>, JsError> {
    let edges = parse_edges(edges)?;
    let side = api::min_cut_nodes(node_count, &edges, source, sink)?;
    Ok(side.into_iter().map(|n| n as u32).collect())
}
