//! Max-flow computation and verification for the FluxMax puzzle client.
//!
//! This crate provides the WASM-compiled core of the puzzle: computing the
//! true maximum flow through a level's network and checking a player's flow
//! assignment for feasibility and optimality, without server roundtrips.

use wasm_bindgen::prelude::*;

mod algorithms;
mod api;
mod graph;
mod verify;
pub mod wasm;

pub use algorithms::maxflow::{max_flow, source_side_min_cut};
pub use api::{compute_max_flow, min_cut_nodes, verify_flow, EdgeSpec, FlowEntry, FlowInputError};
pub use graph::FlowNetwork;
pub use verify::VerifyOutcome;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
