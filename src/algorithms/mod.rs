//! Core flow algorithms.

pub mod maxflow;
