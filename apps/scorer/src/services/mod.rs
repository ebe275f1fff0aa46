//! Stateful session services wrapping the pure domain.

pub mod match_flow;
