//! Contest snippet library: validated stdin scanning, overflow-checked
//! accumulation and the usual DP, graph and number-theory helpers.

pub mod accum;
pub mod dp;
pub mod errors;
pub mod graph;
pub mod math;
pub mod scan;
pub mod seq;
