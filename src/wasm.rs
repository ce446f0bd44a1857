//! WASM bindings for arc-order.
//!
//! Exposes `order` and `countCrossings` to JavaScript via wasm-bindgen. Both
//! take the text edge-list format.

use wasm_bindgen::prelude::*;

use crate::ingest::parse_edge_list;
use crate::{OptimizeConfig, count_crossings, optimize, optimize_grouped};

/// Optimized ordering, one label per line.
///
/// - `grouped`: keep the groups declared with `group G: ...` contiguous
/// - `refine`: add a pairwise-swap local search pass
#[wasm_bindgen]
pub fn order(src: &str, grouped: bool, refine: bool) -> Result<String, JsError> {
    let input = parse_edge_list(src).map_err(|e| JsError::new(&e.to_string()))?;
    let config = OptimizeConfig {
        refine,
        ..OptimizeConfig::default()
    };
    let optimized = if grouped {
        optimize_grouped(&input.nodes, &input.groups, &input.edges, &config)
    } else {
        optimize(&input.nodes, &input.edges, &config)
    }
    .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(optimized.ordering.join("\n"))
}

/// Crossing count of the edge list in declaration order.
#[wasm_bindgen(js_name = "countCrossings")]
pub fn count(src: &str) -> Result<usize, JsError> {
    let input = parse_edge_list(src).map_err(|e| JsError::new(&e.to_string()))?;
    count_crossings(&input.nodes, &input.edges).map_err(|e| JsError::new(&e.to_string()))
}
