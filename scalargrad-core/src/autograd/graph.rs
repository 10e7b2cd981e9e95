use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use num_traits::Float;

/// Produces a topological order of every node reachable from `root`: each
/// node appears exactly once, strictly after all of its predecessors, with
/// the root last.
///
/// Depth-first post-order with an index-keyed visited set, so diamond
/// dependencies (a node reachable along two paths) are visited once. The
/// visited and order state is threaded explicitly through the recursion;
/// the result is a pure function of `(graph, root)`.
pub fn topological_sort<T: Float>(
    graph: &Graph<T>,
    root: ValueId,
) -> Result<Vec<ValueId>, ScalarGradError> {
    graph.check_id(root, "topological_sort")?;
    let mut visited = vec![false; graph.len()];
    let mut order = Vec::new();
    build_topo(graph, root, &mut visited, &mut order);
    Ok(order)
}

/// Recursive helper: emit all unvisited predecessors, then the node itself.
fn build_topo<T: Float>(
    graph: &Graph<T>,
    node: ValueId,
    visited: &mut [bool],
    order: &mut Vec<ValueId>,
) {
    if visited[node.index()] {
        return;
    }
    visited[node.index()] = true;
    for &pred in graph.predecessors(node) {
        build_topo(graph, pred, visited, order);
    }
    order.push(node);
}
