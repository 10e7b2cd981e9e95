use scalargrad_core::{Graph, ValueId};

/// Asserts that `order` is a valid topological order of `graph`: every
/// predecessor of each node occupies a strictly earlier position.
pub fn assert_topological(graph: &Graph<f64>, order: &[ValueId]) {
    let position = |id: ValueId| {
        order
            .iter()
            .position(|&n| n == id)
            .unwrap_or_else(|| panic!("node {:?} missing from order", id))
    };
    for &node in order {
        for &pred in graph.predecessors(node) {
            assert!(
                position(pred) < position(node),
                "predecessor {:?} of {:?} is not earlier in the order",
                pred,
                node
            );
        }
    }
}
