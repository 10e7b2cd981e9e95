// scalargrad-core/src/ops/arithmetic/add.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, Op, ValueId};
use num_traits::Float;

// --- Forward Operation ---

/// Builds `a + b`, recording both operands for the backward pass.
pub fn add_op<T: Float>(
    graph: &mut Graph<T>,
    a: ValueId,
    b: ValueId,
) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "add")?;
    graph.check_id(b, "add")?;
    let data = graph.data(a) + graph.data(b);
    Ok(graph.push_node(data, vec![a, b], Op::Add))
}

/// Builds `a + c` for a bare number `c`, promoting `c` to a leaf first.
/// Addition commutes, so this also covers the left-constant form `c + a`.
pub fn add_scalar_op<T: Float>(
    graph: &mut Graph<T>,
    a: ValueId,
    c: T,
) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "add")?;
    let c_id = graph.leaf(c)?;
    add_op(graph, a, c_id)
}

// --- Backward Rule ---

/// d(x + y)/dx = 1 and d(x + y)/dy = 1: each operand slot receives the
/// output gradient unchanged. Accumulation is `+=` so `add(x, x)` credits
/// `x` twice.
pub(crate) fn add_backward<T: Float>(graph: &mut Graph<T>, out: ValueId) {
    let g = graph.grad(out);
    let (a, b) = graph.binary_operands(out);
    graph.accumulate_grad(a, g);
    graph.accumulate_grad(b, g);
}

// --- Graph Methods ---

impl<T: Float> Graph<T> {
    /// Adds two nodes. See [`add_op`].
    pub fn add(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, ScalarGradError> {
        add_op(self, a, b)
    }

    /// Adds a bare number to a node. See [`add_scalar_op`].
    pub fn add_scalar(&mut self, a: ValueId, c: T) -> Result<ValueId, ScalarGradError> {
        add_scalar_op(self, a, c)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
