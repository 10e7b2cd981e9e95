// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, Op, ValueId};
use num_traits::Float;

// --- Forward Operation ---

/// Builds `a * b`, recording both operands for the backward pass.
pub fn mul_op<T: Float>(
    graph: &mut Graph<T>,
    a: ValueId,
    b: ValueId,
) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "mul")?;
    graph.check_id(b, "mul")?;
    let data = graph.data(a) * graph.data(b);
    Ok(graph.push_node(data, vec![a, b], Op::Mul))
}

/// Builds `a * c` for a bare number `c`, promoting `c` to a leaf first.
/// Multiplication commutes, so this also covers the left-constant form.
pub fn mul_scalar_op<T: Float>(
    graph: &mut Graph<T>,
    a: ValueId,
    c: T,
) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "mul")?;
    let c_id = graph.leaf(c)?;
    mul_op(graph, a, c_id)
}

// --- Backward Rule ---

/// d(x·y)/dx = y and d(x·y)/dy = x, evaluated at the operands' original
/// data. Reads the output's then-current grad, increments each operand.
pub(crate) fn mul_backward<T: Float>(graph: &mut Graph<T>, out: ValueId) {
    let g = graph.grad(out);
    let (a, b) = graph.binary_operands(out);
    let a_data = graph.data(a);
    let b_data = graph.data(b);
    graph.accumulate_grad(a, b_data * g);
    graph.accumulate_grad(b, a_data * g);
}

// --- Graph Methods ---

impl<T: Float> Graph<T> {
    /// Multiplies two nodes. See [`mul_op`].
    pub fn mul(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, ScalarGradError> {
        mul_op(self, a, b)
    }

    /// Multiplies a node by a bare number. See [`mul_scalar_op`].
    pub fn mul_scalar(&mut self, a: ValueId, c: T) -> Result<ValueId, ScalarGradError> {
        mul_scalar_op(self, a, c)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
