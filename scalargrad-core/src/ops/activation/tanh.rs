// scalargrad-core/src/ops/activation/tanh.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, Op, ValueId};
use num_traits::Float;

// --- Forward Operation ---

/// Hyperbolic tangent: `(e^{2x} - 1) / (e^{2x} + 1)`.
pub fn tanh_op<T: Float>(graph: &mut Graph<T>, a: ValueId) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "tanh")?;
    let x = graph.data(a);
    let e2x = (x + x).exp();
    let data = (e2x - T::one()) / (e2x + T::one());
    Ok(graph.push_node(data, vec![a], Op::Tanh))
}

// --- Backward Rule ---

/// d(tanh x)/dx = 1 - tanh(x)², expressed through the output's own data.
pub(crate) fn tanh_backward<T: Float>(graph: &mut Graph<T>, out: ValueId) {
    let g = graph.grad(out);
    let t = graph.data(out);
    let a = graph.unary_operand(out);
    graph.accumulate_grad(a, (T::one() - t * t) * g);
}

// --- Graph Method ---

impl<T: Float> Graph<T> {
    /// Applies the hyperbolic tangent to a node. See [`tanh_op`].
    pub fn tanh(&mut self, a: ValueId) -> Result<ValueId, ScalarGradError> {
        tanh_op(self, a)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
