// scalargrad-core/src/ops/activation/exp.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, Op, ValueId};
use num_traits::Float;

// --- Forward Operation ---

/// Exponential: `e^x`. Tagged [`Op::Exp`], distinct from the tanh tag, so
/// tag-based introspection can tell the two apart.
pub fn exp_op<T: Float>(graph: &mut Graph<T>, a: ValueId) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "exp")?;
    let data = graph.data(a).exp();
    Ok(graph.push_node(data, vec![a], Op::Exp))
}

// --- Backward Rule ---

/// d(e^x)/dx = e^x, which is the output's own data.
pub(crate) fn exp_backward<T: Float>(graph: &mut Graph<T>, out: ValueId) {
    let g = graph.grad(out);
    let e = graph.data(out);
    let a = graph.unary_operand(out);
    graph.accumulate_grad(a, e * g);
}

// --- Graph Method ---

impl<T: Float> Graph<T> {
    /// Applies the exponential to a node. See [`exp_op`].
    pub fn exp(&mut self, a: ValueId) -> Result<ValueId, ScalarGradError> {
        exp_op(self, a)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
