// scalargrad-core/src/ops/arithmetic/neg.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use crate::ops::arithmetic::mul::mul_scalar_op;
use num_traits::Float;

// --- Forward Operation (derived) ---

/// Builds `-a` as `a * -1`. Derived through [`mul_scalar_op`]; the chain
/// rule through the multiplication yields the correct gradient, so no
/// backward rule of its own exists.
pub fn neg_op<T: Float>(graph: &mut Graph<T>, a: ValueId) -> Result<ValueId, ScalarGradError> {
    mul_scalar_op(graph, a, -T::one())
}

// --- Graph Method ---

impl<T: Float> Graph<T> {
    /// Negates a node. See [`neg_op`].
    pub fn neg(&mut self, a: ValueId) -> Result<ValueId, ScalarGradError> {
        neg_op(self, a)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
