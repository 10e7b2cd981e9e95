// scalargrad-core/src/ops/arithmetic/div.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::pow_op;
use num_traits::Float;

// --- Forward Operations (derived) ---

/// Builds `a / b` as `a * b^-1`. Derived; the chain rule through mul and
/// pow yields d/da = 1/b and d/db = -a/b².
pub fn div_op<T: Float>(
    graph: &mut Graph<T>,
    a: ValueId,
    b: ValueId,
) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "div")?;
    graph.check_id(b, "div")?;
    let inv_b = pow_op(graph, b, -T::one())?;
    mul_op(graph, a, inv_b)
}

/// Builds `a / c` for a bare number `c`, promoting `c` to a leaf first.
pub fn div_scalar_op<T: Float>(
    graph: &mut Graph<T>,
    a: ValueId,
    c: T,
) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "div")?;
    let c_id = graph.leaf(c)?;
    div_op(graph, a, c_id)
}

// --- Graph Methods ---

impl<T: Float> Graph<T> {
    /// Divides one node by another. See [`div_op`].
    pub fn div(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, ScalarGradError> {
        div_op(self, a, b)
    }

    /// Divides a node by a bare number. See [`div_scalar_op`].
    pub fn div_scalar(&mut self, a: ValueId, c: T) -> Result<ValueId, ScalarGradError> {
        div_scalar_op(self, a, c)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
