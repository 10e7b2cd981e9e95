// scalargrad-core/src/ops/arithmetic/sub.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use crate::ops::arithmetic::add::{add_op, add_scalar_op};
use crate::ops::arithmetic::neg::neg_op;
use num_traits::Float;

// --- Forward Operations (derived) ---

/// Builds `a - b` as `a + (-b)`. Derived; no backward rule of its own.
pub fn sub_op<T: Float>(
    graph: &mut Graph<T>,
    a: ValueId,
    b: ValueId,
) -> Result<ValueId, ScalarGradError> {
    graph.check_id(a, "sub")?;
    graph.check_id(b, "sub")?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

/// Builds `a - c` for a bare number `c`, as `a + (-c)`.
pub fn sub_scalar_op<T: Float>(
    graph: &mut Graph<T>,
    a: ValueId,
    c: T,
) -> Result<ValueId, ScalarGradError> {
    add_scalar_op(graph, a, -c)
}

/// Builds the left-constant form `c - a`, normalized through the same
/// builders as `(-a) + c`.
pub fn scalar_sub_op<T: Float>(
    graph: &mut Graph<T>,
    c: T,
    a: ValueId,
) -> Result<ValueId, ScalarGradError> {
    let neg_a = neg_op(graph, a)?;
    add_scalar_op(graph, neg_a, c)
}

// --- Graph Methods ---

impl<T: Float> Graph<T> {
    /// Subtracts one node from another. See [`sub_op`].
    pub fn sub(&mut self, a: ValueId, b: ValueId) -> Result<ValueId, ScalarGradError> {
        sub_op(self, a, b)
    }

    /// Subtracts a bare number from a node. See [`sub_scalar_op`].
    pub fn sub_scalar(&mut self, a: ValueId, c: T) -> Result<ValueId, ScalarGradError> {
        sub_scalar_op(self, a, c)
    }

    /// Subtracts a node from a bare number. See [`scalar_sub_op`].
    pub fn scalar_sub(&mut self, c: T, a: ValueId) -> Result<ValueId, ScalarGradError> {
        scalar_sub_op(self, c, a)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
