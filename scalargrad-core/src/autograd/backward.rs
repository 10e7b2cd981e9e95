use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::graph::{Graph, Op, ValueId};
use crate::ops::activation::exp::exp_backward;
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use num_traits::Float;

impl<T: Float> Graph<T> {
    /// Performs the backward pass starting from `root`.
    ///
    /// Computes the gradient of `root` with respect to every node reachable
    /// from it: topologically sorts the reachable subgraph, seeds
    /// `root.grad = 1.0` (derivative of the output with respect to itself),
    /// then walks the order in reverse invoking each node's local gradient
    /// rule exactly once. By the traversal invariant, a node's grad is fully
    /// accumulated from all of its consumers before its own rule runs.
    ///
    /// Gradients are never reset between calls; repeated passes accumulate
    /// everywhere except the root seed. Call [`Graph::zero_grad`] first for
    /// an independent pass.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::InvalidValueId`] if `root` does not belong
    /// to this graph. Once the root is validated the pass cannot fail: every
    /// rule is pure arithmetic over already-validated fields.
    pub fn backward(&mut self, root: ValueId) -> Result<(), ScalarGradError> {
        let order = topological_sort(self, root)?;
        if order.len() == 1 {
            log::debug!("backward() called on a leaf root; nothing to propagate");
        }
        log::debug!("backward pass over {} reachable nodes", order.len());

        self.set_grad(root, T::one());
        for &id in order.iter().rev() {
            run_backward_rule(self, id);
        }
        Ok(())
    }

    /// The reverse-safe topological order ending at `root`. Exposed for
    /// introspection; [`Graph::backward`] uses the same traversal.
    pub fn topological_order(&self, root: ValueId) -> Result<Vec<ValueId>, ScalarGradError> {
        topological_sort(self, root)
    }
}

/// Dispatches a node's local gradient rule by op tag. Leaves have no rule.
/// Derived ops (neg, sub, div) never appear here under their own name: they
/// are compositions of these primitives.
fn run_backward_rule<T: Float>(graph: &mut Graph<T>, id: ValueId) {
    match graph.op(id) {
        Op::Leaf => {}
        Op::Add => add_backward(graph, id),
        Op::Mul => mul_backward(graph, id),
        Op::Powf(exponent) => pow_backward(graph, id, exponent),
        Op::Tanh => tanh_backward(graph, id),
        Op::Exp => exp_backward(graph, id),
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
