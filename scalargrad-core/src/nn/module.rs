use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use num_traits::Float;

/// The base trait for all network building blocks (neurons, layers,
/// containers).
///
/// A module owns parameter leaves inside a [`Graph`] and composes operation
/// builders into an output expression. After `Graph::backward` on a loss
/// rooted in that expression, the caller reads gradients off
/// [`Module::parameters`].
pub trait Module<T: Float>: std::fmt::Debug {
    /// Builds the module's forward expression over `input` node ids.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] if `input` does not
    /// match the module's expected width, or propagates builder errors.
    fn forward(
        &self,
        graph: &mut Graph<T>,
        input: &[ValueId],
    ) -> Result<Vec<ValueId>, ScalarGradError>;

    /// All learnable parameter leaves of the module, including those of
    /// sub-modules.
    fn parameters(&self) -> Vec<ValueId>;
}
