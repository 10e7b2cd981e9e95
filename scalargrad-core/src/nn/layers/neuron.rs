use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use crate::nn::init;
use crate::nn::module::Module;
use num_traits::Float;
use rand::Rng;

/// A single tanh neuron: `tanh(w · x + b)` with weights and bias drawn
/// uniformly from [-1, 1).
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<ValueId>,
    bias: ValueId,
}

impl Neuron {
    /// Creates a neuron taking `n_inputs` inputs, allocating its parameter
    /// leaves in `graph`.
    pub fn new<T, R>(
        graph: &mut Graph<T>,
        rng: &mut R,
        n_inputs: usize,
    ) -> Result<Self, ScalarGradError>
    where
        T: Float,
        R: Rng + ?Sized,
    {
        let weights = init::uniform(graph, rng, n_inputs, -1.0, 1.0)?;
        let bias = init::uniform(graph, rng, 1, -1.0, 1.0)?[0];
        Ok(Neuron { weights, bias })
    }

    /// Number of inputs this neuron accepts.
    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    /// Builds `tanh(sum(w_i * x_i) + b)` and returns the activation node.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DimensionMismatch`] when `input` is not
    /// exactly `n_inputs` wide.
    pub fn activate<T: Float>(
        &self,
        graph: &mut Graph<T>,
        input: &[ValueId],
    ) -> Result<ValueId, ScalarGradError> {
        if input.len() != self.weights.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        // The sum starts from the bias, so a zero-input neuron still
        // produces tanh(b).
        let mut act = self.bias;
        for (&w, &x) in self.weights.iter().zip(input) {
            let wx = graph.mul(w, x)?;
            act = graph.add(act, wx)?;
        }
        graph.tanh(act)
    }
}

impl<T: Float> Module<T> for Neuron {
    fn forward(
        &self,
        graph: &mut Graph<T>,
        input: &[ValueId],
    ) -> Result<Vec<ValueId>, ScalarGradError> {
        Ok(vec![self.activate(graph, input)?])
    }

    fn parameters(&self) -> Vec<ValueId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
