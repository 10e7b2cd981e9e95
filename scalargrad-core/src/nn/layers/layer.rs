use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use num_traits::Float;
use rand::Rng;

/// A row of independent neurons applied to the same input vector.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Creates a layer of `n_outputs` neurons, each taking `n_inputs`
    /// inputs.
    pub fn new<T, R>(
        graph: &mut Graph<T>,
        rng: &mut R,
        n_inputs: usize,
        n_outputs: usize,
    ) -> Result<Self, ScalarGradError>
    where
        T: Float,
        R: Rng + ?Sized,
    {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(graph, rng, n_inputs))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons })
    }

    /// Number of neurons (output width).
    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl<T: Float> Module<T> for Layer {
    fn forward(
        &self,
        graph: &mut Graph<T>,
        input: &[ValueId],
    ) -> Result<Vec<ValueId>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, input))
            .collect()
    }

    fn parameters(&self) -> Vec<ValueId> {
        self.neurons
            .iter()
            .flat_map(|neuron| Module::<T>::parameters(neuron))
            .collect()
    }
}
