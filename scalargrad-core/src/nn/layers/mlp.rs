use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use num_traits::Float;
use rand::Rng;

/// A multi-layer perceptron: layers chained from `n_inputs` through each
/// entry of `layer_sizes`, every layer feeding the next.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Creates an MLP. `layer_sizes` gives the width of each layer in
    /// order; e.g. `n_inputs = 3`, `layer_sizes = [4, 4, 1]` builds the
    /// classic 3-4-4-1 network.
    pub fn new<T, R>(
        graph: &mut Graph<T>,
        rng: &mut R,
        n_inputs: usize,
        layer_sizes: &[usize],
    ) -> Result<Self, ScalarGradError>
    where
        T: Float,
        R: Rng + ?Sized,
    {
        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut width = n_inputs;
        for &size in layer_sizes {
            layers.push(Layer::new(graph, rng, width, size)?);
            width = size;
        }
        Ok(Mlp { layers })
    }

    /// Number of layers.
    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }
}

impl<T: Float> Module<T> for Mlp {
    fn forward(
        &self,
        graph: &mut Graph<T>,
        input: &[ValueId],
    ) -> Result<Vec<ValueId>, ScalarGradError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(graph, &activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<ValueId> {
        self.layers
            .iter()
            .flat_map(|layer| Module::<T>::parameters(layer))
            .collect()
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
