// scalargrad-core/src/nn/mod.rs
// Thin consumer of the engine surface: neurons, layers and the MLP built
// from weighted sums plus tanh. It only composes builders and reads grads
// off parameter leaves; the update rule that consumes those gradients lives
// outside this crate.

pub mod init;
pub mod layers;
pub mod module; // Module trait

// Re-export common items
pub use layers::layer::Layer;
pub use layers::mlp::Mlp;
pub use layers::neuron::Neuron;
pub use module::Module;
