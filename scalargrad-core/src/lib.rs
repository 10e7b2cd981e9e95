// Declares the main modules of the crate
pub mod autograd;
pub mod graph;
pub mod ops;

pub mod nn;
pub mod utils;

// Re-export the central types so they are reachable as `scalargrad_core::Graph` etc.
pub use graph::{Graph, Op, ValueId};
// Re-export traits required by public functions/structs
pub use num_traits;

pub mod error;
pub use error::ScalarGradError;
