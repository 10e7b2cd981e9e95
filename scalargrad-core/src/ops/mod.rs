//! # Scalar Operations Module (`ops`)
//!
//! Central hub for the differentiable operation builders. Operations are
//! grouped into submodules by kind.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** each operation has a core function (named `xxx_op`)
//!   that validates its operands, performs the forward computation and
//!   records the predecessor ids plus op tag needed by the backward pass.
//!   Thin methods on [`Graph`](crate::graph::Graph) delegate to them.
//! - **`_backward` Functions:** each primitive operation keeps its local
//!   gradient rule in the same file as its forward builder. The backward
//!   driver dispatches to these by op tag; derived operations (neg, sub,
//!   div) are compositions of the primitives and need no rule of their own.
//! - **`_scalar` Variants:** binary builders accept bare numbers through a
//!   `xxx_scalar` variant that promotes the number to a validated leaf and
//!   then delegates to the node-node builder.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, mul, pow and the derived neg, sub, div.
//! - [`activation`]: tanh and exp.

pub mod activation;
pub mod arithmetic;
