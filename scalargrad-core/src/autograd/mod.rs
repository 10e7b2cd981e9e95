//! Reverse-mode differentiation: graph traversal, the backward driver and
//! numerical gradient checking.
//!
//! The backward pass has two halves. [`graph::topological_sort`] linearizes
//! every node reachable from a root so that each node appears after all of
//! its predecessors; [`backward`](crate::graph::Graph::backward) then walks
//! that order in reverse, dispatching each node's local gradient rule by op
//! tag. The ordering is a correctness requirement: a node's rule may only
//! run once its own grad is final, i.e. after every one of its consumers.

pub mod backward;
pub mod grad_check;
pub mod graph;

pub use graph::topological_sort;
