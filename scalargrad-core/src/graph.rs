//! The computation graph arena.
//!
//! Nodes live in a `Vec` and are addressed by stable integer [`ValueId`]
//! handles; predecessor lists hold ids, never references. The graph is
//! acyclic by construction: a builder can only combine ids that already
//! exist, so no node can transitively depend on itself. Identity is the
//! index, which makes visited-set membership during traversal cheap and
//! leaves gradient accumulation as plain indexed mutation, with no aliasing
//! to runtime-check.

use crate::error::ScalarGradError;
use num_traits::{Float, ToPrimitive};
use std::fmt;

/// Stable handle to a node inside a [`Graph`].
///
/// Ids are only minted by the graph that owns the node; passing an id to a
/// different graph is rejected by the builders with
/// [`ScalarGradError::InvalidValueId`] when it falls outside that graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueId(pub(crate) usize);

impl ValueId {
    /// Position of the node in its owning arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Tag naming the operation that produced a node.
///
/// `Powf` carries the plain-number exponent its backward rule needs.
/// Exponential has its own `Exp` tag, distinct from `Tanh`, so tag-based
/// introspection stays truthful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op<T> {
    /// A node with no predecessors (constant or parameter).
    Leaf,
    Add,
    Mul,
    Powf(T),
    Tanh,
    Exp,
}

impl<T: fmt::Display> fmt::Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, ""),
            Op::Add => write!(f, "+"),
            Op::Mul => write!(f, "*"),
            Op::Powf(exponent) => write!(f, "**{}", exponent),
            Op::Tanh => write!(f, "tanh"),
            Op::Exp => write!(f, "exp"),
        }
    }
}

/// A single scalar quantity in the graph plus its accumulated gradient.
///
/// `data`, `preds` and `op` are fixed at construction; only `grad` mutates,
/// and only through backward-rule accumulation (plus the one root seeding).
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) grad: T,
    /// Operand ids, in operand order. May contain the same id twice
    /// (e.g. `add(x, x)`): each slot gets its own gradient contribution.
    pub(crate) preds: Vec<ValueId>,
    pub(crate) op: Op<T>,
}

/// Arena holding a computation graph of scalar values.
///
/// Client code composes nodes through the operation builders (see
/// [`crate::ops`]), forming a DAG rooted at the last-created node, then calls
/// [`Graph::backward`] on that root to populate every reachable node's grad.
#[derive(Debug, Clone, Default)]
pub struct Graph<T> {
    nodes: Vec<Node<T>>,
}

impl<T: Float> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Wraps a raw number as a leaf node: empty predecessors, grad 0.0,
    /// leaf tag, no backward rule.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::InvalidOperand`] if `value` is NaN or
    /// infinite.
    pub fn leaf(&mut self, value: T) -> Result<ValueId, ScalarGradError> {
        if !value.is_finite() {
            return Err(ScalarGradError::InvalidOperand {
                operation: "leaf".to_string(),
                value: value.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.push_node(value, Vec::new(), Op::Leaf))
    }

    /// Forward value of a node.
    pub fn data(&self, id: ValueId) -> T {
        self.nodes[id.0].data
    }

    /// Accumulated gradient of a node (0.0 before any backward pass).
    pub fn grad(&self, id: ValueId) -> T {
        self.nodes[id.0].grad
    }

    /// Tag of the operation that produced a node.
    pub fn op(&self, id: ValueId) -> Op<T> {
        self.nodes[id.0].op
    }

    /// Operand ids of a node, in operand order. Empty for leaves.
    pub fn predecessors(&self, id: ValueId) -> &[ValueId] {
        &self.nodes[id.0].preds
    }

    /// Resets every gradient in the graph to 0.0.
    ///
    /// The engine never resets grads on its own: repeated backward calls
    /// accumulate, which is what batched use wants. Call this before an
    /// independent pass.
    pub fn zero_grad(&mut self) {
        for node in &mut self.nodes {
            node.grad = T::zero();
        }
    }

    /// Validates that `id` belongs to this graph.
    pub(crate) fn check_id(&self, id: ValueId, operation: &str) -> Result<(), ScalarGradError> {
        if id.0 >= self.nodes.len() {
            return Err(ScalarGradError::InvalidValueId {
                index: id.0,
                len: self.nodes.len(),
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    /// Appends a node and returns its handle. Callers must have validated
    /// the predecessor ids, which keeps the arena acyclic.
    pub(crate) fn push_node(&mut self, data: T, preds: Vec<ValueId>, op: Op<T>) -> ValueId {
        let id = ValueId(self.nodes.len());
        self.nodes.push(Node {
            data,
            grad: T::zero(),
            preds,
            op,
        });
        id
    }

    /// Adds `amount` to a node's gradient. The only way grads grow:
    /// backward rules may increment operand grads, never assign them.
    pub(crate) fn accumulate_grad(&mut self, id: ValueId, amount: T) {
        let node = &mut self.nodes[id.0];
        node.grad = node.grad + amount;
    }

    /// Seeds a node's gradient. Used once per backward pass, on the root.
    pub(crate) fn set_grad(&mut self, id: ValueId, value: T) {
        self.nodes[id.0].grad = value;
    }

    /// Both operands of a binary node.
    pub(crate) fn binary_operands(&self, id: ValueId) -> (ValueId, ValueId) {
        let preds = &self.nodes[id.0].preds;
        (preds[0], preds[1])
    }

    /// The single operand of a unary node.
    pub(crate) fn unary_operand(&self, id: ValueId) -> ValueId {
        self.nodes[id.0].preds[0]
    }
}
