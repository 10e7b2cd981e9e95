use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use approx::assert_relative_eq;

#[test]
fn test_diamond_dependency_grads_sum_over_paths() {
    // c = 3w + 5w: dc/dw = 8, one contribution per path.
    let mut graph = Graph::<f64>::new();
    let w = graph.leaf(2.0).unwrap();
    let a = graph.mul_scalar(w, 3.0).unwrap();
    let b = graph.mul_scalar(w, 5.0).unwrap();
    let c = graph.add(a, b).unwrap();
    graph.backward(c).unwrap();
    assert_eq!(graph.data(c), 16.0);
    assert_eq!(graph.grad(w), 8.0);
}

#[test]
fn test_backward_on_leaf_root_seeds_grad() {
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(5.0).unwrap();
    graph.backward(x).unwrap();
    assert_eq!(graph.grad(x), 1.0);
}

#[test]
fn test_backward_invalid_root() {
    let mut graph = Graph::<f64>::new();
    let _x = graph.leaf(1.0).unwrap();
    assert!(matches!(
        graph.backward(ValueId(42)),
        Err(ScalarGradError::InvalidValueId { .. })
    ));
}

#[test]
fn test_repeated_backward_accumulates() {
    // Two passes without a reset double every non-root grad; the root grad
    // is re-seeded to 1.0, not accumulated.
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(3.0).unwrap();
    let y = graph.mul(x, x).unwrap();
    graph.backward(y).unwrap();
    assert_eq!(graph.grad(x), 6.0);
    graph.backward(y).unwrap();
    assert_eq!(graph.grad(x), 12.0);
    assert_eq!(graph.grad(y), 1.0);

    graph.zero_grad();
    graph.backward(y).unwrap();
    assert_eq!(graph.grad(x), 6.0);
}

#[test]
fn test_backward_leaves_unreachable_nodes_untouched() {
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(1.0).unwrap();
    let unrelated = graph.leaf(4.0).unwrap();
    let y = graph.exp(x).unwrap();
    graph.backward(y).unwrap();
    assert_eq!(graph.grad(unrelated), 0.0);
}

#[test]
fn test_referential_purity_after_backward() {
    // Re-invoking a builder on equal operand data yields equal output data
    // no matter how many backward calls came before.
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(1.5).unwrap();
    let first = graph.tanh(x).unwrap();
    let before = graph.data(first);
    graph.backward(first).unwrap();
    graph.backward(first).unwrap();
    let second = graph.tanh(x).unwrap();
    assert_eq!(graph.data(second), before);
}

#[test]
fn test_two_neuron_expression() {
    // o = tanh(w1*x1 + w2*x2 + b), a full two-input neuron. The bias is
    // chosen so o^2 = 0.5; do/dpre = 1 - o^2 = 0.5 fans out to the leaves.
    let mut graph = Graph::<f64>::new();
    let x1 = graph.leaf(2.0).unwrap();
    let x2 = graph.leaf(0.0).unwrap();
    let w1 = graph.leaf(-3.0).unwrap();
    let w2 = graph.leaf(1.0).unwrap();
    let b = graph.leaf(6.881_373_587_019_543).unwrap();

    let x1w1 = graph.mul(x1, w1).unwrap();
    let x2w2 = graph.mul(x2, w2).unwrap();
    let sum = graph.add(x1w1, x2w2).unwrap();
    let pre = graph.add(sum, b).unwrap();
    let o = graph.tanh(pre).unwrap();

    graph.backward(o).unwrap();

    assert_relative_eq!(graph.data(o), 0.707_106_781_186_547_6, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(x1), -1.5, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(x2), 0.5, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(w1), 1.0, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(w2), 0.0, epsilon = 1e-9);
    assert_relative_eq!(graph.grad(b), 0.5, epsilon = 1e-9);
}

#[test]
fn test_f32_graph() {
    // The engine is generic over the float width.
    let mut graph = Graph::<f32>::new();
    let x = graph.leaf(2.0f32).unwrap();
    let y = graph.powf(x, 3.0).unwrap();
    graph.backward(y).unwrap();
    assert_relative_eq!(graph.data(y), 8.0f32, epsilon = 1e-6);
    assert_relative_eq!(graph.grad(x), 12.0f32, epsilon = 1e-5);
}
