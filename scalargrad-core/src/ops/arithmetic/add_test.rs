use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::check_scalar_near;

#[test]
fn test_add_forward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.0).unwrap();
    let b = graph.leaf(-3.0).unwrap();
    let out = add_op(&mut graph, a, b).unwrap();
    assert_eq!(graph.data(out), -1.0);
    assert_eq!(graph.op(out), Op::Add);
    assert_eq!(graph.predecessors(out), &[a, b]);
}

#[test]
fn test_add_backward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.0).unwrap();
    let b = graph.leaf(-3.0).unwrap();
    let out = graph.add(a, b).unwrap();
    graph.backward(out).unwrap();
    assert_eq!(graph.grad(a), 1.0);
    assert_eq!(graph.grad(b), 1.0);
    assert_eq!(graph.grad(out), 1.0);
}

#[test]
fn test_add_same_operand_twice() {
    // y = x + x must credit x once per operand slot: dy/dx = 2.
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(5.0).unwrap();
    let y = graph.add(x, x).unwrap();
    graph.backward(y).unwrap();
    assert_eq!(graph.data(y), 10.0);
    assert_eq!(graph.grad(x), 2.0);
}

#[test]
fn test_add_scalar_promotes_leaf() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.0).unwrap();
    let out = graph.add_scalar(a, 3.0).unwrap();
    assert_eq!(graph.data(out), 5.0);
    // The bare number became a leaf predecessor of the sum.
    let preds = graph.predecessors(out);
    assert_eq!(preds.len(), 2);
    assert_eq!(graph.op(preds[1]), Op::Leaf);
    assert_eq!(graph.data(preds[1]), 3.0);
}

#[test]
fn test_add_scalar_rejects_non_finite() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(2.0).unwrap();
    let result = graph.add_scalar(a, f64::NAN);
    assert!(matches!(
        result,
        Err(ScalarGradError::InvalidOperand { .. })
    ));
}

#[test]
fn test_add_grad_check() {
    // f(x) = x + 7, df/dx = 1 everywhere.
    check_grad(
        |graph, x| graph.add_scalar(x, 7.0),
        1.5,
        1e-6,
        1e-6,
    )
    .unwrap();
}

#[test]
fn test_add_chain() {
    // f(x) = (x + 1) + (x + 2); df/dx = 2.
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(0.25).unwrap();
    let left = graph.add_scalar(x, 1.0).unwrap();
    let right = graph.add_scalar(x, 2.0).unwrap();
    let out = graph.add(left, right).unwrap();
    graph.backward(out).unwrap();
    check_scalar_near(graph.data(out), 3.5, 1e-12);
    check_scalar_near(graph.grad(x), 2.0, 1e-12);
}
