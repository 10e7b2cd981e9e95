use super::*;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(6.0).unwrap();
    let b = graph.leaf(3.0).unwrap();
    let out = div_op(&mut graph, a, b).unwrap();
    assert_relative_eq!(graph.data(out), 2.0, epsilon = 1e-12);
}

#[test]
fn test_div_backward() {
    // z = a/b at (6, 3): dz/da = 1/b = 1/3, dz/db = -a/b^2 = -2/3.
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(6.0).unwrap();
    let b = graph.leaf(3.0).unwrap();
    let out = graph.div(a, b).unwrap();
    graph.backward(out).unwrap();
    assert_relative_eq!(graph.grad(a), 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(graph.grad(b), -2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_div_scalar() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(7.0).unwrap();
    let out = graph.div_scalar(a, 2.0).unwrap();
    assert_relative_eq!(graph.data(out), 3.5, epsilon = 1e-12);
    graph.backward(out).unwrap();
    assert_relative_eq!(graph.grad(a), 0.5, epsilon = 1e-12);
}

#[test]
fn test_div_scalar_rejects_non_finite() {
    let mut graph = Graph::<f64>::new();
    let a = graph.leaf(7.0).unwrap();
    assert!(matches!(
        graph.div_scalar(a, f64::INFINITY),
        Err(ScalarGradError::InvalidOperand { .. })
    ));
}
