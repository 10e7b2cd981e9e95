use super::*;
use crate::autograd::grad_check::check_grad;
use approx::assert_relative_eq;

#[test]
fn test_exp_forward() {
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(1.0).unwrap();
    let z = exp_op(&mut graph, x).unwrap();
    assert_relative_eq!(graph.data(z), std::f64::consts::E, epsilon = 1e-12);
}

#[test]
fn test_exp_has_its_own_tag() {
    // exp must not share the tanh tag.
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(0.5).unwrap();
    let e = graph.exp(x).unwrap();
    let t = graph.tanh(x).unwrap();
    assert_eq!(graph.op(e), Op::Exp);
    assert_ne!(graph.op(e), graph.op(t));
}

#[test]
fn test_exp_backward() {
    // d(e^x)/dx = e^x.
    let mut graph = Graph::<f64>::new();
    let x = graph.leaf(2.0).unwrap();
    let z = graph.exp(x).unwrap();
    graph.backward(z).unwrap();
    assert_relative_eq!(graph.grad(x), f64::exp(2.0), epsilon = 1e-12);
}

#[test]
fn test_exp_grad_check() {
    check_grad(|graph, x| graph.exp(x), 0.0, 1e-6, 1e-5).unwrap();
    check_grad(|graph, x| graph.exp(x), 1.3, 1e-6, 1e-5).unwrap();
}

#[test]
fn test_tanh_composed_from_exp_primitives() {
    // tanh(x) = (e^{2x} - 1) / (e^{2x} + 1) built out of exp/add/div must
    // agree with the fused tanh op, forward and backward.
    let x_val = 0.6;

    let mut composed = Graph::<f64>::new();
    let x1 = composed.leaf(x_val).unwrap();
    let two_x = composed.mul_scalar(x1, 2.0).unwrap();
    let e2x = composed.exp(two_x).unwrap();
    let num = composed.sub_scalar(e2x, 1.0).unwrap();
    let den = composed.add_scalar(e2x, 1.0).unwrap();
    let out1 = composed.div(num, den).unwrap();
    composed.backward(out1).unwrap();

    let mut fused = Graph::<f64>::new();
    let x2 = fused.leaf(x_val).unwrap();
    let out2 = fused.tanh(x2).unwrap();
    fused.backward(out2).unwrap();

    assert_relative_eq!(composed.data(out1), fused.data(out2), epsilon = 1e-9);
    assert_relative_eq!(composed.grad(x1), fused.grad(x2), epsilon = 1e-9);
}
