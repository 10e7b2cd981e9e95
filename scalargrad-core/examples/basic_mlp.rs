//! Builds a small MLP, runs a forward pass over a tiny batch, backpropagates
//! a squared-error loss and prints the parameter gradients.
//!
//! Run with: `cargo run --example basic_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{Mlp, Module};
use scalargrad_core::{Graph, ScalarGradError};

fn main() -> Result<(), ScalarGradError> {
    let mut graph = Graph::<f64>::new();
    let mut rng = StdRng::seed_from_u64(1337);

    // 3 inputs, two hidden layers of 4, one output.
    let mlp = Mlp::new(&mut graph, &mut rng, 3, &[4, 4, 1])?;

    let batch = [
        ([2.0, 3.0, -1.0], 1.0),
        ([3.0, -1.0, 0.5], -1.0),
        ([0.5, 1.0, 1.0], -1.0),
        ([1.0, 1.0, -1.0], 1.0),
    ];

    let mut loss = graph.leaf(0.0)?;
    for (features, target) in &batch {
        let input = features
            .iter()
            .map(|&v| graph.leaf(v))
            .collect::<Result<Vec<_>, _>>()?;
        let prediction = mlp.forward(&mut graph, &input)?[0];
        println!("prediction: {:+.4} (target {:+.1})", graph.data(prediction), target);
        let residual = graph.sub_scalar(prediction, *target)?;
        let squared = graph.powf(residual, 2.0)?;
        loss = graph.add(loss, squared)?;
    }

    println!("loss: {:.6}", graph.data(loss));
    graph.backward(loss)?;

    for (i, p) in Module::<f64>::parameters(&mlp).iter().enumerate() {
        println!(
            "param[{i:2}] data {:+.4}  grad {:+.6}",
            graph.data(*p),
            graph.grad(*p)
        );
    }
    Ok(())
}
