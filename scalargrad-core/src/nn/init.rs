use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Creates `n` leaf parameters sampled uniformly from `[low, high)`.
///
/// The classic initialization for this network family is `uniform(-1, 1)`
/// for both weights and biases.
pub fn uniform<T, R>(
    graph: &mut Graph<T>,
    rng: &mut R,
    n: usize,
    low: f64,
    high: f64,
) -> Result<Vec<ValueId>, ScalarGradError>
where
    T: Float,
    R: Rng + ?Sized,
{
    let dist = Uniform::new(low, high);
    let mut params = Vec::with_capacity(n);
    for _ in 0..n {
        let sample = dist.sample(rng);
        let value = T::from(sample).ok_or(ScalarGradError::InvalidOperand {
            operation: "uniform init".to_string(),
            value: sample,
        })?;
        params.push(graph.leaf(value)?);
    }
    Ok(params)
}
