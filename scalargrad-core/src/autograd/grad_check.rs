use crate::error::ScalarGradError;
use crate::graph::{Graph, ValueId};
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed: analytical grad {analytical:?} != numerical grad {numerical:?}. Difference: {difference:?}")]
    GradientMismatch {
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite. Details: f(x+eps): {loss_plus:?}, f(x-eps): {loss_minus:?}")]
    NumericalGradNaNOrInfinite { loss_plus: f64, loss_minus: f64 },

    #[error("Analytical gradient is NaN or infinite. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { value: f64 },

    #[error("Graph error during intermediate calculation: {0}")]
    GraphError(ScalarGradError),
}

// Map ScalarGradError to GradCheckError::GraphError
impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Checks the analytical gradient of a scalar expression against a central
/// finite difference.
///
/// `func` builds the expression under test from a fresh graph and a single
/// leaf, returning the root. The analytical gradient comes from one
/// forward-plus-backward pass; the numerical gradient is
/// `(f(x+eps) - f(x-eps)) / 2*eps`, each side evaluated on its own graph so
/// the passes cannot interfere.
pub fn check_grad<F>(func: F, input: f64, epsilon: f64, tolerance: f64) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph<f64>, ValueId) -> Result<ValueId, ScalarGradError>,
{
    // --- Analytical gradient ---
    let mut graph = Graph::new();
    let x = graph.leaf(input).map_err(GradCheckError::ForwardPassError)?;
    let root = func(&mut graph, x).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(root)
        .map_err(GradCheckError::BackwardPassError)?;
    let analytical = graph.grad(x);
    if !analytical.is_finite() {
        return Err(GradCheckError::AnalyticalGradNaNOrInfinite { value: analytical });
    }

    // --- Numerical gradient (central difference) ---
    let loss_plus = evaluate(&func, input + epsilon)?;
    let loss_minus = evaluate(&func, input - epsilon)?;
    if !loss_plus.is_finite() || !loss_minus.is_finite() {
        return Err(GradCheckError::NumericalGradNaNOrInfinite {
            loss_plus,
            loss_minus,
        });
    }
    let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);

    if !relative_eq!(
        analytical,
        numerical,
        epsilon = tolerance,
        max_relative = tolerance
    ) {
        return Err(GradCheckError::GradientMismatch {
            analytical,
            numerical,
            difference: (analytical - numerical).abs(),
        });
    }
    Ok(())
}

/// Forward-only evaluation of `func` at `input` on a fresh graph.
fn evaluate<F>(func: &F, input: f64) -> Result<f64, GradCheckError>
where
    F: Fn(&mut Graph<f64>, ValueId) -> Result<ValueId, ScalarGradError>,
{
    let mut graph = Graph::new();
    let x = graph.leaf(input).map_err(GradCheckError::ForwardPassError)?;
    let root = func(&mut graph, x).map_err(GradCheckError::ForwardPassError)?;
    Ok(graph.data(root))
}
