// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::error::ScalarGradError;
use crate::graph::{Graph, Op, ValueId};
use num_traits::{Float, ToPrimitive};

// --- Forward Operation ---

/// Raises a node to a plain-number power: `base ** exponent`.
///
/// The exponent is not a node and receives no gradient; its value is stored
/// in the op tag for the backward rule. A node-valued exponent is
/// unrepresentable by this signature, which is the typed form of the
/// original restriction to plain-number powers.
///
/// # Errors
/// Returns [`ScalarGradError::UnsupportedOperand`] if `exponent` is NaN or
/// infinite.
pub fn pow_op<T: Float>(
    graph: &mut Graph<T>,
    base: ValueId,
    exponent: T,
) -> Result<ValueId, ScalarGradError> {
    graph.check_id(base, "pow")?;
    if !exponent.is_finite() {
        return Err(ScalarGradError::UnsupportedOperand {
            operation: "pow".to_string(),
            reason: format!(
                "exponent {} is not a finite number",
                exponent.to_f64().unwrap_or(f64::NAN)
            ),
        });
    }
    let data = graph.data(base).powf(exponent);
    Ok(graph.push_node(data, vec![base], Op::Powf(exponent)))
}

// --- Backward Rule ---

/// d(x^n)/dx = n·x^(n-1). The exponent comes out of the `Powf` tag.
pub(crate) fn pow_backward<T: Float>(graph: &mut Graph<T>, out: ValueId, exponent: T) {
    let g = graph.grad(out);
    let base = graph.unary_operand(out);
    let x = graph.data(base);
    let local = exponent * x.powf(exponent - T::one());
    graph.accumulate_grad(base, local * g);
}

// --- Graph Method ---

impl<T: Float> Graph<T> {
    /// Raises a node to a plain-number power. See [`pow_op`].
    pub fn powf(&mut self, base: ValueId, exponent: T) -> Result<ValueId, ScalarGradError> {
        pow_op(self, base, exponent)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
