// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

// Re-export the primary operation functions
pub use add::{add_op, add_scalar_op};
pub use div::{div_op, div_scalar_op};
pub use mul::{mul_op, mul_scalar_op};
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::{scalar_sub_op, sub_op, sub_scalar_op};
