//! Policy-iteration solver: value function, policy, Bellman evaluation, and
//! cyclic improvement.

pub mod evaluation;
pub mod improvement;
pub mod iteration;
pub mod policy;
pub mod value_function;

// Public re-exports
pub use evaluation::evaluate_policy;
pub use improvement::{Improvement, improve_policy};
pub use iteration::{CONVERGENCE_THRESHOLD, DISCOUNT_FACTOR, PolicyIteration};
pub use policy::Policy;
pub use value_function::ValueFunction;
