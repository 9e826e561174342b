mod digit;
mod operator;
mod state;

pub use digit::Digit;
pub use operator::Operator;
pub use state::{CalculatorState, PendingOperation};

pub(crate) use state::ZERO;
