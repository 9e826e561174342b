//! Arithmetic and number-text conversions used by the state machine and the
//! display formatter.

pub mod common;
pub mod evaluate;

pub use evaluate::{CalcError, evaluate};
