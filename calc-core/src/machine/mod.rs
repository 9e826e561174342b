//! The calculator state machine: transitions, the actions that trigger them,
//! and the driver that reformats after every action.

mod action;
mod driver;
mod transitions;

pub use action::Action;
pub use driver::{Calculator, CalculatorSink};
