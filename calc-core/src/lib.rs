pub mod calculations;
pub mod display;
pub mod machine;
pub mod models;

pub use calculations::CalcError;
pub use display::{DisplayText, FontSizeTier, format_display};
pub use machine::{Action, Calculator, CalculatorSink};
pub use models::*;
