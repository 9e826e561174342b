use tracing::{debug, trace, warn};

use crate::{Action, CalcError, CalculatorState, DisplayText, Operator, format_display};

/// Receives the output of the calculator after every action.
pub trait CalculatorSink {
    /// Shows freshly formatted display text.
    fn show(
        &mut self,
        display: &DisplayText,
    );

    /// Marks the operator control matching `operator`, or none.
    fn highlight_operator(
        &mut self,
        operator: Option<Operator>,
    );

    /// Surfaces a user-facing notice for a failed action.
    fn notify(
        &mut self,
        error: &CalcError,
    );
}

/// Owns a [`CalculatorState`] and pushes its rendering to a sink after each
/// action.
#[derive(Debug)]
pub struct Calculator<S> {
    state: CalculatorState,
    sink: S,
}

impl<S: CalculatorSink> Calculator<S> {
    /// Creates a calculator in its initial state and renders it once.
    pub fn new(sink: S) -> Self {
        let mut calculator = Self {
            state: CalculatorState::new(),
            sink,
        };
        calculator.refresh();
        calculator
    }

    /// Applies `action`, then reformats the display.
    ///
    /// A failed action is reported to the sink through
    /// [`CalculatorSink::notify`] and leaves the state unchanged; the display
    /// is still refreshed.
    pub fn apply(
        &mut self,
        action: Action,
    ) -> Result<(), CalcError> {
        debug!(%action, "applying action");

        let outcome = match action {
            Action::Digit(digit) => {
                self.state.enter_digit(digit);
                Ok(())
            }
            Action::Operator(operator) => self.state.enter_operator(operator),
            Action::Equals => self.state.equals(),
            Action::ClearAll => {
                self.state.clear_all();
                Ok(())
            }
            Action::ClearEntry => {
                self.state.clear_entry();
                Ok(())
            }
            Action::Backspace => {
                self.state.backspace();
                Ok(())
            }
            Action::Percentage => {
                self.state.percentage();
                Ok(())
            }
        };

        if let Err(error) = &outcome {
            warn!(%error, %action, previous = self.state.previous_input(), "action rejected");
            self.sink.notify(error);
        }

        self.refresh();
        outcome
    }

    /// Maps a key to its action and applies it. Returns `None` for unbound
    /// keys.
    pub fn press_key(
        &mut self,
        key: &str,
        shift: bool,
    ) -> Option<Result<(), CalcError>> {
        let action = Action::from_key(key, shift)?;
        Some(self.apply(action))
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn refresh(&mut self) {
        let rendered = format_display(&self.state);
        trace!(text = %rendered.text, font_size = rendered.font_size.as_str(), "display updated");
        self.sink.show(&rendered);
        self.sink.highlight_operator(self.state.operator());
    }
}
