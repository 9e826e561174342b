use calc_core::{CalcError, CalculatorSink, DisplayText, FontSizeTier, Operator};
use gpui::SharedString;

/// What the calculator window shows: the display line, its size hint, the
/// highlighted operator, and an optional notice.
///
/// The calculator pushes into this model after every action; the view reads
/// it on render.
#[derive(Clone, Debug, Default)]
pub struct PanelModel {
    pub text: SharedString,
    pub font_size: FontSizeTier,
    pub active_operator: Option<Operator>,
    pub notice: Option<SharedString>,
}

impl PanelModel {
    /// Drops the notice left by a previous action.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn is_active(
        &self,
        operator: Operator,
    ) -> bool {
        self.active_operator == Some(operator)
    }
}

impl CalculatorSink for PanelModel {
    fn show(
        &mut self,
        display: &DisplayText,
    ) {
        self.text = display.text.clone().into();
        self.font_size = display.font_size;
    }

    fn highlight_operator(
        &mut self,
        operator: Option<Operator>,
    ) {
        self.active_operator = operator;
    }

    fn notify(
        &mut self,
        error: &CalcError,
    ) {
        let message = match error {
            CalcError::DivisionByZero => "Cannot divide by zero!",
        };
        self.notice = Some(message.into());
    }
}
