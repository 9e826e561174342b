use calc_core::{Action, Calculator};
use gpui::{
    App, Context, FocusHandle, Focusable, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, Styled, Window,
};
use gpui_component::{ActiveTheme, v_flex};
use tracing::trace;

use crate::components::{display_panel::render_display, keypad::render_keypad};
use crate::models::PanelModel;

/// The calculator window body: display panel above the keypad.
///
/// Owns the calculator; clicks and key presses both end up in [`Self::apply`].
pub struct CalculatorView {
    calculator: Calculator<PanelModel>,
    focus_handle: FocusHandle,
}

impl CalculatorView {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            calculator: Calculator::new(PanelModel::default()),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Applies one action and schedules a redraw. A notice only lives until
    /// the next action.
    pub fn apply(
        &mut self,
        action: Action,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.calculator.sink_mut().clear_notice();
        // Errors have already reached the panel as a notice.
        let _ = self.calculator.apply(action);
        cx.notify();
    }

    fn on_key_down(
        &mut self,
        event: &KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;
        let modifiers = &keystroke.modifiers;
        if modifiers.control || modifiers.alt || modifiers.platform {
            return;
        }

        let action = Action::from_keystroke(
            &keystroke.key,
            keystroke.key_char.as_deref(),
            modifiers.shift,
        );

        trace!(key = %keystroke.key, ?action, "key down");
        if let Some(action) = action {
            cx.stop_propagation();
            self.apply(action, window, cx);
        }
    }
}

impl Focusable for CalculatorView {
    fn focus_handle(
        &self,
        _cx: &App,
    ) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let panel = self.calculator.sink();

        v_flex()
            .id("calculator")
            .key_context("Calculator")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key_down))
            .size_full()
            .p_3()
            .gap_3()
            .bg(cx.theme().colors.background)
            .child(render_display(panel, cx))
            .child(render_keypad(panel, cx))
    }
}
