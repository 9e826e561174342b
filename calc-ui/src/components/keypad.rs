//! The on-screen keypad: five rows of four keys.

use calc_core::{Action, Digit, Operator};
use gpui::{ClickEvent, Context, Div, ParentElement, Styled};
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::{h_flex, v_flex};

use crate::components::{CalculatorView, make_key_button};
use crate::models::PanelModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadKey {
    pub id: &'static str,
    pub label: &'static str,
    pub action: Action,
}

const fn key(
    id: &'static str,
    label: &'static str,
    action: Action,
) -> KeypadKey {
    KeypadKey { id, label, action }
}

const fn digit(
    id: &'static str,
    label: &'static str,
    n: u8,
) -> KeypadKey {
    key(id, label, Action::Digit(Digit::decimal(n)))
}

const fn operator(
    id: &'static str,
    operator: Operator,
) -> KeypadKey {
    // Labels match the display glyphs, so `*` shows as `×`.
    let label = match operator {
        Operator::Add => "+",
        Operator::Subtract => "-",
        Operator::Multiply => "×",
        Operator::Divide => "/",
    };
    key(id, label, Action::Operator(operator))
}

pub const KEYPAD: [[KeypadKey; 4]; 5] = [
    [
        key("key-clear", "C", Action::ClearAll),
        key("key-clear-entry", "CE", Action::ClearEntry),
        key("key-backspace", "⌫", Action::Backspace),
        operator("key-divide", Operator::Divide),
    ],
    [
        digit("key-7", "7", 7),
        digit("key-8", "8", 8),
        digit("key-9", "9", 9),
        operator("key-multiply", Operator::Multiply),
    ],
    [
        digit("key-4", "4", 4),
        digit("key-5", "5", 5),
        digit("key-6", "6", 6),
        operator("key-subtract", Operator::Subtract),
    ],
    [
        digit("key-1", "1", 1),
        digit("key-2", "2", 2),
        digit("key-3", "3", 3),
        operator("key-add", Operator::Add),
    ],
    [
        key("key-percent", "%", Action::Percentage),
        digit("key-0", "0", 0),
        key("key-point", ".", Action::Digit(Digit::POINT)),
        key("key-equals", "=", Action::Equals),
    ],
];

/// Builds the keypad. The operator matching the pending operation is drawn
/// with the primary style.
pub fn render_keypad(
    panel: &PanelModel,
    cx: &Context<CalculatorView>,
) -> Div {
    v_flex().w_full().gap_2().children(KEYPAD.iter().map(|row| {
        h_flex()
            .w_full()
            .gap_2()
            .children(row.iter().map(|key| key_button(key, panel, cx)))
    }))
}

fn key_button(
    key: &KeypadKey,
    panel: &PanelModel,
    cx: &Context<CalculatorView>,
) -> Button {
    let action = key.action;
    let button = make_key_button(
        key.id,
        key.label,
        cx.listener(move |view, _: &ClickEvent, window, cx| view.apply(action, window, cx)),
    );

    match action {
        Action::Operator(op) if panel.is_active(op) => button.primary(),
        Action::Equals => button.primary(),
        Action::ClearAll | Action::ClearEntry => button.danger(),
        _ => button,
    }
}
