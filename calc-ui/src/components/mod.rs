pub mod calculator_view;
pub mod display_panel;
pub mod keypad;
pub mod window;

use gpui::{App, SharedString, Window};
use gpui::{ClickEvent, Styled};
use gpui::{Pixels, Size, px};
use gpui_component::Sizable;
use gpui_component::button::Button;

pub use calculator_view::CalculatorView;
pub use window::AppWindow;

use crate::config::WindowConfig;

#[derive(Debug, Clone)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
    pub title: SharedString,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from(&WindowConfig::default())
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
        title: impl Into<SharedString>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
            title: title.into(),
        }
    }
}

impl From<&WindowConfig> for WindowPreferences {
    fn from(config: &WindowConfig) -> Self {
        Self::new(px(config.width), px(config.height), config.title.clone())
    }
}

/// Creates a keypad button that shares its row width with its siblings.
pub fn make_key_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .large()
        .flex_1()
        .label(label.into())
        .on_click(on_click)
}
