use gpui::{
    App, AppContext, Context, Entity, Focusable, IntoElement, ParentElement, Render, Styled,
    Subscription, Window, div,
};
use tracing::info;

use crate::components::CalculatorView;
#[cfg(not(target_os = "linux"))]
use crate::{Quit, quit};

/// Root view of the main window. Quits the app when the window closes on
/// platforms where closing the last window does not already do so.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    calculator: Entity<CalculatorView>,
}

impl AppWindow {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|_cx: &mut App| {
            info!("Window closed callback");
            #[cfg(not(target_os = "linux"))]
            quit(&Quit, _cx);
        });

        let calculator = cx.new(CalculatorView::new);
        window.focus(&calculator.read(cx).focus_handle(cx));

        info!("Window constructed");
        Self {
            _window_close_subscription: subscription,
            calculator,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div().size_full().child(self.calculator.clone())
    }
}
