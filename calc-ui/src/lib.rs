pub mod app;
pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod models;
pub mod script;
pub mod themes;

use gpui::{App, actions};
pub use gui::setup_app;
use tracing::info;

actions!(calculator, [Quit]);

/// Handler for [`Quit`], bound to the quit shortcut and the app menu.
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
