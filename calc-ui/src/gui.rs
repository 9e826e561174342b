use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use tracing::info;

use crate::components::{AppWindow, WindowPreferences};
#[cfg(target_os = "linux")]
use crate::themes::apply_linux_system_theme;
#[cfg(target_os = "macos")]
use crate::themes::apply_macos_system_theme;
use crate::{Quit, quit};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    #[cfg(target_os = "macos")]
    apply_macos_system_theme(app_cx);
    #[cfg(target_os = "linux")]
    apply_linux_system_theme(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, centered on the primary display.
pub fn open_main_window(
    preferences: &WindowPreferences,
    cx: &mut App,
) -> anyhow::Result<()> {
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(preferences.title.clone()),
            ..Default::default()
        }),
        ..Default::default()
    };

    cx.open_window(options, |window, cx| {
        cx.new(|cx| AppWindow::new(window, cx))
    })
    .context("cannot open the calculator window")?;

    info!(title = %preferences.title, "Main window opened");
    Ok(())
}

/// Runs the desktop application until the user quits.
pub fn run(preferences: WindowPreferences) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            setup_app(cx);
            if let Err(error) = open_main_window(&preferences, cx) {
                tracing::error!("{error:#}");
                cx.quit();
            }
        });
}
