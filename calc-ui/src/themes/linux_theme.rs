use gpui::App;
use tracing::debug;
use zbus::{
    blocking::{Connection, Proxy},
    zvariant::OwnedValue,
};

use super::palette::{Rgba, SystemPalette, apply_palette, normalize_channel, rgba};

const PORTAL_SERVICE: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";
const PORTAL_INTERFACE: &str = "org.freedesktop.portal.Settings";
const APPEARANCE: &str = "org.freedesktop.appearance";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColorScheme {
    NoPreference,
    PreferDark,
    PreferLight,
}

fn read_portal_setting(key: &str) -> Option<OwnedValue> {
    let connection = Connection::session().ok()?;
    let proxy = Proxy::new(&connection, PORTAL_SERVICE, PORTAL_PATH, PORTAL_INTERFACE).ok()?;

    proxy.call("ReadOne", &(APPEARANCE, key)).ok()
}

fn color_scheme_from(raw: u32) -> Option<ColorScheme> {
    match raw {
        0 => Some(ColorScheme::NoPreference),
        1 => Some(ColorScheme::PreferDark),
        2 => Some(ColorScheme::PreferLight),
        _ => None,
    }
}

fn parse_color_scheme(value: OwnedValue) -> Option<ColorScheme> {
    let raw = value
        .try_clone()
        .ok()
        .and_then(|v| u32::try_from(v).ok())
        .or_else(|| i32::try_from(value).ok().and_then(|v| u32::try_from(v).ok()))?;

    color_scheme_from(raw)
}

fn parse_accent_color(value: OwnedValue) -> Option<Rgba> {
    let (r, g, b) = <(f64, f64, f64)>::try_from(value).ok()?;

    Some(rgba(
        normalize_channel(r as f32),
        normalize_channel(g as f32),
        normalize_channel(b as f32),
        1.0,
    ))
}

fn gtk_theme_is_dark(theme: Option<&str>) -> bool {
    theme.is_some_and(|theme| theme.to_ascii_lowercase().contains("dark"))
}

fn prefers_dark() -> bool {
    match read_portal_setting("color-scheme").and_then(parse_color_scheme) {
        Some(ColorScheme::PreferDark) => true,
        Some(ColorScheme::PreferLight) => false,
        Some(ColorScheme::NoPreference) | None => {
            gtk_theme_is_dark(std::env::var("GTK_THEME").ok().as_deref())
        }
    }
}

/// Applies the Linux desktop appearance to the gpui-component global theme.
///
/// Reads the color scheme and accent color from the XDG desktop portal on the
/// session bus. Without a portal answer, dark mode is guessed from
/// `GTK_THEME` and a stock accent is used.
pub fn apply_linux_system_theme(cx: &mut App) {
    let dark = prefers_dark();
    let accent = read_portal_setting("accent-color").and_then(parse_accent_color);

    if accent.is_none() {
        debug!("Portal accent color unavailable; using fallback accent");
    }
    debug!(dark, "Applying Linux system theme");

    apply_palette(&SystemPalette::fallback(dark, accent), cx);
}
