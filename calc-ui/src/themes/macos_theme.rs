use gpui::App;
use objc2_app_kit::{NSColor, NSColorSpace};
use tracing::debug;

use super::palette::{Rgba, SystemPalette, apply_palette, rgba, rgba_to_hsla, text_on};

/// Extracts RGBA components from an NSColor, converting to sRGB first.
///
/// Returns `None` if the color cannot be converted to sRGB (e.g. pattern colors).
fn nscolor_to_rgba(color: &NSColor) -> Option<Rgba> {
    let srgb = NSColorSpace::sRGBColorSpace();
    let converted = color.colorUsingColorSpace(&srgb)?;

    Some(rgba(
        converted.redComponent() as f32,
        converted.greenComponent() as f32,
        converted.blueComponent() as f32,
        converted.alphaComponent() as f32,
    ))
}

fn read_or(
    color: &NSColor,
    fallback: Rgba,
) -> Rgba {
    nscolor_to_rgba(color).unwrap_or(fallback)
}

/// Applies macOS system colors to the gpui-component global theme.
///
/// Call after `gpui_component::init(cx)` in your app setup.
pub fn apply_macos_system_theme(cx: &mut App) {
    let window_bg = nscolor_to_rgba(&NSColor::windowBackgroundColor());
    let dark = window_bg.is_some_and(|bg| rgba_to_hsla(bg).l < 0.5);
    let base = SystemPalette::fallback(dark, None);

    let accent = read_or(&NSColor::controlAccentColor(), base.accent);
    let palette = SystemPalette {
        accent,
        on_accent: read_or(&NSColor::alternateSelectedControlTextColor(), text_on(accent)),
        window_bg: window_bg.unwrap_or(base.window_bg),
        control_bg: read_or(&NSColor::controlBackgroundColor(), base.control_bg),
        label: read_or(&NSColor::labelColor(), base.label),
        secondary_label: read_or(&NSColor::secondaryLabelColor(), base.secondary_label),
        separator: read_or(&NSColor::separatorColor(), base.separator),
        keyboard_focus: read_or(&NSColor::keyboardFocusIndicatorColor(), accent),
        unemphasized_bg: read_or(
            &NSColor::unemphasizedSelectedContentBackgroundColor(),
            base.unemphasized_bg,
        ),
        red: read_or(&NSColor::systemRedColor(), base.red),
    };

    debug!(dark, "Applying macOS system theme");
    apply_palette(&palette, cx);
}
