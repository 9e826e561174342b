//! Platform-neutral system palette and its mapping onto the gpui-component
//! theme.

use gpui::{App, Hsla};
use gpui_component::Theme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub const fn rgba(
    r: f32,
    g: f32,
    b: f32,
    a: f32,
) -> Rgba {
    Rgba { r, g, b, a }
}

pub fn with_alpha(
    color: Rgba,
    a: f32,
) -> Rgba {
    Rgba { a, ..color }
}

/// Accepts channels either as 0.0-1.0 fractions or as 0-255 values.
pub fn normalize_channel(value: f32) -> f32 {
    if value > 1.0 {
        (value / 255.0).clamp(0.0, 1.0)
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Converts RGBA (0.0-1.0) to a `gpui::Hsla`, with hue as a fraction of a
/// full turn.
pub fn rgba_to_hsla(color: Rgba) -> Hsla {
    let Rgba { r, g, b, a } = color;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        return Hsla { h: 0.0, s: 0.0, l, a };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f32::EPSILON {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if (max - g).abs() < f32::EPSILON {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsla { h, s, l, a }
}

/// Shifts lightness toward the middle for hovered buttons.
pub fn hover_variant(base: Hsla) -> Hsla {
    shift_lightness(base, 0.05)
}

/// Shifts lightness further for pressed buttons.
pub fn active_variant(base: Hsla) -> Hsla {
    shift_lightness(base, 0.10)
}

fn shift_lightness(
    base: Hsla,
    amount: f32,
) -> Hsla {
    let shift = if base.l > 0.5 { -amount } else { amount };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

/// Picks near-black or near-white text for legibility on `background`.
pub fn text_on(background: Rgba) -> Rgba {
    if rgba_to_hsla(background).l > 0.55 {
        rgba(0.08, 0.08, 0.08, 1.0)
    } else {
        rgba(0.97, 0.97, 0.97, 1.0)
    }
}

/// The handful of desktop colors the calculator window draws with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SystemPalette {
    pub accent: Rgba,
    pub on_accent: Rgba,
    pub window_bg: Rgba,
    pub control_bg: Rgba,
    pub label: Rgba,
    pub secondary_label: Rgba,
    pub separator: Rgba,
    pub keyboard_focus: Rgba,
    pub unemphasized_bg: Rgba,
    pub red: Rgba,
}

impl SystemPalette {
    /// Builds a palette from a light/dark preference and an optional
    /// desktop accent color.
    pub fn fallback(
        dark: bool,
        accent: Option<Rgba>,
    ) -> Self {
        let accent = accent.unwrap_or(if dark {
            rgba(0.45, 0.64, 1.0, 1.0)
        } else {
            rgba(0.16, 0.36, 0.95, 1.0)
        });

        if dark {
            Self {
                accent,
                on_accent: text_on(accent),
                window_bg: rgba(0.10, 0.11, 0.12, 1.0),
                control_bg: rgba(0.16, 0.17, 0.19, 1.0),
                label: rgba(0.92, 0.93, 0.95, 1.0),
                secondary_label: rgba(0.74, 0.76, 0.79, 1.0),
                separator: rgba(0.28, 0.30, 0.33, 1.0),
                keyboard_focus: accent,
                unemphasized_bg: rgba(0.23, 0.24, 0.27, 1.0),
                red: rgba(0.93, 0.33, 0.32, 1.0),
            }
        } else {
            Self {
                accent,
                on_accent: text_on(accent),
                window_bg: rgba(0.97, 0.97, 0.98, 1.0),
                control_bg: rgba(1.0, 1.0, 1.0, 1.0),
                label: rgba(0.13, 0.13, 0.14, 1.0),
                secondary_label: rgba(0.32, 0.33, 0.35, 1.0),
                separator: rgba(0.81, 0.82, 0.84, 1.0),
                keyboard_focus: accent,
                unemphasized_bg: rgba(0.92, 0.93, 0.95, 1.0),
                red: rgba(0.86, 0.25, 0.24, 1.0),
            }
        }
    }
}

fn apply(
    target: &mut Hsla,
    color: Rgba,
) {
    *target = rgba_to_hsla(color);
}

/// Writes `palette` into the gpui-component global theme.
///
/// Call after `gpui_component::init(cx)`.
pub fn apply_palette(
    palette: &SystemPalette,
    cx: &mut App,
) {
    let colors = &mut Theme::global_mut(cx).colors;

    // ── Primary: operator highlight and equals ───────────────────
    apply(&mut colors.primary, palette.accent);
    apply(&mut colors.primary_foreground, palette.on_accent);
    let accent = rgba_to_hsla(palette.accent);
    colors.primary_hover = hover_variant(accent);
    colors.primary_active = active_variant(accent);

    // ── Surfaces ─────────────────────────────────────────────────
    apply(&mut colors.background, palette.window_bg);
    apply(&mut colors.foreground, palette.label);
    apply(&mut colors.accent, palette.unemphasized_bg);
    apply(&mut colors.accent_foreground, palette.label);
    apply(&mut colors.popover, palette.control_bg);
    apply(&mut colors.popover_foreground, palette.label);

    // ── Secondary / muted: digit keys and the expression line ────
    apply(&mut colors.secondary, palette.unemphasized_bg);
    apply(&mut colors.secondary_foreground, palette.label);
    let unemphasized = rgba_to_hsla(palette.unemphasized_bg);
    colors.secondary_hover = hover_variant(unemphasized);
    colors.secondary_active = active_variant(unemphasized);
    apply(&mut colors.muted, palette.unemphasized_bg);
    apply(&mut colors.muted_foreground, palette.secondary_label);

    // ── Borders / focus ──────────────────────────────────────────
    apply(&mut colors.border, palette.separator);
    apply(&mut colors.input, palette.separator);
    apply(&mut colors.ring, palette.keyboard_focus);
    apply(&mut colors.selection, with_alpha(palette.accent, 0.85));

    // ── Danger: clear keys and the divide-by-zero notice ─────────
    apply(&mut colors.danger, palette.red);
    apply(&mut colors.danger_foreground, text_on(palette.red));
    let red = rgba_to_hsla(palette.red);
    colors.danger_hover = hover_variant(red);
    colors.danger_active = active_variant(red);

    // ── Window chrome ────────────────────────────────────────────
    apply(&mut colors.title_bar, palette.window_bg);
    apply(&mut colors.title_bar_border, palette.separator);
    apply(&mut colors.window_border, palette.separator);
}
