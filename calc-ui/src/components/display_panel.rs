use calc_core::FontSizeTier;
use gpui::{
    Context, Div, FontWeight, ParentElement, Pixels, Styled, TextAlign, div, px,
};
use gpui_component::{ActiveTheme, v_flex};

use crate::components::CalculatorView;
use crate::models::PanelModel;

/// Point size for each display tier. The smaller tiers keep long
/// expressions on one line at the default window width.
pub fn font_size(tier: FontSizeTier) -> Pixels {
    match tier {
        FontSizeTier::Large => px(40.),
        FontSizeTier::Medium => px(32.),
        FontSizeTier::Small => px(28.8),
    }
}

/// Builds the right-aligned display line, with the notice (if any) above it.
pub fn render_display(
    panel: &PanelModel,
    cx: &Context<CalculatorView>,
) -> Div {
    let theme = cx.theme();

    let notice = div()
        .h(px(18.))
        .text_sm()
        .text_align(TextAlign::Right)
        .text_color(theme.colors.danger)
        .children(panel.notice.clone());

    let text = div()
        .w_full()
        .overflow_hidden()
        .whitespace_nowrap()
        .text_align(TextAlign::Right)
        .text_size(font_size(panel.font_size))
        .font_weight(FontWeight::LIGHT)
        .text_color(theme.colors.foreground)
        .child(panel.text.clone());

    v_flex()
        .w_full()
        .px_3()
        .py_2()
        .gap_1()
        .rounded_md()
        .bg(theme.colors.muted)
        .child(notice)
        .child(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn font_shrinks_with_each_tier() {
        assert_eq!(font_size(FontSizeTier::Large), px(40.));
        assert!(font_size(FontSizeTier::Medium) < font_size(FontSizeTier::Large));
        assert!(font_size(FontSizeTier::Small) < font_size(FontSizeTier::Medium));
    }
}
