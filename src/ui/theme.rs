//! Colors and spacing for the card UI
//!
//! The dark palette is a night-time desk with a plum card on it, the light one
//! is cream stationery on a warm table.

use crate::config::ThemeChoice;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Vec2, Visuals};

const BUTTON_RADIUS: f32 = 18.0;
const CARD_RADIUS: f32 = 14.0;
const SPACING: f32 = 14.0;

/// Body text sizes, smallest first
const TEXT_SIZES: [(TextStyle, f32); 4] = [
    (TextStyle::Small, 12.0),
    (TextStyle::Body, 15.0),
    (TextStyle::Button, 16.0),
    (TextStyle::Heading, 30.0),
];

#[derive(Clone, Debug)]
pub struct Theme {
    pub dark: bool,

    /// Accent used for the title, hovered buttons and selections
    pub primary: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,

    /// Area around the card
    pub bg_primary: Color32,
    /// Side panels, windows and text fields
    pub bg_secondary: Color32,

    pub card_bg: Color32,
    pub card_border: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    pub button_rounding: Rounding,
    pub card_rounding: Rounding,

    pub spacing: f32,
    pub spacing_lg: f32,
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            dark: true,

            primary: Color32::from_rgb(244, 114, 182),
            success: Color32::from_rgb(110, 200, 140),
            warning: Color32::from_rgb(240, 190, 90),
            error: Color32::from_rgb(240, 100, 100),

            bg_primary: Color32::from_rgb(20, 16, 28),
            bg_secondary: Color32::from_rgb(36, 29, 48),

            card_bg: Color32::from_rgb(44, 30, 58),
            card_border: Color32::from_rgb(120, 84, 150),

            text_primary: Color32::from_rgb(246, 240, 250),
            text_secondary: Color32::from_rgb(206, 194, 218),
            text_muted: Color32::from_rgb(150, 136, 166),

            button_rounding: Rounding::same(BUTTON_RADIUS),
            card_rounding: Rounding::same(CARD_RADIUS),

            spacing: SPACING,
            spacing_lg: SPACING * 2.0,
            spacing_sm: SPACING * 0.5,
        }
    }

    pub fn light() -> Self {
        Self {
            dark: false,

            primary: Color32::from_rgb(196, 56, 110),
            success: Color32::from_rgb(46, 140, 80),
            warning: Color32::from_rgb(180, 120, 20),
            error: Color32::from_rgb(200, 50, 50),

            bg_primary: Color32::from_rgb(236, 226, 212),
            bg_secondary: Color32::from_rgb(246, 239, 229),

            card_bg: Color32::from_rgb(253, 248, 240),
            card_border: Color32::from_rgb(214, 188, 150),

            text_primary: Color32::from_rgb(52, 36, 30),
            text_secondary: Color32::from_rgb(96, 76, 64),
            text_muted: Color32::from_rgb(140, 120, 104),

            button_rounding: Rounding::same(BUTTON_RADIUS),
            card_rounding: Rounding::same(CARD_RADIUS),

            spacing: SPACING,
            spacing_lg: SPACING * 2.0,
            spacing_sm: SPACING * 0.5,
        }
    }

    fn visuals(&self) -> Visuals {
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.window_stroke = Stroke::new(1.0, self.card_border);
        visuals.window_rounding = self.card_rounding;
        visuals.extreme_bg_color = self.bg_secondary;
        visuals.hyperlink_color = self.primary;

        let widgets = &mut visuals.widgets;
        widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.card_border.gamma_multiply(0.5));
        widgets.inactive.weak_bg_fill = self.card_bg;
        widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        widgets.hovered.weak_bg_fill = self.primary.gamma_multiply(0.6);
        widgets.hovered.bg_stroke = Stroke::new(1.0, self.primary);
        widgets.active.weak_bg_fill = self.primary;
        widgets.active.fg_stroke = Stroke::new(1.5, self.card_bg);
        for state in [
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
        ] {
            state.rounding = self.button_rounding;
        }

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        visuals
    }

    /// Install the palette, spacing and text sizes on the context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(self.visuals());

        ctx.style_mut(|style| {
            style.spacing.item_spacing = Vec2::new(self.spacing_sm * 1.5, self.spacing_sm);
            style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);
            for (text_style, size) in TEXT_SIZES {
                style
                    .text_styles
                    .insert(text_style, FontId::new(size, FontFamily::Proportional));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_picks_palette() {
        assert!(Theme::from_choice(ThemeChoice::Dark).dark);
        assert!(!Theme::from_choice(ThemeChoice::Light).dark);
    }

    #[test]
    fn test_palettes_share_shape() {
        let (dark, light) = (Theme::dark(), Theme::light());
        assert_eq!(dark.button_rounding, light.button_rounding);
        assert_eq!(dark.spacing, light.spacing);
        assert_ne!(dark.card_bg, light.card_bg);
    }

    #[test]
    fn test_card_text_readable_on_card() {
        for theme in [Theme::dark(), Theme::light()] {
            let luma = |c: Color32| c.r() as i32 + c.g() as i32 + c.b() as i32;
            assert!((luma(theme.text_primary) - luma(theme.card_bg)).abs() > 300);
        }
    }
}
