//! Color theme and glyphs for Embedscope.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use embedscope_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6
    pub const BG_BANNER: Color = Color::Rgb(34, 50, 73); // waveBlue1

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const PRIMARY_DIM: Color = Color::Rgb(147, 138, 169); // springViolet1

    // === Accent Colors ===
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed

    // === Semantic Aliases ===
    pub const ACTIVE: Color = BLUE;
    pub const IDLE: Color = TEXT_DISABLED;
    pub const PEACH: Color = ORANGE;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub bg_banner: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub primary_dim: Color,
    /// Lit neurons and arrows.
    pub active: Color,
    /// Unlit neurons and arrows.
    pub idle: Color,
    pub peach: Color,
    pub blue: Color,
    pub red: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            bg_banner: colors::BG_BANNER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            primary_dim: colors::PRIMARY_DIM,
            active: colors::ACTIVE,
            idle: colors::IDLE,
            peach: colors::PEACH,
            blue: colors::BLUE,
            red: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            bg_banner: Color::Blue,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            primary_dim: Color::Gray,
            active: Color::Cyan,
            idle: Color::DarkGray,
            peach: Color::Yellow,
            blue: Color::Blue,
            red: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for neurons, arrows and buttons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub neuron_active: &'static str,
    pub neuron_idle: &'static str,
    pub arrow_right: &'static str,
    pub arrow_left: &'static str,
    pub play: &'static str,
    pub pause: &'static str,
    pub separator: &'static str,
    pub arrows_hint: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            neuron_active: "@",
            neuron_idle: "o",
            arrow_right: "--->",
            arrow_left: "<---",
            play: ">",
            pause: "||",
            separator: "|",
            arrows_hint: "<>",
        }
    } else {
        Glyphs {
            neuron_active: "●",
            neuron_idle: "○",
            arrow_right: "───▶",
            arrow_left: "◀───",
            play: "▶",
            pause: "⏸",
            separator: "│",
            arrows_hint: "←→",
        }
    }
}

/// Linear blend between two colors. Non-RGB colors snap at the midpoint.
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn play_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.blue)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn pause_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.red)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn step_button(palette: &Palette, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_highlight)
        } else {
            Style::default()
                .fg(palette.text_disabled)
                .bg(palette.bg_panel)
        }
    }

    #[must_use]
    pub fn tab(palette: &Palette, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.bg_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text_muted).bg(palette.bg_panel)
        }
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_glyphs_are_ascii() {
        let glyphs = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        for glyph in [
            glyphs.neuron_active,
            glyphs.neuron_idle,
            glyphs.arrow_right,
            glyphs.arrow_left,
            glyphs.play,
            glyphs.pause,
            glyphs.separator,
            glyphs.arrows_hint,
        ] {
            assert!(glyph.is_ascii(), "{glyph} should be ascii");
        }
    }

    #[test]
    fn neuron_glyphs_distinguish_state() {
        for ascii_only in [false, true] {
            let glyphs = glyphs(UiOptions {
                ascii_only,
                ..UiOptions::default()
            });
            assert_ne!(glyphs.neuron_active, glyphs.neuron_idle);
        }
    }

    #[test]
    fn high_contrast_palette_selected() {
        let palette = palette(UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        });
        assert_eq!(palette.bg_dark, Color::Black);
    }

    #[test]
    fn blend_rgb_endpoints_and_midpoint() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
        assert_eq!(blend(from, to, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn blend_named_colors_snap() {
        assert_eq!(blend(Color::DarkGray, Color::Cyan, 0.2), Color::DarkGray);
        assert_eq!(blend(Color::DarkGray, Color::Cyan, 0.7), Color::Cyan);
    }
}
