// themes module - the two built-in palettes and how they map onto egui
use egui::{Color32, Context, FontId, Stroke, TextStyle, Visuals};

/// A named palette applied uniformly to the window, text surface and
/// status bar. Exactly two instances exist; themes are never mutated.
pub struct Theme {
    pub name: &'static str,
    pub background: Color32,
    pub foreground: Color32,
    pub caret: Color32,
    pub selection_background: Color32,
    pub status_background: Color32,
    pub status_foreground: Color32,
}

pub const LIGHT: Theme = Theme {
    name: "Light",
    background: Color32::from_rgb(0xff, 0xff, 0xff),
    foreground: Color32::from_rgb(0x00, 0x00, 0x00),
    caret: Color32::from_rgb(0x00, 0x00, 0x00),
    selection_background: Color32::from_rgb(0xcc, 0xe3, 0xff),
    status_background: Color32::from_rgb(0xf0, 0xf0, 0xf0),
    status_foreground: Color32::from_rgb(0x00, 0x00, 0x00),
};

pub const DARK: Theme = Theme {
    name: "Dark",
    background: Color32::from_rgb(0x1e, 0x1e, 0x1e),
    foreground: Color32::from_rgb(0xd4, 0xd4, 0xd4),
    caret: Color32::from_rgb(0xff, 0xff, 0xff),
    selection_background: Color32::from_rgb(0x26, 0x4f, 0x78),
    status_background: Color32::from_rgb(0x2d, 0x2d, 0x2d),
    status_foreground: Color32::from_rgb(0xff, 0xff, 0xff),
};

pub const ALL: [&Theme; 2] = [&LIGHT, &DARK];

pub const DEFAULT_NAME: &str = "Light";

pub fn by_name(name: &str) -> Option<&'static Theme> {
    ALL.into_iter().find(|t| t.name == name)
}

pub fn apply(theme: &Theme, ctx: &Context) {
    let mut visuals = if theme.name == DARK.name {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    // Window and text surface backgrounds
    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.background;
    visuals.extreme_bg_color = theme.background;

    visuals.override_text_color = Some(theme.foreground);

    visuals.selection.bg_fill = theme.selection_background;
    visuals.selection.stroke = Stroke::new(1.0, theme.foreground);

    visuals.text_cursor.stroke = Stroke::new(2.0, theme.caret);

    ctx.set_visuals(visuals);

    // Monospace text surface, proportional chrome
    let mut style = (*ctx.style()).clone();
    style
        .text_styles
        .insert(TextStyle::Monospace, FontId::monospace(14.0));
    style
        .text_styles
        .insert(TextStyle::Body, FontId::proportional(13.0));
    style
        .text_styles
        .insert(TextStyle::Button, FontId::proportional(13.0));
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_built_in_themes_resolve_by_name() {
        assert_eq!(by_name("Light").unwrap().name, "Light");
        assert_eq!(by_name("Dark").unwrap().name, "Dark");
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(by_name("Solarized").is_none());
        assert!(by_name("light").is_none());
        assert!(by_name("").is_none());
    }

    #[test]
    fn default_theme_is_light() {
        assert_eq!(by_name(DEFAULT_NAME).unwrap().name, LIGHT.name);
    }

    #[test]
    fn palettes_match_the_reference_colors() {
        assert_eq!(LIGHT.background, Color32::from_rgb(0xff, 0xff, 0xff));
        assert_eq!(LIGHT.selection_background, Color32::from_rgb(0xcc, 0xe3, 0xff));
        assert_eq!(LIGHT.status_background, Color32::from_rgb(0xf0, 0xf0, 0xf0));

        assert_eq!(DARK.background, Color32::from_rgb(0x1e, 0x1e, 0x1e));
        assert_eq!(DARK.foreground, Color32::from_rgb(0xd4, 0xd4, 0xd4));
        assert_eq!(DARK.selection_background, Color32::from_rgb(0x26, 0x4f, 0x78));
        assert_eq!(DARK.status_background, Color32::from_rgb(0x2d, 0x2d, 0x2d));
    }
}
