use ratatui::style::Color;

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Head glyph while no direction input has arrived yet.
pub const GLYPH_SNAKE_HEAD_IDLE: &str = "◆";

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green-on-dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    border_bg: Color::Black,
    hud_fg: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Cyan,
    border_bg: Color::Black,
    hud_fg: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_fg: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All bundled themes in selection order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks a theme up by its CLI name.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Names of all bundled themes, for error messages.
#[must_use]
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|theme| theme.name).collect()
}

#[cfg(test)]
mod tests {
    use super::{theme_by_name, theme_names, THEMES};

    #[test]
    fn every_bundled_theme_is_found_by_name() {
        for theme in THEMES {
            let found = theme_by_name(theme.name).expect("bundled theme resolves");
            assert_eq!(found.name, theme.name);
        }
    }

    #[test]
    fn lookup_ignores_case_and_rejects_unknown_names() {
        assert!(theme_by_name("CLASSIC").is_some());
        assert!(theme_by_name("plasma").is_none());
    }

    #[test]
    fn theme_names_match_the_bundled_set() {
        assert_eq!(theme_names().len(), THEMES.len());
    }
}
