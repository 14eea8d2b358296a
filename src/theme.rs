use ratatui::style::Color;

use crate::config::ThemePref;

/// Named color roles consumed by the views. Draw code styles everything
/// through a `Theme` so cycling the preference restyles the whole dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub heading: Color,
    pub accent: Color,
    pub border: Color,
    pub cursor: Color,
    pub positive: Color,
    pub negative: Color,
    pub gauge: Color,
}

const WEDGES: [Color; 10] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Red,
    Color::LightCyan,
    Color::LightMagenta,
    Color::LightGreen,
    Color::LightYellow,
];

impl Theme {
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            muted: Color::DarkGray,
            heading: Color::Yellow,
            accent: Color::Cyan,
            border: Color::Gray,
            cursor: Color::Yellow,
            positive: Color::Green,
            negative: Color::Red,
            gauge: Color::Green,
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color::Black,
            muted: Color::Gray,
            heading: Color::Blue,
            accent: Color::Magenta,
            border: Color::DarkGray,
            cursor: Color::Blue,
            positive: Color::Green,
            negative: Color::Red,
            gauge: Color::Blue,
        }
    }

    pub fn resolve(pref: ThemePref) -> Self {
        match pref {
            ThemePref::Light => Self::light(),
            ThemePref::Dark => Self::dark(),
            ThemePref::Auto => {
                if prefers_light() {
                    Self::light()
                } else {
                    Self::dark()
                }
            }
        }
    }

    /// Stable ordinal palette for language dots and year wedges.
    pub fn ordinal(&self, index: usize) -> Color {
        WEDGES[index % WEDGES.len()]
    }
}

fn prefers_light() -> bool {
    std::env::var("COLORFGBG")
        .map(|v| light_background(&v))
        .unwrap_or(false)
}

/// `COLORFGBG` is "<fg>;<bg>", sometimes "<fg>;<default>;<bg>".
fn light_background(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg == 7 || bg >= 9)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_light_backgrounds() {
        assert!(light_background("0;15"));
        assert!(light_background("0;default;7"));
        assert!(!light_background("15;0"));
        assert!(!light_background("default;default"));
        assert!(!light_background(""));
    }

    #[test]
    fn ordinal_palette_cycles() {
        let theme = Theme::dark();
        assert_eq!(theme.ordinal(0), theme.ordinal(WEDGES.len()));
        assert_ne!(theme.ordinal(0), theme.ordinal(1));
    }

    #[test]
    fn explicit_prefs_pick_fixed_palettes() {
        assert_eq!(Theme::resolve(ThemePref::Dark), Theme::dark());
        assert_eq!(Theme::resolve(ThemePref::Light), Theme::light());
    }
}
