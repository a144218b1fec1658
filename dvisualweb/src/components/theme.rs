use std::fmt::{Display, Write};

/// The colour palettes a theme can draw from. Each one is represented by its
/// Material Design 500 shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Palette {
    Teal,
    Grey,
    BlueGrey,
    Red,
}

impl Palette {
    pub fn hex(self) -> &'static str {
        match self {
            Palette::Teal => "#009688",
            Palette::Grey => "#9e9e9e",
            Palette::BlueGrey => "#607d8b",
            Palette::Red => "#f44336",
        }
    }
}

impl Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Palette::Teal => write!(f, "teal"),
            Palette::Grey => write!(f, "grey"),
            Palette::BlueGrey => write!(f, "blue-grey"),
            Palette::Red => write!(f, "red"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Theme {
    pub primary: Palette,
    pub background: Palette,
    pub accent: Palette,
    pub warn: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Palette::Teal,
            background: Palette::Grey,
            accent: Palette::BlueGrey,
            warn: Palette::Red,
        }
    }
}

impl Theme {
    /// Renders the theme as CSS custom properties plus the few rules that use
    /// them.
    pub fn css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (role, palette) in self.roles() {
            // Writing to a String cannot fail.
            let _ = writeln!(css, "  --{role}-color: {}; /* {palette} */", palette.hex());
        }
        css.push_str("}\n");
        css.push_str(concat!(
            "body { font-family: sans-serif; background: color-mix(in srgb, var(--background-color) 15%, white); }\n",
            "h1 { color: var(--primary-color); }\n",
            "label { display: block; margin-top: 1em; color: var(--accent-color); }\n",
            "button { margin-top: 1.5em; padding: 0.5em 1.5em; border: none; color: white; background: var(--primary-color); }\n",
            "input:invalid { border-color: var(--warn-color); }\n",
        ));
        css
    }

    fn roles(&self) -> [(&'static str, Palette); 4] {
        [
            ("primary", self.primary),
            ("background", self.background),
            ("accent", self.accent),
            ("warn", self.warn),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_palettes() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Palette::Teal);
        assert_eq!(theme.background, Palette::Grey);
        assert_eq!(theme.accent, Palette::BlueGrey);
        assert_eq!(theme.warn, Palette::Red);
    }

    #[test]
    fn css_declares_every_role() {
        let css = Theme::default().css();
        assert!(css.contains("--primary-color: #009688; /* teal */"));
        assert!(css.contains("--background-color: #9e9e9e; /* grey */"));
        assert!(css.contains("--accent-color: #607d8b; /* blue-grey */"));
        assert!(css.contains("--warn-color: #f44336; /* red */"));
    }
}
