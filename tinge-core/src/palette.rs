//! palette.rs - The fixed mapping from style names to terminal escape codes.
//!
//! A [`Palette`] is built once at startup and shared read-only by every rule
//! that references one of its styles. Construction is deterministic: the same
//! names always map to the same byte sequences, since scripts downstream may
//! parse the emitted escape codes.
//!
//! Two palettes are available: [`Palette::base`] with the classic 8 hues, and
//! [`Palette::extended`] which adds the 256-entry indexed foreground and
//! background sets. Both carry the suppressing `blind` style.

use std::collections::HashMap;

/// Escape-code fragments shared by every style. These exact byte sequences
/// are the wire contract with the terminal.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const UNDERLINE: &str = "\x1b[4m";

/// The 8 base hue names, in foreground-code order (`ESC[30m`..`ESC[37m`).
const BASE_HUES: [&str; 8] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "light_gray",
];

/// A named visual decoration.
///
/// The suppressing style is a distinct variant rather than a brush with an
/// absent open code, so it can never be confused with a real zero-length
/// escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Style {
    /// Wraps each match in an open/close escape-code pair.
    Brush {
        name: String,
        open: String,
        close: String,
    },
    /// Drops the whole line when its pattern matches.
    Blind,
}

impl Style {
    pub fn name(&self) -> &str {
        match self {
            Style::Brush { name, .. } => name,
            Style::Blind => "blind",
        }
    }

    pub fn is_blind(&self) -> bool {
        matches!(self, Style::Blind)
    }
}

/// Container of all available styles, looked up by case-insensitive name.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: HashMap<String, Style>,
}

impl Palette {
    /// The 8-color palette: every base hue in plain, `_bold` and
    /// `_underlined` variants, plus `blind`.
    pub fn base() -> Self {
        let mut styles = HashMap::new();
        for (num, hue) in BASE_HUES.iter().enumerate() {
            insert_variants(&mut styles, hue, &format!("\x1b[{}m", num + 30));
        }
        styles.insert("blind".to_string(), Style::Blind);
        Palette { styles }
    }

    /// The 256-color palette: everything from [`Palette::base`], plus
    /// `colorNNN` / `bgcolorNNN` entries (NNN zero-padded to three digits)
    /// with their own `_bold` and `_underlined` variants.
    pub fn extended() -> Self {
        let mut palette = Self::base();
        for num in 0..=255u8 {
            insert_variants(
                &mut palette.styles,
                &format!("color{:03}", num),
                &format!("\x1b[38;5;{}m", num),
            );
            insert_variants(
                &mut palette.styles,
                &format!("bgcolor{:03}", num),
                &format!("\x1b[48;5;{}m", num),
            );
        }
        palette
    }

    /// Looks up a style by name. Matching is case-insensitive; unknown names
    /// return `None` (the commission builder turns that into a fatal error).
    pub fn lookup(&self, name: &str) -> Option<&Style> {
        self.styles.get(&name.to_lowercase())
    }

    /// All style names, sorted. Used by the `--list` output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// Registers `name`, `name_bold` and `name_underlined` for one open code.
fn insert_variants(styles: &mut HashMap<String, Style>, name: &str, open: &str) {
    styles.insert(
        name.to_string(),
        Style::Brush {
            name: name.to_string(),
            open: open.to_string(),
            close: RESET.to_string(),
        },
    );
    styles.insert(
        format!("{}_bold", name),
        Style::Brush {
            name: format!("{}_bold", name),
            open: format!("{}{}", open, BOLD),
            close: RESET.to_string(),
        },
    );
    styles.insert(
        format!("{}_underlined", name),
        Style::Brush {
            name: format!("{}_underlined", name),
            open: format!("{}{}", open, UNDERLINE),
            close: RESET.to_string(),
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_code(palette: &Palette, name: &str) -> String {
        match palette.lookup(name) {
            Some(Style::Brush { open, .. }) => open.clone(),
            other => panic!("expected a brush for '{}', got {:?}", name, other),
        }
    }

    #[test]
    fn base_hues_use_exact_codes() {
        let palette = Palette::base();
        assert_eq!(open_code(&palette, "black"), "\x1b[30m");
        assert_eq!(open_code(&palette, "red"), "\x1b[31m");
        assert_eq!(open_code(&palette, "light_gray"), "\x1b[37m");
        match palette.lookup("red") {
            Some(Style::Brush { close, .. }) => assert_eq!(close, "\x1b[0m"),
            other => panic!("unexpected style {:?}", other),
        }
    }

    #[test]
    fn styled_variants_append_style_codes() {
        let palette = Palette::base();
        assert_eq!(open_code(&palette, "red_bold"), "\x1b[31m\x1b[1m");
        assert_eq!(open_code(&palette, "blue_underlined"), "\x1b[34m\x1b[4m");
    }

    #[test]
    fn extended_palette_covers_indexed_colors() {
        let palette = Palette::extended();
        assert_eq!(open_code(&palette, "color001"), "\x1b[38;5;1m");
        assert_eq!(open_code(&palette, "bgcolor255"), "\x1b[48;5;255m");
        assert_eq!(
            open_code(&palette, "color196_bold"),
            "\x1b[38;5;196m\x1b[1m"
        );
        assert_eq!(
            open_code(&palette, "bgcolor040_underlined"),
            "\x1b[48;5;40m\x1b[4m"
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let palette = Palette::base();
        assert!(palette.lookup("RED").is_some());
        assert!(palette.lookup("Red_Bold").is_some());
        assert!(palette.lookup("no_such_color").is_none());
    }

    #[test]
    fn blind_is_a_distinct_variant() {
        let palette = Palette::extended();
        let blind = palette.lookup("blind").unwrap();
        assert!(blind.is_blind());
        // A brush with an empty open code would still not be blind.
        let brush = Style::Brush {
            name: "fake".into(),
            open: String::new(),
            close: "\x1b[0m".into(),
        };
        assert!(!brush.is_blind());
    }

    #[test]
    fn construction_is_deterministic() {
        let a = Palette::extended();
        let b = Palette::extended();
        assert_eq!(a.len(), b.len());
        for name in a.names() {
            assert_eq!(a.lookup(name), b.lookup(name));
        }
    }
}
