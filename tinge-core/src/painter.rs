//! painter.rs - The line-painting engine.
//!
//! [`Painter::paint`] applies a [`Commission`] to one line of text and
//! reports one of three outcomes: a decorated line, an untouched line, or a
//! suppression signal. Lines are processed independently of each other; the
//! painter holds no cross-line state.
//!
//! Matching always runs against the original line, while replacement runs
//! against the working copy. Replacement is "replace every textual
//! occurrence of the matched substring", not a positional splice - identical
//! text elsewhere in the line, including text introduced by an earlier
//! rule's decoration, is wrapped as well. That behavior is a compatibility
//! contract with existing rule files and is pinned by tests; do not replace
//! it with span-indexed splicing.

use log::error;

use crate::commission::Commission;
use crate::palette::Style;

/// The outcome of painting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Painted {
    /// At least one rule matched; the line carries decorations.
    Painted(String),
    /// No rule matched; the line is unchanged (modulo trailing whitespace).
    Plain(String),
    /// The line must be dropped: a suppressing rule matched, or match-only
    /// mode saw no match at all.
    Suppressed,
}

impl Painted {
    /// The text to emit, or `None` for a suppressed line.
    pub fn into_text(self) -> Option<String> {
        match self {
            Painted::Painted(text) | Painted::Plain(text) => Some(text),
            Painted::Suppressed => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Painted::Suppressed)
    }
}

/// Applies a commission to lines of text.
#[derive(Debug)]
pub struct Painter {
    commission: Commission,
    match_only: bool,
}

impl Painter {
    pub fn new(commission: Commission) -> Self {
        Self::with_match_only(commission, false)
    }

    /// With `match_only` set, lines matching no rule at all are suppressed
    /// instead of passed through.
    pub fn with_match_only(commission: Commission, match_only: bool) -> Self {
        Painter {
            commission,
            match_only,
        }
    }

    /// Paints a single line.
    ///
    /// Rules run in commission order against the original `line`. A
    /// suppressing rule that matches short-circuits the whole pipeline,
    /// regardless of what earlier rules decorated - callers who want
    /// suppression to win must order those rules first. A rule whose
    /// pattern failed to compile is reported and skipped for this line.
    pub fn paint(&self, line: &str) -> Painted {
        let mut copy = line.to_string();
        let mut any_match = false;

        for rule in self.commission.rules() {
            let regex = match rule.compiled() {
                Ok(regex) => regex,
                Err(err) => {
                    error!("skipping rule '{}': {}", rule.pattern(), err);
                    continue;
                }
            };

            // Zero-width matches would make the substring replacement
            // degenerate; they are dropped rather than looped on.
            let matches: Vec<&str> = regex
                .find_iter(line)
                .map(|m| m.as_str())
                .filter(|text| !text.is_empty())
                .collect();

            if matches.is_empty() {
                continue;
            }

            match rule.style() {
                Style::Blind => return Painted::Suppressed,
                Style::Brush { open, close, .. } => {
                    any_match = true;
                    for text in matches {
                        let replacement = format!("{}{}{}", open, text, close);
                        copy = copy.replace(text, &replacement);
                    }
                }
            }
        }

        if self.match_only && !any_match {
            return Painted::Suppressed;
        }

        let trimmed = copy.trim_end().to_string();
        if any_match {
            Painted::Painted(trimmed)
        } else {
            Painted::Plain(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commission::DEFAULT_DELIMITER;
    use crate::palette::Palette;

    fn painter(tokens: &[&str]) -> Painter {
        let palette = Palette::extended();
        Painter::new(Commission::new(tokens, DEFAULT_DELIMITER, &palette).unwrap())
    }

    #[test]
    fn unmatched_line_passes_through() {
        let painter = painter(&["error=>red"]);
        assert_eq!(
            painter.paint("all quiet here"),
            Painted::Plain("all quiet here".to_string())
        );
    }

    #[test]
    fn trailing_whitespace_is_trimmed() {
        let painter = painter(&["error=>red"]);
        assert_eq!(
            painter.paint("no match   \t"),
            Painted::Plain("no match".to_string())
        );
    }

    #[test]
    fn invalid_rule_is_skipped_per_line() {
        let painter = painter(&["[unclosed=>red", "ok=>green"]);
        assert_eq!(
            painter.paint("this is ok"),
            Painted::Painted("this is \x1b[32mok\x1b[0m".to_string())
        );
    }

    #[test]
    fn duplicate_matches_rewrap_prior_decoration() {
        // Two identical matches: the second replace-all finds the text the
        // first one wrapped and wraps it again. Pinned compatibility quirk.
        let painter = painter(&["this=>red"]);
        assert_eq!(
            painter.paint("this this"),
            Painted::Painted(
                "\x1b[31m\x1b[31mthis\x1b[0m\x1b[0m \x1b[31m\x1b[31mthis\x1b[0m\x1b[0m"
                    .to_string()
            )
        );
    }

    #[test]
    fn later_rule_decorates_text_inside_earlier_decoration() {
        // "or" from rule two also appears inside the already-painted
        // "error" text; replace-all wraps that occurrence too.
        let painter = painter(&["error=>red", "or=>blue"]);
        let result = painter.paint("error");
        assert_eq!(
            result,
            Painted::Painted("\x1b[31merr\x1b[34mor\x1b[0m\x1b[0m".to_string())
        );
    }

    #[test]
    fn zero_width_matches_are_ignored() {
        let painter = painter(&["x*=>red"]);
        assert_eq!(
            painter.paint("no letter ecks here"),
            Painted::Plain("no letter ecks here".to_string())
        );
    }

    #[test]
    fn into_text_drops_suppressed_lines() {
        assert_eq!(Painted::Suppressed.into_text(), None);
        assert_eq!(
            Painted::Plain("text".into()).into_text(),
            Some("text".to_string())
        );
    }
}
