//! commission.rs - Building the ordered pattern-to-style rule list.
//!
//! A [`Commission`] is constructed once per invocation from a flattened
//! sequence of `pattern<delimiter>style` tokens (the CLI layer is
//! responsible for producing that sequence from inline requests or config
//! files). Rule order is significant and preserved: the painter applies
//! rules in declaration order against the same original line.
//!
//! Rule syntax errors and unknown style names are fatal here - no partial
//! commission is ever returned, since a silently dropped rule would change
//! program behavior.

use log::{debug, warn};
use regex::Regex;

use crate::errors::TingeError;
use crate::palette::{Palette, Style};

/// The default delimiter between pattern and style name in a rule token.
pub const DEFAULT_DELIMITER: &str = "=>";

/// A single pattern-to-style rule.
///
/// The pattern is compiled eagerly, but a compile failure does not poison
/// the whole commission: the failed rule is kept in place and skipped (with
/// a report) at paint time, so one bad pattern cannot kill a long-running
/// stream.
#[derive(Debug)]
pub struct Rule {
    pattern: String,
    compiled: Result<Regex, regex::Error>,
    style: Style,
}

impl Rule {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The compiled regex, or the compile error to report at paint time.
    pub(crate) fn compiled(&self) -> Result<&Regex, &regex::Error> {
        self.compiled.as_ref()
    }
}

/// The ordered list of rules for one program invocation.
#[derive(Debug, Default)]
pub struct Commission {
    rules: Vec<Rule>,
}

impl Commission {
    /// Builds a commission from raw rule tokens.
    ///
    /// Each token must contain exactly one occurrence of `delimiter`; the
    /// text before it is an uninterpreted regex pattern, the text after it
    /// a style name resolved through `palette`. Empty tokens are skipped.
    ///
    /// # Errors
    ///
    /// [`TingeError::MalformedRule`] when a token has zero or multiple
    /// delimiter occurrences, [`TingeError::UnknownStyle`] when the style
    /// name does not resolve. Both abort commission building.
    pub fn new<S: AsRef<str>>(
        tokens: &[S],
        delimiter: &str,
        palette: &Palette,
    ) -> Result<Self, TingeError> {
        let mut rules = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            if token.is_empty() {
                continue;
            }

            if token.matches(delimiter).count() != 1 {
                return Err(TingeError::MalformedRule {
                    token: token.to_string(),
                    delimiter: delimiter.to_string(),
                });
            }

            // Exactly one occurrence, so the split cannot fail.
            let Some((pattern, style_name)) = token.split_once(delimiter) else {
                return Err(TingeError::MalformedRule {
                    token: token.to_string(),
                    delimiter: delimiter.to_string(),
                });
            };

            let style = palette
                .lookup(style_name)
                .cloned()
                .ok_or_else(|| TingeError::UnknownStyle(style_name.to_string()))?;

            let compiled = Regex::new(pattern);
            match &compiled {
                Ok(_) => debug!("adding rule '{}' => '{}'", pattern, style.name()),
                Err(err) => warn!(
                    "rule '{}' has an invalid pattern and will be skipped while painting: {}",
                    pattern, err
                ),
            }

            rules.push(Rule {
                pattern: pattern.to_string(),
                compiled,
                style,
            });
        }

        Ok(Commission { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
