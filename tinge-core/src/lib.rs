// tinge-core/src/lib.rs
//! # Tinge Core Library
//!
//! `tinge-core` provides the matching-and-rendering engine behind the
//! `tinge` colorizer, independent of any CLI or process plumbing. It owns
//! three things: the style palette, the ordered rule list ("commission"),
//! and the painter that rewrites matching substrings of a line with
//! terminal escape-code decorations.
//!
//! The library is designed to be pure and stateless: it consumes an
//! already-flattened list of `pattern=>style` tokens and transforms one
//! line at a time, without concerns for I/O, argument parsing, or config
//! file resolution (those live in the `tinge` CLI crate).
//!
//! ## Modules
//!
//! * `palette`: the fixed name-to-escape-code mapping, including the
//!   suppressing `blind` style.
//! * `commission`: rule parsing and the ordered, immutable rule list.
//! * `painter`: the per-line paint algorithm (decorate, pass through, or
//!   suppress).
//! * `errors`: the typed error enum for fatal rule-building failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use tinge_core::{Commission, Painted, Painter, Palette, DEFAULT_DELIMITER};
//!
//! let palette = Palette::extended();
//! let tokens = ["warning=>yellow_bold".to_string()];
//! let commission = Commission::new(&tokens, DEFAULT_DELIMITER, &palette)?;
//! let painter = Painter::new(commission);
//!
//! match painter.paint("a warning appeared") {
//!     Painted::Painted(text) => println!("{}", text),
//!     Painted::Plain(text) => println!("{}", text),
//!     Painted::Suppressed => {}
//! }
//! # Ok::<(), tinge_core::TingeError>(())
//! ```
//!
//! ## Error Handling
//!
//! Rule syntax errors and unknown style names fail commission building with
//! a [`TingeError`] before any line is processed. Pattern compile failures
//! are deliberately *not* fatal: the affected rule is reported and skipped
//! line by line, so a long-running stream stays alive.

pub mod commission;
pub mod errors;
pub mod painter;
pub mod palette;

/// Re-exports the commission types and the default rule delimiter.
pub use commission::{Commission, Rule, DEFAULT_DELIMITER};

/// Re-exports the typed error enum for clear error reporting.
pub use errors::TingeError;

/// Re-exports the painting engine and its per-line outcome.
pub use painter::{Painted, Painter};

/// Re-exports the style palette types.
pub use palette::{Palette, Style};
