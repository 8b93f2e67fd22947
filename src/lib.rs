//! A step-by-step regular expression builder with continuous
//! canonicalization.
//!
//! # Example
//!
//! ```rust
//! use rexbuild::Pattern;
//!
//! let mut pattern = Pattern::new();
//!
//! // Four digit atoms collapse into one counted escape.
//! for _ in 0..4 {
//!     pattern.add_raw("\\d")?;
//! }
//! assert_eq!(pattern.to_string(), "\\d{4}");
//!
//! // Classes are rewritten to their minimal ascending-run form.
//! pattern.add_class("c-aabdf")?;
//! assert_eq!(pattern.to_string(), "\\d{4}[a-df]");
//!
//! // Grammar violations are rejected without touching the pattern.
//! assert!(pattern.add_anchor(b'^').is_err());
//! assert_eq!(pattern.to_string(), "\\d{4}[a-df]");
//! # Ok::<(), rexbuild::BuildError>(())
//! ```

pub mod app;
pub mod command;
pub mod pattern;

pub use command::{Command, apply};
pub use pattern::{BuildError, Pattern, TokenKind};
