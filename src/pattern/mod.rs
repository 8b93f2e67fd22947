//! Step-by-step pattern assembly with continuous canonicalization.
//!
//! # Builder operations
//!
//! | Operation         | Appends        | Requires                    |
//! |-------------------|----------------|-----------------------------|
//! | `add_literal`     | one byte       | —                           |
//! | `add_raw`         | token verbatim | —                           |
//! | `add_class`       | `[chars]`      | —                           |
//! | `add_exact`       | `{n}`          | last token is an item       |
//! | `add_between`     | `{m,n}`        | last token is an item       |
//! | `add_optional`    | `?`            | last token is an item       |
//! | `add_group`       | `(inner)`      | —                           |
//! | `add_alternation` | `(inner)`      | —                           |
//! | `add_anchor`      | `^` or `$`     | `^` first, `$` not repeated |
//! | `apply_preset`    | whole pattern  | id in the catalog           |
//!
//! After every successful append except presets the buffer is rewritten to
//! its normalized fixed point; see [`normalize`].

pub mod builder;
pub mod class_set;
pub mod error;
pub mod normalize;
pub mod presets;

pub use builder::{DEFAULT_CAPACITY, Pattern, TokenKind};
pub use class_set::ByteSet;
pub use error::BuildError;
pub use normalize::normalize;
pub use presets::{PRESETS, Preset};
