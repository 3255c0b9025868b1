//! # Inline Kinds
//!
//! Inline constructs other than modifier runs, each owning its delimiters.
//!
//! ## Types
//!
//! - **`Escape`**: `BACKSLASH = '\\'` - makes the next punctuation character literal
//! - **`Link`**: `OPEN = '['`, `CLOSE = ']'`, `DESTINATION_OPEN = '('` - a `Readable`
//!   production for inline and reference-style links
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in scanner code.

pub mod escape;
pub mod link;

pub use escape::Escape;
pub use link::{Link, LinkTarget};
