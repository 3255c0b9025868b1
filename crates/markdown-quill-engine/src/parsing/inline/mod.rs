//! # Inline Parsing
//!
//! Turns one block's text into a tree of [`FormattingNode`]s.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs once per block,
//! after the whole document has been segmented (so reference links can see
//! declarations that come later in the source).
//!
//! It works in two passes:
//! - **Scan**: a `Reader` walks the text, applying backslash escapes, reading
//!   links as atomic pieces and collecting maximal marker runs claimed by a
//!   registered handler
//! - **Resolve**: marker runs are paired into spans, recursively, with any
//!   surplus closer characters handed down to the inner content explicitly
//!
//! ## Modules
//!
//! - **`types`**: `FormattingNode` tree and `MarkerRun`
//! - **`kinds`**: Inline-specific types with owned delimiters (Escape, Link)
//! - **`modifiers`**: `ModifierHandler` trait, built-in handlers, `ModifierRegistry`
//! - **`parser`**: `InlineParser` entry point
//!
//! ## Escape Precedence
//!
//! Escapes are applied during the scan, so `\*` is text before pairing begins
//! and can never open or close a span.

pub mod kinds;
pub mod modifiers;
pub mod parser;
pub mod types;

pub(crate) mod resolve;
pub(crate) mod scan;

pub use parser::{InlineParser, parse_inline};
pub use types::{FormattingNode, MarkerRun};
