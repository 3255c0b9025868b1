//! # markdown-quill engine
//!
//! Converts a small markdown dialect to HTML: paragraphs, `>` blockquotes,
//! reference declarations, links, backslash escapes and the inline modifiers
//! `*`, `**`, `***` and `~~`.
//!
//! ```
//! assert_eq!(
//!     markdown_quill_engine::render("**Hello, *world*!**"),
//!     "<p><strong>Hello, <em>world</em>!</strong></p>"
//! );
//! ```
//!
//! New inline modifiers plug in through [`ModifierHandler`] and
//! [`MarkdownRenderer::register`].

pub mod markdown;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use markdown::{MarkdownRenderer, render};
pub use markdown_quill_config::{ModifierKind, RenderConfig};
pub use parsing::{
    ParsedDoc,
    blocks::{Block, ReferenceMap},
    inline::{
        FormattingNode, InlineParser, MarkerRun,
        modifiers::{Leftover, ModifierHandler, ModifierRegistry, Resolved},
    },
    parse_document,
};
