//! # Block Segmentation
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (blank, quote remainder, reference declaration, text)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` accumulates lines into the
//!    open block and emits `Block`s as blocks close
//!
//! ## Modules
//!
//! - **`types`**: The `Block` enum (Paragraph, Blockquote)
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, Paragraph,
//!   ReferenceDeclaration)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`references`**: `ReferenceMap` of declared link destinations
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Reference declarations never produce a block
//! - Block text never contains line terminators: lines are joined with one space
//! - Backslash escapes are left in place; they are resolved by inline parsing

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod references;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use references::ReferenceMap;
pub use types::Block;
