//! # Rendering
//!
//! Serializes segmented blocks and their formatting trees to HTML.
//!
//! Entity escaping is applied to literal text leaves only, after escapes have
//! been resolved and markers paired, so emitted tags are never escaped and
//! escaped text is never re-interpreted.

pub mod html;

pub use html::{push_block, push_nodes, render_document};
