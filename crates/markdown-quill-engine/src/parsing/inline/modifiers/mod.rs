//! # Inline Modifiers
//!
//! Formatting kinds triggered by runs of a marker character (`*`, `~`, ...).
//!
//! Each kind is a [`ModifierHandler`]: it declares its trigger character,
//! which run lengths are significant, which opener widths to try and how a
//! matched span becomes a [`FormattingNode`]. Handlers are registered in a
//! [`ModifierRegistry`]; the resolver consults them in registration order.
//!
//! ## Built-ins
//!
//! - **`EmphasisHandler`**: `*` → Emphasis / Strong / StrongEmphasis
//! - **`StrikethroughHandler`**: `~~` → Strikethrough

pub mod emphasis;
pub mod registry;
pub mod strikethrough;

pub use emphasis::EmphasisHandler;
pub use registry::ModifierRegistry;
pub use strikethrough::StrikethroughHandler;

use super::types::FormattingNode;

/// What a handler made of a matched opener/closer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The span becomes this node.
    Node(FormattingNode),
    /// The handler declined: markers are emitted literally around the children.
    Literal(Vec<FormattingNode>),
}

/// Opener characters left over when a run is matched at less than its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leftover {
    /// Literal characters emitted before the span.
    pub before: usize,
    /// Literal characters emitted as leading content inside the span.
    pub inside: usize,
}

/// A formatting kind triggered by runs of one marker character.
///
/// The resolver pairs an opener of some width with a closer run at least that
/// long; `closes` can only narrow that further.
pub trait ModifierHandler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// The marker character this handler claims.
    fn trigger(&self) -> char;

    /// Whether a run of this length takes part in matching at all.
    ///
    /// Insignificant runs are literal text and invisible to closer search.
    fn is_significant(&self, run_length: usize) -> bool {
        run_length > 0
    }

    /// Opener widths to try for a run of `run_length`, widest first.
    fn opener_widths(&self, run_length: usize) -> Vec<usize>;

    /// Whether a run of `closer_length` can close an opener of `width`.
    ///
    /// Only consulted when `closer_length >= width`.
    fn closes(&self, width: usize, closer_length: usize) -> bool {
        closer_length >= width
    }

    /// Where the unused opener characters go when matching at `width`.
    fn leftover(&self, run_length: usize, width: usize) -> Leftover {
        Leftover {
            before: run_length.saturating_sub(width),
            inside: 0,
        }
    }

    /// Turns the resolved content of a matched span into a node.
    fn resolve(&self, width: usize, children: Vec<FormattingNode>) -> Resolved;
}
