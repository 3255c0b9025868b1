use markdown_quill_config::{ModifierKind, RenderConfig};

use super::{Leftover, ModifierHandler, Resolved};
use crate::parsing::inline::types::FormattingNode;

/// `*` runs: width 1 is italic, 2 is strong, 3 is both.
///
/// A run of three or more that only matches at width 2 keeps its third
/// character as literal text inside the strong span (`***a**` →
/// `<strong>*a</strong>`); every other leftover goes before the span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisHandler {
    pub emphasis: bool,
    pub strong: bool,
    pub strong_emphasis: bool,
}

impl EmphasisHandler {
    pub const MARKER: char = '*';

    /// Widest supported opener.
    pub const MAX_WIDTH: usize = 3;

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            emphasis: config.is_enabled(ModifierKind::Emphasis),
            strong: config.is_enabled(ModifierKind::Strong),
            strong_emphasis: config.is_enabled(ModifierKind::StrongEmphasis),
        }
    }

    /// True if at least one `*` kind is enabled.
    pub fn is_active(&self) -> bool {
        self.emphasis || self.strong || self.strong_emphasis
    }

    fn enabled(&self, width: usize) -> bool {
        match width {
            1 => self.emphasis,
            2 => self.strong,
            3 => self.strong_emphasis,
            _ => false,
        }
    }
}

impl Default for EmphasisHandler {
    fn default() -> Self {
        Self {
            emphasis: true,
            strong: true,
            strong_emphasis: true,
        }
    }
}

impl ModifierHandler for EmphasisHandler {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn trigger(&self) -> char {
        Self::MARKER
    }

    fn opener_widths(&self, run_length: usize) -> Vec<usize> {
        (1..=run_length.min(Self::MAX_WIDTH))
            .rev()
            .filter(|&w| self.enabled(w))
            .collect()
    }

    fn leftover(&self, run_length: usize, width: usize) -> Leftover {
        if width == 2 && run_length >= Self::MAX_WIDTH {
            Leftover {
                before: run_length - Self::MAX_WIDTH,
                inside: 1,
            }
        } else {
            Leftover {
                before: run_length.saturating_sub(width),
                inside: 0,
            }
        }
    }

    fn resolve(&self, width: usize, children: Vec<FormattingNode>) -> Resolved {
        match width {
            1 => Resolved::Node(FormattingNode::Emphasis(children)),
            2 => Resolved::Node(FormattingNode::Strong(children)),
            3 => Resolved::Node(FormattingNode::StrongEmphasis(children)),
            _ => Resolved::Literal(children),
        }
    }
}
