use super::{ModifierHandler, Resolved};
use crate::parsing::inline::types::FormattingNode;

/// `~~text~~`. Only runs of exactly two tildes are markers; a lone `~` (or
/// `~~~`) is literal text and never pairs with anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrikethroughHandler;

impl StrikethroughHandler {
    pub const MARKER: char = '~';
    pub const WIDTH: usize = 2;
}

impl ModifierHandler for StrikethroughHandler {
    fn name(&self) -> &'static str {
        "strikethrough"
    }

    fn trigger(&self) -> char {
        Self::MARKER
    }

    fn is_significant(&self, run_length: usize) -> bool {
        run_length == Self::WIDTH
    }

    fn opener_widths(&self, run_length: usize) -> Vec<usize> {
        if run_length == Self::WIDTH {
            vec![Self::WIDTH]
        } else {
            vec![]
        }
    }

    fn closes(&self, width: usize, closer_length: usize) -> bool {
        width == Self::WIDTH && closer_length == Self::WIDTH
    }

    fn resolve(&self, _width: usize, children: Vec<FormattingNode>) -> Resolved {
        Resolved::Node(FormattingNode::Strikethrough(children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_double_tilde_is_significant() {
        let h = StrikethroughHandler;
        assert!(!h.is_significant(1));
        assert!(h.is_significant(2));
        assert!(!h.is_significant(3));
    }

    #[test]
    fn closes_only_exact_width() {
        let h = StrikethroughHandler;
        assert!(h.closes(2, 2));
        assert!(!h.closes(2, 3));
    }
}
