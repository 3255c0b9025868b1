/// A maximal run of one formatting character inside a block's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRun {
    pub character: char,
    /// Number of characters in the run.
    pub length: usize,
    /// Byte offset of the first character in the block text.
    pub offset: usize,
}

impl MarkerRun {
    /// The run's characters as literal text.
    pub fn literal(&self) -> String {
        marker_text(self.character, self.length)
    }
}

/// A node of the formatting tree produced for one block.
///
/// Every non-leaf modifier node corresponds to exactly one opener run and one
/// closer run of the same character. Markers that could not be matched are
/// kept as [`FormattingNode::PlainText`], never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattingNode {
    /// Literal text, already unescaped but not yet HTML-escaped.
    PlainText(String),
    /// `*text*`
    Emphasis(Vec<FormattingNode>),
    /// `**text**`
    Strong(Vec<FormattingNode>),
    /// `***text***`
    StrongEmphasis(Vec<FormattingNode>),
    /// `~~text~~`
    Strikethrough(Vec<FormattingNode>),
    /// `[text](destination)` or a resolved `[text][name]`.
    Link {
        destination: String,
        children: Vec<FormattingNode>,
    },
    /// A span produced by a registered extension handler, rendered as `<tag>`.
    Custom {
        tag: &'static str,
        children: Vec<FormattingNode>,
    },
}

impl FormattingNode {
    pub fn text(s: impl Into<String>) -> Self {
        FormattingNode::PlainText(s.into())
    }

    /// Child nodes, empty for [`FormattingNode::PlainText`].
    pub fn children(&self) -> &[FormattingNode] {
        match self {
            FormattingNode::PlainText(_) => &[],
            FormattingNode::Emphasis(children)
            | FormattingNode::Strong(children)
            | FormattingNode::StrongEmphasis(children)
            | FormattingNode::Strikethrough(children)
            | FormattingNode::Link { children, .. }
            | FormattingNode::Custom { children, .. } => children,
        }
    }

    /// Concatenated literal text of this node and its descendants.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            FormattingNode::PlainText(s) => out.push_str(s),
            _ => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// `count` copies of `c`.
pub(crate) fn marker_text(c: char, count: usize) -> String {
    std::iter::repeat_n(c, count).collect()
}

/// Appends literal text, merging it into a trailing text node if there is one.
pub(crate) fn push_text(nodes: &mut Vec<FormattingNode>, s: &str) {
    if s.is_empty() {
        return;
    }
    if let Some(FormattingNode::PlainText(last)) = nodes.last_mut() {
        last.push_str(s);
    } else {
        nodes.push(FormattingNode::text(s));
    }
}

/// Appends nodes, merging adjacent text.
pub(crate) fn extend_nodes(nodes: &mut Vec<FormattingNode>, more: Vec<FormattingNode>) {
    for node in more {
        match node {
            FormattingNode::PlainText(s) => push_text(nodes, &s),
            other => nodes.push(other),
        }
    }
}
