use super::{
    classify::LineClass,
    kinds::Paragraph,
    references::ReferenceMap,
    types::Block,
};

#[derive(Debug, Clone)]
enum LeafState<'a> {
    None,
    Paragraph { lines: Vec<&'a str> },
    Quote { lines: Vec<&'a str> },
}

/// Phase 2 of block parsing: folds classified lines into blocks.
///
/// Reference declarations are consumed here and never produce a block.
pub struct BlockBuilder<'a> {
    leaf: LeafState<'a>,
    references: ReferenceMap,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            references: ReferenceMap::new(),
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'a>) {
        match c {
            LineClass::Blank => self.flush(),
            LineClass::Reference(decl) => {
                self.flush();
                if !self.references.insert(decl) {
                    log::debug!("ignoring duplicate reference declaration [{}]", decl.name);
                }
            }
            LineClass::Quote(text) => self.extend_quote(text),
            LineClass::Text(text) => self.extend_paragraph(text),
        }
    }

    pub fn finish(mut self) -> (Vec<Block>, ReferenceMap) {
        // EOF flush
        self.flush();
        (self.out, self.references)
    }

    fn extend_paragraph(&mut self, text: &'a str) {
        match &mut self.leaf {
            LeafState::Paragraph { lines } => lines.push(text),
            _ => {
                self.flush();
                self.leaf = LeafState::Paragraph { lines: vec![text] };
            }
        }
    }

    fn extend_quote(&mut self, text: &'a str) {
        if !matches!(self.leaf, LeafState::Quote { .. }) {
            self.flush();
            self.leaf = LeafState::Quote { lines: vec![] };
        }
        if let LeafState::Quote { lines } = &mut self.leaf {
            // A bare `>` keeps the quote open without adding text.
            if !text.is_empty() {
                lines.push(text);
            }
        }
    }

    fn flush(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Paragraph { lines } => {
                self.out.push(Block::Paragraph(lines.join(Paragraph::JOINER)));
            }
            LeafState::Quote { lines } => {
                self.out.push(Block::Blockquote(lines.join(Paragraph::JOINER)));
            }
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::ReferenceDeclaration;
    use pretty_assertions::assert_eq;

    fn build(lines: Vec<LineClass<'_>>) -> (Vec<Block>, ReferenceMap) {
        let mut builder = BlockBuilder::new();
        for line in lines {
            builder.push(line);
        }
        builder.finish()
    }

    #[test]
    fn consecutive_text_lines_merge() {
        let (blocks, _) = build(vec![LineClass::Text("one"), LineClass::Text("two")]);
        assert_eq!(blocks, vec![Block::Paragraph("one two".into())]);
    }

    #[test]
    fn blank_line_terminates_paragraph() {
        let (blocks, _) = build(vec![
            LineClass::Text("one"),
            LineClass::Blank,
            LineClass::Blank,
            LineClass::Text("two"),
        ]);
        assert_eq!(
            blocks,
            vec![Block::Paragraph("one".into()), Block::Paragraph("two".into())]
        );
    }

    #[test]
    fn quote_line_terminates_paragraph() {
        let (blocks, _) = build(vec![
            LineClass::Text("text"),
            LineClass::Quote("quoted"),
            LineClass::Text("after"),
        ]);
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("text".into()),
                Block::Blockquote("quoted".into()),
                Block::Paragraph("after".into()),
            ]
        );
    }

    #[test]
    fn bare_quote_marker_keeps_quote_open() {
        let (blocks, _) = build(vec![
            LineClass::Quote("one"),
            LineClass::Quote(""),
            LineClass::Quote("two"),
        ]);
        assert_eq!(blocks, vec![Block::Blockquote("one two".into())]);
    }

    #[test]
    fn references_are_collected_without_blocks() {
        let (blocks, refs) = build(vec![
            LineClass::Text("before"),
            LineClass::Reference(ReferenceDeclaration {
                name: "a",
                destination: "/a",
            }),
            LineClass::Text("after"),
        ]);
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph("before".into()),
                Block::Paragraph("after".into()),
            ]
        );
        assert_eq!(refs.get("a"), Some("/a"));
    }

    #[test]
    fn nothing_pushed() {
        let (blocks, refs) = build(vec![]);
        assert!(blocks.is_empty());
        assert!(refs.is_empty());
    }
}
