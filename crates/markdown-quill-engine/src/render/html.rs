use crate::parsing::{
    ParsedDoc,
    blocks::Block,
    inline::{FormattingNode, InlineParser},
};

/// Renders every block of `doc`, resolving inline content with `parser`.
///
/// Blocks are concatenated without a separator.
pub fn render_document(doc: &ParsedDoc, parser: &InlineParser<'_>) -> String {
    let mut out = String::new();
    for block in &doc.blocks {
        push_block(&mut out, block, &parser.parse(block.text()));
    }
    out
}

/// Appends one block with its already parsed inline content.
pub fn push_block(out: &mut String, block: &Block, nodes: &[FormattingNode]) {
    match block {
        Block::Paragraph(_) => push_paragraph(out, nodes),
        Block::Blockquote(_) => {
            out.push_str("<blockquote>");
            if !nodes.is_empty() {
                push_paragraph(out, nodes);
            }
            out.push_str("</blockquote>");
        }
    }
}

fn push_paragraph(out: &mut String, nodes: &[FormattingNode]) {
    out.push_str("<p>");
    push_nodes(out, nodes);
    out.push_str("</p>");
}

/// Appends inline nodes. Only text leaves and link destinations are escaped.
pub fn push_nodes(out: &mut String, nodes: &[FormattingNode]) {
    for node in nodes {
        push_node(out, node);
    }
}

fn push_node(out: &mut String, node: &FormattingNode) {
    match node {
        FormattingNode::PlainText(text) => {
            html_escape::encode_text_to_string(text, out);
        }
        FormattingNode::Emphasis(children) => push_wrapped(out, "em", children),
        FormattingNode::Strong(children) => push_wrapped(out, "strong", children),
        FormattingNode::StrongEmphasis(children) => {
            out.push_str("<strong><em>");
            push_nodes(out, children);
            out.push_str("</em></strong>");
        }
        FormattingNode::Strikethrough(children) => push_wrapped(out, "s", children),
        FormattingNode::Link {
            destination,
            children,
        } => {
            out.push_str("<a href=\"");
            html_escape::encode_double_quoted_attribute_to_string(destination, out);
            out.push_str("\">");
            push_nodes(out, children);
            out.push_str("</a>");
        }
        FormattingNode::Custom { tag, children } => push_wrapped(out, tag, children),
    }
}

fn push_wrapped(out: &mut String, tag: &str, children: &[FormattingNode]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    push_nodes(out, children);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
