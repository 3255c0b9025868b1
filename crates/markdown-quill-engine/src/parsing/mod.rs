pub mod blocks;
pub mod inline;
pub mod readable;
pub mod reader;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier, ReferenceMap};
use reader::Reader;

/// The result of block segmentation over one source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
    pub references: ReferenceMap,
}

pub fn parse_document(source: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    let mut reader = Reader::new(source);
    while reader.has_remaining() {
        let line = reader.read_to_line_end();
        builder.push(classifier.classify(line));
    }

    let (blocks, references) = builder.finish();
    log::debug!(
        "segmented {} bytes into {} blocks ({} references)",
        source.len(),
        blocks.len(),
        references.len()
    );
    ParsedDoc { blocks, references }
}
