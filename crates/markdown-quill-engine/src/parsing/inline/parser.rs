use crate::parsing::blocks::ReferenceMap;

use super::{
    kinds::{Link, LinkTarget},
    modifiers::ModifierRegistry,
    resolve::resolve,
    scan::scan,
    types::FormattingNode,
};

/// Parses a block's text into a formatting tree.
///
/// Borrows the handler registry and the document's reference definitions;
/// one parser serves every block of a document.
#[derive(Debug, Clone, Copy)]
pub struct InlineParser<'r> {
    registry: &'r ModifierRegistry,
    references: &'r ReferenceMap,
}

impl<'r> InlineParser<'r> {
    pub fn new(registry: &'r ModifierRegistry, references: &'r ReferenceMap) -> Self {
        Self {
            registry,
            references,
        }
    }

    /// Scans `text` into pieces, then pairs its marker runs.
    ///
    /// Always succeeds. Anything that does not form a construct stays in the
    /// tree as literal text.
    pub fn parse(&self, text: &str) -> Vec<FormattingNode> {
        let pieces = scan(text, self);
        resolve(self.registry, &pieces)
    }

    pub(crate) fn registry(&self) -> &'r ModifierRegistry {
        self.registry
    }

    /// The node for a scanned link, or `None` if it names an unknown reference.
    pub(crate) fn link_node(&self, link: Link<'_>) -> Option<FormattingNode> {
        let destination = match link.target {
            LinkTarget::Inline(destination) => destination,
            LinkTarget::Reference(name) => match self.references.get(name) {
                Some(destination) => destination,
                None => {
                    log::trace!("link to undefined reference {name:?}");
                    return None;
                }
            },
        };
        Some(FormattingNode::Link {
            destination: destination.to_string(),
            children: self.parse(link.text),
        })
    }
}

/// Parses `text` with every built-in modifier and no reference definitions.
pub fn parse_inline(text: &str) -> Vec<FormattingNode> {
    let registry = ModifierRegistry::builtins();
    let references = ReferenceMap::new();
    InlineParser::new(&registry, &references).parse(text)
}
