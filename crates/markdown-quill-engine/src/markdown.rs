use markdown_quill_config::RenderConfig;

use crate::{
    parsing::{
        ParsedDoc,
        inline::{
            InlineParser,
            modifiers::{ModifierHandler, ModifierRegistry},
        },
        parse_document,
    },
    render::render_document,
};

/// Markdown to HTML conversion with a configurable set of inline modifiers.
///
/// Holds no per-document state: `html` can be called any number of times,
/// from any thread, and each call is independent.
///
/// ```
/// use markdown_quill_engine::MarkdownRenderer;
///
/// let renderer = MarkdownRenderer::new();
/// assert_eq!(
///     renderer.html("Hello, *world*!"),
///     "<p>Hello, <em>world</em>!</p>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    registry: ModifierRegistry,
}

impl MarkdownRenderer {
    /// A renderer with every built-in modifier enabled.
    pub fn new() -> Self {
        Self::with_registry(ModifierRegistry::builtins())
    }

    /// A renderer with the built-in modifiers enabled in `config`.
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::with_registry(ModifierRegistry::from_config(config))
    }

    pub fn with_registry(registry: ModifierRegistry) -> Self {
        Self { registry }
    }

    /// Adds an extension handler. Built-ins registered earlier keep priority
    /// for runs they claim.
    pub fn register<H: ModifierHandler + 'static>(&mut self, handler: H) -> &mut Self {
        self.registry.register(handler);
        self
    }

    pub fn registry(&self) -> &ModifierRegistry {
        &self.registry
    }

    /// Segments `source` into blocks and reference declarations.
    pub fn parse(&self, source: &str) -> ParsedDoc {
        parse_document(source)
    }

    /// Converts `source` to an HTML fragment. Never fails.
    pub fn html(&self, source: &str) -> String {
        let doc = self.parse(source);
        let parser = InlineParser::new(&self.registry, &doc.references);
        render_document(&doc, &parser)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts `source` to HTML with every built-in modifier enabled.
pub fn render(source: &str) -> String {
    MarkdownRenderer::new().html(source)
}
