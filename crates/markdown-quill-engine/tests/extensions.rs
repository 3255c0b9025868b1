use markdown_quill_engine::{
    FormattingNode, MarkdownRenderer, ModifierHandler, ModifierRegistry, Resolved,
};
use pretty_assertions::assert_eq;

/// `==text==` → `<mark>`
struct Highlight;

impl ModifierHandler for Highlight {
    fn name(&self) -> &'static str {
        "highlight"
    }

    fn trigger(&self) -> char {
        '='
    }

    fn is_significant(&self, run_length: usize) -> bool {
        run_length == 2
    }

    fn opener_widths(&self, run_length: usize) -> Vec<usize> {
        vec![run_length]
    }

    fn closes(&self, width: usize, closer_length: usize) -> bool {
        closer_length == width
    }

    fn resolve(&self, _width: usize, children: Vec<FormattingNode>) -> Resolved {
        Resolved::Node(FormattingNode::Custom {
            tag: "mark",
            children,
        })
    }
}

/// Pairs `^` runs but refuses to format anything.
struct Refuse;

impl ModifierHandler for Refuse {
    fn name(&self) -> &'static str {
        "refuse"
    }

    fn trigger(&self) -> char {
        '^'
    }

    fn opener_widths(&self, run_length: usize) -> Vec<usize> {
        vec![run_length]
    }

    fn resolve(&self, _width: usize, children: Vec<FormattingNode>) -> Resolved {
        Resolved::Literal(children)
    }
}

/// `^text^`, accepting any closer the resolver offers.
struct Superscript;

impl ModifierHandler for Superscript {
    fn name(&self) -> &'static str {
        "superscript"
    }

    fn trigger(&self) -> char {
        '^'
    }

    fn opener_widths(&self, run_length: usize) -> Vec<usize> {
        vec![run_length]
    }

    fn closes(&self, _width: usize, _closer_length: usize) -> bool {
        true
    }

    fn resolve(&self, _width: usize, children: Vec<FormattingNode>) -> Resolved {
        Resolved::Node(FormattingNode::Custom {
            tag: "sup",
            children,
        })
    }
}

fn renderer_with_highlight() -> MarkdownRenderer {
    let mut renderer = MarkdownRenderer::new();
    renderer.register(Highlight);
    renderer
}

#[test]
fn extension_handler_renders_custom_tag() {
    assert_eq!(
        renderer_with_highlight().html("a ==marked== b"),
        "<p>a <mark>marked</mark> b</p>"
    );
}

#[test]
fn extension_nests_with_builtins() {
    assert_eq!(
        renderer_with_highlight().html("==*both*== and **==x==**"),
        "<p><mark><em>both</em></mark> and <strong><mark>x</mark></strong></p>"
    );
}

#[test]
fn insignificant_extension_run_is_literal() {
    assert_eq!(
        renderer_with_highlight().html("a = b ==="),
        "<p>a = b ===</p>"
    );
}

#[test]
fn escaped_extension_marker_is_literal() {
    assert_eq!(
        renderer_with_highlight().html("\\=\\=a=="),
        "<p>==a==</p>"
    );
}

#[test]
fn declined_span_keeps_markers_and_resolves_content() {
    let mut renderer = MarkdownRenderer::new();
    renderer.register(Refuse);
    assert_eq!(renderer.html("^*a*^"), "<p>^<em>a</em>^</p>");
}

#[test]
fn builtins_keep_priority_over_later_handlers() {
    struct Underline;

    impl ModifierHandler for Underline {
        fn name(&self) -> &'static str {
            "underline"
        }

        fn trigger(&self) -> char {
            '~'
        }

        fn opener_widths(&self, run_length: usize) -> Vec<usize> {
            vec![run_length]
        }

        fn resolve(&self, _width: usize, children: Vec<FormattingNode>) -> Resolved {
            Resolved::Node(FormattingNode::Custom {
                tag: "u",
                children,
            })
        }
    }

    let mut renderer = MarkdownRenderer::new();
    renderer.register(Underline);
    assert_eq!(
        renderer.html("~~s~~ ~u~"),
        "<p><s>s</s> <u>u</u></p>"
    );
}

#[test]
fn shorter_run_never_closes_even_if_handler_accepts_it() {
    let mut renderer = MarkdownRenderer::new();
    renderer.register(Superscript);
    assert_eq!(renderer.html("^^a^"), "<p>^^a^</p>");
    assert_eq!(renderer.html("^a^^ b"), "<p><sup>a</sup>^ b</p>");
}

#[test]
fn empty_registry_renders_markers_literally() {
    let renderer = MarkdownRenderer::with_registry(ModifierRegistry::empty());
    assert_eq!(
        renderer.html("*a* **b** ~~c~~"),
        "<p>*a* **b** ~~c~~</p>"
    );
}

#[test]
fn registry_debug_lists_extensions() {
    let renderer = renderer_with_highlight();
    assert_eq!(
        format!("{:?}", renderer.registry()),
        r#"[("emphasis", '*'), ("strikethrough", '~'), ("highlight", '=')]"#
    );
}
