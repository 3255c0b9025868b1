use crate::parsing::{readable::attempt, reader::Reader};

use super::{
    kinds::{Escape, Link},
    modifiers::registry::HandlerId,
    parser::InlineParser,
    types::{FormattingNode, MarkerRun},
};

/// A scanned unit of a block's text, input to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    /// Literal text, escapes already applied.
    Text(String),
    /// A significant marker run and the handler that claimed it.
    Run { run: MarkerRun, handler: HandlerId },
    /// An atomic, already resolved node (a link).
    Node(FormattingNode),
}

/// Splits `text` into literal text, links and claimed marker runs.
///
/// Escapes are applied here, so an escaped marker character ends up in a
/// [`Piece::Text`] and is invisible to the resolver.
pub(crate) fn scan(text: &str, parser: &InlineParser<'_>) -> Vec<Piece> {
    let registry = parser.registry();
    let mut reader = Reader::new(text);
    let mut pieces = vec![];
    let mut pending = String::new();

    fn flush(pieces: &mut Vec<Piece>, pending: &mut String) {
        if !pending.is_empty() {
            pieces.push(Piece::Text(std::mem::take(pending)));
        }
    }

    while let Some(c) = reader.peek() {
        if c == Escape::BACKSLASH {
            if let Some(next) = reader.peek_nth(1).filter(|&n| Escape::is_escapable(n)) {
                reader.read_char();
                reader.read_char();
                pending.push(next);
                continue;
            }
        }

        if c == Link::OPEN {
            let saved = reader.cursor();
            if let Some(node) = attempt::<Link>(&mut reader).and_then(|l| parser.link_node(l)) {
                flush(&mut pieces, &mut pending);
                pieces.push(Piece::Node(node));
                continue;
            }
            reader.restore(saved);
        }

        if registry.triggers(c) {
            let offset = reader.offset();
            let length = reader.count_run(c);
            let run = MarkerRun {
                character: c,
                length,
                offset,
            };
            match registry.claim(c, length) {
                Some(handler) => {
                    flush(&mut pieces, &mut pending);
                    pieces.push(Piece::Run { run, handler });
                }
                None => pending.push_str(&run.literal()),
            }
            continue;
        }

        reader.read_char();
        pending.push(c);
    }

    flush(&mut pieces, &mut pending);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::ReferenceMap, inline::modifiers::ModifierRegistry};
    use pretty_assertions::assert_eq;

    fn scan_default(text: &str) -> Vec<Piece> {
        let registry = ModifierRegistry::builtins();
        let references = ReferenceMap::new();
        scan(text, &InlineParser::new(&registry, &references))
    }

    fn run(character: char, length: usize, offset: usize, handler: HandlerId) -> Piece {
        Piece::Run {
            run: MarkerRun {
                character,
                length,
                offset,
            },
            handler,
        }
    }

    #[test]
    fn plain_text_is_one_piece() {
        assert_eq!(
            scan_default("hello world"),
            vec![Piece::Text("hello world".into())]
        );
    }

    #[test]
    fn runs_are_maximal() {
        assert_eq!(
            scan_default("a***b*"),
            vec![
                Piece::Text("a".into()),
                run('*', 3, 1, 0),
                Piece::Text("b".into()),
                run('*', 1, 5, 0),
            ]
        );
    }

    #[test]
    fn single_tilde_is_text() {
        assert_eq!(
            scan_default("~~a~b~~"),
            vec![
                run('~', 2, 0, 1),
                Piece::Text("a~b".into()),
                run('~', 2, 5, 1),
            ]
        );
    }

    #[test]
    fn escaped_marker_is_text() {
        assert_eq!(
            scan_default("\\*a\\*"),
            vec![Piece::Text("*a*".into())]
        );
    }

    #[test]
    fn backslash_before_letter_is_kept() {
        assert_eq!(
            scan_default("a\\b\\"),
            vec![Piece::Text("a\\b\\".into())]
        );
    }

    #[test]
    fn link_is_atomic() {
        assert_eq!(
            scan_default("see [*x*](/y)"),
            vec![
                Piece::Text("see ".into()),
                Piece::Node(FormattingNode::Link {
                    destination: "/y".into(),
                    children: vec![FormattingNode::Emphasis(vec![FormattingNode::text("x")])],
                }),
            ]
        );
    }

    #[test]
    fn unknown_reference_stays_text() {
        assert_eq!(
            scan_default("[a][missing]"),
            vec![Piece::Text("[a][missing]".into())]
        );
    }
}
