use super::{
    modifiers::{ModifierHandler, ModifierRegistry, Resolved, registry::HandlerId},
    scan::Piece,
    types::{FormattingNode, extend_nodes, marker_text, push_text},
};

/// Surplus closer characters handed down from an enclosing span.
///
/// Sits logically after the last piece of the span being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tail {
    handler: HandlerId,
    length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closer {
    /// A run at this index of the remaining pieces.
    Piece { index: usize, length: usize },
    /// The inherited tail.
    Tail { length: usize },
}

impl Closer {
    fn length(self) -> usize {
        match self {
            Closer::Piece { length, .. } | Closer::Tail { length } => length,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Match {
    width: usize,
    closer: Closer,
}

/// Resolved nodes of a span plus the tail characters nothing inside claimed.
#[derive(Debug, Default)]
struct Resolution {
    nodes: Vec<FormattingNode>,
    unclaimed: usize,
}

struct Resolver<'r> {
    registry: &'r ModifierRegistry,
}

/// Pairs the marker runs in `pieces` into a formatting tree.
///
/// Never fails: runs without a usable partner come back as literal text.
pub(crate) fn resolve(registry: &ModifierRegistry, pieces: &[Piece]) -> Vec<FormattingNode> {
    let resolution = Resolver { registry }.resolve_span(pieces, None);
    resolution.nodes
}

impl Resolver<'_> {
    fn resolve_span(&self, pieces: &[Piece], tail: Option<Tail>) -> Resolution {
        let mut nodes = vec![];
        let mut i = 0;

        while i < pieces.len() {
            let (run, handler_id) = match &pieces[i] {
                Piece::Text(s) => {
                    push_text(&mut nodes, s);
                    i += 1;
                    continue;
                }
                Piece::Node(node) => {
                    nodes.push(node.clone());
                    i += 1;
                    continue;
                }
                Piece::Run { run, handler } => (*run, *handler),
            };

            let handler = self.registry.get(handler_id);
            let rest = &pieces[i + 1..];
            let Some(Match { width, closer }) =
                self.find_match(handler_id, handler, run.length, rest, tail)
            else {
                log::trace!(
                    "no closer for {:?} at offset {}",
                    run.literal(),
                    run.offset
                );
                push_text(&mut nodes, &run.literal());
                i += 1;
                continue;
            };

            let leftover = handler.leftover(run.length, width);
            push_text(&mut nodes, &marker_text(run.character, leftover.before));

            let (inner, next) = match closer {
                Closer::Piece { index, .. } => (&rest[..index], i + 1 + index + 1),
                Closer::Tail { .. } => (rest, pieces.len()),
            };
            let surplus = closer.length() - width;
            let inner_tail = (surplus > 0).then_some(Tail {
                handler: handler_id,
                length: surplus,
            });
            let resolved = self.resolve_span(inner, inner_tail);

            let mut children = vec![];
            push_text(&mut children, &marker_text(run.character, leftover.inside));
            extend_nodes(&mut children, resolved.nodes);

            match handler.resolve(width, children) {
                Resolved::Node(node) => nodes.push(node),
                Resolved::Literal(children) => {
                    let marker = marker_text(run.character, width);
                    push_text(&mut nodes, &marker);
                    extend_nodes(&mut nodes, children);
                    push_text(&mut nodes, &marker);
                }
            }

            if let Closer::Tail { .. } = closer {
                return Resolution {
                    nodes,
                    unclaimed: resolved.unclaimed,
                };
            }
            push_text(
                &mut nodes,
                &marker_text(run.character, resolved.unclaimed),
            );
            i = next;
        }

        Resolution {
            nodes,
            unclaimed: tail.map_or(0, |t| t.length),
        }
    }

    /// First opener width, widest first, for which a closer exists.
    fn find_match(
        &self,
        handler_id: HandlerId,
        handler: &dyn ModifierHandler,
        run_length: usize,
        rest: &[Piece],
        tail: Option<Tail>,
    ) -> Option<Match> {
        handler
            .opener_widths(run_length)
            .into_iter()
            .find_map(|width| {
                self.find_closer(handler_id, handler, width, rest, tail)
                    .map(|closer| Match { width, closer })
            })
    }

    /// Nearest closer of exactly `width`, else the nearest longer one.
    ///
    /// The tail counts as lying after every piece. Runs shorter than `width`
    /// never close, whatever the handler's `closes` says.
    fn find_closer(
        &self,
        handler_id: HandlerId,
        handler: &dyn ModifierHandler,
        width: usize,
        rest: &[Piece],
        tail: Option<Tail>,
    ) -> Option<Closer> {
        let mut longer = None;
        for (index, piece) in rest.iter().enumerate() {
            let Piece::Run { run, handler: owner } = piece else {
                continue;
            };
            if *owner != handler_id
                || run.length < width
                || !handler.closes(width, run.length)
            {
                continue;
            }
            let closer = Closer::Piece {
                index,
                length: run.length,
            };
            if run.length == width {
                return Some(closer);
            }
            longer.get_or_insert(closer);
        }

        let tail = tail
            .filter(|t| {
                t.handler == handler_id && t.length >= width && handler.closes(width, t.length)
            })
            .map(|t| Closer::Tail { length: t.length });
        match tail {
            Some(closer) if closer.length() == width => Some(closer),
            _ => longer.or(tail),
        }
    }
}
