use std::{fmt, sync::Arc};

use markdown_quill_config::{ModifierKind, RenderConfig};

use super::{EmphasisHandler, ModifierHandler, StrikethroughHandler};

/// Index of a handler inside a [`ModifierRegistry`].
pub type HandlerId = usize;

/// Prioritized list of modifier handlers.
///
/// Earlier registrations win when several handlers claim the same run.
/// Read-only once built, so one registry can serve concurrent renders.
#[derive(Clone, Default)]
pub struct ModifierRegistry {
    handlers: Vec<Arc<dyn ModifierHandler>>,
}

impl ModifierRegistry {
    /// A registry with no handlers: every marker is literal text.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All built-in handlers, as enabled by [`RenderConfig::default`].
    pub fn builtins() -> Self {
        Self::from_config(&RenderConfig::default())
    }

    /// The built-in handlers for the kinds enabled in `config`.
    pub fn from_config(config: &RenderConfig) -> Self {
        let mut registry = Self::empty();

        let emphasis = EmphasisHandler::from_config(config);
        if emphasis.is_active() {
            registry.register(emphasis);
        }
        if config.is_enabled(ModifierKind::Strikethrough) {
            registry.register(StrikethroughHandler);
        }
        registry
    }

    /// Appends a handler after all existing ones.
    pub fn register<H: ModifierHandler + 'static>(&mut self, handler: H) -> &mut Self {
        log::debug!(
            "registering modifier {:?} on {:?}",
            handler.name(),
            handler.trigger()
        );
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Whether any handler is triggered by `c`.
    pub fn triggers(&self, c: char) -> bool {
        self.handlers.iter().any(|h| h.trigger() == c)
    }

    /// The first handler that claims a run of `c` with `run_length` characters.
    pub fn claim(&self, c: char, run_length: usize) -> Option<HandlerId> {
        self.handlers
            .iter()
            .position(|h| h.trigger() == c && h.is_significant(run_length))
    }

    pub(crate) fn get(&self, id: HandlerId) -> &dyn ModifierHandler {
        self.handlers[id].as_ref()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for ModifierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|h| (h.name(), h.trigger())))
            .finish()
    }
}
