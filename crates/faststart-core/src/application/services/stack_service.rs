//! Stack Service - registry queries for listing and lookup.

use serde::Serialize;
use tracing::warn;

use crate::{
    application::{ports::StackRegistry, services::scaffold_service::resolve_stack},
    domain::{StackDefinition, StackFamily, StackId, stack_def},
    error::FastStartResult,
};

/// Information about a stack for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackInfo {
    pub id: StackId,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub family: StackFamily,
    pub docs_url: &'static str,
    pub file_count: usize,
}

pub struct StackService {
    registry: Box<dyn StackRegistry>,
}

impl StackService {
    pub fn new(registry: Box<dyn StackRegistry>) -> Self {
        Self { registry }
    }

    /// Every stack the registry carries, with catalog metadata.
    pub fn list(&self) -> Vec<StackInfo> {
        self.registry
            .ids()
            .into_iter()
            .map(|id| {
                let def = stack_def(id);
                StackInfo {
                    id,
                    name: def.display_name,
                    emoji: def.emoji,
                    description: def.description,
                    family: id.family(),
                    docs_url: def.docs_url,
                    file_count: self.registry.get(id).map_or(0, |s| s.file_count()),
                }
            })
            .collect()
    }

    /// Lenient lookup by raw identifier.
    ///
    /// Unknown identifiers resolve to the registry's default stack. The
    /// options boundary rejects them before this is ever reached.
    pub fn lookup(&self, raw: &str) -> FastStartResult<StackDefinition> {
        let id = raw.parse::<StackId>().unwrap_or_else(|_| {
            let fallback = self.registry.default_stack();
            warn!(stack = raw, fallback = %fallback, "Unknown stack, using default");
            fallback
        });
        resolve_stack(self.registry.as_ref(), id)
    }

    pub fn default_stack(&self) -> StackId {
        self.registry.default_stack()
    }
}
