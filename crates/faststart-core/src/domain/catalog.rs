//! Stack presentation catalog.
//!
//! Each stack is described exactly once by its [`StackDef`]. Listing,
//! README generation and interactive selection all read from
//! [`STACK_CATALOG`]; there are no per-stack `match` arms elsewhere for
//! display data.
//!
//! # Adding a New Stack
//!
//! 1. Add a variant to `StackId` in `value_objects.rs`
//! 2. Add one [`StackDef`] entry to [`STACK_CATALOG`]
//! 3. Register its file set in the adapters' built-in registry

use crate::domain::value_objects::StackId;

// ── Stack definitions ────────────────────────────────────────────────────────

/// Human-facing metadata for one stack.
#[derive(Debug, Clone, Copy)]
pub struct StackDef {
    /// The stack this entry describes.
    pub id: StackId,

    /// Name shown in listings and README titles.
    pub display_name: &'static str,

    pub emoji: &'static str,

    /// One-line summary shown by `faststart list`.
    pub description: &'static str,

    /// Upstream documentation, linked from the generated README.
    pub docs_url: &'static str,
}

/// Single source of truth for stack metadata.
pub static STACK_CATALOG: &[StackDef] = &[
    StackDef {
        id: StackId::JavaScript,
        display_name: "JavaScript",
        emoji: "⚡",
        description: "Node.js project with ES modules",
        docs_url: "https://nodejs.org/docs/latest/api/",
    },
    StackDef {
        id: StackId::TypeScript,
        display_name: "TypeScript",
        emoji: "🔷",
        description: "Node.js project with strict TypeScript",
        docs_url: "https://www.typescriptlang.org/docs/",
    },
    StackDef {
        id: StackId::Python,
        display_name: "Python",
        emoji: "🐍",
        description: "Python package with pytest",
        docs_url: "https://docs.python.org/3/",
    },
    StackDef {
        id: StackId::Ruby,
        display_name: "Ruby",
        emoji: "💎",
        description: "Ruby project with Bundler and RSpec",
        docs_url: "https://www.ruby-lang.org/en/documentation/",
    },
    StackDef {
        id: StackId::Lamdera,
        display_name: "Elm/Lamdera",
        emoji: "🌳",
        description: "Full-stack Elm application on Lamdera",
        docs_url: "https://dashboard.lamdera.app/docs",
    },
    StackDef {
        id: StackId::React,
        display_name: "React",
        emoji: "⚛️",
        description: "React single-page app powered by Vite",
        docs_url: "https://react.dev/learn",
    },
    StackDef {
        id: StackId::Next,
        display_name: "Next.js",
        emoji: "▲",
        description: "Next.js app router project with TypeScript",
        docs_url: "https://nextjs.org/docs",
    },
    StackDef {
        id: StackId::FastApi,
        display_name: "FastAPI",
        emoji: "🚀",
        description: "FastAPI service with uvicorn",
        docs_url: "https://fastapi.tiangolo.com/",
    },
    StackDef {
        id: StackId::Rails,
        display_name: "Ruby on Rails",
        emoji: "🛤️",
        description: "Rails API application with PostgreSQL",
        docs_url: "https://guides.rubyonrails.org/",
    },
];

/// Look up the catalog entry for a stack.
///
/// Every `StackId` variant has an entry; `catalog_is_complete` enforces it.
pub fn stack_def(id: StackId) -> &'static StackDef {
    STACK_CATALOG
        .iter()
        .find(|d| d.id == id)
        .unwrap_or(&STACK_CATALOG[0])
}
