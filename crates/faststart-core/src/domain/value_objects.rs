//! Domain value objects: StackId, StackFamily, ProfileId, PackageManager.
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Presentation metadata for stacks lives in `catalog.rs`; this file only
//! defines the types, their string representations and their parsers.
//!
//! # Parsing policy
//!
//! Stack identifiers are parsed strictly (`FromStr` fails on unknown input)
//! because the options boundary must reject them before any side effect.
//! Profiles and package managers are parsed leniently via `resolve`, which
//! falls back to a documented default instead of failing.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

// ── StackId ──────────────────────────────────────────────────────────────────

/// A supported stack (language/framework combination).
///
/// To add a new stack: add a variant here, then add a `StackDef` in
/// `catalog.rs` and a stack definition in the adapters registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackId {
    JavaScript,
    TypeScript,
    Python,
    Ruby,
    Lamdera,
    React,
    Next,
    FastApi,
    Rails,
}

impl StackId {
    /// Every stack, in the order they are presented to users.
    pub const ALL: [StackId; 9] = [
        Self::JavaScript,
        Self::TypeScript,
        Self::Python,
        Self::Ruby,
        Self::Lamdera,
        Self::React,
        Self::Next,
        Self::FastApi,
        Self::Rails,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Python => "python",
            Self::Ruby => "ruby",
            Self::Lamdera => "lamdera",
            Self::React => "react",
            Self::Next => "next",
            Self::FastApi => "fastapi",
            Self::Rails => "rails",
        }
    }

    /// The ecosystem this stack belongs to; drives generator selection.
    pub const fn family(&self) -> StackFamily {
        match self {
            Self::JavaScript | Self::TypeScript | Self::React | Self::Next => StackFamily::Node,
            Self::Python | Self::FastApi => StackFamily::Python,
            Self::Ruby | Self::Rails => StackFamily::Ruby,
            Self::Lamdera => StackFamily::Elm,
        }
    }

    /// Stacks whose sources are TypeScript (type-check scripts, TS lint parser).
    pub const fn is_typescript(&self) -> bool {
        matches!(self, Self::TypeScript | Self::Next)
    }

    /// Stacks that render JSX (React lint plugins, JSX formatter options).
    pub const fn uses_jsx(&self) -> bool {
        matches!(self, Self::React | Self::Next)
    }

    /// Comma-separated list of identifiers, for error messages.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for StackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" | "node" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "python" | "py" => Ok(Self::Python),
            "ruby" | "rb" => Ok(Self::Ruby),
            "lamdera" | "elm" => Ok(Self::Lamdera),
            "react" => Ok(Self::React),
            "next" | "nextjs" => Ok(Self::Next),
            "fastapi" => Ok(Self::FastApi),
            "rails" => Ok(Self::Rails),
            other => Err(DomainError::UnknownStack {
                stack: other.to_string(),
            }),
        }
    }
}

// ── StackFamily ──────────────────────────────────────────────────────────────

/// Ecosystem grouping shared by several stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackFamily {
    Node,
    Python,
    Ruby,
    Elm,
}

impl StackFamily {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Python => "python",
            Self::Ruby => "ruby",
            Self::Elm => "elm",
        }
    }
}

impl fmt::Display for StackFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ProfileId ────────────────────────────────────────────────────────────────

/// How much optional scaffolding to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileId {
    Minimal,
    #[default]
    Standard,
    Full,
}

impl ProfileId {
    pub const ALL: [ProfileId; 3] = [Self::Minimal, Self::Standard, Self::Full];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Full => "full",
        }
    }

    /// Lenient parse: unknown identifiers resolve to `Standard`.
    pub fn resolve(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            warn!(profile = raw, "Unknown profile, falling back to standard");
            Self::Standard
        })
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" | "min" => Ok(Self::Minimal),
            "standard" | "std" => Ok(Self::Standard),
            "full" => Ok(Self::Full),
            other => Err(format!("unknown profile: {other}")),
        }
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// Node package manager used in command strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

/// Command spellings for one package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManagerCommands {
    pub install: &'static str,
    pub add: &'static str,
    pub add_dev: &'static str,
    pub run: &'static str,
    pub exec: &'static str,
    pub init: &'static str,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Lenient parse: unknown identifiers resolve to `Npm`.
    pub fn resolve(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            warn!(
                package_manager = raw,
                "Unknown package manager, falling back to npm"
            );
            Self::Npm
        })
    }

    pub const fn commands(&self) -> PackageManagerCommands {
        match self {
            Self::Npm => PackageManagerCommands {
                install: "npm install",
                add: "npm install",
                add_dev: "npm install --save-dev",
                run: "npm run",
                exec: "npx",
                init: "npm init -y",
            },
            Self::Yarn => PackageManagerCommands {
                install: "yarn",
                add: "yarn add",
                add_dev: "yarn add --dev",
                run: "yarn",
                exec: "yarn dlx",
                init: "yarn init -y",
            },
            Self::Pnpm => PackageManagerCommands {
                install: "pnpm install",
                add: "pnpm add",
                add_dev: "pnpm add --save-dev",
                run: "pnpm",
                exec: "pnpm dlx",
                init: "pnpm init",
            },
        }
    }

    /// Install command used in CI, where lockfiles must be honoured.
    pub const fn ci_install(&self) -> &'static str {
        match self {
            Self::Npm => "npm ci || npm install",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm ci || pnpm install",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(format!("unknown package manager: {other}")),
        }
    }
}
