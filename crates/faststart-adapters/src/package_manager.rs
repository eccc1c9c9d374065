//! Node package-manager detection.
//!
//! Lock files in the working directory decide first; otherwise the first
//! package manager found on PATH (pnpm, then yarn) is used, else npm.

use std::path::Path;

use faststart_core::domain::PackageManager;
use tracing::debug;

use crate::process::command_available;

const LOCK_FILES: [(&str, PackageManager); 3] = [
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

/// Detect the package manager for `dir` using real PATH probes.
pub fn detect(dir: &Path) -> PackageManager {
    detect_with(dir, command_available)
}

/// Detection with an injectable availability probe.
pub fn detect_with(dir: &Path, available: impl Fn(&str) -> bool) -> PackageManager {
    if let Some((file, pm)) = LOCK_FILES.iter().find(|(f, _)| dir.join(f).is_file()) {
        debug!(lock_file = file, package_manager = %pm, "Detected from lock file");
        return *pm;
    }

    for pm in [PackageManager::Pnpm, PackageManager::Yarn] {
        if available(pm.as_str()) {
            debug!(package_manager = %pm, "Detected from PATH");
            return pm;
        }
    }
    PackageManager::Npm
}
