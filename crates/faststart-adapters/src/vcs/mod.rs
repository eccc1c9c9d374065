//! Version-control collaborators backed by the `git` and `gh` CLIs.

mod gh;
mod git;

pub use gh::GhCli;
pub use git::GitCli;
