use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{common::Permissions, stack::IGNORE_FILE},
    error::DomainError,
};

/// Final project structure ready for materialization.
///
/// Output of the compose-and-substitute step. Holds fully substituted
/// content, contains no business logic, only data. Files are kept in write
/// order: lexicographic by path, with the ignore file last.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<FileToWrite>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String, perms: Permissions) {
        self.files.push(FileToWrite {
            path: path.into(),
            content,
            permissions: perms,
        });
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        content: String,
        perms: Permissions,
    ) -> Self {
        self.add_file(path, content, perms);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.is_empty() {
            return Err(DomainError::EmptyStructure);
        }

        let mut seen = HashSet::new();
        for file in &self.files {
            let path_str = file.path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if file.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    pub fn file(&self, path: &str) -> Option<&FileToWrite> {
        self.files.iter().find(|f| f.path == Path::new(path))
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Every directory that must exist before the files are written.
    pub fn directories(&self) -> BTreeSet<PathBuf> {
        let mut dirs = BTreeSet::new();
        for file in &self.files {
            let mut parent = file.path.parent();
            while let Some(dir) = parent {
                if dir.as_os_str().is_empty() {
                    break;
                }
                dirs.insert(dir.to_path_buf());
                parent = dir.parent();
            }
        }
        dirs
    }

    /// Top-level entries with the number of files below each directory.
    pub fn top_level_entries(&self) -> Vec<TreeEntry> {
        let mut entries: Vec<TreeEntry> = Vec::new();
        for file in &self.files {
            let mut components = file.path.components();
            let Some(first) = components.next() else {
                continue;
            };
            let name = first.as_os_str().to_string_lossy().into_owned();
            let is_dir = components.next().is_some();

            match entries.iter_mut().find(|e| e.name == name) {
                Some(entry) => entry.file_count += 1,
                None => entries.push(TreeEntry {
                    name,
                    is_dir,
                    file_count: 1,
                }),
            }
        }
        entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
        entries
    }

    /// Render the top-level summary shown in dry-run previews.
    pub fn render_tree(&self) -> String {
        let root_name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root.display().to_string());

        let entries = self.top_level_entries();
        let mut out = format!("{root_name}/\n");
        for (i, entry) in entries.iter().enumerate() {
            let branch = if i + 1 == entries.len() { "└── " } else { "├── " };
            if entry.is_dir {
                let noun = if entry.file_count == 1 { "file" } else { "files" };
                out.push_str(&format!(
                    "{branch}{}/ ({} {noun})\n",
                    entry.name, entry.file_count
                ));
            } else {
                out.push_str(&format!("{branch}{}\n", entry.name));
            }
        }
        out
    }
}

/// One top-level entry of a structure summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub is_dir: bool,
    pub file_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    pub permissions: Permissions,
}

impl FileToWrite {
    pub fn is_ignore_file(&self) -> bool {
        self.path == Path::new(IGNORE_FILE)
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure() -> ProjectStructure {
        ProjectStructure::new("out/demo")
            .with_file("package.json", "{}".into(), Permissions::default())
            .with_file("src/index.js", "".into(), Permissions::default())
            .with_file("src/lib/util.js", "".into(), Permissions::default())
            .with_file(".husky/pre-commit", "".into(), Permissions::executable())
    }

    #[test]
    fn directories_include_every_ancestor() {
        let dirs: Vec<_> = structure().directories().into_iter().collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from(".husky"),
                PathBuf::from("src"),
                PathBuf::from("src/lib"),
            ]
        );
    }

    #[test]
    fn top_level_entries_count_nested_files() {
        let entries = structure().top_level_entries();
        let src = entries.iter().find(|e| e.name == "src").unwrap();
        assert!(src.is_dir);
        assert_eq!(src.file_count, 2);
        assert!(entries.iter().any(|e| e.name == "package.json" && !e.is_dir));
    }

    #[test]
    fn render_tree_lists_directories_first() {
        let tree = structure().render_tree();
        assert!(tree.starts_with("demo/\n"));
        assert!(tree.find(".husky/").unwrap() < tree.find("package.json").unwrap());
        assert!(tree.contains("src/ (2 files)"));
    }

    #[test]
    fn validate_rejects_duplicates_and_empty() {
        assert_eq!(
            ProjectStructure::new("x").validate().unwrap_err(),
            DomainError::EmptyStructure
        );
        let dup = ProjectStructure::new("x")
            .with_file("a", "".into(), Permissions::default())
            .with_file("a", "".into(), Permissions::default());
        assert!(matches!(dup.validate(), Err(DomainError::DuplicatePath { .. })));
    }
}
