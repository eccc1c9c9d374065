use std::fmt;

/// Name used when sanitization leaves nothing behind.
pub const FALLBACK_PROJECT_NAME: &str = "my-awesome-project";

/// A user-supplied project name, normalized for disk and package manifests.
///
/// ## Derived forms
///
/// | Input             | `directory_name` | `display_name`   |
/// |-------------------|------------------|------------------|
/// | `My Cool App!!`   | `my-cool-app`    | `my-cool-app`    |
/// | `@acme/widgets`   | `widgets`        | `@acme/widgets`  |
/// | `!!!`             | `my-awesome-project` | `my-awesome-project` |
///
/// The scope is never part of a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    raw: String,
    scope: Option<String>,
    base_name: String,
    sanitized: String,
}

impl ProjectName {
    pub fn sanitize(raw: &str) -> Self {
        let (scope, base_name) = split_scope(raw);
        let sanitized = sanitize_segment(base_name);
        let sanitized = if sanitized.is_empty() {
            FALLBACK_PROJECT_NAME.to_string()
        } else {
            sanitized
        };

        Self {
            raw: raw.to_string(),
            scope: scope.map(str::to_string),
            base_name: base_name.to_string(),
            sanitized,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The `@scope` part, including the `@`.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Unsanitized base segment.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn sanitized_base_name(&self) -> &str {
        &self.sanitized
    }

    /// Directory created on disk: the sanitized base name only.
    pub fn directory_name(&self) -> &str {
        &self.sanitized
    }

    /// Package-identifier form: scope prefix kept when present.
    pub fn display_name(&self) -> String {
        match &self.scope {
            Some(scope) => format!("{scope}/{}", self.sanitized),
            None => self.sanitized.clone(),
        }
    }

    /// Whether sanitization changed what the user typed.
    pub fn was_adjusted(&self) -> bool {
        self.raw != self.display_name()
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

fn split_scope(raw: &str) -> (Option<&str>, &str) {
    let trimmed = raw.trim();
    match trimmed.split_once('/') {
        Some((scope, rest)) if scope.starts_with('@') && scope.len() > 1 => {
            // `@scope/a/b` keeps only the segment right after the scope.
            let base = rest.split('/').next().unwrap_or(rest);
            (Some(scope), base)
        }
        _ => (None, raw),
    }
}

fn sanitize_segment(segment: &str) -> String {
    let lowered = segment.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_space = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_' {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_hyphenates_and_strips_punctuation() {
        let name = ProjectName::sanitize("My Cool App!!");
        assert_eq!(name.directory_name(), "my-cool-app");
        assert_eq!(name.display_name(), "my-cool-app");
        assert!(name.was_adjusted());
    }

    #[test]
    fn scoped_names_keep_scope_outside_the_directory() {
        let name = ProjectName::sanitize("@acme/widgets");
        assert_eq!(name.scope(), Some("@acme"));
        assert_eq!(name.base_name(), "widgets");
        assert_eq!(name.directory_name(), "widgets");
        assert_eq!(name.display_name(), "@acme/widgets");
        assert!(!name.was_adjusted());
    }

    #[test]
    fn scoped_base_is_sanitized() {
        let name = ProjectName::sanitize("@acme/Big Widgets");
        assert_eq!(name.directory_name(), "big-widgets");
        assert_eq!(name.display_name(), "@acme/big-widgets");
    }

    #[test]
    fn internal_whitespace_collapses_to_one_hyphen() {
        assert_eq!(
            ProjectName::sanitize("  hello \t  world ").directory_name(),
            "hello-world"
        );
    }

    #[test]
    fn empty_result_uses_fallback() {
        assert_eq!(ProjectName::sanitize("!!!").directory_name(), FALLBACK_PROJECT_NAME);
        assert_eq!(ProjectName::sanitize("").directory_name(), FALLBACK_PROJECT_NAME);
        assert_eq!(
            ProjectName::sanitize("@acme/???").display_name(),
            "@acme/my-awesome-project"
        );
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(ProjectName::sanitize("api_v2").directory_name(), "api_v2");
    }

    #[test]
    fn at_sign_without_slash_is_not_a_scope() {
        let name = ProjectName::sanitize("@widgets");
        assert_eq!(name.scope(), None);
        assert_eq!(name.directory_name(), "widgets");
    }

    #[test]
    fn non_ascii_letters_are_stripped() {
        assert_eq!(ProjectName::sanitize("café app").directory_name(), "caf-app");
    }
}
