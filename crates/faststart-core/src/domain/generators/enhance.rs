//! Standard `package.json` scripts and devDependencies for Node stacks.
//!
//! Runs after the profile has been applied, so it only adds entries for
//! features the profile enables. Existing scripts are never overwritten.

use serde_json::{Map, Value, json};

use crate::domain::{
    entities::{
        profile::{PACKAGE_JSON, ProfileConfig, malformed, to_pretty_json},
        stack::StackDefinition,
        variables::Placeholder,
    },
    error::DomainError,
    value_objects::{PackageManager, StackFamily, StackId},
};

const LINT_GLOB: &str = "eslint . --ext .js,.jsx,.ts,.tsx";
const FORMAT_GLOB: &str = "\"**/*.{js,jsx,ts,tsx,json,css,md}\"";

pub fn with_enhancements(
    stack: &StackDefinition,
    config: &ProfileConfig,
    pm: PackageManager,
) -> Result<StackDefinition, DomainError> {
    let id = stack.id();
    if id.family() != StackFamily::Node {
        return Ok(stack.clone());
    }
    let Some((path, file)) = stack.files().iter().find(|(p, _)| p.as_str() == PACKAGE_JSON) else {
        return Ok(stack.clone());
    };

    let mut pkg: Value =
        serde_json::from_str(&file.content).map_err(|e| malformed(PACKAGE_JSON, e))?;
    let Some(obj) = pkg.as_object_mut() else {
        return Err(malformed(PACKAGE_JSON, "manifest root is not an object"));
    };

    if let Some(scripts) = section(obj, "scripts") {
        add_scripts(scripts, id, config, pm);
    }
    if config.dev_tooling() || config.pre_commit {
        if let Some(deps) = section(obj, "devDependencies") {
            add_dev_dependencies(deps, id, config);
        }
    }

    for (key, token) in [
        ("author", Placeholder::AuthorName),
        ("license", Placeholder::LicenseType),
    ] {
        let missing = obj
            .get(key)
            .and_then(Value::as_str)
            .is_none_or(|v| v.trim().is_empty());
        if missing {
            obj.insert(key.into(), json!(token.token()));
        }
    }

    Ok(stack.with_content(&path.clone(), to_pretty_json(&pkg)?))
}

/// Get or create an object-valued section of the manifest.
///
/// A section that exists with a non-object value is left alone.
fn section<'a>(obj: &'a mut Map<String, Value>, key: &str) -> Option<&'a mut Map<String, Value>> {
    obj.entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
}

fn add_scripts(
    scripts: &mut Map<String, Value>,
    id: StackId,
    config: &ProfileConfig,
    pm: PackageManager,
) {
    let mut add = |name: &str, cmd: String| {
        scripts.entry(name).or_insert_with(|| json!(cmd));
    };

    let dev = match id {
        StackId::React | StackId::Next => match pm {
            PackageManager::Npm => "npm run start".to_string(),
            other => format!("{other} start"),
        },
        _ if id.is_typescript() => "tsx watch src/index.ts".to_string(),
        _ => "node --watch src/index.js".to_string(),
    };
    add("dev", dev);

    if id.is_typescript() {
        add("build", "tsc".into());
    }

    if config.linting {
        add("lint", LINT_GLOB.into());
        add("lint:fix", format!("{LINT_GLOB} --fix"));
        if id.is_typescript() {
            add("type-check", "tsc --noEmit".into());
        }
    }

    if config.formatting {
        add("format", format!("prettier --write {FORMAT_GLOB}"));
        add("format:check", format!("prettier --check {FORMAT_GLOB}"));
    }

    if config.tests {
        let (runner, watch) = match id {
            StackId::React => ("vitest", "vitest --watch"),
            StackId::Next => ("jest", "jest --watch"),
            _ => ("node --test", "node --test --watch"),
        };
        add("test", runner.into());
        add("test:watch", watch.into());
        if matches!(id, StackId::React | StackId::Next) {
            add("test:coverage", format!("{runner} --coverage"));
        }
    }

    if config.pre_commit {
        add("pre-commit", "lint-staged".into());
        add("prepare", "husky install".into());
    }

    add(
        "clean",
        "rm -rf dist node_modules coverage .next .cache".into(),
    );
}

fn add_dev_dependencies(deps: &mut Map<String, Value>, id: StackId, config: &ProfileConfig) {
    let mut add = |name: &str, version: &str| {
        deps.entry(name).or_insert_with(|| json!(version));
    };

    if config.linting {
        add("eslint", "^8.50.0");
    }
    if config.formatting {
        add("prettier", "^3.1.0");
    }
    if config.tests {
        match id {
            StackId::React => {
                add("vitest", "^1.0.0");
                add("@testing-library/react", "^14.0.0");
                add("@testing-library/jest-dom", "^6.0.0");
                add("jsdom", "^23.0.0");
            }
            StackId::Next => {
                add("jest", "^29.7.0");
                add("@testing-library/react", "^14.0.0");
                add("@testing-library/jest-dom", "^6.0.0");
            }
            _ => {}
        }
    }
    if config.pre_commit {
        add("lint-staged", "^15.0.0");
        add("husky", "^8.0.0");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{entities::stack::FileRole, value_objects::ProfileId};

    const PKG: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "version": "0.1.0",
  "author": "",
  "scripts": {
    "start": "node src/index.js",
    "test": "custom-runner"
  }
}"#;

    fn stack(id: StackId) -> StackDefinition {
        StackDefinition::builder(id)
            .file(PACKAGE_JSON, FileRole::Manifest, PKG)
            .build()
            .unwrap()
    }

    fn enhanced(id: StackId, profile: ProfileId, pm: PackageManager) -> Value {
        let out =
            with_enhancements(&stack(id), &ProfileConfig::for_profile(profile), pm).unwrap();
        serde_json::from_str(&out.file(PACKAGE_JSON).unwrap().content).unwrap()
    }

    #[test]
    fn standard_adds_lint_format_and_hook_scripts() {
        let pkg = enhanced(StackId::JavaScript, ProfileId::Standard, PackageManager::Npm);
        let scripts = &pkg["scripts"];
        assert_eq!(scripts["dev"], "node --watch src/index.js");
        assert_eq!(scripts["lint"], LINT_GLOB);
        assert!(scripts["format:check"].as_str().unwrap().starts_with("prettier --check"));
        assert_eq!(scripts["prepare"], "husky install");
        assert_eq!(pkg["devDependencies"]["eslint"], "^8.50.0");
        assert_eq!(pkg["devDependencies"]["husky"], "^8.0.0");
    }

    #[test]
    fn existing_scripts_are_kept() {
        let pkg = enhanced(StackId::JavaScript, ProfileId::Standard, PackageManager::Npm);
        assert_eq!(pkg["scripts"]["test"], "custom-runner");
        assert_eq!(pkg["scripts"]["start"], "node src/index.js");
    }

    #[test]
    fn minimal_only_adds_dev_and_clean() {
        let pkg = enhanced(StackId::TypeScript, ProfileId::Minimal, PackageManager::Npm);
        let scripts = pkg["scripts"].as_object().unwrap();
        assert!(scripts.contains_key("dev"));
        assert!(scripts.contains_key("build"));
        assert!(scripts.contains_key("clean"));
        assert!(!scripts.contains_key("lint"));
        assert!(!scripts.contains_key("type-check"));
        assert!(pkg.get("devDependencies").is_none());
    }

    #[test]
    fn react_dev_script_follows_package_manager() {
        let yarn = enhanced(StackId::React, ProfileId::Standard, PackageManager::Yarn);
        assert_eq!(yarn["scripts"]["dev"], "yarn start");
        assert_eq!(yarn["devDependencies"]["vitest"], "^1.0.0");
        let npm = enhanced(StackId::Next, ProfileId::Full, PackageManager::Npm);
        assert_eq!(npm["scripts"]["dev"], "npm run start");
        assert_eq!(npm["devDependencies"]["jest"], "^29.7.0");
    }

    #[test]
    fn empty_author_and_missing_license_become_tokens() {
        let pkg = enhanced(StackId::JavaScript, ProfileId::Minimal, PackageManager::Npm);
        assert_eq!(pkg["author"], "{{AUTHOR_NAME}}");
        assert_eq!(pkg["license"], "{{LICENSE_TYPE}}");
    }

    #[test]
    fn new_keys_are_appended_after_existing_ones() {
        let out = with_enhancements(
            &stack(StackId::JavaScript),
            &ProfileConfig::for_profile(ProfileId::Standard),
            PackageManager::Npm,
        )
        .unwrap();
        let content = &out.file(PACKAGE_JSON).unwrap().content;
        assert!(content.find("\"start\"").unwrap() < content.find("\"dev\"").unwrap());
        assert!(content.find("\"name\"").unwrap() < content.find("\"devDependencies\"").unwrap());
    }

    #[test]
    fn non_node_stacks_pass_through() {
        let py = StackDefinition::builder(StackId::Python)
            .file("requirements.txt", FileRole::Manifest, "fastapi\n")
            .build()
            .unwrap();
        let out = with_enhancements(
            &py,
            &ProfileConfig::for_profile(ProfileId::Full),
            PackageManager::Npm,
        )
        .unwrap();
        assert_eq!(out, py);
    }
}
