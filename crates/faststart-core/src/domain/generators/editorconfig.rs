//! `.editorconfig` per stack family.

use super::{GeneratedFile, GeneratorResult};
use crate::domain::{
    entities::stack::FileRole,
    value_objects::{PackageManager, StackFamily, StackId},
};

const HEADER: &str = "# EditorConfig helps maintain consistent coding styles across different editors
# https://editorconfig.org

root = true

[*]
charset = utf-8
end_of_line = lf
insert_final_newline = true
trim_trailing_whitespace = true
";

const FOOTER: &str = "
[*.md]
trim_trailing_whitespace = false

[Makefile]
indent_style = tab
";

const NODE: &str = "
[*.{js,jsx,ts,tsx,json}]
indent_style = space
indent_size = 2

[{package.json,*.yml,*.yaml}]
indent_style = space
indent_size = 2
";

const PYTHON: &str = "
[*.py]
indent_style = space
indent_size = 4
max_line_length = 88

[*.{yml,yaml,json,toml}]
indent_style = space
indent_size = 2
";

const RUBY: &str = "
[*.{rb,rake}]
indent_style = space
indent_size = 2

[*.{yml,yaml,json}]
indent_style = space
indent_size = 2
";

const ELM: &str = "
[*.elm]
indent_style = space
indent_size = 4

[*.{json,yml,yaml}]
indent_style = space
indent_size = 2
";

pub fn generate(stack: StackId, _pm: PackageManager) -> GeneratorResult {
    let body = match stack.family() {
        StackFamily::Node => NODE,
        StackFamily::Python => PYTHON,
        StackFamily::Ruby => RUBY,
        StackFamily::Elm => ELM,
    };

    Ok(Some(vec![GeneratedFile::new(
        ".editorconfig",
        FileRole::EditorConfig,
        format!("{HEADER}{body}{FOOTER}"),
    )]))
}
