use faststart_core::domain::{CommandHint, DomainError, Feature, FileRole, StackDefinition, StackId};

use super::NODE_IGNORE;

const PACKAGE_JSON: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "version": "0.1.0",
  "description": "{{PROJECT_DESCRIPTION}}",
  "type": "module",
  "main": "src/index.js",
  "scripts": {
    "start": "node src/index.js",
    "lint": "eslint src/"
  },
  "keywords": [],
  "author": "{{AUTHOR_NAME}}",
  "license": "{{LICENSE_TYPE}}",
  "engines": {
    "node": ">=18.0.0"
  }
}
"#;

const INDEX_JS: &str = r#"// {{PROJECT_NAME}}: {{PROJECT_DESCRIPTION}}

export function greet(name = 'World') {
  return `Hello, ${name}!`;
}

export function main() {
  console.log(greet());
}

if (import.meta.url === `file://${process.argv[1]}`) {
  main();
}
"#;

const INDEX_TEST_JS: &str = r#"import { test } from 'node:test';
import assert from 'node:assert/strict';

import { greet } from '../src/index.js';

test('greet uses the default name', () => {
  assert.equal(greet(), 'Hello, World!');
});
"#;

const ENV_EXAMPLE: &str = "NODE_ENV=development
PORT=3000
";

pub(super) fn definition() -> Result<StackDefinition, DomainError> {
    StackDefinition::builder(StackId::JavaScript)
        .file("package.json", FileRole::Manifest, PACKAGE_JSON)
        .file("src/index.js", FileRole::Source, INDEX_JS)
        .file("test/index.test.js", FileRole::Test, INDEX_TEST_JS)
        .file(".env.example", FileRole::Config, ENV_EXAMPLE)
        .ignore_rules(NODE_IGNORE)
        .post_install(CommandHint::always("{{PM_INSTALL}}"))
        .post_install(CommandHint::requires(Feature::Tests, "{{PM_RUN}} test"))
        .post_install(CommandHint::requires(Feature::Linting, "{{PM_RUN}} lint"))
        .post_install(CommandHint::requires(Feature::Formatting, "{{PM_RUN}} format"))
        .post_install(CommandHint::always("{{PM_RUN}} dev"))
        .build()
}
