use faststart_core::domain::{CommandHint, DomainError, Feature, FileRole, StackDefinition, StackId};

use super::NODE_IGNORE;

const PACKAGE_JSON: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "version": "0.1.0",
  "description": "{{PROJECT_DESCRIPTION}}",
  "type": "module",
  "main": "dist/index.js",
  "scripts": {
    "start": "node dist/index.js",
    "test": "tsx --test test/*.test.ts",
    "lint": "eslint src/"
  },
  "keywords": [],
  "author": "{{AUTHOR_NAME}}",
  "license": "{{LICENSE_TYPE}}",
  "engines": {
    "node": ">=18.0.0"
  },
  "devDependencies": {
    "@types/node": "^20.0.0",
    "@typescript-eslint/eslint-plugin": "^6.0.0",
    "@typescript-eslint/parser": "^6.0.0",
    "tsx": "^4.0.0",
    "typescript": "^5.0.0"
  }
}
"#;

const INDEX_TS: &str = r#"// {{PROJECT_NAME}}: {{PROJECT_DESCRIPTION}}

export interface Config {
  name: string;
  version: string;
  debug: boolean;
}

export const config: Config = {
  name: '{{PROJECT_NAME}}',
  version: '0.1.0',
  debug: process.env.NODE_ENV !== 'production',
};

export function main(): void {
  console.log(`Hello from ${config.name} v${config.version}`);
}

if (import.meta.url === `file://${process.argv[1]}`) {
  main();
}
"#;

const INDEX_TEST_TS: &str = r#"import { test } from 'node:test';
import assert from 'node:assert/strict';

import { config } from '../src/index.js';

test('config carries the project version', () => {
  assert.equal(config.version, '0.1.0');
});
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ES2022",
    "lib": ["ES2022"],
    "moduleResolution": "node",
    "rootDir": "./src",
    "outDir": "./dist",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true,
    "resolveJsonModule": true,
    "declaration": true,
    "sourceMap": true,
    "noUnusedLocals": true,
    "noImplicitReturns": true
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules", "dist"]
}
"#;

const IGNORE_EXTRA: &str = "
# TypeScript
*.tsbuildinfo
";

pub(super) fn definition() -> Result<StackDefinition, DomainError> {
    let ignore = format!("{NODE_IGNORE}{IGNORE_EXTRA}");
    StackDefinition::builder(StackId::TypeScript)
        .file("package.json", FileRole::Manifest, PACKAGE_JSON)
        .file("tsconfig.json", FileRole::Config, TSCONFIG)
        .file("src/index.ts", FileRole::Source, INDEX_TS)
        .file("test/index.test.ts", FileRole::Test, INDEX_TEST_TS)
        .ignore_rules(&ignore)
        .post_install(CommandHint::always("{{PM_INSTALL}}"))
        .post_install(CommandHint::requires(Feature::Tests, "{{PM_RUN}} test"))
        .post_install(CommandHint::requires(Feature::Linting, "{{PM_RUN}} lint"))
        .post_install(CommandHint::requires(Feature::Formatting, "{{PM_RUN}} format"))
        .post_install(CommandHint::requires(Feature::Linting, "{{PM_RUN}} type-check"))
        .post_install(CommandHint::always("{{PM_RUN}} dev"))
        .build()
}
