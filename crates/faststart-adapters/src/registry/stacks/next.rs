use faststart_core::domain::{CommandHint, DomainError, Feature, FileRole, StackDefinition, StackId};

use super::NODE_IGNORE;

const PACKAGE_JSON: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "version": "0.1.0",
  "private": true,
  "description": "{{PROJECT_DESCRIPTION}}",
  "scripts": {
    "start": "next dev",
    "dev": "next dev",
    "build": "next build",
    "serve": "next start",
    "lint": "next lint"
  },
  "author": "{{AUTHOR_NAME}}",
  "license": "{{LICENSE_TYPE}}",
  "dependencies": {
    "next": "^14.0.0",
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "@types/node": "^20.0.0",
    "@types/react": "^18.2.0",
    "@types/jest": "^29.5.0",
    "eslint-config-next": "^14.0.0",
    "jest-environment-jsdom": "^29.7.0",
    "typescript": "^5.0.0"
  }
}
"#;

const NEXT_CONFIG: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  output: 'standalone',
  reactStrictMode: true,
};

module.exports = nextConfig;
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2017",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [{ "name": "next" }],
    "paths": { "@/*": ["./src/*"] }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

const LAYOUT_TSX: &str = r#"import type { Metadata } from 'next';

export const metadata: Metadata = {
  title: '{{PROJECT_NAME}}',
  description: '{{PROJECT_DESCRIPTION}}',
};

export default function RootLayout({ children }: { children: React.ReactNode }) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  );
}
"#;

const PAGE_TSX: &str = r#"export default function Home() {
  return (
    <main>
      <h1>{{PROJECT_NAME}}</h1>
      <p>{{PROJECT_DESCRIPTION}}</p>
    </main>
  );
}
"#;

const JEST_CONFIG: &str = r#"const nextJest = require('next/jest');

const createJestConfig = nextJest({ dir: './' });

module.exports = createJestConfig({
  testEnvironment: 'jsdom',
});
"#;

const PAGE_TEST: &str = r#"import { render, screen } from '@testing-library/react';

import Home from '../src/app/page';

describe('Home', () => {
  it('renders the project name', () => {
    render(<Home />);
    expect(screen.getByRole('heading')).toBeInTheDocument();
  });
});
"#;

pub(super) fn definition() -> Result<StackDefinition, DomainError> {
    let ignore = format!("{NODE_IGNORE}\n# Next.js\n.next/\nout/\nnext-env.d.ts\n");
    StackDefinition::builder(StackId::Next)
        .file("package.json", FileRole::Manifest, PACKAGE_JSON)
        .file("next.config.js", FileRole::Config, NEXT_CONFIG)
        .file("tsconfig.json", FileRole::Config, TSCONFIG)
        .file("src/app/layout.tsx", FileRole::Source, LAYOUT_TSX)
        .file("src/app/page.tsx", FileRole::Source, PAGE_TSX)
        .file("jest.config.js", FileRole::Test, JEST_CONFIG)
        .file("__tests__/page.test.tsx", FileRole::Test, PAGE_TEST)
        .ignore_rules(&ignore)
        .post_install(CommandHint::always("{{PM_INSTALL}}"))
        .post_install(CommandHint::requires(Feature::Tests, "{{PM_RUN}} test"))
        .post_install(CommandHint::requires(Feature::Linting, "{{PM_RUN}} lint"))
        .post_install(CommandHint::requires(Feature::Formatting, "{{PM_RUN}} format"))
        .post_install(CommandHint::always("{{PM_RUN}} dev"))
        .build()
}
