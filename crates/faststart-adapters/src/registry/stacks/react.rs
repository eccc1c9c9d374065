use faststart_core::domain::{CommandHint, DomainError, Feature, FileRole, StackDefinition, StackId};

use super::NODE_IGNORE;

const PACKAGE_JSON: &str = r#"{
  "name": "{{PROJECT_NAME}}",
  "version": "0.1.0",
  "private": true,
  "description": "{{PROJECT_DESCRIPTION}}",
  "type": "module",
  "scripts": {
    "start": "vite",
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview",
    "lint": "eslint src --ext .js,.jsx"
  },
  "author": "{{AUTHOR_NAME}}",
  "license": "{{LICENSE_TYPE}}",
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "@vitejs/plugin-react": "^4.2.0",
    "eslint-plugin-react": "^7.33.0",
    "eslint-plugin-react-hooks": "^4.6.0",
    "vite": "^5.0.0"
  }
}
"#;

const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
  server: {
    port: 3000,
  },
  test: {
    environment: 'jsdom',
    setupFiles: './src/setupTests.js',
  },
});
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <meta name="description" content="{{PROJECT_DESCRIPTION}}" />
    <title>{{PROJECT_NAME}}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#;

const MAIN_JSX: &str = r#"import React from 'react';
import ReactDOM from 'react-dom/client';

import App from './App.jsx';
import './index.css';

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
);
"#;

const APP_JSX: &str = r#"import { useState } from 'react';

function App() {
  const [count, setCount] = useState(0);

  return (
    <main className="app">
      <h1>{{PROJECT_NAME}}</h1>
      <p>{{PROJECT_DESCRIPTION}}</p>
      <button onClick={() => setCount((c) => c + 1)}>Count is {count}</button>
    </main>
  );
}

export default App;
"#;

const INDEX_CSS: &str = r#":root {
  font-family: system-ui, Avenir, Helvetica, Arial, sans-serif;
  line-height: 1.5;
  color-scheme: light dark;
}

.app {
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem;
  text-align: center;
}
"#;

const APP_TEST: &str = r#"import { render, screen, fireEvent } from '@testing-library/react';
import { describe, it, expect } from 'vitest';

import App from './App.jsx';

describe('App', () => {
  it('increments the counter', () => {
    render(<App />);
    fireEvent.click(screen.getByRole('button'));
    expect(screen.getByRole('button')).toHaveTextContent('Count is 1');
  });
});
"#;

const SETUP_TESTS: &str = "import '@testing-library/jest-dom/vitest';\n";

pub(super) fn definition() -> Result<StackDefinition, DomainError> {
    StackDefinition::builder(StackId::React)
        .file("package.json", FileRole::Manifest, PACKAGE_JSON)
        .file("vite.config.js", FileRole::Config, VITE_CONFIG)
        .file("index.html", FileRole::Source, INDEX_HTML)
        .file("src/main.jsx", FileRole::Source, MAIN_JSX)
        .file("src/App.jsx", FileRole::Source, APP_JSX)
        .file("src/index.css", FileRole::Source, INDEX_CSS)
        .file("src/App.test.jsx", FileRole::Test, APP_TEST)
        .file("src/setupTests.js", FileRole::Test, SETUP_TESTS)
        .file(".env.example", FileRole::Config, "VITE_API_URL=http://localhost:8000\n")
        .ignore_rules(NODE_IGNORE)
        .post_install(CommandHint::always("{{PM_INSTALL}}"))
        .post_install(CommandHint::requires(Feature::Tests, "{{PM_RUN}} test"))
        .post_install(CommandHint::requires(Feature::Linting, "{{PM_RUN}} lint"))
        .post_install(CommandHint::requires(Feature::Formatting, "{{PM_RUN}} format"))
        .post_install(CommandHint::always("{{PM_RUN}} dev"))
        .build()
}
