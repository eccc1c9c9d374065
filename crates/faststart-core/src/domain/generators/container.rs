//! Container build files: `Dockerfile` + `docker-compose.yml`, plus
//! `nginx.conf` for stacks served as static bundles.

use super::{GeneratedFile, GeneratorResult};
use crate::domain::{
    entities::stack::FileRole,
    value_objects::{PackageManager, StackId},
};

pub const DOCKERFILE: &str = "Dockerfile";
pub const COMPOSE_FILE: &str = "docker-compose.yml";

const NODE_USER: &str = "RUN addgroup --system --gid 1001 nodejs
RUN adduser --system --uid 1001 nodejs
";

const NODE_COMPOSE: &str = r#"version: '3.8'

services:
  app:
    build: .
    ports:
      - "3000:3000"
    environment:
      - NODE_ENV=production
    volumes:
      - .:/app
      - /app/node_modules
"#;

const STATIC_COMPOSE: &str = r#"version: '3.8'

services:
  app:
    build: .
    ports:
      - "3000:80"
"#;

const NGINX_CONF: &str = "server {
    listen 80;
    server_name localhost;

    location / {
        root /usr/share/nginx/html;
        index index.html index.htm;
        try_files $uri $uri/ /index.html;
    }

    error_page 500 502 503 504 /50x.html;
    location = /50x.html {
        root /usr/share/nginx/html;
    }
}
";

const PYTHON_BASE: &str = "FROM python:3.11-slim AS base

WORKDIR /app

ENV PYTHONDONTWRITEBYTECODE=1
ENV PYTHONUNBUFFERED=1

# Install dependencies
COPY requirements.txt .
RUN pip install --no-cache-dir -r requirements.txt

# Copy application
COPY . .

# Create non-root user
RUN adduser --disabled-password --gecos '' appuser
USER appuser

EXPOSE 8000
";

const PYTHON_COMPOSE: &str = r#"version: '3.8'

services:
  app:
    build: .
    ports:
      - "8000:8000"
    environment:
      - PYTHONUNBUFFERED=1
    volumes:
      - .:/app
"#;

const FASTAPI_COMPOSE: &str = r#"version: '3.8'

services:
  app:
    build: .
    ports:
      - "8000:8000"
    environment:
      - DATABASE_URL=postgresql://user:password@db:5432/myapp
    depends_on:
      - db
    volumes:
      - .:/app

  db:
    image: postgres:15-alpine
    environment:
      - POSTGRES_USER=user
      - POSTGRES_PASSWORD=password
      - POSTGRES_DB=myapp
    volumes:
      - postgres_data:/var/lib/postgresql/data
    ports:
      - "5432:5432"

volumes:
  postgres_data:
"#;

const RUBY_DOCKERFILE: &str = r#"FROM ruby:3.2-slim AS base

WORKDIR /app

# Install dependencies
RUN apt-get update -qq && apt-get install -y build-essential

COPY Gemfile Gemfile.lock* ./
RUN bundle install

# Copy application
COPY . .

# Create non-root user
RUN useradd -m -s /bin/bash appuser
USER appuser

CMD ["ruby", "src/main.rb"]
"#;

const RUBY_COMPOSE: &str = r#"version: '3.8'

services:
  app:
    build: .
    ports:
      - "3000:3000"
    volumes:
      - .:/app
      - bundle:/usr/local/bundle

volumes:
  bundle:
"#;

const RAILS_DOCKERFILE: &str = r#"FROM ruby:3.2 AS base

WORKDIR /app

# Install dependencies
RUN apt-get update -qq && apt-get install -y \
    build-essential \
    libpq-dev

# Install gems
COPY Gemfile Gemfile.lock* ./
RUN bundle install

# Copy application
COPY . .

# Create non-root user
RUN useradd -m -s /bin/bash appuser
USER appuser

EXPOSE 3000

CMD ["bundle", "exec", "rails", "server", "-b", "0.0.0.0"]
"#;

const RAILS_COMPOSE: &str = r#"version: '3.8'

services:
  app:
    build: .
    ports:
      - "3000:3000"
    environment:
      - DATABASE_URL=postgresql://rails:password@db:5432/myapp_development
      - RAILS_ENV=development
    depends_on:
      - db
    volumes:
      - .:/app
      - bundle:/usr/local/bundle

  db:
    image: postgres:15-alpine
    environment:
      - POSTGRES_USER=rails
      - POSTGRES_PASSWORD=password
      - POSTGRES_DB=myapp_development
    volumes:
      - postgres_data:/var/lib/postgresql/data
    ports:
      - "5432:5432"

volumes:
  bundle:
  postgres_data:
"#;

const LAMDERA_DOCKERFILE: &str = r#"FROM node:20-alpine AS builder

WORKDIR /app

# Install Lamdera
RUN npm install -g lamdera

# Copy elm.json first for better caching
COPY elm.json .

# Copy source and build
COPY src ./src
RUN lamdera make src/Frontend.elm --optimize --output=main.js

# Production image with nginx
FROM nginx:alpine
COPY --from=builder /app/main.js /usr/share/nginx/html/
COPY nginx.conf /etc/nginx/conf.d/default.conf
EXPOSE 80
CMD ["nginx", "-g", "daemon off;"]
"#;

pub fn generate(stack: StackId, pm: PackageManager) -> GeneratorResult {
    let files = match stack {
        StackId::JavaScript => pair(node_dockerfile(stack, pm), NODE_COMPOSE),
        StackId::TypeScript => pair(node_dockerfile(stack, pm), NODE_COMPOSE),
        StackId::Next => pair(node_dockerfile(stack, pm), NODE_COMPOSE),
        StackId::React => {
            let mut files = pair(node_dockerfile(stack, pm), STATIC_COMPOSE);
            files.push(GeneratedFile::new("nginx.conf", FileRole::Container, NGINX_CONF));
            files
        }
        StackId::Python => pair(
            format!("{PYTHON_BASE}\nCMD [\"python\", \"src/main.py\"]\n"),
            PYTHON_COMPOSE,
        ),
        StackId::FastApi => pair(
            format!(
                "{PYTHON_BASE}\nCMD [\"uvicorn\", \"app.main:app\", \"--host\", \"0.0.0.0\", \"--port\", \"8000\"]\n"
            ),
            FASTAPI_COMPOSE,
        ),
        StackId::Ruby => pair(RUBY_DOCKERFILE.to_string(), RUBY_COMPOSE),
        StackId::Rails => pair(RAILS_DOCKERFILE.to_string(), RAILS_COMPOSE),
        StackId::Lamdera => {
            let mut files = pair(LAMDERA_DOCKERFILE.to_string(), STATIC_COMPOSE);
            files.push(GeneratedFile::new("nginx.conf", FileRole::Container, NGINX_CONF));
            files
        }
    };
    Ok(Some(files))
}

fn pair(dockerfile: String, compose: &str) -> Vec<GeneratedFile> {
    vec![
        GeneratedFile::new(DOCKERFILE, FileRole::Container, dockerfile),
        GeneratedFile::new(COMPOSE_FILE, FileRole::Container, compose),
    ]
}

/// Multi-stage Node image. A builder stage is added for stacks with a build
/// step; React ends in nginx, Next runs its standalone server.
fn node_dockerfile(stack: StackId, pm: PackageManager) -> String {
    let (lockfile, install) = match pm {
        PackageManager::Npm => ("", "npm ci"),
        PackageManager::Yarn => ("COPY yarn.lock* ./\n", "yarn --frozen-lockfile"),
        PackageManager::Pnpm => (
            "COPY pnpm-lock.yaml* ./\n",
            "corepack enable pnpm && pnpm i --frozen-lockfile",
        ),
    };

    let mut out = format!(
        "FROM node:20-alpine AS base

# Install dependencies only when needed
FROM base AS deps
RUN apk add --no-cache libc6-compat
WORKDIR /app

# Copy package files
COPY package*.json ./
{lockfile}
# Install dependencies
RUN {install}
"
    );

    if stack != StackId::JavaScript {
        out.push_str(&format!(
            "
# Build the application
FROM base AS builder
WORKDIR /app
COPY --from=deps /app/node_modules ./node_modules
COPY . .
{telemetry}
RUN {run} build
",
            telemetry = if stack == StackId::Next {
                "\nENV NEXT_TELEMETRY_DISABLED=1\n"
            } else {
                ""
            },
            run = pm.commands().run,
        ));
    }

    let runner = match stack {
        StackId::React => "
# Production image with nginx
FROM nginx:alpine AS runner
COPY --from=builder /app/dist /usr/share/nginx/html
COPY nginx.conf /etc/nginx/conf.d/default.conf
EXPOSE 80
CMD [\"nginx\", \"-g\", \"daemon off;\"]
"
        .to_string(),
        StackId::Next => format!(
            "
# Production image
FROM base AS runner
WORKDIR /app

ENV NODE_ENV=production
ENV NEXT_TELEMETRY_DISABLED=1

{NODE_USER}
COPY --from=builder /app/public ./public
COPY --from=builder --chown=nodejs:nodejs /app/.next/standalone ./
COPY --from=builder --chown=nodejs:nodejs /app/.next/static ./.next/static

USER nodejs

EXPOSE 3000

ENV PORT=3000

CMD [\"node\", \"server.js\"]
"
        ),
        StackId::TypeScript => format!(
            "
# Production image
FROM base AS runner
WORKDIR /app

ENV NODE_ENV=production

{NODE_USER}
COPY --from=builder --chown=nodejs:nodejs /app/dist ./dist
COPY --from=deps --chown=nodejs:nodejs /app/node_modules ./node_modules

USER nodejs

EXPOSE 3000

CMD [\"node\", \"dist/index.js\"]
"
        ),
        _ => format!(
            "
# Production image
FROM base AS runner
WORKDIR /app

ENV NODE_ENV=production

{NODE_USER}
COPY --from=deps --chown=nodejs:nodejs /app/node_modules ./node_modules
COPY --chown=nodejs:nodejs . .

USER nodejs

EXPOSE 3000

CMD [\"node\", \"src/index.js\"]
"
        ),
    };
    out.push_str(&runner);
    out
}
