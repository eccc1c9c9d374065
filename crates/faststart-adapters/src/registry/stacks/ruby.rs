use faststart_core::domain::{CommandHint, DomainError, Feature, FileRole, StackDefinition, StackId};

use super::RUBY_IGNORE;

const GEMFILE: &str = r#"# frozen_string_literal: true

source "https://rubygems.org"

ruby ">= 3.0"

gem "dotenv", "~> 2.8"

group :development, :test do
  gem "rspec", "~> 3.12"
  gem "rubocop", "~> 1.59", require: false
  gem "rake", "~> 13.0"
end
"#;

const MAIN_RB: &str = r#"#!/usr/bin/env ruby
# frozen_string_literal: true

# {{PROJECT_NAME}}: {{PROJECT_DESCRIPTION}}
module App
  VERSION = "0.1.0"

  def self.greet(name = "World")
    "Hello, #{name}!"
  end
end

puts App.greet if $PROGRAM_NAME == __FILE__
"#;

const SPEC_HELPER: &str = r#"# frozen_string_literal: true

require_relative "../src/main"

RSpec.configure do |config|
  config.expect_with :rspec do |expectations|
    expectations.include_chain_clauses_in_custom_matcher_descriptions = true
  end
  config.disable_monkey_patching!
end
"#;

const MAIN_SPEC: &str = r#"# frozen_string_literal: true

require "spec_helper"

RSpec.describe App do
  it "greets the world by default" do
    expect(App.greet).to eq("Hello, World!")
  end
end
"#;

pub(super) fn definition() -> Result<StackDefinition, DomainError> {
    StackDefinition::builder(StackId::Ruby)
        .file("Gemfile", FileRole::Manifest, GEMFILE)
        .executable_file("src/main.rb", FileRole::Source, MAIN_RB)
        .file(".ruby-version", FileRole::Config, "3.2.0\n")
        .file("spec/spec_helper.rb", FileRole::Test, SPEC_HELPER)
        .file("spec/main_spec.rb", FileRole::Test, MAIN_SPEC)
        .file(".rspec", FileRole::Test, "--require spec_helper\n")
        .ignore_rules(RUBY_IGNORE)
        .post_install(CommandHint::always("bundle install"))
        .post_install(CommandHint::requires(Feature::Tests, "bundle exec rspec"))
        .post_install(CommandHint::requires(Feature::Linting, "bundle exec rubocop"))
        .post_install(CommandHint::always("ruby src/main.rb"))
        .build()
}
