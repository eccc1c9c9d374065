use faststart_core::domain::{CommandHint, DomainError, Feature, FileRole, StackDefinition, StackId};

use super::RUBY_IGNORE;

const GEMFILE: &str = r#"source "https://rubygems.org"

ruby ">= 3.0"

gem "rails", "~> 7.1"
gem "pg", "~> 1.5"
gem "puma", "~> 6.4"
gem "bootsnap", require: false
gem "rack-cors"

group :development, :test do
  gem "debug", platforms: %i[mri windows]
  gem "rspec-rails", "~> 6.1"
  gem "factory_bot_rails"
end

group :development do
  gem "rubocop-rails", require: false
end
"#;

const APPLICATION_RB: &str = r#"require_relative "boot"

require "rails"
require "active_model/railtie"
require "active_record/railtie"
require "action_controller/railtie"

Bundler.require(*Rails.groups)

module App
  class Application < Rails::Application
    config.load_defaults 7.1
    config.api_only = true
  end
end
"#;

const BOOT_RB: &str = r#"ENV["BUNDLE_GEMFILE"] ||= File.expand_path("../Gemfile", __dir__)

require "bundler/setup"
require "bootsnap/setup"
"#;

const ENVIRONMENT_RB: &str = r#"require_relative "application"

Rails.application.initialize!
"#;

const DATABASE_YML: &str = r#"default: &default
  adapter: postgresql
  encoding: unicode
  pool: <%= ENV.fetch("RAILS_MAX_THREADS") { 5 } %>
  url: <%= ENV["DATABASE_URL"] %>

development:
  <<: *default
  database: app_development

test:
  <<: *default
  database: app_test

production:
  <<: *default
"#;

const ROUTES_RB: &str = r#"Rails.application.routes.draw do
  get "up" => "rails/health#show", as: :rails_health_check

  namespace :api do
    namespace :v1 do
      resources :items, only: %i[index show create]
    end
  end
end
"#;

const APPLICATION_CONTROLLER: &str = r#"class ApplicationController < ActionController::API
end
"#;

const ITEMS_CONTROLLER: &str = r#"module Api
  module V1
    class ItemsController < ApplicationController
      def index
        render json: Item.all
      end

      def show
        render json: Item.find(params[:id])
      end

      def create
        item = Item.new(item_params)
        if item.save
          render json: item, status: :created
        else
          render json: { errors: item.errors }, status: :unprocessable_entity
        end
      end

      private

      def item_params
        params.require(:item).permit(:name)
      end
    end
  end
end
"#;

const APPLICATION_RECORD: &str = r#"class ApplicationRecord < ActiveRecord::Base
  primary_abstract_class
end
"#;

const ITEM_RB: &str = r#"class Item < ApplicationRecord
  validates :name, presence: true
end
"#;

const MIGRATION: &str = r#"class CreateItems < ActiveRecord::Migration[7.1]
  def change
    create_table :items do |t|
      t.string :name, null: false
      t.timestamps
    end
  end
end
"#;

const CONFIG_RU: &str = r#"require_relative "config/environment"

run Rails.application
"#;

const ITEM_SPEC: &str = r#"require "rails_helper"

RSpec.describe Item, type: :model do
  it "requires a name" do
    expect(Item.new(name: nil)).not_to be_valid
  end
end
"#;

const RAILS_HELPER: &str = r#"ENV["RAILS_ENV"] ||= "test"
require_relative "../config/environment"
require "rspec/rails"

RSpec.configure do |config|
  config.use_transactional_fixtures = true
  config.infer_spec_type_from_file_location!
end
"#;

pub(super) fn definition() -> Result<StackDefinition, DomainError> {
    StackDefinition::builder(StackId::Rails)
        .file("Gemfile", FileRole::Manifest, GEMFILE)
        .file("config.ru", FileRole::Config, CONFIG_RU)
        .file("config/application.rb", FileRole::Config, APPLICATION_RB)
        .file("config/boot.rb", FileRole::Config, BOOT_RB)
        .file("config/environment.rb", FileRole::Config, ENVIRONMENT_RB)
        .file("config/database.yml", FileRole::Config, DATABASE_YML)
        .file("config/routes.rb", FileRole::Source, ROUTES_RB)
        .file(
            "app/controllers/application_controller.rb",
            FileRole::Source,
            APPLICATION_CONTROLLER,
        )
        .file(
            "app/controllers/api/v1/items_controller.rb",
            FileRole::Source,
            ITEMS_CONTROLLER,
        )
        .file("app/models/application_record.rb", FileRole::Source, APPLICATION_RECORD)
        .file("app/models/item.rb", FileRole::Source, ITEM_RB)
        .file("db/migrate/001_create_items.rb", FileRole::Source, MIGRATION)
        .file(".ruby-version", FileRole::Config, "3.2.0\n")
        .file("spec/rails_helper.rb", FileRole::Test, RAILS_HELPER)
        .file("spec/models/item_spec.rb", FileRole::Test, ITEM_SPEC)
        .file(".env.example", FileRole::Config, "DATABASE_URL=postgres://localhost/app_development\n")
        .ignore_rules(&format!("{RUBY_IGNORE}\n# Rails\n/tmp/\n/storage/\n/log/\n"))
        .post_install(CommandHint::always("bundle install"))
        .post_install(CommandHint::always("bundle exec rails db:create db:migrate"))
        .post_install(CommandHint::requires(Feature::Tests, "bundle exec rspec"))
        .post_install(CommandHint::requires(Feature::Linting, "bundle exec rubocop"))
        .post_install(CommandHint::always("bundle exec rails server"))
        .build()
}
