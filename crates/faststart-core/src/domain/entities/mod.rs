pub mod common;
pub mod options;
pub mod profile;
pub mod project_name;
pub mod project_structure;
pub mod stack;
pub mod variables;

pub use crate::domain::DomainError;
pub use options::ResolvedOptions;
pub use profile::{Feature, ProfileConfig};
pub use project_name::ProjectName;
pub use project_structure::ProjectStructure;
pub use stack::StackDefinition;
pub use variables::TemplateVariables;
