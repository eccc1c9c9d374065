use std::collections::BTreeSet;

use crate::domain::{
    entities::{ProjectStructure, StackDefinition},
    error::DomainError,
    value_objects::StackId,
};

/// Centralized domain validation.
///
/// Option-boundary checks live here so the CLI and any other driver reject
/// bad input the same way, before any side effect.
pub struct DomainValidator;

impl DomainValidator {
    /// Reduce every stack selection the user made to at most one stack.
    ///
    /// Repeating the same stack (`--stack react --react`) is fine. Two
    /// different stacks is a `ConflictingStacks` error, an unknown id is
    /// `UnknownStack`. No selection at all yields `None`.
    pub fn select_stack<'a>(
        candidates: impl IntoIterator<Item = &'a str>,
    ) -> Result<Option<StackId>, DomainError> {
        let mut selected = BTreeSet::new();
        for raw in candidates {
            selected.insert(raw.parse::<StackId>()?);
        }

        let mut iter = selected.iter();
        match (iter.next(), iter.next()) {
            (None, _) => Ok(None),
            (Some(only), None) => Ok(Some(*only)),
            _ => Err(DomainError::ConflictingStacks {
                stacks: selected.iter().map(|s| s.as_str().to_string()).collect(),
            }),
        }
    }

    pub fn validate_stack_definition(stack: &StackDefinition) -> Result<(), DomainError> {
        if stack.files().is_empty() {
            return Err(DomainError::EmptyStructure);
        }
        Ok(())
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_is_none() {
        assert_eq!(DomainValidator::select_stack(std::iter::empty()).unwrap(), None);
    }

    #[test]
    fn repeated_selection_of_one_stack_is_fine() {
        let picked = DomainValidator::select_stack(["react", "React"]).unwrap();
        assert_eq!(picked, Some(StackId::React));
    }

    #[test]
    fn aliases_count_as_the_same_stack() {
        let picked = DomainValidator::select_stack(["ts", "typescript"]).unwrap();
        assert_eq!(picked, Some(StackId::TypeScript));
    }

    #[test]
    fn two_stacks_conflict() {
        let err = DomainValidator::select_stack(["python", "react"]).unwrap_err();
        assert_eq!(
            err,
            DomainError::ConflictingStacks {
                stacks: vec!["python".into(), "react".into()]
            }
        );
    }

    #[test]
    fn unknown_stack_wins_over_conflict() {
        let err = DomainValidator::select_stack(["python", "cobol"]).unwrap_err();
        assert!(matches!(err, DomainError::UnknownStack { .. }));
    }
}
