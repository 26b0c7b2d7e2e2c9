//! Library validation using Validation.
//!
//! Every definition is checked and ALL violations are collected, so a broken
//! move table is reported in one pass instead of one error at a time.

use crate::library::error::LibraryError;
use crate::library::violations::LibraryViolation;
use crate::library::MoveDefinition;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Validate a list of move definitions, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if every rule holds.
pub fn validate(moves: &[MoveDefinition]) -> Validation<(), NonEmptyVec<LibraryViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<LibraryViolation>>> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut reported: HashSet<&str> = HashSet::new();

    for (position, def) in moves.iter().enumerate() {
        if def.id.trim().is_empty() {
            checks.push(Validation::fail(LibraryViolation::EmptyId { position }));
        }

        if def.name.trim().is_empty() {
            checks.push(Validation::fail(LibraryViolation::EmptyName {
                id: def.id.clone(),
            }));
        }

        // One report per duplicated id, however many copies exist
        if !seen.insert(def.id.as_str()) && reported.insert(def.id.as_str()) {
            checks.push(Validation::fail(LibraryViolation::DuplicateId {
                id: def.id.clone(),
            }));
        }
    }

    if checks.is_empty() {
        return Validation::success(());
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Run `validate` and convert a failure into `LibraryError::Invalid`.
pub(crate) fn check(moves: &[MoveDefinition]) -> Result<(), LibraryError> {
    match validate(moves) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(LibraryError::Invalid {
            violations: errors.iter().cloned().collect(),
        }),
    }
}
