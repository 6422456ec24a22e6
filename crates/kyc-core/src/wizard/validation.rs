//! Validation gate: decides whether a step's required data is complete.
//!
//! The gate is a pure predicate. Incomplete input is an expected outcome and
//! is reported, never raised.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::step::{step_definition, Step, StepIndex};
use crate::kyc::{FieldPath, FieldStore, IdentityField};

const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Result of checking one or more steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ValidationReport {
    Passed,
    /// `missing` holds empty or absent required fields, in step-table order.
    /// `invalid` holds present values with the wrong shape (email, date).
    Incomplete {
        missing: Vec<FieldPath>,
        invalid: Vec<FieldPath>,
    },
}

impl ValidationReport {
    fn from_findings(missing: Vec<FieldPath>, invalid: Vec<FieldPath>) -> Self {
        if missing.is_empty() && invalid.is_empty() {
            ValidationReport::Passed
        } else {
            ValidationReport::Incomplete { missing, invalid }
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationReport::Passed)
    }

    pub fn missing(&self) -> &[FieldPath] {
        match self {
            ValidationReport::Passed => &[],
            ValidationReport::Incomplete { missing, .. } => missing,
        }
    }

    pub fn invalid(&self) -> &[FieldPath] {
        match self {
            ValidationReport::Passed => &[],
            ValidationReport::Incomplete { invalid, .. } => invalid,
        }
    }

    /// Concatenates two reports, keeping `self`'s findings first.
    pub fn merge(self, other: ValidationReport) -> ValidationReport {
        let (mut missing, mut invalid) = self.into_findings();
        let (other_missing, other_invalid) = other.into_findings();
        missing.extend(other_missing);
        invalid.extend(other_invalid);
        ValidationReport::from_findings(missing, invalid)
    }

    fn into_findings(self) -> (Vec<FieldPath>, Vec<FieldPath>) {
        match self {
            ValidationReport::Passed => (Vec::new(), Vec::new()),
            ValidationReport::Incomplete { missing, invalid } => (missing, invalid),
        }
    }
}

pub struct ValidationGate;

impl ValidationGate {
    /// Checks whether the wizard may move past `step`.
    ///
    /// `today` bounds the date of birth; it is passed in so the gate stays pure.
    pub fn can_advance(step: StepIndex, store: &FieldStore, today: NaiveDate) -> ValidationReport {
        let definition = step_definition(step);
        match definition.step {
            Step::Review => match step.previous() {
                Some(last_prior) => Self::check_through(last_prior, store, today),
                None => ValidationReport::Passed,
            },
            _ => Self::check_fields(definition.required_fields, store, today),
        }
    }

    /// Checks every step from the first through `last`, in order.
    pub fn check_through(last: StepIndex, store: &FieldStore, today: NaiveDate) -> ValidationReport {
        last.up_to()
            .map(|step| Self::can_advance(step, store, today))
            .fold(ValidationReport::Passed, ValidationReport::merge)
    }

    /// Length of the longest prefix of steps that currently pass, excluding
    /// the final review step.
    pub fn passing_prefix(store: &FieldStore, today: NaiveDate) -> u8 {
        StepIndex::all()
            .filter(|step| !step.is_last())
            .take_while(|step| Self::can_advance(*step, store, today).is_passed())
            .map(StepIndex::get)
            .last()
            .unwrap_or(0)
    }

    fn check_fields(fields: &[FieldPath], store: &FieldStore, today: NaiveDate) -> ValidationReport {
        let mut missing = Vec::new();
        let mut invalid = Vec::new();
        for path in fields {
            if store.is_blank(*path) {
                missing.push(*path);
            } else if !is_well_formed(*path, store, today) {
                invalid.push(*path);
            }
        }
        ValidationReport::from_findings(missing, invalid)
    }
}

fn is_well_formed(path: FieldPath, store: &FieldStore, today: NaiveDate) -> bool {
    match path {
        FieldPath::Identity(IdentityField::Email) => is_valid_email(&store.identity.email),
        FieldPath::Identity(IdentityField::DateOfBirth) => {
            is_valid_birth_date(&store.identity.date_of_birth, today)
        }
        _ => true,
    }
}

/// `local@domain.tld`: one `@`, a non-empty local part, and a domain with at
/// least two non-empty dot-separated labels.
pub(crate) fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

pub(crate) fn is_valid_birth_date(raw: &str, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(raw.trim(), DATE_OF_BIRTH_FORMAT)
        .map(|date| date <= today)
        .unwrap_or(false)
}
