//! Static step table shared by every wizard instance.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StepError;
use crate::kyc::{AddressField, AddressKind, DocSlot, FieldPath, IdentityField};

/// Number of steps in the submission flow.
pub const STEP_COUNT: u8 = 5;

/// One-based position in the step table, always within `1..=STEP_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StepIndex(u8);

impl StepIndex {
    pub const FIRST: StepIndex = StepIndex(1);
    pub const LAST: StepIndex = StepIndex(STEP_COUNT);

    pub fn new(index: u8) -> Result<Self, StepError> {
        if (1..=STEP_COUNT).contains(&index) {
            Ok(Self(index))
        } else {
            Err(StepError::OutOfRange {
                index,
                max: STEP_COUNT,
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Option<StepIndex> {
        StepIndex::new(self.0 + 1).ok()
    }

    pub fn previous(self) -> Option<StepIndex> {
        StepIndex::new(self.0.saturating_sub(1)).ok()
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// All indices from the first step up to and including `self`.
    pub fn up_to(self) -> impl Iterator<Item = StepIndex> {
        (1..=self.0).map(StepIndex)
    }

    pub fn all() -> impl Iterator<Item = StepIndex> {
        Self::LAST.up_to()
    }
}

impl TryFrom<u8> for StepIndex {
    type Error = StepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StepIndex::new(value)
    }
}

impl From<StepIndex> for u8 {
    fn from(value: StepIndex) -> Self {
        value.0
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    BasicInfo,
    Addresses,
    Documents,
    Liveness,
    /// Has no fields of its own; re-checks every earlier step.
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub index: StepIndex,
    pub step: Step,
    pub title: &'static str,
    pub required_fields: &'static [FieldPath],
}

const BASIC_INFO_FIELDS: &[FieldPath] = &[
    FieldPath::Identity(IdentityField::FirstName),
    FieldPath::Identity(IdentityField::LastName),
    FieldPath::Identity(IdentityField::Email),
    FieldPath::Identity(IdentityField::Phone),
    FieldPath::Identity(IdentityField::DateOfBirth),
    FieldPath::IdentityPhoto,
];

const ADDRESS_FIELDS: &[FieldPath] = &[
    FieldPath::Address(AddressKind::Permanent, AddressField::Street),
    FieldPath::Address(AddressKind::Permanent, AddressField::City),
    FieldPath::Address(AddressKind::Permanent, AddressField::State),
    FieldPath::Address(AddressKind::Permanent, AddressField::ZipCode),
    FieldPath::Address(AddressKind::Permanent, AddressField::Country),
    FieldPath::Address(AddressKind::Corporate, AddressField::Street),
    FieldPath::Address(AddressKind::Corporate, AddressField::City),
    FieldPath::Address(AddressKind::Corporate, AddressField::State),
    FieldPath::Address(AddressKind::Corporate, AddressField::ZipCode),
    FieldPath::Address(AddressKind::Corporate, AddressField::Country),
];

const DOCUMENT_FIELDS: &[FieldPath] = &[
    FieldPath::DocType(DocSlot::Permanent),
    FieldPath::DocFile(DocSlot::Permanent),
    FieldPath::DocType(DocSlot::Corporate),
    FieldPath::DocFile(DocSlot::Corporate),
];

const LIVENESS_FIELDS: &[FieldPath] = &[FieldPath::LivenessPhoto];

pub const STEP_DEFINITIONS: [StepDefinition; STEP_COUNT as usize] = [
    StepDefinition {
        index: StepIndex(1),
        step: Step::BasicInfo,
        title: "Basic Info",
        required_fields: BASIC_INFO_FIELDS,
    },
    StepDefinition {
        index: StepIndex(2),
        step: Step::Addresses,
        title: "Addresses",
        required_fields: ADDRESS_FIELDS,
    },
    StepDefinition {
        index: StepIndex(3),
        step: Step::Documents,
        title: "Documents",
        required_fields: DOCUMENT_FIELDS,
    },
    StepDefinition {
        index: StepIndex(4),
        step: Step::Liveness,
        title: "Liveness",
        required_fields: LIVENESS_FIELDS,
    },
    StepDefinition {
        index: StepIndex(5),
        step: Step::Review,
        title: "Review",
        required_fields: &[],
    },
];

pub fn step_definition(index: StepIndex) -> &'static StepDefinition {
    &STEP_DEFINITIONS[usize::from(index.0 - 1)]
}
