use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{StepIndex, WizardStatus};

/// Operations a caller can request from the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardOperation {
    Next,
    Previous,
    GoTo,
    Submit,
    SaveDraft,
    UpdateField,
    Resume,
    CompleteSubmission,
}

impl fmt::Display for WizardOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardOperation::Next => "next",
            WizardOperation::Previous => "previous",
            WizardOperation::GoTo => "go_to",
            WizardOperation::Submit => "submit",
            WizardOperation::SaveDraft => "save_draft",
            WizardOperation::UpdateField => "update_field",
            WizardOperation::Resume => "resume",
            WizardOperation::CompleteSubmission => "complete_submission",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("step {index} is outside 1..={max}")]
    OutOfRange { index: u8, max: u8 },
}

/// Caller faults: the operation is not permitted in the current state.
///
/// Incomplete input is not an error; it is reported through
/// [`ValidationReport`](super::ValidationReport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("{operation} is not permitted at step {step} while {status}")]
    PreconditionViolation {
        operation: WizardOperation,
        status: WizardStatus,
        step: StepIndex,
    },
    #[error(transparent)]
    Step(#[from] StepError),
}
