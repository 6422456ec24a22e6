use std::fmt;

use serde::{Deserialize, Serialize};

use super::{StepIndex, STEP_COUNT};
use crate::ids::ApplicationId;

/// Lifecycle of one submission session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    InProgress,
    /// The submission sink has been called and has not answered yet.
    Submitting,
    /// Terminal.
    Submitted,
    /// The sink rejected the payload; `submit` may be retried with the same data.
    Failed,
}

impl fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStatus::InProgress => "in_progress",
            WizardStatus::Submitting => "submitting",
            WizardStatus::Submitted => "submitted",
            WizardStatus::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Wizard position and lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub current_step: StepIndex,
    pub status: WizardStatus,
    /// Highest step that passed the gate and still passes; `0` when none has.
    pub highest_validated: u8,
    /// Reason given by the sink on the last rejection.
    pub last_failure: Option<String>,
    /// Set once the sink has accepted the submission.
    pub application_id: Option<ApplicationId>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: StepIndex::FIRST,
            status: WizardStatus::InProgress,
            highest_validated: 0,
            last_failure: None,
            application_id: None,
        }
    }
}

impl WizardState {
    pub fn is_terminal(&self) -> bool {
        self.status == WizardStatus::Submitted
    }

    /// Whether navigation and field edits are allowed.
    pub fn is_editable(&self) -> bool {
        matches!(self.status, WizardStatus::InProgress | WizardStatus::Failed)
    }

    /// Backward jumps are free; forward jumps may reach at most one step past
    /// the validated watermark.
    pub fn can_jump_to(&self, target: StepIndex) -> bool {
        target <= self.current_step || target.get() <= self.highest_validated + 1
    }

    pub fn progress_percent(&self) -> u8 {
        let percent = f64::from(self.current_step.get()) / f64::from(STEP_COUNT) * 100.0;
        percent.round() as u8
    }
}
