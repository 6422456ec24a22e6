//! Wizard state machine.
//!
//! Defines a pure state transition function for the submission flow. Gate
//! results and sink outcomes arrive as events; side effects leave as actions.

use serde::{Deserialize, Serialize};

use super::{StepIndex, ValidationReport, WizardError, WizardOperation, WizardState, WizardStatus};
use crate::ids::ApplicationId;

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    /// Move forward; carries the gate result for the current step.
    Advance { report: ValidationReport },
    /// Move back one step.
    Retreat,
    /// Jump to an arbitrary step.
    Jump { target: StepIndex },
    /// Fields changed; carries the new passing prefix length.
    FieldsChanged { passing_prefix: u8 },
    /// Adopt a saved position.
    Restore {
        current_step: StepIndex,
        passing_prefix: u8,
    },
    /// Request submission; carries the gate result for every step before review.
    BeginSubmit { report: ValidationReport },
    /// Sink accepted the payload.
    SubmissionAccepted { application_id: ApplicationId },
    /// Sink rejected the payload, or could not be reached.
    SubmissionRejected { reason: String },
    /// Persist the current fields as a draft.
    SaveDraft,
}

/// Side effects produced by transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    /// Show the caller which fields block progress.
    ReportIncomplete { report: ValidationReport },
    /// Hand an immutable snapshot of the fields to the submission sink.
    InvokeSubmissionSink,
    /// Write the fields and step to draft storage.
    PersistDraft,
}

/// Pure wizard state machine.
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        state: &WizardState,
        event: WizardEvent,
    ) -> Result<(WizardState, Vec<WizardAction>), WizardError> {
        match event {
            WizardEvent::Advance { report } => {
                require(state, WizardOperation::Next, |s| {
                    s.is_editable() && !s.current_step.is_last()
                })?;
                if !report.is_passed() {
                    return Ok((
                        state.clone(),
                        vec![WizardAction::ReportIncomplete { report }],
                    ));
                }
                let passed = state.current_step.get();
                let next = state.current_step.next().unwrap_or(state.current_step);
                // Only a contiguous run of passed steps raises the watermark.
                let highest_validated = if state.highest_validated + 1 >= passed {
                    state.highest_validated.max(passed)
                } else {
                    state.highest_validated
                };
                Ok((
                    WizardState {
                        current_step: next,
                        status: WizardStatus::InProgress,
                        highest_validated,
                        ..state.clone()
                    },
                    Vec::new(),
                ))
            }
            WizardEvent::Retreat => {
                require(state, WizardOperation::Previous, |s| {
                    s.is_editable() && s.current_step.previous().is_some()
                })?;
                let previous = state.current_step.previous().unwrap_or(state.current_step);
                Ok((
                    WizardState {
                        current_step: previous,
                        status: WizardStatus::InProgress,
                        ..state.clone()
                    },
                    Vec::new(),
                ))
            }
            WizardEvent::Jump { target } => {
                require(state, WizardOperation::GoTo, |s| {
                    s.is_editable() && s.can_jump_to(target)
                })?;
                Ok((
                    WizardState {
                        current_step: target,
                        status: WizardStatus::InProgress,
                        ..state.clone()
                    },
                    Vec::new(),
                ))
            }
            WizardEvent::FieldsChanged { passing_prefix } => {
                require(state, WizardOperation::UpdateField, WizardState::is_editable)?;
                Ok((
                    WizardState {
                        highest_validated: state.highest_validated.min(passing_prefix),
                        ..state.clone()
                    },
                    Vec::new(),
                ))
            }
            WizardEvent::Restore {
                current_step,
                passing_prefix,
            } => {
                require(state, WizardOperation::Resume, WizardState::is_editable)?;
                // A restored position may not sit past the first incomplete step.
                let reachable = StepIndex::new(passing_prefix + 1).unwrap_or(StepIndex::LAST);
                Ok((
                    WizardState {
                        current_step: current_step.min(reachable),
                        status: WizardStatus::InProgress,
                        highest_validated: passing_prefix,
                        last_failure: None,
                        application_id: None,
                    },
                    Vec::new(),
                ))
            }
            WizardEvent::BeginSubmit { report } => {
                require(state, WizardOperation::Submit, |s| {
                    s.is_editable() && s.current_step.is_last()
                })?;
                if !report.is_passed() {
                    return Ok((
                        state.clone(),
                        vec![WizardAction::ReportIncomplete { report }],
                    ));
                }
                Ok((
                    WizardState {
                        status: WizardStatus::Submitting,
                        ..state.clone()
                    },
                    vec![WizardAction::InvokeSubmissionSink],
                ))
            }
            WizardEvent::SubmissionAccepted { application_id } => {
                require(state, WizardOperation::CompleteSubmission, |s| {
                    s.status == WizardStatus::Submitting
                })?;
                Ok((
                    WizardState {
                        status: WizardStatus::Submitted,
                        last_failure: None,
                        application_id: Some(application_id),
                        ..state.clone()
                    },
                    Vec::new(),
                ))
            }
            WizardEvent::SubmissionRejected { reason } => {
                require(state, WizardOperation::CompleteSubmission, |s| {
                    s.status == WizardStatus::Submitting
                })?;
                Ok((
                    WizardState {
                        status: WizardStatus::Failed,
                        last_failure: Some(reason),
                        ..state.clone()
                    },
                    Vec::new(),
                ))
            }
            WizardEvent::SaveDraft => {
                require(state, WizardOperation::SaveDraft, |s| !s.is_terminal())?;
                Ok((state.clone(), vec![WizardAction::PersistDraft]))
            }
        }
    }
}

fn require(
    state: &WizardState,
    operation: WizardOperation,
    allowed: impl FnOnce(&WizardState) -> bool,
) -> Result<(), WizardError> {
    if allowed(state) {
        Ok(())
    } else {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            %operation,
            status = %state.status,
            step = %state.current_step,
            "wizard precondition violated"
        );
        Err(WizardError::PreconditionViolation {
            operation,
            status: state.status,
            step: state.current_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kyc::{FieldPath, IdentityField};

    fn at(step: u8, highest_validated: u8) -> WizardState {
        WizardState {
            current_step: StepIndex::new(step).unwrap(),
            highest_validated,
            ..WizardState::default()
        }
    }

    fn incomplete() -> ValidationReport {
        ValidationReport::Incomplete {
            missing: vec![FieldPath::Identity(IdentityField::Email)],
            invalid: Vec::new(),
        }
    }

    #[test]
    fn advance_with_passing_report_moves_forward_and_raises_watermark() {
        let (next, actions) = WizardStateMachine::transition(
            &at(1, 0),
            WizardEvent::Advance {
                report: ValidationReport::Passed,
            },
        )
        .unwrap();
        assert_eq!(next.current_step.get(), 2);
        assert_eq!(next.highest_validated, 1);
        assert!(actions.is_empty());
    }

    #[test]
    fn advance_with_incomplete_report_keeps_state_and_reports() {
        let state = at(1, 0);
        let (next, actions) = WizardStateMachine::transition(
            &state,
            WizardEvent::Advance {
                report: incomplete(),
            },
        )
        .unwrap();
        assert_eq!(next, state);
        assert_eq!(
            actions,
            vec![WizardAction::ReportIncomplete {
                report: incomplete()
            }]
        );
    }

    #[test]
    fn advance_at_last_step_is_a_precondition_violation() {
        let err = WizardStateMachine::transition(
            &at(5, 4),
            WizardEvent::Advance {
                report: ValidationReport::Passed,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            WizardError::PreconditionViolation {
                operation: WizardOperation::Next,
                ..
            }
        ));
    }

    #[test]
    fn watermark_is_not_raised_past_a_gap() {
        let (next, _) = WizardStateMachine::transition(
            &at(3, 0),
            WizardEvent::Advance {
                report: ValidationReport::Passed,
            },
        )
        .unwrap();
        assert_eq!(next.current_step.get(), 4);
        assert_eq!(next.highest_validated, 0);
    }

    #[test]
    fn retreat_from_first_step_is_rejected() {
        assert!(WizardStateMachine::transition(&at(1, 0), WizardEvent::Retreat).is_err());
        let (next, _) = WizardStateMachine::transition(&at(2, 1), WizardEvent::Retreat).unwrap();
        assert_eq!(next.current_step, StepIndex::FIRST);
    }

    #[test]
    fn jump_past_watermark_is_rejected() {
        let state = at(2, 1);
        let target = StepIndex::new(3).unwrap();
        assert!(WizardStateMachine::transition(&state, WizardEvent::Jump { target }).is_err());

        let state = at(2, 2);
        let (next, _) =
            WizardStateMachine::transition(&state, WizardEvent::Jump { target }).unwrap();
        assert_eq!(next.current_step, target);
    }

    #[test]
    fn fields_changed_only_lowers_watermark() {
        let (next, _) = WizardStateMachine::transition(
            &at(4, 3),
            WizardEvent::FieldsChanged { passing_prefix: 1 },
        )
        .unwrap();
        assert_eq!(next.highest_validated, 1);
        assert_eq!(next.current_step.get(), 4);

        let (next, _) = WizardStateMachine::transition(
            &at(2, 1),
            WizardEvent::FieldsChanged { passing_prefix: 4 },
        )
        .unwrap();
        assert_eq!(next.highest_validated, 1);
    }

    #[test]
    fn restore_clamps_to_first_incomplete_step() {
        let (next, _) = WizardStateMachine::transition(
            &WizardState::default(),
            WizardEvent::Restore {
                current_step: StepIndex::LAST,
                passing_prefix: 2,
            },
        )
        .unwrap();
        assert_eq!(next.current_step.get(), 3);
        assert_eq!(next.highest_validated, 2);
    }

    #[test]
    fn submit_flow_reaches_submitted_or_failed() {
        let (submitting, actions) = WizardStateMachine::transition(
            &at(5, 4),
            WizardEvent::BeginSubmit {
                report: ValidationReport::Passed,
            },
        )
        .unwrap();
        assert_eq!(submitting.status, WizardStatus::Submitting);
        assert_eq!(actions, vec![WizardAction::InvokeSubmissionSink]);

        let (failed, _) = WizardStateMachine::transition(
            &submitting,
            WizardEvent::SubmissionRejected {
                reason: "duplicate_email".into(),
            },
        )
        .unwrap();
        assert_eq!(failed.status, WizardStatus::Failed);
        assert_eq!(failed.last_failure.as_deref(), Some("duplicate_email"));

        let (retrying, _) = WizardStateMachine::transition(
            &failed,
            WizardEvent::BeginSubmit {
                report: ValidationReport::Passed,
            },
        )
        .unwrap();
        let (submitted, _) = WizardStateMachine::transition(
            &retrying,
            WizardEvent::SubmissionAccepted {
                application_id: "KYC010".into(),
            },
        )
        .unwrap();
        assert_eq!(submitted.status, WizardStatus::Submitted);
        assert_eq!(submitted.current_step, StepIndex::LAST);
        assert!(submitted.is_terminal());
    }

    #[test]
    fn submitted_state_rejects_every_mutation() {
        let state = WizardState {
            status: WizardStatus::Submitted,
            ..at(5, 4)
        };
        let events = vec![
            WizardEvent::Advance {
                report: ValidationReport::Passed,
            },
            WizardEvent::Retreat,
            WizardEvent::Jump {
                target: StepIndex::FIRST,
            },
            WizardEvent::BeginSubmit {
                report: ValidationReport::Passed,
            },
            WizardEvent::FieldsChanged { passing_prefix: 4 },
            WizardEvent::SaveDraft,
        ];
        for event in events {
            assert!(
                WizardStateMachine::transition(&state, event.clone()).is_err(),
                "{event:?} should be rejected after submission"
            );
        }
    }

    #[test]
    fn submit_before_last_step_is_rejected() {
        let err = WizardStateMachine::transition(
            &at(4, 3),
            WizardEvent::BeginSubmit {
                report: ValidationReport::Passed,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err,
            WizardError::PreconditionViolation {
                operation: WizardOperation::Submit,
                ..
            }
        ));
    }
}
