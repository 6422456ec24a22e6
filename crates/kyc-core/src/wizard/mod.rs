//! Wizard domain module.
//!
//! This module defines the step table, the validation gate and the pure
//! state machine of the multi-step submission flow.

mod error;
mod state;
pub mod state_machine;
pub mod step;
pub mod validation;

pub use error::{StepError, WizardError, WizardOperation};
pub use state::{WizardState, WizardStatus};
pub use state_machine::{WizardAction, WizardEvent, WizardStateMachine};
pub use step::{step_definition, Step, StepDefinition, StepIndex, STEP_COUNT, STEP_DEFINITIONS};
pub use validation::{ValidationGate, ValidationReport};
