//! Wizard use cases.

mod context;
mod controller;

pub use context::WizardContext;
pub use controller::{WizardController, WizardControllerError, WizardResponse};
