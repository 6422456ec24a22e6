mod broadcast;

pub use broadcast::{BroadcastWizardEventPort, WizardStateChanged};
