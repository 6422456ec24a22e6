use crate::ids::DraftKey;
use crate::wizard::WizardState;

#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_wizard_state_changed(&self, session: &DraftKey, state: WizardState);
}
