//! Draft domain model.
//!
//! A draft is a durable snapshot of an in-progress submission. It is written
//! on an explicit save, overwritten by later saves under the same key, and
//! never deleted by the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kyc::FieldStore;
use crate::wizard::StepIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub field_store: FieldStore,
    pub current_step: StepIndex,
    pub saved_at: DateTime<Utc>,
}

impl Draft {
    pub fn new(field_store: FieldStore, current_step: StepIndex, saved_at: DateTime<Utc>) -> Self {
        Self {
            field_store,
            current_step,
            saved_at,
        }
    }

    /// Equality ignoring `saved_at`.
    pub fn same_content(&self, other: &Draft) -> bool {
        self.field_store == other.field_store && self.current_step == other.current_step
    }
}
