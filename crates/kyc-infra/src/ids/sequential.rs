use std::sync::atomic::{AtomicU32, Ordering};

use kyc_core::ports::ApplicationIdPort;
use kyc_core::ApplicationId;

/// Hands out `{prefix}001`, `{prefix}002`, ... in order.
pub struct SequentialApplicationIds {
    prefix: String,
    last: AtomicU32,
}

impl SequentialApplicationIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_after(prefix, 0)
    }

    /// The first id handed out is `last + 1`.
    pub fn starting_after(prefix: impl Into<String>, last: u32) -> Self {
        Self {
            prefix: prefix.into(),
            last: AtomicU32::new(last),
        }
    }
}

impl ApplicationIdPort for SequentialApplicationIds {
    fn next_id(&self) -> ApplicationId {
        let sequence = self.last.fetch_add(1, Ordering::SeqCst) + 1;
        ApplicationId::from_sequence(&self.prefix, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continues_after_seeded_ids() {
        let ids = SequentialApplicationIds::starting_after("KYC", 9);
        assert_eq!(ids.next_id().as_str(), "KYC010");
        assert_eq!(ids.next_id().as_str(), "KYC011");
    }

    #[test]
    fn fresh_generator_starts_at_one() {
        assert_eq!(SequentialApplicationIds::new("APP").next_id().as_str(), "APP001");
    }
}
