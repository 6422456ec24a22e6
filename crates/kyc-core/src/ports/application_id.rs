use crate::ids::ApplicationId;

pub trait ApplicationIdPort: Send + Sync {
    /// Returns a fresh id; never repeats within one process.
    fn next_id(&self) -> ApplicationId;
}
