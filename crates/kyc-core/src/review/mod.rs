//! Reviewer-side records behind the dashboard and the detail view.

mod query;
mod record;
mod stats;

pub use query::{RecordQuery, StatusFilter};
pub use record::{KycRecord, KycStatus, ParseKycStatusError, ReviewDecision, ReviewError};
pub use stats::DashboardStats;
