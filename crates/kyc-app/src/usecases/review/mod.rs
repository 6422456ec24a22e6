//! Reviewer-side use cases backing the dashboard and the detail view.

mod dashboard_stats;
mod get_record;
mod list_records;
mod review_record;

pub use dashboard_stats::GetDashboardStats;
pub use get_record::GetKycRecord;
pub use list_records::ListKycRecords;
pub use review_record::{ReviewKycRecord, ReviewRecordError};
