//! Demo records shown on a fresh dashboard.

use chrono::{DateTime, TimeZone, Utc};

use kyc_core::{ApplicationId, DocType, KycRecord, KycStatus};

/// Highest sequence number used by [`demo_records`].
pub const LAST_SEEDED_SEQUENCE: u32 = 9;

struct Row {
    user_name: &'static str,
    email: &'static str,
    status: KycStatus,
    document_type: DocType,
    completion_percentage: u8,
    submitted: (u32, u32, u32),
    reviewed: Option<(u32, u32, u32)>,
}

const ROWS: [Row; LAST_SEEDED_SEQUENCE as usize] = [
    Row {
        user_name: "Rajesh Kumar",
        email: "rajesh.kumar@example.com",
        status: KycStatus::Approved,
        document_type: DocType::Aadhar,
        completion_percentage: 100,
        submitted: (1, 15, 10),
        reviewed: Some((1, 16, 14)),
    },
    Row {
        user_name: "Priya Sharma",
        email: "priya.sharma@example.com",
        status: KycStatus::Pending,
        document_type: DocType::Passport,
        completion_percentage: 85,
        submitted: (1, 16, 9),
        reviewed: None,
    },
    Row {
        user_name: "Amit Patel",
        email: "amit.patel@example.com",
        status: KycStatus::Approved,
        document_type: DocType::Dl,
        completion_percentage: 100,
        submitted: (1, 17, 11),
        reviewed: Some((1, 18, 10)),
    },
    Row {
        user_name: "Sneha Reddy",
        email: "sneha.reddy@example.com",
        status: KycStatus::Rejected,
        document_type: DocType::VoterId,
        completion_percentage: 60,
        submitted: (1, 18, 15),
        reviewed: Some((1, 19, 9)),
    },
    Row {
        user_name: "Vikram Singh",
        email: "vikram.singh@example.com",
        status: KycStatus::UnderReview,
        document_type: DocType::Aadhar,
        completion_percentage: 95,
        submitted: (1, 19, 13),
        reviewed: None,
    },
    Row {
        user_name: "Ananya Iyer",
        email: "ananya.iyer@example.com",
        status: KycStatus::Approved,
        document_type: DocType::Passport,
        completion_percentage: 100,
        submitted: (1, 20, 8),
        reviewed: Some((1, 21, 12)),
    },
    Row {
        user_name: "Karan Mehta",
        email: "karan.mehta@example.com",
        status: KycStatus::Pending,
        document_type: DocType::Dl,
        completion_percentage: 70,
        submitted: (1, 21, 16),
        reviewed: None,
    },
    Row {
        user_name: "Meera Nair",
        email: "meera.nair@example.com",
        status: KycStatus::Approved,
        document_type: DocType::Aadhar,
        completion_percentage: 100,
        submitted: (1, 22, 10),
        reviewed: Some((1, 23, 11)),
    },
    Row {
        user_name: "Arjun Desai",
        email: "arjun.desai@example.com",
        status: KycStatus::UnderReview,
        document_type: DocType::VoterId,
        completion_percentage: 90,
        submitted: (1, 23, 14),
        reviewed: None,
    },
];

fn at((month, day, hour): (u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn demo_records() -> Vec<KycRecord> {
    ROWS.iter()
        .zip(1..)
        .map(|(row, sequence)| KycRecord {
            id: ApplicationId::from_sequence("KYC", sequence),
            user_name: row.user_name.to_string(),
            email: row.email.to_string(),
            status: row.status,
            document_type: row.document_type,
            completion_percentage: row.completion_percentage,
            submitted_at: at(row.submitted),
            reviewed_at: row.reviewed.map(at),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kyc_core::review::DashboardStats;

    #[test]
    fn seed_ids_are_sequential() {
        let records = demo_records();
        assert_eq!(records.len(), LAST_SEEDED_SEQUENCE as usize);
        assert_eq!(records[0].id.as_str(), "KYC001");
        assert_eq!(records[8].id.as_str(), "KYC009");
    }

    #[test]
    fn decided_records_have_review_time() {
        for record in demo_records() {
            assert_eq!(record.reviewed_at.is_some(), !record.status.is_open(), "{}", record.id);
        }
    }

    #[test]
    fn seed_stats() {
        let stats = DashboardStats::from_records(&demo_records());
        assert_eq!(stats.total, 9);
        assert_eq!(stats.approved, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.under_review, 2);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.approval_rate, 44);
    }
}
