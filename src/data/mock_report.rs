//! Hard-coded analysis payload used when no LLM is configured or the
//! LLM call fails.

use crate::models::analysis::{
    Address, AnalysisMetadata, CreditAccount, DetectedIssue, EmploymentRecord, Inquiry,
    IssueSeverity, PaymentEntry, PersonalInfo, ProcessedReport, PublicRecord,
};

/// The demo analysis result: one fictional consumer with three issues.
pub fn mock_processed_report() -> ProcessedReport {
    ProcessedReport {
        personal_info: PersonalInfo {
            name: "John Michael Smith".to_string(),
            ssn: "***-**-1234".to_string(),
            date_of_birth: "01/15/1985".to_string(),
            addresses: vec![
                Address {
                    street: "123 Main Street".to_string(),
                    city: "Anytown".to_string(),
                    state: "CA".to_string(),
                    zip_code: "90210".to_string(),
                },
                Address {
                    street: "456 Oak Avenue".to_string(),
                    city: "Oldtown".to_string(),
                    state: "CA".to_string(),
                    zip_code: "90211".to_string(),
                },
            ],
        },
        credit_accounts: vec![
            CreditAccount {
                creditor_name: "Chase Bank".to_string(),
                account_number: "****1234".to_string(),
                account_type: "Credit Card".to_string(),
                status: "Open".to_string(),
                balance: 2450.0,
                payment_history: "30 days late (1 time)".to_string(),
            },
            CreditAccount {
                creditor_name: "Capital One".to_string(),
                account_number: "****5678".to_string(),
                account_type: "Credit Card".to_string(),
                status: "Closed".to_string(),
                balance: 0.0,
                payment_history: "Never late".to_string(),
            },
        ],
        payment_history: vec![
            PaymentEntry {
                month: "2024-01".to_string(),
                status: "OK".to_string(),
                creditor: "Chase Bank".to_string(),
            },
            PaymentEntry {
                month: "2023-12".to_string(),
                status: "OK".to_string(),
                creditor: "Chase Bank".to_string(),
            },
            PaymentEntry {
                month: "2023-11".to_string(),
                status: "30".to_string(),
                creditor: "Chase Bank".to_string(),
            },
        ],
        public_records: vec![PublicRecord {
            r#type: "Tax Lien".to_string(),
            amount: 3250.0,
            date: "2019-07-10".to_string(),
            status: "Satisfied".to_string(),
        }],
        inquiries: vec![
            Inquiry {
                company: "Wells Fargo Bank".to_string(),
                date: "2023-12-15".to_string(),
                r#type: "Hard Inquiry".to_string(),
            },
            Inquiry {
                company: "Credit Karma".to_string(),
                date: "2023-11-20".to_string(),
                r#type: "Soft Inquiry".to_string(),
            },
        ],
        employment_history: vec![
            EmploymentRecord {
                employer: "Tech Solutions Inc.".to_string(),
                position: "Software Engineer".to_string(),
                date_range: "2022-Present".to_string(),
            },
            EmploymentRecord {
                employer: "Digital Marketing Co.".to_string(),
                position: "Developer".to_string(),
                date_range: "2020-2022".to_string(),
            },
        ],
        detected_issues: vec![
            DetectedIssue {
                id: "issue_001".to_string(),
                r#type: "Payment History Error".to_string(),
                severity: IssueSeverity::High,
                description: "Chase Bank account shows 30-day late payment in November 2023, but payment records indicate it was made on time".to_string(),
                recommendation: "Dispute the incorrect late payment with supporting documentation".to_string(),
                affected_item: "Chase Bank Credit Card (****1234)".to_string(),
                confidence: 95,
                potential_impact: "Could improve credit score by 15-25 points".to_string(),
                dispute_strategy: "Provide bank statements showing on-time payment and request correction".to_string(),
            },
            DetectedIssue {
                id: "issue_002".to_string(),
                r#type: "Public Record Error".to_string(),
                severity: IssueSeverity::High,
                description: "Tax lien from 2019 shows as active but was actually satisfied in 2021".to_string(),
                recommendation: "Dispute with proof of satisfaction and request removal or status update".to_string(),
                affected_item: "Tax Lien (2019-07-10)".to_string(),
                confidence: 90,
                potential_impact: "Could improve credit score by 20-35 points".to_string(),
                dispute_strategy: "Submit satisfaction documents and court records showing lien release".to_string(),
            },
            DetectedIssue {
                id: "issue_003".to_string(),
                r#type: "Personal Info Error".to_string(),
                severity: IssueSeverity::Medium,
                description: "Old address still showing as current address".to_string(),
                recommendation: "Update address information to reflect current residence".to_string(),
                affected_item: "456 Oak Avenue, Oldtown, CA 90211".to_string(),
                confidence: 85,
                potential_impact: "Improves report accuracy and prevents identity confusion".to_string(),
                dispute_strategy: "Provide current utility bills or lease agreement as proof of address".to_string(),
            },
        ],
        analysis_metadata: AnalysisMetadata {
            processing_time: 2000,
            confidence: 92,
            total_issues: 3,
            high_priority_issues: 2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_report_metadata_is_consistent() {
        let report = mock_processed_report();
        assert_eq!(
            report.analysis_metadata.total_issues,
            report.detected_issues.len()
        );
        assert_eq!(
            report.analysis_metadata.high_priority_issues,
            report
                .detected_issues
                .iter()
                .filter(|i| i.severity == IssueSeverity::High)
                .count()
        );
        assert_eq!(report.analysis_metadata.confidence, 92);
    }

    #[test]
    fn test_mock_report_is_already_sanitized() {
        let report = mock_processed_report();
        assert!(report.personal_info.ssn.starts_with("***-**-"));
        assert!(report
            .credit_accounts
            .iter()
            .all(|a| a.account_number.starts_with("****")));
    }
}
