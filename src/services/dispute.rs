//! Dispute letter and phone script generation.
//!
//! Pure text templating over the selected detected issues. Three letter
//! bodies are supported: a standard FCRA dispute, a debt validation
//! request, and a goodwill removal request.

use chrono::Utc;
use std::fmt::Write;

use crate::models::analysis::DetectedIssue;
use crate::models::dispute::{DisputeCustomizations, LetterType};

const DEFAULT_RECIPIENT_NAME: &str = "Credit Bureau Consumer Assistance";
const DEFAULT_RECIPIENT_ADDRESS: &str = "P.O. Box 4500, Allen, TX 75013";
const DEFAULT_SENDER_NAME: &str = "John Michael Smith";
const DEFAULT_SENDER_ADDRESS: &str = "123 Main Street, Anytown, CA 90210";

/// Generate the dispute letter for the selected issues.
pub fn generate_dispute_letter(
    issues: &[DetectedIssue],
    customizations: &DisputeCustomizations,
    letter_type: LetterType,
) -> String {
    let recipient_name = customizations
        .recipient_name
        .as_deref()
        .unwrap_or(DEFAULT_RECIPIENT_NAME);
    let recipient_address = customizations
        .recipient_address
        .as_deref()
        .unwrap_or(DEFAULT_RECIPIENT_ADDRESS);
    let sender_name = customizations
        .sender_name
        .as_deref()
        .unwrap_or(DEFAULT_SENDER_NAME);
    let sender_address = customizations
        .sender_address
        .as_deref()
        .unwrap_or(DEFAULT_SENDER_ADDRESS);

    let date = Utc::now().format("%B %-d, %Y");

    let mut letter = format!(
        "{date}\n\n{recipient_name}\n{recipient_address}\n\nDear Sir or Madam,\n\n"
    );

    match letter_type {
        LetterType::Dispute => {
            letter.push_str(
                "I am writing to dispute the following information in my credit file. The items listed below are inaccurate or incomplete, and I am requesting that they be removed or corrected.\n\nDISPUTED ITEMS:\n\n",
            );
            let items: Vec<String> = issues
                .iter()
                .enumerate()
                .map(|(index, issue)| {
                    format!(
                        "{}. {}\n   Reason: {}\n   Affected Item: {}\n   Confidence Level: {}%\n",
                        index + 1,
                        issue.description,
                        issue.recommendation,
                        issue.affected_item,
                        issue.confidence
                    )
                })
                .collect();
            letter.push_str(&items.join("\n"));
            letter.push_str(
                "\n\nI have enclosed copies of supporting documentation that verify the inaccuracies of these items. Please investigate these matters and remove or correct the inaccurate information as soon as possible.\n\nUnder the Fair Credit Reporting Act, you have 30 days to investigate and respond to this dispute. Please send me written confirmation of the results of your investigation.",
            );
        }
        LetterType::Validation => {
            letter.push_str(
                "I am requesting validation of the following debts that appear on my credit report:\n\nITEMS REQUIRING VALIDATION:\n\n",
            );
            let items: Vec<String> = issues
                .iter()
                .enumerate()
                .map(|(index, issue)| {
                    format!(
                        "{}. {}\n   Description: {}\n   Reason for Validation Request: {}\n",
                        index + 1,
                        issue.affected_item,
                        issue.description,
                        issue.recommendation
                    )
                })
                .collect();
            letter.push_str(&items.join("\n"));
            letter.push_str(
                "\n\nUnder the Fair Debt Collection Practices Act and the Fair Credit Reporting Act, I have the right to request validation of these debts. Please provide:\n\n1. Proof that you own or are authorized to collect on this debt\n2. A copy of the original signed agreement or application\n3. A complete payment history\n4. Proof of your license to collect in my state\n\nIf you cannot validate these debts, they must be removed from my credit report immediately.",
            );
        }
        LetterType::Goodwill => {
            letter.push_str(
                "I am writing to request your consideration in removing the following negative items from my credit report as a gesture of goodwill:\n\nITEMS FOR GOODWILL CONSIDERATION:\n\n",
            );
            let items: Vec<String> = issues
                .iter()
                .enumerate()
                .map(|(index, issue)| {
                    format!(
                        "{}. {}\n   Issue: {}\n   Impact: {}\n",
                        index + 1,
                        issue.affected_item,
                        issue.description,
                        issue.potential_impact
                    )
                })
                .collect();
            letter.push_str(&items.join("\n"));
            letter.push_str(
                "\n\nI have been a valued customer and have worked hard to improve my financial situation. These items are negatively impacting my credit score and my ability to secure favorable lending terms.\n\nI would greatly appreciate your consideration in removing these items as a goodwill gesture. I am committed to maintaining a positive relationship and continuing to make timely payments.",
            );
        }
    }

    let _ = write!(
        letter,
        "\n\nSincerely,\n\n{sender_name}\n{sender_address}\n\nEnclosures: Supporting documentation"
    );

    letter
}

/// Generate the phone dispute script for the selected issues.
pub fn generate_phone_script(issues: &[DetectedIssue], bureau: &str) -> String {
    let mut items = String::new();
    for (index, issue) in issues.iter().enumerate() {
        let _ = write!(
            items,
            "\nItem {} - {}:\n\"I need to dispute {}. {}. {}.\"\n\nKey Points to Mention:\n- Confidence level: {}%\n- Potential impact: {}\n- Strategy: {}\n",
            index + 1,
            issue.r#type,
            issue.affected_item,
            issue.description,
            issue.recommendation,
            issue.confidence,
            issue.potential_impact,
            issue.dispute_strategy
        );
    }

    format!(
        r#"PHONE DISPUTE SCRIPT - {bureau}

PREPARATION CHECKLIST:
□ Have your credit report ready
□ Have supporting documents available
□ Pen and paper for notes
□ Reference number from any previous correspondence

INTRODUCTION:
"Hello, I'm calling to dispute some inaccurate information on my credit report. My name is [YOUR NAME] and my Social Security Number is [XXX-XX-XXXX]."

DISPUTED ITEMS:

{items}

CLOSING:
"Can you please start an investigation into these items? I'd like to receive written confirmation of the dispute and the results once your investigation is complete. What's the reference number for this dispute?"

IMPORTANT NOTES:
- Take detailed notes including representative name and ID
- Get reference numbers for all disputes
- Ask for written confirmation
- Follow up in writing within 24 hours
- Keep records of all communications

FOLLOW-UP ACTIONS:
1. Send written dispute letter within 24 hours
2. Include copies of supporting documentation
3. Send via certified mail with return receipt
4. Keep copies of all correspondence
5. Follow up if no response within 30 days

SAMPLE RESPONSES TO COMMON QUESTIONS:

Q: "Why do you believe this information is incorrect?"
A: "I have documentation that proves [specific reason]. The information on my report does not match my records."

Q: "Do you have supporting documentation?"
A: "Yes, I will be sending copies of [list documents] via certified mail today."

Q: "This may take 30 days to investigate."
A: "I understand. Please provide me with a reference number and confirm that I will receive written notification of the results.""#,
        bureau = bureau.to_uppercase(),
        items = items
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::mock_processed_report;

    fn sample_issues() -> Vec<DetectedIssue> {
        mock_processed_report().detected_issues
    }

    #[test]
    fn test_dispute_letter_lists_every_issue_once() {
        let issues = sample_issues();
        let letter = generate_dispute_letter(
            &issues,
            &DisputeCustomizations::default(),
            LetterType::Dispute,
        );

        for (index, issue) in issues.iter().enumerate() {
            let entry = format!("{}. {}", index + 1, issue.description);
            assert_eq!(
                letter.matches(&entry).count(),
                1,
                "issue {} should appear exactly once",
                issue.id
            );
        }
    }

    #[test]
    fn test_dispute_letter_contains_fcra_boilerplate() {
        let issues = sample_issues();
        let letter = generate_dispute_letter(
            &issues,
            &DisputeCustomizations::default(),
            LetterType::Dispute,
        );

        assert!(letter.contains("Under the Fair Credit Reporting Act"));
        assert!(letter.contains("30 days to investigate"));
        assert!(letter.contains("Enclosures: Supporting documentation"));
    }

    #[test]
    fn test_dispute_letter_default_parties() {
        let issues = sample_issues();
        let letter = generate_dispute_letter(
            &issues,
            &DisputeCustomizations::default(),
            LetterType::Dispute,
        );

        assert!(letter.contains("Credit Bureau Consumer Assistance"));
        assert!(letter.contains("P.O. Box 4500, Allen, TX 75013"));
        assert!(letter.contains("John Michael Smith"));
        assert!(letter.contains("123 Main Street, Anytown, CA 90210"));
    }

    #[test]
    fn test_dispute_letter_customizations_override_defaults() {
        let issues = sample_issues();
        let customizations = DisputeCustomizations {
            recipient_name: Some("Equifax Information Services".to_string()),
            recipient_address: Some("P.O. Box 740256, Atlanta, GA 30374".to_string()),
            sender_name: Some("Jane Doe".to_string()),
            sender_address: Some("9 Elm Court, Springfield, IL 62704".to_string()),
        };
        let letter = generate_dispute_letter(&issues, &customizations, LetterType::Dispute);

        assert!(letter.contains("Equifax Information Services"));
        assert!(letter.contains("Jane Doe"));
        assert!(!letter.contains("Credit Bureau Consumer Assistance"));
        assert!(!letter.contains("John Michael Smith"));
    }

    #[test]
    fn test_validation_letter_body() {
        let issues = sample_issues();
        let letter = generate_dispute_letter(
            &issues,
            &DisputeCustomizations::default(),
            LetterType::Validation,
        );

        assert!(letter.contains("ITEMS REQUIRING VALIDATION:"));
        assert!(letter.contains("Fair Debt Collection Practices Act"));
        assert!(letter.contains("A copy of the original signed agreement or application"));
    }

    #[test]
    fn test_goodwill_letter_body() {
        let issues = sample_issues();
        let letter = generate_dispute_letter(
            &issues,
            &DisputeCustomizations::default(),
            LetterType::Goodwill,
        );

        assert!(letter.contains("ITEMS FOR GOODWILL CONSIDERATION:"));
        assert!(letter.contains("goodwill gesture"));
        assert!(letter.contains(&issues[0].potential_impact));
    }

    #[test]
    fn test_phone_script_sections() {
        let issues = sample_issues();
        let script = generate_phone_script(&issues, "Credit Bureau");

        assert!(script.starts_with("PHONE DISPUTE SCRIPT - CREDIT BUREAU"));
        assert!(script.contains("PREPARATION CHECKLIST:"));
        assert!(script.contains("DISPUTED ITEMS:"));
        assert!(script.contains("FOLLOW-UP ACTIONS:"));
        assert!(script.contains("SAMPLE RESPONSES TO COMMON QUESTIONS:"));

        for (index, issue) in issues.iter().enumerate() {
            assert!(script.contains(&format!("Item {} - {}:", index + 1, issue.r#type)));
        }
    }
}
