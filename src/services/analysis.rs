//! Report analysis: LLM-backed extraction with a hard-coded fallback.
//!
//! When an API key is configured the analyzer asks an OpenAI-compatible
//! chat-completions endpoint to extract the structured report. Any failure
//! along that path (network, HTTP status, malformed JSON) falls back to the
//! mock payload so a demo deployment always produces a result.

use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::data::mock_processed_report;
use crate::error::{AppError, AppResult};
use crate::models::analysis::ProcessedReport;

/// Maximum characters of extracted PDF text sent to the LLM.
const MAX_PROMPT_CHARS: usize = 20_000;

const SYSTEM_PROMPT: &str = "You are a credit report auditor. Extract the report into JSON with \
camelCase keys: personalInfo {name, ssn, dateOfBirth, addresses [{street, city, state, zipCode}]}, \
creditAccounts [{creditorName, accountNumber, accountType, status, balance, paymentHistory}], \
paymentHistory [{month, status, creditor}], publicRecords [{type, amount, date, status}], \
inquiries [{company, date, type}], employmentHistory [{employer, position, dateRange}], \
detectedIssues [{id, type, severity (High|Medium|Low), description, recommendation, affectedItem, \
confidence, potentialImpact, disputeStrategy}], and analysisMetadata {processingTime, confidence, \
totalIssues, highPriorityIssues}. Flag likely reporting errors as detected issues. \
Respond with the JSON object only.";

/// LLM-backed report analyzer.
#[derive(Clone)]
pub struct Analyzer {
    http: reqwest::Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl Analyzer {
    pub fn new(config: &LlmConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Analysis(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone().map(SecretString::from),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Analyze a report PDF, returning the sanitized structured payload.
    ///
    /// Never fails on the analysis path itself: any LLM problem degrades
    /// to the mock payload.
    pub async fn analyze(&self, pdf_bytes: &[u8]) -> ProcessedReport {
        let started = Instant::now();

        let mut report = match &self.api_key {
            Some(key) => match self.analyze_with_llm(pdf_bytes, key).await {
                Ok(report) => report,
                Err(e) => {
                    warn!("LLM analysis failed, using mock payload: {}", e);
                    mock_processed_report()
                }
            },
            None => {
                debug!("No LLM API key configured, using mock payload");
                mock_processed_report()
            }
        };

        report.analysis_metadata.processing_time = started.elapsed().as_millis().max(1) as u64;
        sanitize(&mut report);
        report
    }

    async fn analyze_with_llm(
        &self,
        pdf_bytes: &[u8],
        api_key: &SecretString,
    ) -> AppResult<ProcessedReport> {
        let text = extract_text(pdf_bytes);
        if text.trim().is_empty() {
            return Err(AppError::Analysis(
                "No extractable text in PDF".to_string(),
            ));
        }

        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": text},
            ],
            "temperature": 0,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Analysis(format!("LLM request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Analysis(format!(
                "LLM returned status {}",
                response.status()
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Analysis(format!("Failed to parse LLM response: {}", e)))?;

        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| AppError::Analysis("LLM response had no choices".to_string()))?;

        let report: ProcessedReport = serde_json::from_str(strip_code_fences(content))
            .map_err(|e| AppError::Analysis(format!("LLM output was not valid JSON: {}", e)))?;

        Ok(report)
    }
}

/// Pull the text layer out of the PDF bytes, truncated for the prompt.
///
/// Lossy decoding is fine here: binary stream sections become replacement
/// characters the model ignores.
fn extract_text(pdf_bytes: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(pdf_bytes).into_owned();
    if text.len() > MAX_PROMPT_CHARS {
        let mut cut = MAX_PROMPT_CHARS;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    text
}

/// Strip a markdown code fence if the model wrapped its JSON in one.
fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Mask sensitive values before the payload is persisted.
///
/// SSNs become `***-**-` plus the last four digits; account numbers become
/// `****` plus the last four. Already-masked values are left alone.
pub fn sanitize(report: &mut ProcessedReport) {
    let ssn = &report.personal_info.ssn;
    if !ssn.is_empty() && !ssn.contains('*') {
        let last4: String = ssn
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>()
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        report.personal_info.ssn = format!("***-**-{}", last4);
    }

    for account in &mut report.credit_accounts {
        if !account.account_number.contains('*') {
            let len = account.account_number.chars().count();
            let last4: String = account
                .account_number
                .chars()
                .skip(len.saturating_sub(4))
                .collect();
            account.account_number = format!("****{}", last4);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_masks_raw_ssn() {
        let mut report = mock_processed_report();
        report.personal_info.ssn = "123-45-6789".to_string();

        sanitize(&mut report);
        assert_eq!(report.personal_info.ssn, "***-**-6789");
    }

    #[test]
    fn test_sanitize_leaves_masked_ssn() {
        let mut report = mock_processed_report();
        report.personal_info.ssn = "***-**-1234".to_string();

        sanitize(&mut report);
        assert_eq!(report.personal_info.ssn, "***-**-1234");
    }

    #[test]
    fn test_sanitize_masks_raw_account_numbers() {
        let mut report = mock_processed_report();
        report.credit_accounts[0].account_number = "4111111111111111".to_string();

        sanitize(&mut report);
        assert_eq!(report.credit_accounts[0].account_number, "****1111");
        // The already-masked second account is untouched
        assert_eq!(report.credit_accounts[1].account_number, "****5678");
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_text_truncates_on_char_boundary() {
        let data = "é".repeat(MAX_PROMPT_CHARS);
        let text = extract_text(data.as_bytes());
        assert!(text.len() <= MAX_PROMPT_CHARS);
        assert!(text.chars().all(|c| c == 'é'));
    }

    #[tokio::test]
    async fn test_analyze_without_key_uses_mock() {
        let analyzer = Analyzer::new(&LlmConfig {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        })
        .unwrap();

        let report = analyzer.analyze(b"%PDF-1.4 fake").await;
        assert_eq!(report.detected_issues.len(), 3);
        assert_eq!(report.analysis_metadata.confidence, 92);
        assert!(report.analysis_metadata.processing_time >= 1);
    }
}
