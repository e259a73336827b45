use crate::models::{SignatureCounts, StoredSignature};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Client for the spreadsheet bridge behind the configured deployment URL.
/// Appends are form-urlencoded POSTs; counts are bare GETs with an `action`
/// query. Every reply is JSON carrying `status: success | error`. The bridge
/// serializes concurrent appends itself; this client does no retries and no
/// timeout beyond the transport default.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("missing required field: {0}")]
    Validation(&'static str),

    #[error("ledger transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ledger rejected request: {0}")]
    Rejected(String),
}

#[derive(Debug, Deserialize)]
struct AppendReply {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountsReply {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    students: u64,
    #[serde(default)]
    alumni: u64,
    #[serde(rename = "public", default)]
    general: u64,
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct VisitorCountReply {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    count: u64,
}

impl LedgerClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Append one signature row. Posting the four fields without an `action`
    /// parameter is the bridge's append trigger.
    pub async fn append_signature(&self, record: &StoredSignature) -> Result<(), LedgerError> {
        validate_field(&record.name, "name")?;
        validate_field(&record.email, "email")?;
        validate_field(&record.category, "category")?;
        validate_field(&record.timestamp, "timestamp")?;

        let reply: AppendReply = self
            .http
            .post(&self.base_url)
            .form(&[
                ("name", record.name.as_str()),
                ("email", record.email.as_str()),
                ("category", record.category.as_str()),
                ("timestamp", record.timestamp.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        if reply.status != "success" {
            return Err(LedgerError::Rejected(
                reply.message.unwrap_or_else(|| "append refused".into()),
            ));
        }
        debug!("ledger append acknowledged");
        Ok(())
    }

    /// Append one visitor row. The bridge creates the visitor table on first
    /// use, so this never needs a setup call.
    pub async fn log_visitor(&self, timestamp: &str) -> Result<(), LedgerError> {
        validate_field(timestamp, "timestamp")?;

        let reply: AppendReply = self
            .http
            .post(&self.base_url)
            .form(&[("action", "logVisitor"), ("timestamp", timestamp)])
            .send()
            .await?
            .json()
            .await?;

        if reply.status != "success" {
            return Err(LedgerError::Rejected(
                reply.message.unwrap_or_else(|| "visitor log refused".into()),
            ));
        }
        Ok(())
    }

    pub async fn signature_counts(&self) -> Result<SignatureCounts, LedgerError> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("action", "getSignatureCount")])
            .send()
            .await?
            .text()
            .await?;
        parse_counts(&body)
    }

    pub async fn visitor_count(&self) -> Result<u64, LedgerError> {
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("action", "getVisitorCount")])
            .send()
            .await?
            .text()
            .await?;
        parse_visitor_count(&body)
    }
}

fn validate_field(value: &str, name: &'static str) -> Result<(), LedgerError> {
    if value.trim().is_empty() {
        return Err(LedgerError::Validation(name));
    }
    Ok(())
}

fn parse_counts(body: &str) -> Result<SignatureCounts, LedgerError> {
    let reply: CountsReply =
        serde_json::from_str(body).map_err(|err| LedgerError::Rejected(err.to_string()))?;

    if reply.status.as_deref() == Some("error") {
        // Covers the missing-table diagnostic; the caller falls back to the
        // local cache rather than failing.
        return Err(LedgerError::Rejected(
            reply.message.unwrap_or_else(|| "count unavailable".into()),
        ));
    }

    let total = reply
        .total
        .unwrap_or(reply.students + reply.alumni + reply.general);
    Ok(SignatureCounts {
        students: reply.students,
        alumni: reply.alumni,
        general: reply.general,
        total,
    })
}

fn parse_visitor_count(body: &str) -> Result<u64, LedgerError> {
    let reply: VisitorCountReply =
        serde_json::from_str(body).map_err(|err| LedgerError::Rejected(err.to_string()))?;

    if reply.status.as_deref() == Some("error") {
        return Err(LedgerError::Rejected(
            reply.message.unwrap_or_else(|| "count unavailable".into()),
        ));
    }
    Ok(reply.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_reply_with_total() {
        let counts =
            parse_counts(r#"{"status":"success","students":3,"alumni":2,"public":1,"total":6}"#)
                .unwrap();
        assert_eq!(counts.students, 3);
        assert_eq!(counts.total, 6);
    }

    #[test]
    fn counts_reply_without_total_sums_parts() {
        let counts = parse_counts(r#"{"students":3,"alumni":2,"public":1}"#).unwrap();
        assert_eq!(counts.total, 6);
    }

    #[test]
    fn counts_error_reply_is_rejected_with_message() {
        let err = parse_counts(r#"{"status":"error","message":"sheet Signatures not found"}"#)
            .unwrap_err();
        match err {
            LedgerError::Rejected(message) => assert!(message.contains("not found")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn visitor_count_reply() {
        assert_eq!(
            parse_visitor_count(r#"{"status":"success","count":41}"#).unwrap(),
            41
        );
    }

    #[test]
    fn visitor_error_reply_is_rejected() {
        assert!(parse_visitor_count(r#"{"status":"error"}"#).is_err());
    }

    #[test]
    fn empty_fields_fail_validation_before_io() {
        assert!(matches!(
            validate_field("  ", "name"),
            Err(LedgerError::Validation("name"))
        ));
        assert!(validate_field("Rajesh Kumar", "name").is_ok());
    }
}
