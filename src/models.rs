use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

/// Recognized supporter categories. Anything else on a stored record is kept
/// as-is but excluded from every counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Student,
    Alumni,
    Public,
}

impl Category {
    /// The one categorization function: trim, lowercase, exact match.
    /// Used identically on the append path and the count path.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "student" => Some(Self::Student),
            "alumni" => Some(Self::Alumni),
            "public" => Some(Self::Public),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Alumni => "alumni",
            Self::Public => "public",
        }
    }
}

/// One signature as kept in the local cache. The category stays a raw string
/// so records written by older clients (or hand-edited rows mirrored back)
/// survive the round trip; classification happens at count time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSignature {
    pub id: String,
    pub name: String,
    pub email: String,
    pub category: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheData {
    pub signatures: Vec<StoredSignature>,
    pub visited: bool,
}

#[derive(Debug, Deserialize)]
pub struct SignatureRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub category: String,
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    pub data: StoredSignature,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureCounts {
    pub students: u64,
    pub alumni: u64,
    #[serde(rename = "public")]
    pub general: u64,
    pub total: u64,
}

#[derive(Debug, Deserialize, Default)]
pub struct VisitorRequest {
    #[serde(default, rename = "isNewVisitor")]
    pub is_new_visitor: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VisitorResponse {
    pub count: u64,
    pub timestamp: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct BoardQuery {
    pub page: Option<usize>,
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Board entries deliberately omit the email column.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoardEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoardResponse {
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    pub signatures: Vec<BoardEntry>,
}

impl From<&StoredSignature> for BoardEntry {
    fn from(signature: &StoredSignature) -> Self {
        Self {
            id: signature.id.clone(),
            name: signature.name.clone(),
            category: signature.category.clone(),
            timestamp: signature.timestamp.clone(),
        }
    }
}

/// Human-readable stamp recorded on signatures and visitor rows,
/// e.g. "November 27, 2025 at 02:45:30 PM".
pub fn display_timestamp() -> String {
    Local::now().format("%B %-d, %Y at %I:%M:%S %p").to_string()
}

/// RFC 3339 stamp returned on the visitor tick response.
pub fn wire_timestamp() -> String {
    Utc::now().to_rfc3339()
}

pub fn new_signature_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        assert_eq!(Category::parse("  Student "), Some(Category::Student));
        assert_eq!(Category::parse("ALUMNI"), Some(Category::Alumni));
        assert_eq!(Category::parse("public"), Some(Category::Public));
    }

    #[test]
    fn parse_rejects_unrecognized() {
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("students"), None);
        assert_eq!(Category::parse("faculty"), None);
    }
}
