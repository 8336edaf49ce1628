//! Typed records for the Simpler Grants opportunity search API
//!
//! This module defines the upstream response envelope and the grant
//! opportunity record it carries. Upstream owns the wire format; unknown
//! fields are ignored and optional fields stay optional all the way to the
//! renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One funding opportunity as returned by the upstream registry.
///
/// Field names mirror the upstream JSON exactly. Dates are opaque strings
/// owned by upstream and are never reparsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grant {
    /// Numeric identifier, unique per upstream source
    pub opportunity_id: i64,
    /// Human-facing identifier (e.g. "ABC-24-017")
    pub opportunity_number: String,
    pub opportunity_title: String,
    /// Short agency code used as the search facet key
    #[serde(default)]
    pub agency: Option<String>,
    pub agency_code: String,
    pub agency_name: String,
    #[serde(default)]
    pub top_level_agency_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Upstream status string ("forecasted", "posted", ...) - open-ended set
    pub opportunity_status: String,
    /// Funding summary; upstream may omit the whole block or any field in it
    #[serde(default)]
    pub summary: OpportunitySummary,
}

/// Nested funding summary. Every field is optional - upstream completeness
/// varies per opportunity, and the renderer resolves each absence to an
/// explicit placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OpportunitySummary {
    #[serde(default)]
    pub award_floor: Option<f64>,
    #[serde(default)]
    pub award_ceiling: Option<f64>,
    #[serde(default)]
    pub post_date: Option<String>,
    #[serde(default)]
    pub close_date: Option<String>,
    /// Free text, may contain embedded markup
    #[serde(default)]
    pub summary_description: Option<String>,
    #[serde(default)]
    pub additional_info_url: Option<String>,
    #[serde(default)]
    pub agency_contact_description: Option<String>,
    #[serde(default)]
    pub agency_email_address: Option<String>,
    #[serde(default)]
    pub agency_phone_number: Option<String>,
    /// Free text, may contain embedded markup
    #[serde(default)]
    pub applicant_eligibility_description: Option<String>,
}

/// Raw upstream response envelope.
///
/// `data` is `Option` on purpose: an envelope without the field at all is a
/// malformed response, while `Some(vec![])` is a valid zero-result search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Grant>>,
    #[serde(default)]
    pub pagination_info: PaginationInfo,
    /// Facet buckets (per-agency counts etc.); not consumed by rendering
    #[serde(default)]
    pub facet_counts: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationInfo {
    #[serde(default)]
    pub total_records: u64,
}

/// Validated search outcome handed to the tool adapter: the grant sequence
/// in upstream order plus the upstream total.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    pub grants: Vec<Grant>,
    pub total_records: u64,
}
