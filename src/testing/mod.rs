//! Testing utilities
//!
//! Grant fixtures shared by unit tests and the integration suite, so mock
//! upstream responses stay consistent across test files.

use crate::grants::model::{Grant, OpportunitySummary};
use serde_json::{json, Value};

/// A fully-populated grant record
pub fn sample_grant(id: i64) -> Grant {
    Grant {
        opportunity_id: id,
        opportunity_number: format!("USDA-FS-{id:04}"),
        opportunity_title: format!("Community Wildfire Defense {id}"),
        agency: Some("USDA".to_string()),
        agency_code: "USDA".to_string(),
        agency_name: "Department of Agriculture".to_string(),
        top_level_agency_name: Some("Department of Agriculture".to_string()),
        category: Some("discretionary".to_string()),
        opportunity_status: "posted".to_string(),
        summary: OpportunitySummary {
            award_floor: Some(50000.0),
            award_ceiling: Some(1500000.0),
            post_date: Some("2024-03-01".to_string()),
            close_date: Some("2024-06-15".to_string()),
            summary_description: Some("Supports community wildfire defense planning.".to_string()),
            additional_info_url: Some(format!("https://example.gov/grants/{id}")),
            agency_contact_description: Some("Forest Service Grants Desk".to_string()),
            agency_email_address: Some("grants@example.gov".to_string()),
            agency_phone_number: Some("555-0100".to_string()),
            applicant_eligibility_description: Some("States, tribes, nonprofits.".to_string()),
        },
    }
}

/// A grant with every optional field absent
pub fn bare_grant(id: i64) -> Grant {
    Grant {
        opportunity_id: id,
        opportunity_number: format!("BARE-{id:04}"),
        opportunity_title: format!("Untitled Opportunity {id}"),
        agency: None,
        agency_code: "DOC".to_string(),
        agency_name: "Department of Commerce".to_string(),
        top_level_agency_name: None,
        category: None,
        opportunity_status: "forecasted".to_string(),
        summary: OpportunitySummary::default(),
    }
}

/// An upstream envelope carrying `count` sample grants
pub fn envelope_json(count: i64) -> Value {
    let grants: Vec<Value> = (0..count)
        .map(|i| serde_json::to_value(sample_grant(i)).expect("fixture serializes"))
        .collect();

    json!({
        "data": grants,
        "pagination_info": {"total_records": count},
        "facet_counts": {"agency": {"USDA": count}}
    })
}
