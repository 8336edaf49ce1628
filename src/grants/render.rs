//! Text rendering for grant search results
//!
//! Pure functions turning grant records into the bounded text block returned
//! as tool output. No I/O, deterministic for identical inputs. Absent
//! optional fields always render an explicit placeholder so the output shape
//! is stable regardless of upstream completeness.

use crate::grants::model::Grant;
use once_cell::sync::Lazy;
use regex::Regex;

const GRANT_SEPARATOR_WIDTH: usize = 74;

/// Tag-shaped substrings only; this is deliberately not an HTML parser.
/// The contract is removal of `<...>` runs from two known free-text fields.
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid markup regex"));

/// Strip `<...>` tag-shaped substrings and trim surrounding whitespace.
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").trim().to_string()
}

/// Render a currency amount with a leading `$` and thousands separators,
/// rounded to whole currency units.
pub fn format_currency(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Render the fixed-section detail block for one grant.
pub fn render_grant(grant: &Grant) -> String {
    let summary = &grant.summary;

    let award_floor = summary
        .award_floor
        .map(format_currency)
        .unwrap_or_else(|| "Not specified".to_string());
    let award_ceiling = summary
        .award_ceiling
        .map(format_currency)
        .unwrap_or_else(|| "Not specified".to_string());

    let eligibility = summary
        .applicant_eligibility_description
        .as_deref()
        .map(strip_markup)
        .unwrap_or_else(|| "Eligibility information not provided".to_string());
    let description = summary
        .summary_description
        .as_deref()
        .map(strip_markup)
        .unwrap_or_else(|| "No description available".to_string());

    format!(
        "\nOPPORTUNITY DETAILS\n\
         ------------------\n\
         Title: {title}\n\
         Opportunity Number: {number}\n\
         Agency: {agency_name} ({agency_code})\n\
         Status: {status}\n\
         \n\
         FUNDING INFORMATION\n\
         ------------------\n\
         Award Floor: {award_floor}\n\
         Award Ceiling: {award_ceiling}\n\
         Category: {category}\n\
         \n\
         DATES AND DEADLINES\n\
         ------------------\n\
         Posted Date: {post_date}\n\
         Close Date: {close_date}\n\
         \n\
         CONTACT INFORMATION\n\
         ------------------\n\
         Agency Contact: {contact}\n\
         Email: {email}\n\
         Phone: {phone}\n\
         \n\
         ELIGIBILITY\n\
         ------------------\n\
         {eligibility}\n\
         \n\
         ADDITIONAL INFORMATION\n\
         ------------------\n\
         More Details URL: {url}\n\
         \n\
         Description:\n\
         {description}\n\
         \n\
         {separator}\n",
        title = grant.opportunity_title,
        number = grant.opportunity_number,
        agency_name = grant.agency_name,
        agency_code = grant.agency_code,
        status = grant.opportunity_status,
        category = grant.category.as_deref().unwrap_or("Not specified"),
        post_date = summary.post_date.as_deref().unwrap_or("N/A"),
        close_date = summary.close_date.as_deref().unwrap_or("N/A"),
        contact = summary
            .agency_contact_description
            .as_deref()
            .unwrap_or("Not provided"),
        email = summary
            .agency_email_address
            .as_deref()
            .unwrap_or("Not provided"),
        phone = summary
            .agency_phone_number
            .as_deref()
            .unwrap_or("Not provided"),
        url = summary
            .additional_info_url
            .as_deref()
            .unwrap_or("Not available"),
        separator = "=".repeat(GRANT_SEPARATOR_WIDTH),
    )
}

/// Zero-based window `[(page-1)*size, page*size)` clamped to `len`.
///
/// Non-positive pages clamp the window to the start; pages past the end
/// clamp it to `len`. Either way the result is a valid (possibly empty)
/// range, never an error.
pub fn page_window(len: usize, page: i64, grants_per_page: usize) -> (usize, usize) {
    let start = usize::try_from(page.saturating_sub(1).max(0))
        .unwrap_or(usize::MAX)
        .saturating_mul(grants_per_page)
        .min(len);
    let end = usize::try_from(page.max(0))
        .unwrap_or(usize::MAX)
        .saturating_mul(grants_per_page)
        .min(len);
    (start, end)
}

/// Render the overview block plus the detail listing for one display page.
///
/// `total_found` is the upstream total-record count; the displayed range and
/// page count come from the in-memory batch.
pub fn render_page(
    grants: &[Grant],
    query: &str,
    page: i64,
    grants_per_page: usize,
    total_found: u64,
) -> String {
    let (start, end) = page_window(grants.len(), page, grants_per_page);
    let total_pages = grants.len().div_ceil(grants_per_page).max(1);

    let listings = grants[start..end]
        .iter()
        .map(render_grant)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Search Results for \"{query}\":\n\
         \n\
         OVERVIEW\n\
         --------\n\
         Total Grants Found: {total_found}\n\
         Showing grants {from} to {to} of {available}\n\
         Page {page} of {total_pages}\n\
         \n\
         DETAILED GRANT LISTINGS\n\
         ----------------------\n\
         {listings}\n\
         \n\
         Note: Showing {grants_per_page} grants per page. \
         Total grants available: {total_found}\n",
        from = start + 1,
        to = end,
        available = grants.len(),
    )
}

/// EmptyResult message: a valid zero-match state, not an error.
pub fn render_no_matches(query: &str) -> String {
    format!("No grant opportunities found matching \"{query}\". Try different keywords or a broader search.")
}
