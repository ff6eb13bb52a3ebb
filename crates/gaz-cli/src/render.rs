//! Plain-text rendering for report lines.
//!
//! Helpers return strings; printing happens at the call site.

use gaz_reports::ErrorDay;
use indicatif::HumanCount;

/// One ranked line: `1. Candide -- 8,210 views`.
///
/// View counts get thousands separators.
#[must_use]
pub fn ranked_line(rank: usize, label: &str, views: i64) -> String {
    #[allow(clippy::cast_sign_loss)] // COUNT(*) never goes negative
    let views = HumanCount(views as u64);
    format!("{rank}. {label} -- {views} views")
}

/// One error-day line: `July 29, 2016 -- 2.3%`.
///
/// Days render with the full month name and a zero-padded day of month;
/// percentages keep exactly one decimal place.
#[must_use]
pub fn error_day_line(day: &ErrorDay) -> String {
    format!(
        "{} -- {:.1}%",
        day.day.format("%B %d, %Y"),
        day.error_percent
    )
}
