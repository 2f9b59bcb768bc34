// Page views - thin consumers of the data service that map entities to HTML
// fragments and expose the user actions behind each page

pub mod admin;
pub mod events;
pub mod home;

pub use admin::{AdminPanel, DashboardStats};
pub use events::{EventsPage, ALL_CATEGORIES};
pub use home::HomePage;

use crate::core::escape_html;

/// Human-readable calendar date for display, already markup-safe. Falls
/// back to the escaped raw string when the date does not parse.
pub(crate) fn display_date(date: &str) -> String {
    match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d %b %Y").to_string(),
        Err(_) => escape_html(date),
    }
}
