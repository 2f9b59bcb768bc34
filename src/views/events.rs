// Events pages - public listing with category filter, event details and the
// registration form

use std::sync::Arc;

use crate::core::{escape_html, truncate_chars};
use crate::error::AppResult;
use crate::models::{EventStatus, RegistrationDraft};
use crate::services::DataService;
use crate::views::display_date;

/// Category filter value that shows every published event.
pub const ALL_CATEGORIES: &str = "all";

pub struct EventsPage {
    data: Arc<DataService>,
}

impl EventsPage {
    pub fn new(data: Arc<DataService>) -> Self {
        Self { data }
    }

    /// Published events as card fragments, optionally narrowed to one
    /// category. Descriptions are cut at 100 characters.
    pub fn listing_html(&self, category_filter: &str) -> String {
        let events: Vec<_> = self
            .data
            .get_events()
            .into_iter()
            .filter(|e| e.status == EventStatus::Published)
            .filter(|e| category_filter == ALL_CATEGORIES || e.category == category_filter)
            .collect();

        if events.is_empty() {
            return r#"<p class="text-center">No events found in this category.</p>"#.to_string();
        }

        events
            .iter()
            .map(|event| {
                format!(
                    r#"<div class="event-card">
    <div class="event-card-image" style="background-image: url('{image}');"></div>
    <div class="event-card-body">
        <span class="event-category">{category}</span>
        <h3>{title}</h3>
        <p class="event-date">📅 {date}</p>
        <p class="event-summary">{summary}...</p>
        <a href="event-details.html?id={id}" class="btn btn-secondary">View Details</a>
    </div>
</div>"#,
                    image = escape_html(&event.image_url),
                    category = escape_html(&event.category),
                    title = escape_html(&event.title),
                    date = display_date(&event.date),
                    summary = escape_html(&truncate_chars(&event.description, 100)),
                    id = escape_html(&event.id),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full detail fragment for one event, or the not-found placeholder.
    pub fn details_html(&self, id: &str) -> String {
        let event = match self.data.get_event_by_id(id) {
            Some(event) => event,
            None => return r#"<p class="text-center">Event not found.</p>"#.to_string(),
        };

        format!(
            r#"<div class="event-hero" style="background-image: url('{image}');"></div>
<div class="event-detail-body">
    <span class="event-category">{category}</span>
    <h1>{title}</h1>
    <p class="event-date">📅 {date}</p>
    <button id="open-reg-modal" class="btn btn-primary">Register Now</button>
    <h3>About This Event</h3>
    <p>{description}</p>
    <h3>Rules &amp; Eligibility</h3>
    <ul>
        <li>Participants must be bonafide students.</li>
        <li>Teams must report 30 minutes before kick-off.</li>
        <li>School ID cards are mandatory.</li>
        <li>Fair play rules apply strictly.</li>
    </ul>
</div>"#,
            image = escape_html(&event.image_url),
            category = escape_html(&event.category),
            title = escape_html(&event.title),
            date = display_date(&event.date),
            description = escape_html(&event.description),
        )
    }

    /// Registration form submission. Persists the registration and returns
    /// the payment-instructions message shown to the registrant.
    pub fn register(&self, draft: RegistrationDraft) -> AppResult<String> {
        let registration = self.data.add_registration(draft)?;

        let account: String = truncate_chars(&registration.school_name, 10).to_uppercase();
        Ok(format!(
            "Registration Successful!\n\n\
             Payment Instructions:\n\
             1. Go to M-Pesa Menu\n\
             2. Lipa na M-Pesa -> Paybill\n\
             3. Business No: 123456\n\
             4. Account No: {}\n\
             5. Amount: KES 2,000\n\n\
             A confirmation email has been sent to {}.",
            account, registration.email
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use crate::models::EventDraft;

    fn page() -> EventsPage {
        EventsPage::new(Arc::new(DataService::new(Arc::new(MemoryStore::new()))))
    }

    fn draft(title: &str, category: &str, status: EventStatus) -> EventDraft {
        EventDraft {
            id: None,
            title: title.to_string(),
            date: "2024-05-01".to_string(),
            category: category.to_string(),
            description: "d".repeat(150),
            image_url: "https://example.com/a.jpg".to_string(),
            status,
        }
    }

    #[test]
    fn test_listing_filters_by_category() {
        let page = page();
        page.data
            .save_event(draft("Rugby", "Sports", EventStatus::Published))
            .unwrap();
        page.data
            .save_event(draft("Choir", "Cultural", EventStatus::Published))
            .unwrap();

        let html = page.listing_html("Sports");
        assert!(html.contains("Rugby"));
        assert!(!html.contains("Choir"));

        let all = page.listing_html(ALL_CATEGORIES);
        assert!(all.contains("Rugby") && all.contains("Choir"));
    }

    #[test]
    fn test_listing_hides_drafts_and_truncates_description() {
        let page = page();
        page.data
            .save_event(draft("Hidden", "Sports", EventStatus::Draft))
            .unwrap();
        page.data
            .save_event(draft("Shown", "Sports", EventStatus::Published))
            .unwrap();

        let html = page.listing_html(ALL_CATEGORIES);
        assert!(!html.contains("Hidden"));
        assert!(html.contains(&format!("{}...", "d".repeat(100))));
        assert!(!html.contains(&"d".repeat(101)));
    }

    #[test]
    fn test_listing_empty_category_placeholder() {
        let page = page();
        page.data
            .save_event(draft("Rugby", "Sports", EventStatus::Published))
            .unwrap();

        assert!(page
            .listing_html("Academics")
            .contains("No events found in this category."));
    }

    #[test]
    fn test_details_not_found_placeholder() {
        assert!(page().details_html("missing").contains("Event not found."));
    }

    #[test]
    fn test_details_escapes_fields() {
        let page = page();
        let saved = page
            .data
            .save_event(draft("<Rugby & Friends>", "Sports", EventStatus::Published))
            .unwrap();

        let html = page.details_html(&saved.id);
        assert!(html.contains("&lt;Rugby &amp; Friends&gt;"));
        assert!(!html.contains("<Rugby"));
    }

    #[test]
    fn test_register_returns_payment_instructions() {
        let page = page();

        let message = page
            .register(RegistrationDraft {
                event_id: "1".to_string(),
                event_name: "Rugby Opens".to_string(),
                school_name: "Chesamisi High School".to_string(),
                contact_person: "B. Wanyama".to_string(),
                phone: "0700000000".to_string(),
                email: "sports@chesamisi.ac.ke".to_string(),
                notes: String::new(),
            })
            .unwrap();

        // Account number is the first ten characters of the school name,
        // uppercased.
        assert!(message.contains("Account No: CHESAMISI "));
        assert!(message.contains("sports@chesamisi.ac.ke"));
        assert_eq!(page.data.get_registrations().len(), 1);
    }
}
