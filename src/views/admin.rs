// Admin panel - dashboard summary, event management, registrations and
// review moderation

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::Local;

use crate::core::escape_html;
use crate::error::AppResult;
use crate::export::registrations_to_csv;
use crate::models::{Event, EventDraft, ReviewStatus};
use crate::services::DataService;

/// Counts shown on the dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub events: usize,
    pub registrations: usize,
    pub pending_reviews: usize,
}

pub struct AdminPanel {
    data: Arc<DataService>,
}

impl AdminPanel {
    pub fn new(data: Arc<DataService>) -> Self {
        Self { data }
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            events: self.data.get_events().len(),
            registrations: self.data.get_registrations().len(),
            pending_reviews: self
                .data
                .get_reviews()
                .iter()
                .filter(|r| r.status == ReviewStatus::Pending)
                .count(),
        }
    }

    pub fn dashboard_html(&self) -> String {
        let stats = self.dashboard_stats();
        format!(
            r#"<div class="stats-grid">
    <div class="stat-card"><h3>{}</h3><p>Total Events</p></div>
    <div class="stat-card"><h3>{}</h3><p>Registrations</p></div>
    <div class="stat-card"><h3>{}</h3><p>Pending Reviews</p></div>
</div>"#,
            stats.events, stats.registrations, stats.pending_reviews
        )
    }

    /// Table rows for the events tab, one per event, with edit and delete
    /// actions keyed by id.
    pub fn events_table_html(&self) -> String {
        let events = self.data.get_events();

        if events.is_empty() {
            return r#"<tr><td colspan="5" class="text-center">No events found.</td></tr>"#
                .to_string();
        }

        events
            .iter()
            .map(|event| self.event_row_html(event))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn event_row_html(&self, event: &Event) -> String {
        format!(
            r#"<tr>
    <td>{title}</td>
    <td>{date}</td>
    <td>{category}</td>
    <td><span class="badge badge-{status}">{status}</span></td>
    <td>
        <button class="btn btn-secondary" data-action="edit" data-id="{id}">Edit</button>
        <button class="btn btn-danger" data-action="delete" data-id="{id}">Delete</button>
    </td>
</tr>"#,
            title = escape_html(&event.title),
            date = escape_html(&event.date),
            category = escape_html(&event.category),
            status = event.status.as_str(),
            id = escape_html(&event.id),
        )
    }

    /// Registration rows, newest first.
    pub fn registrations_table_html(&self) -> String {
        let mut registrations = self.data.get_registrations();

        if registrations.is_empty() {
            return r#"<tr><td colspan="4" class="text-center">No registrations yet.</td></tr>"#
                .to_string();
        }

        registrations.sort_by_key(|r| Reverse(r.timestamp));

        registrations
            .iter()
            .map(|r| {
                format!(
                    r#"<tr>
    <td><strong>{school}</strong><br><small>{notes}</small></td>
    <td>{contact}<br><small>{email} | {phone}</small></td>
    <td>{event}</td>
    <td>{received}</td>
</tr>"#,
                    school = escape_html(&r.school_name),
                    notes = escape_html(&r.notes),
                    contact = escape_html(&r.contact_person),
                    email = escape_html(&r.email),
                    phone = escape_html(&r.phone),
                    event = escape_html(&r.event_name),
                    received = r.timestamp.with_timezone(&Local).format("%d %b %Y"),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Review moderation list. Pending reviews get an approve action; every
    /// review can be deleted.
    pub fn reviews_list_html(&self) -> String {
        let reviews = self.data.get_reviews();

        if reviews.is_empty() {
            return "<p>No reviews submitted.</p>".to_string();
        }

        reviews
            .iter()
            .map(|review| {
                let filled = usize::from(review.rating.min(5));
                let approve = if review.status == ReviewStatus::Pending {
                    format!(
                        r#"<button class="btn btn-success" data-action="approve" data-id="{}">Approve</button>"#,
                        escape_html(&review.id)
                    )
                } else {
                    String::new()
                };
                format!(
                    r#"<div class="review-row">
    <div>
        <div class="review-stars">{stars}<span class="review-stars-empty">{empty}</span></div>
        <p>"{comment}"</p>
        <small>- {name}</small>
        <span class="badge badge-{status}">{status}</span>
    </div>
    <div class="review-actions">
        {approve}<button class="btn btn-danger" data-action="delete" data-id="{id}">Delete</button>
    </div>
</div>"#,
                    stars = "★".repeat(filled),
                    empty = "★".repeat(5 - filled),
                    comment = escape_html(&review.comment),
                    name = escape_html(&review.name),
                    status = review.status.as_str(),
                    approve = approve,
                    id = escape_html(&review.id),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    // --- Actions wired to the buttons above ---

    /// Modal form submission: create when the id field was empty, update
    /// otherwise.
    pub fn save_event(&self, draft: EventDraft) -> AppResult<Event> {
        self.data.save_event(draft)
    }

    pub fn delete_event(&self, id: &str) -> AppResult<()> {
        self.data.delete_event(id)
    }

    pub fn approve_review(&self, id: &str) -> AppResult<()> {
        self.data.update_review_status(id, ReviewStatus::Approved)
    }

    pub fn delete_review(&self, id: &str) -> AppResult<()> {
        self.data.delete_review(id)
    }

    /// Registrations CSV for download, in stored order.
    pub fn export_registrations_csv(&self) -> String {
        registrations_to_csv(&self.data.get_registrations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use crate::models::{EventStatus, RegistrationDraft, ReviewDraft};

    fn panel() -> AdminPanel {
        AdminPanel::new(Arc::new(DataService::new(Arc::new(MemoryStore::new()))))
    }

    fn event_draft(title: &str) -> EventDraft {
        EventDraft {
            id: None,
            title: title.to_string(),
            date: "2024-05-01".to_string(),
            category: "Sports".to_string(),
            description: "desc".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            status: EventStatus::Published,
        }
    }

    fn registration_draft(school: &str) -> RegistrationDraft {
        RegistrationDraft {
            event_id: "1".to_string(),
            event_name: "Rugby Opens".to_string(),
            school_name: school.to_string(),
            contact_person: "B. Wanyama".to_string(),
            phone: "0700000000".to_string(),
            email: "sports@chesamisi.ac.ke".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_states() {
        let panel = panel();
        assert!(panel.events_table_html().contains("No events found."));
        assert!(panel
            .registrations_table_html()
            .contains("No registrations yet."));
        assert!(panel.reviews_list_html().contains("No reviews submitted."));
    }

    #[test]
    fn test_dashboard_counts_pending_reviews_only() {
        let panel = panel();
        panel.save_event(event_draft("A")).unwrap();
        panel.data.add_registration(registration_draft("X")).unwrap();
        let review = panel
            .data
            .add_review(ReviewDraft {
                name: "Jane".to_string(),
                rating: 5,
                comment: "!".to_string(),
            })
            .unwrap();
        panel
            .data
            .add_review(ReviewDraft {
                name: "Joe".to_string(),
                rating: 3,
                comment: "?".to_string(),
            })
            .unwrap();
        panel.approve_review(&review.id).unwrap();

        assert_eq!(
            panel.dashboard_stats(),
            DashboardStats {
                events: 1,
                registrations: 1,
                pending_reviews: 1,
            }
        );
    }

    #[test]
    fn test_events_table_escapes_hostile_title() {
        let panel = panel();
        panel
            .save_event(event_draft("<img onerror=alert(1)>"))
            .unwrap();

        let html = panel.events_table_html();
        assert!(html.contains("&lt;img onerror=alert(1)&gt;"));
        assert!(!html.contains("<img onerror"));
    }

    #[test]
    fn test_registrations_sorted_newest_first() {
        use crate::infrastructure::{FixedClock, SequentialIdGenerator};
        use chrono::{NaiveDate, TimeZone, Utc};

        let store = Arc::new(MemoryStore::new());
        let ids = Arc::new(SequentialIdGenerator::new());
        let at = |hour| {
            DataService::with_parts(
                store.clone(),
                ids.clone(),
                Arc::new(FixedClock {
                    now: Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap(),
                    today: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                }),
            )
        };

        at(9).add_registration(registration_draft("First School"))
            .unwrap();
        at(10)
            .add_registration(registration_draft("Second School"))
            .unwrap();

        let panel = AdminPanel::new(Arc::new(at(11)));
        let html = panel.registrations_table_html();
        let first = html.find("First School").unwrap();
        let second = html.find("Second School").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_reviews_list_approve_only_for_pending() {
        let panel = panel();
        let pending = panel
            .data
            .add_review(ReviewDraft {
                name: "Jane".to_string(),
                rating: 5,
                comment: "!".to_string(),
            })
            .unwrap();
        let approved = panel
            .data
            .add_review(ReviewDraft {
                name: "Joe".to_string(),
                rating: 3,
                comment: "?".to_string(),
            })
            .unwrap();
        panel.approve_review(&approved.id).unwrap();

        let html = panel.reviews_list_html();
        assert!(html.contains(&format!("data-action=\"approve\" data-id=\"{}\"", pending.id)));
        assert!(!html.contains(&format!("data-action=\"approve\" data-id=\"{}\"", approved.id)));
    }

    #[test]
    fn test_moderation_round_trip() {
        let panel = panel();
        let review = panel
            .data
            .add_review(ReviewDraft {
                name: "Jane".to_string(),
                rating: 5,
                comment: "!".to_string(),
            })
            .unwrap();

        panel.approve_review(&review.id).unwrap();
        assert_eq!(panel.dashboard_stats().pending_reviews, 0);

        panel.delete_review(&review.id).unwrap();
        assert!(panel.reviews_list_html().contains("No reviews submitted."));
    }

    #[test]
    fn test_csv_export_covers_all_registrations() {
        let panel = panel();
        panel
            .data
            .add_registration(registration_draft("A School"))
            .unwrap();
        panel
            .data
            .add_registration(registration_draft("B School"))
            .unwrap();

        let csv = panel.export_registrations_csv();
        assert_eq!(csv.split('\n').count(), 3);
        assert!(csv.contains("\"A School\""));
        assert!(csv.contains("\"B School\""));
    }
}
