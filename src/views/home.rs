// Home page - featured upcoming events and approved reviews

use std::sync::Arc;

use crate::core::escape_html;
use crate::error::AppResult;
use crate::models::{Review, ReviewDraft, ReviewStatus};
use crate::services::DataService;
use crate::views::display_date;

pub struct HomePage {
    data: Arc<DataService>,
}

impl HomePage {
    pub fn new(data: Arc<DataService>) -> Self {
        Self { data }
    }

    /// The first three upcoming events as card fragments.
    pub fn featured_events_html(&self) -> String {
        let featured: Vec<_> = self
            .data
            .get_upcoming_events()
            .into_iter()
            .take(3)
            .collect();

        if featured.is_empty() {
            return r#"<p class="text-center">No upcoming events at the moment. Check back soon!</p>"#
                .to_string();
        }

        featured
            .iter()
            .map(|event| {
                format!(
                    r#"<div class="event-card">
    <div class="event-card-image" style="background-image: url('{image}');"></div>
    <div class="event-card-body">
        <span class="event-category">{category}</span>
        <h3>{title}</h3>
        <p class="event-date">{date}</p>
        <a href="event-details.html?id={id}" class="btn btn-secondary">View Details</a>
    </div>
</div>"#,
                    image = escape_html(&event.image_url),
                    category = escape_html(&event.category),
                    title = escape_html(&event.title),
                    date = display_date(&event.date),
                    id = escape_html(&event.id),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Approved reviews only; pending submissions stay invisible until
    /// moderated.
    pub fn reviews_html(&self) -> String {
        let approved: Vec<_> = self
            .data
            .get_reviews()
            .into_iter()
            .filter(|r| r.status == ReviewStatus::Approved)
            .collect();

        if approved.is_empty() {
            return r#"<p class="text-center">No reviews yet. Be the first!</p>"#.to_string();
        }

        approved
            .iter()
            .map(|review| {
                let filled = usize::from(review.rating.min(5));
                format!(
                    r#"<div class="review-card">
    <div class="review-stars">{stars}{padding}</div>
    <p class="review-comment">"{comment}"</p>
    <h4 class="review-author">- {name}</h4>
</div>"#,
                    stars = "★".repeat(filled),
                    padding = "☆".repeat(5 - filled),
                    comment = escape_html(&review.comment),
                    name = escape_html(&review.name),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Review form submission. The stored review starts pending regardless
    /// of the form contents.
    pub fn submit_review(&self, draft: ReviewDraft) -> AppResult<Review> {
        self.data.add_review(draft)
    }
}
