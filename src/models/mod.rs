// Entity models for the events platform - events, registrations, reviews
// Persisted JSON keeps the camelCase field names of the stored collections

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication state of an event. Draft events are hidden from public pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Published,
    Draft,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Published => "published",
            EventStatus::Draft => "draft",
        }
    }
}

/// Moderation state of a review. New reviews always start out pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar date string, `YYYY-MM-DD`.
    pub date: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub status: EventStatus,
}

/// Event as submitted from the admin form. A missing id means "create".
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub id: Option<String>,
    pub title: String,
    pub date: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: String,
    /// Assigned by the data service at creation time, never by the caller.
    pub timestamp: DateTime<Utc>,
    pub event_id: String,
    pub event_name: String,
    pub school_name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl EventDraft {
    /// Materialize the stored record with the id chosen by the data service.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            category: self.category,
            description: self.description,
            image_url: self.image_url,
            status: self.status,
        }
    }
}

/// Registration form payload. Carries neither id nor timestamp; both are
/// assigned on insert.
#[derive(Debug, Clone)]
pub struct RegistrationDraft {
    pub event_id: String,
    pub event_name: String,
    pub school_name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub status: ReviewStatus,
}

/// Review form payload. Status is not part of the input; inserts always
/// start pending.
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}
