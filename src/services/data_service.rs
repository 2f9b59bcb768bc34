// DataService - typed CRUD and query operations over the stored collections
// Sits above the storage backend and owns id assignment, timestamping,
// seeding, filtering and ordering

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::data_seeder;
use crate::error::AppResult;
use crate::infrastructure::{
    read_collection, write_collection, Clock, ClockIdGenerator, Collection, IdGenerator, Store,
    SystemClock,
};
use crate::models::{
    Event, EventDraft, EventStatus, Registration, RegistrationDraft, Review, ReviewDraft,
    ReviewStatus,
};

/// Data access layer for the three persisted collections.
///
/// Every operation is synchronous and performs one read-modify-write cycle
/// against the store. Lookups that miss are silent no-ops, never errors;
/// only a failing store write surfaces as `Err`.
pub struct DataService {
    store: Arc<dyn Store>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl DataService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_parts(
            store,
            Arc::new(ClockIdGenerator::new()),
            Arc::new(SystemClock),
        )
    }

    /// Full injection, used by tests to pin ids and the calendar day.
    pub fn with_parts(
        store: Arc<dyn Store>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { store, ids, clock }
    }

    /// Idempotent seeding and migration.
    ///
    /// Events merge additively: seed entries whose id already exists are
    /// skipped, so user-modified records with a seeded id are never
    /// overwritten. Reviews and registrations are written only when their
    /// key is entirely absent - no per-item merge.
    pub fn init(&self) -> AppResult<()> {
        match self.store.load(Collection::Events) {
            None => {
                info!("Seeding events collection");
                write_collection(
                    self.store.as_ref(),
                    Collection::Events,
                    &data_seeder::seed_events(),
                )?;
            }
            Some(_) => {
                let mut events = self.get_events();
                let mut changed = false;
                for seed in data_seeder::seed_events() {
                    if !events.iter().any(|e| e.id == seed.id) {
                        events.push(seed);
                        changed = true;
                    }
                }
                if changed {
                    info!("Merged missing seed events into existing collection");
                    write_collection(self.store.as_ref(), Collection::Events, &events)?;
                }
            }
        }

        if self.store.load(Collection::Reviews).is_none() {
            info!("Seeding reviews collection");
            write_collection(
                self.store.as_ref(),
                Collection::Reviews,
                &data_seeder::seed_reviews(),
            )?;
        }

        if self.store.load(Collection::Registrations).is_none() {
            write_collection::<Registration>(self.store.as_ref(), Collection::Registrations, &[])?;
        }

        Ok(())
    }

    // --- Events ---

    pub fn get_events(&self) -> Vec<Event> {
        read_collection(self.store.as_ref(), Collection::Events)
    }

    /// Published events dated today or later, nearest first. Events whose
    /// date string does not parse are excluded.
    pub fn get_upcoming_events(&self) -> Vec<Event> {
        let today = self.clock.today();
        let mut dated: Vec<(NaiveDate, Event)> = self
            .published_events_with_dates()
            .into_iter()
            .filter(|(date, _)| *date >= today)
            .collect();
        dated.sort_by_key(|(date, _)| *date);
        dated.into_iter().map(|(_, event)| event).collect()
    }

    /// Published events dated before today, most recent first.
    pub fn get_past_events(&self) -> Vec<Event> {
        let today = self.clock.today();
        let mut dated: Vec<(NaiveDate, Event)> = self
            .published_events_with_dates()
            .into_iter()
            .filter(|(date, _)| *date < today)
            .collect();
        dated.sort_by_key(|(date, _)| Reverse(*date));
        dated.into_iter().map(|(_, event)| event).collect()
    }

    pub fn get_event_by_id(&self, id: &str) -> Option<Event> {
        self.get_events().into_iter().find(|e| e.id == id)
    }

    /// Upsert. A draft with an id matching an existing record replaces it in
    /// place, preserving its position; anything else gets a fresh id and is
    /// appended. Returns the persisted entity.
    pub fn save_event(&self, draft: EventDraft) -> AppResult<Event> {
        let mut events = self.get_events();

        let existing = draft
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .and_then(|id| events.iter().position(|e| e.id == id));

        let event = match existing {
            Some(index) => {
                let id = events[index].id.clone();
                let event = draft.into_event(id);
                events[index] = event.clone();
                debug!("Updated event {}", event.id);
                event
            }
            None => {
                let event = draft.into_event(self.ids.next_id());
                debug!("Created event {}", event.id);
                events.push(event.clone());
                event
            }
        };

        write_collection(self.store.as_ref(), Collection::Events, &events)?;
        Ok(event)
    }

    /// Removes every entry matching the id. Silent no-op when absent.
    pub fn delete_event(&self, id: &str) -> AppResult<()> {
        let mut events = self.get_events();
        events.retain(|e| e.id != id);
        write_collection(self.store.as_ref(), Collection::Events, &events)
    }

    // --- Registrations ---

    pub fn get_registrations(&self) -> Vec<Registration> {
        read_collection(self.store.as_ref(), Collection::Registrations)
    }

    /// Appends a registration with a fresh id and the current instant. The
    /// caller cannot supply either field.
    pub fn add_registration(&self, draft: RegistrationDraft) -> AppResult<Registration> {
        let mut registrations = self.get_registrations();

        let registration = Registration {
            id: self.ids.next_id(),
            timestamp: self.clock.now(),
            event_id: draft.event_id,
            event_name: draft.event_name,
            school_name: draft.school_name,
            contact_person: draft.contact_person,
            phone: draft.phone,
            email: draft.email,
            notes: draft.notes,
        };

        debug!(
            "Registration {} recorded for event {}",
            registration.id, registration.event_id
        );
        registrations.push(registration.clone());
        write_collection(
            self.store.as_ref(),
            Collection::Registrations,
            &registrations,
        )?;
        Ok(registration)
    }

    // --- Reviews ---

    pub fn get_reviews(&self) -> Vec<Review> {
        read_collection(self.store.as_ref(), Collection::Reviews)
    }

    /// Appends a review with a fresh id. Status always starts pending,
    /// whatever the submitter intended.
    pub fn add_review(&self, draft: ReviewDraft) -> AppResult<Review> {
        let mut reviews = self.get_reviews();

        let review = Review {
            id: self.ids.next_id(),
            name: draft.name,
            rating: draft.rating,
            comment: draft.comment,
            status: ReviewStatus::Pending,
        };

        debug!("Review {} submitted for moderation", review.id);
        reviews.push(review.clone());
        write_collection(self.store.as_ref(), Collection::Reviews, &reviews)?;
        Ok(review)
    }

    /// Overwrites the status of the matching review. Silent no-op when the
    /// id is unknown - nothing is written in that case.
    pub fn update_review_status(&self, id: &str, status: ReviewStatus) -> AppResult<()> {
        let mut reviews = self.get_reviews();
        if let Some(review) = reviews.iter_mut().find(|r| r.id == id) {
            review.status = status;
            debug!("Review {} marked {}", id, status.as_str());
            write_collection(self.store.as_ref(), Collection::Reviews, &reviews)?;
        }
        Ok(())
    }

    /// Removes the matching review. Silent no-op when absent.
    pub fn delete_review(&self, id: &str) -> AppResult<()> {
        let mut reviews = self.get_reviews();
        reviews.retain(|r| r.id != id);
        write_collection(self.store.as_ref(), Collection::Reviews, &reviews)
    }

    fn published_events_with_dates(&self) -> Vec<(NaiveDate, Event)> {
        self.get_events()
            .into_iter()
            .filter(|e| e.status == EventStatus::Published)
            .filter_map(|e| parse_event_date(&e.date).map(|date| (date, e)))
            .collect()
    }
}

fn parse_event_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
