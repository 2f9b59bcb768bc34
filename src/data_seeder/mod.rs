// Seed data - fixed initial events and reviews for a fresh store

use once_cell::sync::Lazy;

use crate::models::{Event, EventStatus, Review, ReviewStatus};

static SEED_EVENTS: Lazy<Vec<Event>> = Lazy::new(|| {
    vec![
        Event {
            id: "1".to_string(),
            title: "FSK Annual Rugby Opens".to_string(),
            date: "2023-11-15".to_string(),
            category: "Sports".to_string(),
            description: "The premier rugby tournament in Western Kenya. Schools from all over the region compete for the championship.".to_string(),
            image_url: "https://images.unsplash.com/photo-1543132220-444127548c03?auto=format&fit=crop&q=80".to_string(),
            status: EventStatus::Published,
        },
        Event {
            id: "2".to_string(),
            title: "Regional Science Congress".to_string(),
            date: "2023-12-05".to_string(),
            category: "Academics".to_string(),
            description: "Innovators and young scientists present their projects in physics, chemistry, and biology.".to_string(),
            image_url: "https://images.unsplash.com/photo-1532094349884-543bc11b234d?auto=format&fit=crop&q=80".to_string(),
            status: EventStatus::Published,
        },
        Event {
            id: "3".to_string(),
            title: "Cultural Music Festival".to_string(),
            date: "2023-12-12".to_string(),
            category: "Cultural".to_string(),
            description: "A celebration of music, dance, and poetry from different cultures.".to_string(),
            image_url: "https://images.unsplash.com/photo-1514525253440-b393452e8d26?auto=format&fit=crop&q=80".to_string(),
            status: EventStatus::Published,
        },
        Event {
            id: "4".to_string(),
            title: "The Annual Allan Bradley Tournament".to_string(),
            date: "2026-02-07".to_string(),
            category: "Sports".to_string(),
            description: "Friends School Kamusinga Presents The Annual Allan Bradley Tournament. Games Featured: Basketball, Hockey, Soccer, Rugby, Lawn Tennis, Swimming, Volleyball, Badminton, Chess, Table Tennis. Entry Fee: 2,500 per team. Contact GM: Mr. Kasembeli (0711 357 698) - Use Common Sense.".to_string(),
            image_url: "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?auto=format&fit=crop&q=80".to_string(),
            status: EventStatus::Published,
        },
    ]
});

static SEED_REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        Review {
            id: "1".to_string(),
            name: "John Doe (Alumni)".to_string(),
            comment: "The organization of the Rugby Opens was world class. Proud of my school!".to_string(),
            rating: 5,
            status: ReviewStatus::Approved,
        },
        Review {
            id: "2".to_string(),
            name: "Sarah Smith".to_string(),
            comment: "Great experience at the science congress. Learned a lot.".to_string(),
            rating: 4,
            status: ReviewStatus::Approved,
        },
    ]
});

/// Fixed seed events, inserted on first run and merged by id afterwards.
pub fn seed_events() -> Vec<Event> {
    SEED_EVENTS.clone()
}

/// Fixed seed reviews, written only when the reviews key is entirely absent.
pub fn seed_reviews() -> Vec<Review> {
    SEED_REVIEWS.clone()
}
