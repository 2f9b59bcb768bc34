// Storage backend interface - named JSON collections over a key-value store

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{AppError, AppResult};

/// The three named collections of persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Events,
    Registrations,
    Reviews,
}

impl Collection {
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::Registrations => "registrations",
            Collection::Reviews => "reviews",
        }
    }
}

/// Key-value storage backend holding one JSON document per collection.
///
/// `load` distinguishes a key that was never written (`None`) from a key
/// holding an empty array; the seeding logic depends on that distinction.
pub trait Store: Send + Sync {
    fn load(&self, collection: Collection) -> Option<String>;
    fn save(&self, collection: Collection, payload: &str) -> AppResult<()>;
}

/// Decode a collection payload. An absent key or a malformed payload reads
/// as the empty collection; reads never fail.
pub fn read_collection<T: DeserializeOwned>(
    store: &dyn Store,
    collection: Collection,
) -> Vec<T> {
    match store.load(collection) {
        Some(payload) => match serde_json::from_str(&payload) {
            Ok(items) => items,
            Err(e) => {
                warn!(
                    "Malformed payload in collection '{}', reading as empty: {}",
                    collection.key(),
                    e
                );
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}

/// Serialize and persist the full collection, replacing prior contents.
pub fn write_collection<T: Serialize>(
    store: &dyn Store,
    collection: Collection,
    items: &[T],
) -> AppResult<()> {
    let payload = serde_json::to_string(items).map_err(|e| {
        AppError::SerializationError(format!(
            "Failed to serialize collection '{}': {}",
            collection.key(),
            e
        ))
    })?;
    store.save(collection, &payload)
}
