// Core infrastructure modules
pub mod store;        // Storage backend interface and collection codecs
pub mod memory_store; // In-memory store for tests and ephemeral runs
pub mod file_store;   // JSON-file-per-collection store (localStorage analog)
pub mod id_generator; // ID generation system
pub mod clock;        // Injected now/today provider

// Re-export core infrastructure components
pub use clock::{Clock, FixedClock, SystemClock};
pub use file_store::FileStore;
pub use id_generator::{ClockIdGenerator, IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use memory_store::MemoryStore;
pub use store::{read_collection, write_collection, Collection, Store};
