//! # Storage Layer
//!
//! Persistence seam for the settings column. The split mirrors the rest of
//! the crate: [`backend::SettingsBackend`] handles the "how" of storage
//! (filesystem vs memory), while
//! [`record_store::SettingsStore`] handles the "what" — running the
//! lifecycle hooks and the codec around each write.
//!
//! ## Column Contract
//!
//! One UTF-8 JSON document (an object) per record id, or absent before the
//! first write. Backends store and return the raw text; decoding is the
//! store's job so the fail-soft policy lives in one place.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `settings-{uuid}.json` file per record,
//!   written atomically (tmp file + rename).
//! - [`mem_backend::MemBackend`]: in-memory, for testing without I/O.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::SettingsBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use record_store::SettingsStore;
