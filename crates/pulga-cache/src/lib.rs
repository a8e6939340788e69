//! Client-local key-value persistence for the Pulga storefront client.
//!
//! A [`Store`] holds plain string values under string keys. [`MemoryStore`]
//! lives for the process; [`FileStore`] writes through to a JSON file and
//! survives restarts. [`SessionStore`] layers the session token and auth
//! token accessors on top of any store.
//!
//! # Example
//!
//! ```rust
//! use pulga_cache::{MemoryStore, SessionStore};
//! use std::sync::Arc;
//!
//! let session = SessionStore::new(Arc::new(MemoryStore::new()));
//! session.set_session_id("abc");
//! assert_eq!(session.session_id().as_deref(), Some("abc"));
//!
//! session.clear_session_id();
//! assert_eq!(session.session_id(), None);
//! ```

mod error;
mod session;
mod store;

pub use error::CacheError;
pub use session::{SessionStore, AUTH_TOKEN_KEY, SESSION_ID_KEY};
pub use store::{FileStore, MemoryStore, Store};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CacheError, FileStore, MemoryStore, SessionStore, Store};
}
