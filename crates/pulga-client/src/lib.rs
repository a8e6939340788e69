//! Storefront API client and view state for Pulga.
//!
//! - [`StorefrontApi`]: typed calls to the search/analytics API, with the
//!   session token propagated by [`SessionPropagator`]
//! - [`StorefrontView`]: category grid / filtered list state driven by
//!   [`ViewEvent`]s
//!
//! # Example
//!
//! ```rust,ignore
//! use pulga_cache::SessionStore;
//! use pulga_client::{ClientConfig, Navigator, StorefrontApi, StorefrontView, ViewEvent};
//! use std::sync::Arc;
//!
//! struct Browser;
//!
//! impl Navigator for Browser {
//!     fn navigate(&self, url: &str) {
//!         println!("open {url}");
//!     }
//! }
//!
//! let api = StorefrontApi::new(ClientConfig::default(), SessionStore::in_memory());
//! let mut view = StorefrontView::new(api, Arc::new(Browser));
//!
//! view.dispatch(ViewEvent::LoadBrowse).await;
//! view.dispatch(ViewEvent::SelectCategory("HOGAR".into())).await;
//! println!("{}", view.results().summary());
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod view;

pub use api::StorefrontApi;
pub use config::{ClientConfig, Endpoints};
pub use error::ApiError;
pub use session::{SessionPropagator, SESSION_HEADER};
pub use view::{Navigator, SearchTicket, StorefrontView, ViewEvent, ViewMode};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiError, ClientConfig, Navigator, StorefrontApi, StorefrontView, ViewEvent, ViewMode,
    };
}
