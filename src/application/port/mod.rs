// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The language context and the status components talk to the outside world
//! only through these traits; `crate::infrastructure` provides adapters.
//!
//! # Available Ports
//!
//! - [`storage`]: durable key-value storage for the language code
//! - [`location`]: current navigation path
//! - [`locale`]: the user's preferred locale
//! - [`connectivity`]: online/offline signal
//! - [`translate`]: translation lookup with a fallback
//!
//! # Example
//!
//! ```
//! use nuvo_ui::application::port::KeyValueStore;
//! use nuvo_ui::infrastructure::MemoryStore;
//!
//! let mut store = MemoryStore::default();
//! store.set("language", "et").unwrap();
//! assert_eq!(store.get("language").as_deref(), Some("et"));
//! ```

pub mod connectivity;
pub mod locale;
pub mod location;
pub mod storage;
pub mod translate;

pub use connectivity::Connectivity;
pub use locale::LocaleSource;
pub use location::Location;
pub use storage::KeyValueStore;
pub use translate::Translate;
