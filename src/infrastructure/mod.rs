// SPDX-License-Identifier: MPL-2.0
//! Adapters implementing the ports in `crate::application::port`.

pub mod connectivity;
pub mod locale;
pub mod location;
pub mod storage;

pub use connectivity::SharedConnectivity;
pub use locale::{FixedLocale, SystemLocale};
pub use location::RouteLocation;
pub use storage::{FileStore, MemoryStore};
