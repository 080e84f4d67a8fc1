// SPDX-License-Identifier: MPL-2.0
//! In-app route used as the navigation location.

use crate::application::port::Location;

/// The application's current route, e.g. `/en/blog`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
    path: String,
}

impl RouteLocation {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        Self { path }
    }
}

impl Default for RouteLocation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location for RouteLocation {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn replace_path(&mut self, path: &str) {
        tracing::debug!(from = %self.path, to = path, "route replaced");
        self.path = path.to_string();
    }
}
