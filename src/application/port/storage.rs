// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage port.

use crate::error::Result;

/// String key-value storage that survives restarts.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key is absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
