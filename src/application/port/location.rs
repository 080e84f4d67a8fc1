// SPDX-License-Identifier: MPL-2.0
//! Navigation location port.

/// The current navigation path, e.g. `/tr/blog`.
pub trait Location {
    fn path(&self) -> String;

    /// Replaces the current path in place, without reloading anything.
    fn replace_path(&mut self, path: &str);
}

/// Returns the first path segment, e.g. `tr` for `/tr/blog`.
#[must_use]
pub fn first_segment(path: &str) -> Option<&str> {
    path.split('/').nth(1).filter(|segment| !segment.is_empty())
}

/// Replaces the first path segment with `segment`, keeping the rest.
#[must_use]
pub fn with_first_segment(path: &str, segment: &str) -> String {
    let mut parts: Vec<&str> = path.split('/').collect();
    if parts.len() > 1 {
        parts[1] = segment;
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_segment_extracts_leading_component() {
        assert_eq!(first_segment("/tr/blog"), Some("tr"));
        assert_eq!(first_segment("/et"), Some("et"));
        assert_eq!(first_segment("/"), None);
        assert_eq!(first_segment(""), None);
    }

    #[test]
    fn with_first_segment_keeps_tail() {
        assert_eq!(with_first_segment("/en/blog/post", "tr"), "/tr/blog/post");
        assert_eq!(with_first_segment("/en", "et"), "/et");
    }
}
