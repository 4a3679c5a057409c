// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide indexing.
//!
//! [`wrap_index`] folds any signed request into `[0, len)`, so stepping past
//! either end of the carousel lands on the opposite end. [`SlideRegistry`]
//! maps declared slide ids to positions so navigation links can target
//! slides by name rather than by their order in the menu.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Folds `index` into `[0, len)` with wraparound in both directions.
///
/// Returns `None` when there are no slides.
///
/// ```
/// use vitrine_core::slide::wrap_index;
///
/// assert_eq!(wrap_index(-1, 5), Some(4));
/// assert_eq!(wrap_index(5, 5), Some(0));
/// assert_eq!(wrap_index(3, 0), None);
/// ```
#[must_use]
pub fn wrap_index(index: isize, len: usize) -> Option<usize> {
    let len = isize::try_from(len).ok().filter(|&len| len > 0)?;
    usize::try_from(index.rem_euclid(len)).ok()
}

/// Returns the target id of a same-page fragment link (`"#intro"` → `"intro"`).
///
/// Returns `None` for external links and for the bare `"#"`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Immutable map from slide id to slide index.
///
/// Built once from the slides' declared ids. Slides without an id are not
/// addressable by name. When two slides declare the same id, the first one
/// keeps it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideRegistry {
    ids: BTreeMap<String, usize>,
}

impl SlideRegistry {
    /// Builds a registry from slide ids in slide order.
    pub fn from_ids<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        let mut map = BTreeMap::new();
        for (index, id) in ids.into_iter().enumerate() {
            if let Some(id) = id.filter(|id| !id.is_empty()) {
                map.entry(id).or_insert(index);
            }
        }
        Self { ids: map }
    }

    /// Returns the index of the slide declaring `id`.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.get(id).copied()
    }

    /// Resolves a fragment link (`"#id"`) to a slide index.
    #[must_use]
    pub fn resolve_href(&self, href: &str) -> Option<usize> {
        fragment_target(href).and_then(|id| self.index_of(id))
    }

    /// Returns the number of named slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when no slide declared an id.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;
    use alloc::vec;

    use super::*;

    #[test]
    fn wrap_matches_euclidean_remainder() {
        for len in 1..=7_usize {
            for index in -20..=20_isize {
                let n = len as isize;
                let expected = ((index % n) + n) % n;
                assert_eq!(
                    wrap_index(index, len),
                    Some(expected as usize),
                    "index {index} with {len} slides"
                );
            }
        }
    }

    #[test]
    fn wrap_edges() {
        assert_eq!(wrap_index(-1, 5), Some(4));
        assert_eq!(wrap_index(5, 5), Some(0));
        assert_eq!(wrap_index(2, 5), Some(2));
        assert_eq!(wrap_index(0, 0), None);
        assert_eq!(wrap_index(-1, 1), Some(0));
    }

    #[test]
    fn fragment_targets() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("https://example.com/#about"), None);
        assert_eq!(fragment_target("/contact"), None);
    }

    #[test]
    fn registry_skips_anonymous_slides() {
        let reg = SlideRegistry::from_ids(vec![
            Some("intro".to_string()),
            None,
            Some(String::new()),
            Some("pricing".to_string()),
        ]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.index_of("intro"), Some(0));
        assert_eq!(reg.index_of("pricing"), Some(3));
        assert_eq!(reg.index_of(""), None);
    }

    #[test]
    fn registry_first_duplicate_wins() {
        let reg = SlideRegistry::from_ids(vec![
            Some("a".to_string()),
            Some("a".to_string()),
        ]);
        assert_eq!(reg.index_of("a"), Some(0));
    }

    #[test]
    fn resolve_href_only_accepts_known_fragments() {
        let reg = SlideRegistry::from_ids(vec![Some("team".to_string())]);
        assert_eq!(reg.resolve_href("#team"), Some(0));
        assert_eq!(reg.resolve_href("#missing"), None);
        assert_eq!(reg.resolve_href("team"), None);
    }
}
