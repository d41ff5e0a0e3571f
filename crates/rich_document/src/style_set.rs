// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::sync::Arc;

/// An insertion-ordered set of inline style tags.
///
/// Members are unique. Adding a tag that is already present keeps it at its
/// original position; to move a tag to the end, remove it first. Iteration
/// order is insertion order, which is what "first matching style" lookups
/// rely on.
///
/// The members live behind an [`Arc`], so cloning a set (which happens for
/// every character of a rebuilt block) does not copy the strings.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    styles: Arc<Vec<String>>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn contains(&self, style: &str) -> bool {
        self.styles.iter().any(|s| s == style)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.styles.iter().map(String::as_str)
    }

    /// The first member, in insertion order, for which `pred` holds.
    pub fn first_matching<F>(&self, pred: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        self.iter().find(|s| pred(*s))
    }

    /// A set that also contains `style`.
    pub fn add(&self, style: &str) -> Self {
        if self.contains(style) {
            return self.clone();
        }
        let mut styles = Vec::with_capacity(self.len() + 1);
        styles.extend(self.styles.iter().cloned());
        styles.push(style.to_owned());
        Self {
            styles: Arc::new(styles),
        }
    }

    /// A set without `style`.
    pub fn remove(&self, style: &str) -> Self {
        if !self.contains(style) {
            return self.clone();
        }
        self.retain(|s| s != style)
    }

    /// A set holding only the members for which `keep` holds, order kept.
    pub fn retain<F>(&self, keep: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        if self.iter().all(&keep) {
            return self.clone();
        }
        Self {
            styles: Arc::new(
                self.styles
                    .iter()
                    .filter(|s| keep(s.as_str()))
                    .cloned()
                    .collect(),
            ),
        }
    }
}

impl fmt::Debug for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.styles.iter()).finish()
    }
}

impl<S> FromIterator<S> for StyleSet
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut styles: Vec<String> = Vec::new();
        for style in iter {
            let style = style.into();
            if !styles.contains(&style) {
                styles.push(style);
            }
        }
        Self {
            styles: Arc::new(styles),
        }
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, String>,
        fn(&'a String) -> &'a str,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.styles
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;

    use super::StyleSet;

    fn members(set: &StyleSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let set = StyleSet::new().add("BOLD").add("ITALIC");
        assert_eq!(members(&set), vec!["BOLD", "ITALIC"]);
    }

    #[test]
    fn adding_an_existing_member_keeps_its_position() {
        let set = StyleSet::new().add("BOLD").add("ITALIC").add("BOLD");
        assert_eq!(members(&set), vec!["BOLD", "ITALIC"]);
    }

    #[test]
    fn remove_then_add_moves_member_to_the_end() {
        let set = StyleSet::new().add("BOLD").add("ITALIC");
        let set = set.remove("BOLD").add("BOLD");
        assert_eq!(members(&set), vec!["ITALIC", "BOLD"]);
    }

    #[test]
    fn removing_a_missing_member_is_a_noop() {
        let set = StyleSet::new().add("BOLD");
        assert_eq!(set.remove("ITALIC"), set);
    }

    #[test]
    fn retain_filters_and_keeps_order() {
        let set: StyleSet =
            ["CUSTOM_COLOR_red", "BOLD", "CUSTOM_COLOR_blue", "CODE"]
                .into_iter()
                .collect();
        let kept = set.retain(|s| !s.starts_with("CUSTOM_COLOR_"));
        assert_eq!(members(&kept), vec!["BOLD", "CODE"]);
    }

    #[test]
    fn first_matching_follows_insertion_order() {
        let set: StyleSet = ["BOLD", "CUSTOM_COLOR_red", "CUSTOM_COLOR_blue"]
            .into_iter()
            .collect();
        assert_that!(set.first_matching(|s| s.starts_with("CUSTOM_")))
            .is_equal_to(Some("CUSTOM_COLOR_red"));
    }

    #[test]
    fn collecting_drops_duplicates() {
        let set: StyleSet = ["BOLD", "BOLD", "CODE"].into_iter().collect();
        assert_that!(set.len()).is_equal_to(2);
    }

    #[test]
    fn old_sets_are_unaffected_by_new_ones() {
        let before = StyleSet::new().add("BOLD");
        let after = before.add("ITALIC").remove("BOLD");
        assert_eq!(members(&before), vec!["BOLD"]);
        assert_eq!(members(&after), vec!["ITALIC"]);
    }
}
