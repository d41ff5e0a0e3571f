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

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered set of CSS declarations keyed by React-style (camelCase)
/// property names, e.g. `{ fontWeight: "bold" }`.
///
/// Declaration order is kept, and serializes as a JSON object in that
/// order. Inserting an existing property replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CssProperties(Vec<(String, String)>);

impl CssProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`CssProperties::insert`].
    pub fn with(
        mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.insert(property, value);
        self
    }

    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        let property = property.into();
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.0.push((property, value)),
        }
    }

    /// Insert every declaration of `other`, later values winning.
    pub fn extend(&mut self, other: &Self) {
        for (property, value) in other.iter() {
            self.insert(property, value);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for CssProperties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut css = Self::new();
        for (property, value) in iter {
            css.insert(property, value);
        }
        css
    }
}

impl Serialize for CssProperties {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (property, value) in self.iter() {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CssProperties {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CssVisitor;

        impl<'de> Visitor<'de> for CssVisitor {
            type Value = CssProperties;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CSS property names to values")
            }

            fn visit_map<A>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut css = CssProperties::new();
                while let Some((property, value)) =
                    access.next_entry::<String, String>()?
                {
                    css.insert(property, value);
                }
                Ok(css)
            }
        }

        deserializer.deserialize_map(CssVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::CssProperties;

    #[test]
    fn insert_replaces_in_place() {
        let css = CssProperties::new()
            .with("color", "red")
            .with("fontSize", "12px")
            .with("color", "blue");
        assert_eq!(
            css.iter().collect::<Vec<_>>(),
            vec![("color", "blue"), ("fontSize", "12px")]
        );
    }

    #[test]
    fn serializes_in_declaration_order() {
        let css = CssProperties::new()
            .with("fontStyle", "italic")
            .with("backgroundColor", "Yellow");
        assert_eq!(
            serde_json::to_string(&css).unwrap(),
            r#"{"fontStyle":"italic","backgroundColor":"Yellow"}"#
        );
    }

    #[test]
    fn deserializes_from_a_json_object() {
        let css: CssProperties =
            serde_json::from_str(r#"{"fontWeight":"bold","color":"red"}"#)
                .unwrap();
        assert_eq!(css.get("fontWeight"), Some("bold"));
        assert_eq!(css.len(), 2);
    }
}
