//! Common types used across the client

use std::slice;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A string-keyed mapping that preserves the insertion order of its keys.
///
/// The prediction service groups both weather data and crop
/// recommendations by season, and the order the seasons arrive in is the
/// order they are shown in. A plain `HashMap` would lose that order, so
/// this wraps the entries in a `Vec` and deserializes JSON objects
/// entry by entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeasonMap<T>(Vec<(String, T)>);

impl<T> SeasonMap<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of seasons in the map.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a season by name.
    pub fn get(&self, season: &str) -> Option<&T> {
        self.0
            .iter()
            .find(|(name, _)| name == season)
            .map(|(_, value)| value)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, (String, T)> {
        self.0.iter()
    }

    /// Append an entry. A repeated key is kept as a separate entry, the
    /// same way `Object.entries` reflects whatever the service sent.
    pub fn insert(&mut self, season: impl Into<String>, value: T) {
        self.0.push((season.into(), value));
    }
}

impl<'a, T> IntoIterator for &'a SeasonMap<T> {
    type Item = &'a (String, T);
    type IntoIter = slice::Iter<'a, (String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> FromIterator<(String, T)> for SeasonMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Serialize> Serialize for SeasonMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (season, value) in &self.0 {
            map.serialize_entry(season, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SeasonMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SeasonMapVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for SeasonMapVisitor<T> {
            type Value = SeasonMap<T>;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map keyed by season name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(SeasonMap(entries))
            }
        }

        deserializer.deserialize_map(SeasonMapVisitor(std::marker::PhantomData))
    }
}
