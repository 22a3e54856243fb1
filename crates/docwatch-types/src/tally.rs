//! Insertion-ordered value counts
//!
//! Serialized as a JSON object whose keys keep the order in which each
//! distinct value was first seen.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueTally {
    entries: Vec<(String, usize)>,
}

impl ValueTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `value`
    pub fn record(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value, 1)),
        }
    }

    /// Number of distinct values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, value: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, count)| *count)
    }

    /// Total occurrences across all values
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(v, _)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(v, count)| (v.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<S> for ValueTally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = ValueTally::new();
        for value in iter {
            tally.record(value);
        }
        tally
    }
}

impl Serialize for ValueTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (value, count) in &self.entries {
            map.serialize_entry(value, count)?;
        }
        map.end()
    }
}

struct ValueTallyVisitor;

impl<'de> Visitor<'de> for ValueTallyVisitor {
    type Value = ValueTally;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of value to occurrence count")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries: Vec<(String, usize)> = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((value, count)) = access.next_entry::<String, usize>()? {
            match entries.iter_mut().find(|(v, _)| *v == value) {
                Some(entry) => entry.1 = count,
                None => entries.push((value, count)),
            }
        }
        Ok(ValueTally { entries })
    }
}

impl<'de> Deserialize<'de> for ValueTally {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ValueTallyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_in_first_seen_order() {
        let tally: ValueTally = ["right", "left", "right", "left", "right"]
            .into_iter()
            .collect();

        let entries: Vec<_> = tally.iter().collect();
        assert_eq!(entries, vec![("right", 3), ("left", 2)]);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.total(), 5);
    }

    #[test]
    fn test_get_missing_value() {
        let tally: ValueTally = ["breast"].into_iter().collect();
        assert_eq!(tally.get("breast"), Some(1));
        assert_eq!(tally.get("lung"), None);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let tally: ValueTally = ["50.0", "48.0", "50.0"].into_iter().collect();
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"{"50.0":2,"48.0":1}"#);
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        // "zeta" sorts after "alpha"; the wire order must still win
        let tally: ValueTally = serde_json::from_str(r#"{"zeta": 1, "alpha": 4}"#).unwrap();
        let keys: Vec<_> = tally.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(tally.get("alpha"), Some(4));
    }

    #[test]
    fn test_empty_tally() {
        let tally = ValueTally::new();
        assert!(tally.is_empty());
        assert_eq!(serde_json::to_string(&tally).unwrap(), "{}");
    }
}
