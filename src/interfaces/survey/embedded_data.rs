use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::EmbeddedDataStore;

/// Embedded data kept in memory, in write order
#[derive(Debug, Default, Clone)]
pub struct MemoryEmbeddedData {
    entries: Vec<(String, String)>,
}

impl MemoryEmbeddedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Key-to-value view, last write wins
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries.iter().cloned().collect()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A JSON object in write order
impl Serialize for MemoryEmbeddedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

impl EmbeddedDataStore for MemoryEmbeddedData {
    fn set(&mut self, key: &str, value: &str) {
        self.entries.push((key.to_string(), value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut data = MemoryEmbeddedData::new();
        data.set("S1_Title", "first");
        data.set("S1_Title", "second");
        assert_eq!(data.get("S1_Title"), Some("second"));
        assert_eq!(data.to_map().len(), 1);
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_json_is_an_object() {
        let mut data = MemoryEmbeddedData::new();
        data.set("S1_Cue", "C1");
        let json: serde_json::Value =
            serde_json::from_str(&data.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["S1_Cue"], "C1");
    }

    #[test]
    fn test_json_keeps_slot_order() {
        let mut data = MemoryEmbeddedData::new();
        data.set("S2_Title", "b");
        data.set("S10_Title", "c");
        let json = data.to_json_pretty().unwrap();
        assert!(json.find("S2_Title").unwrap() < json.find("S10_Title").unwrap());
    }
}
