// ============================================================
// OUTPUT WRITER
// ============================================================
// Numbered slot entries plus the audit URL

use crate::domain::stimuli::SampledHeadline;
use crate::interfaces::survey::EmbeddedDataStore;

pub fn title_key(slot: usize) -> String {
    format!("S{}_Title", slot)
}

pub fn cue_key(slot: usize) -> String {
    format!("S{}_Cue", slot)
}

pub fn dimension_key(slot: usize) -> String {
    format!("S{}_Dimension", slot)
}

/// Entries of one load cycle, staged before anything reaches the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputEntries {
    entries: Vec<(String, String)>,
}

impl OutputEntries {
    /// Slots run 1..=slot_count. Slots past the end of the selection are
    /// written blank.
    pub fn build(
        selection: &[SampledHeadline],
        slot_count: usize,
        url_audit_key: &str,
        url_used: &str,
    ) -> Self {
        let mut entries = Vec::with_capacity(slot_count * 3 + 1);
        for slot in 1..=slot_count {
            let (title, cue, dimension) = match selection.get(slot - 1) {
                Some(item) => (
                    item.title.clone(),
                    item.cue_id.clone(),
                    item.dimension.label().to_string(),
                ),
                None => (String::new(), String::new(), String::new()),
            };
            entries.push((title_key(slot), title));
            entries.push((cue_key(slot), cue));
            entries.push((dimension_key(slot), dimension));
        }
        entries.push((url_audit_key.to_string(), url_used.to_string()));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand every entry to the store, in slot order
    pub fn write_to(&self, store: &mut dyn EmbeddedDataStore) {
        for (key, value) in &self.entries {
            store.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stimuli::Dimension;
    use crate::interfaces::survey::MemoryEmbeddedData;

    fn headline(n: usize, dimension: Dimension) -> SampledHeadline {
        SampledHeadline {
            title: format!("Headline {}", n),
            cue_id: format!("C{}", n),
            dimension,
        }
    }

    #[test]
    fn test_slots_and_audit_url() {
        let selection = vec![
            headline(1, Dimension::Engagement),
            headline(2, Dimension::Neutral),
        ];
        let entries =
            OutputEntries::build(&selection, 2, "StimuliCsvUrlUsed", "https://x/h.csv?t=1");
        assert_eq!(entries.len(), 7);

        let mut store = MemoryEmbeddedData::new();
        entries.write_to(&mut store);
        assert_eq!(store.get("S1_Title"), Some("Headline 1"));
        assert_eq!(store.get("S1_Cue"), Some("C1"));
        assert_eq!(store.get("S1_Dimension"), Some("engagement"));
        assert_eq!(store.get("S2_Dimension"), Some("neutral"));
        assert_eq!(store.get("StimuliCsvUrlUsed"), Some("https://x/h.csv?t=1"));
        assert_eq!(store.entries()[0].0, "S1_Title");
    }

    #[test]
    fn test_missing_items_write_blank_slots() {
        let selection = vec![headline(1, Dimension::Neutral)];
        let mut store = MemoryEmbeddedData::new();
        OutputEntries::build(&selection, 3, "url", "u").write_to(&mut store);
        assert_eq!(store.get("S3_Title"), Some(""));
        assert_eq!(store.get("S3_Cue"), Some(""));
        assert_eq!(store.get("S3_Dimension"), Some(""));
    }
}
