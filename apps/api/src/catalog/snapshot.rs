use chrono::{DateTime, Utc};

use crate::models::internship::InternshipRecord;

/// The immutable catalog view taken at load time. Record order is preserved
/// verbatim from the source; it defines the tie-break order of equal
/// recommendation scores downstream.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub records: Vec<InternshipRecord>,
    pub loaded_at: DateTime<Utc>,
    /// Human-readable label of where the records came from.
    pub source: String,
}

impl CatalogSnapshot {
    pub fn new(records: Vec<InternshipRecord>, source: String) -> Self {
        Self {
            records,
            loaded_at: Utc::now(),
            source,
        }
    }

    /// Looks up a record by its catalog id.
    pub fn find(&self, id: &str) -> Option<&InternshipRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_ids(ids: &[&str]) -> CatalogSnapshot {
        let records = ids
            .iter()
            .map(|id| InternshipRecord {
                id: id.to_string(),
                ..Default::default()
            })
            .collect();
        CatalogSnapshot::new(records, "test".to_string())
    }

    #[test]
    fn test_find_returns_matching_record() {
        let snapshot = snapshot_with_ids(&["a", "b", "c"]);
        assert_eq!(snapshot.find("b").map(|r| r.id.as_str()), Some("b"));
    }

    #[test]
    fn test_find_unknown_id_is_none() {
        let snapshot = snapshot_with_ids(&["a"]);
        assert!(snapshot.find("missing").is_none());
    }

    #[test]
    fn test_source_order_is_preserved() {
        let snapshot = snapshot_with_ids(&["z", "a", "m"]);
        let order: Vec<&str> = snapshot.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, ["z", "a", "m"]);
    }
}
