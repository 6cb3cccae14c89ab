use iced::widget::image;

use super::data::ImageRecord;

/// The ordered working set of search results currently on screen.
///
/// Records keep the order the server returned them in, and ids are
/// unique within one list. The whole set is replaced on every
/// successful search; save/delete act on individual records in place.
/// Nothing here is persisted — the list dies with the window.
#[derive(Debug, Clone, Default)]
pub struct ResultList {
    records: Vec<ImageRecord>,
}

impl ResultList {
    /// Create an empty result list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the current set
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there is nothing to show (welcome view)
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in server response order
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Replace the whole set with a fresh batch of results.
    ///
    /// Response order is preserved. Duplicate ids within one batch are
    /// collapsed to their first occurrence, keeping the id-uniqueness
    /// invariant.
    pub fn replace(&mut self, batch: Vec<ImageRecord>) {
        self.records.clear();
        for record in batch {
            if !self.records.iter().any(|r| r.id == record.id) {
                self.records.push(record);
            }
        }
    }

    /// Mark the record with the given id as saved.
    ///
    /// Idempotent: saving an already-saved record changes nothing.
    /// Returns the record so the caller can build a notification from
    /// its description, or None if no record matches.
    pub fn save(&mut self, id: &str) -> Option<&ImageRecord> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.saved = true;
        Some(record)
    }

    /// Remove the record with the given id.
    ///
    /// Returns true if a record was actually removed. Removing an
    /// unknown id leaves the list unchanged.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < before
    }

    /// Attach downloaded thumbnail pixels to the matching record.
    ///
    /// Thumbnails arrive asynchronously; by the time one lands its
    /// record may have been deleted or the list replaced by a newer
    /// search. A miss is silently ignored and reported as false.
    pub fn attach_thumbnail(&mut self, id: &str, handle: image::Handle) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.thumbnail = Some(handle);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unsplash::models::PhotoUrls;

    fn record(id: &str) -> ImageRecord {
        ImageRecord {
            id: id.to_string(),
            description: None,
            urls: PhotoUrls::default(),
            saved: false,
            thumbnail: None,
        }
    }

    #[test]
    fn test_replace_keeps_response_order() {
        let mut list = ResultList::new();
        list.replace(vec![record("a"), record("b"), record("c")]);

        let ids: Vec<&str> = list.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(list.records().iter().all(|r| !r.saved));
    }

    #[test]
    fn test_replace_collapses_duplicate_ids() {
        let mut list = ResultList::new();
        let mut dup = record("a");
        dup.description = Some("second".to_string());
        list.replace(vec![record("a"), record("b"), dup]);

        assert_eq!(list.len(), 2);
        // First occurrence wins
        assert_eq!(list.records()[0].description, None);
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut list = ResultList::new();
        list.replace(vec![record("a"), record("b")]);

        assert!(list.save("a").is_some());
        assert!(list.save("a").is_some());

        assert_eq!(list.len(), 2);
        assert!(list.records()[0].saved);
        assert!(!list.records()[1].saved);
    }

    #[test]
    fn test_save_unknown_id_is_a_noop() {
        let mut list = ResultList::new();
        list.replace(vec![record("a")]);

        assert!(list.save("nope").is_none());
        assert!(!list.records()[0].saved);
    }

    #[test]
    fn test_remove_takes_exactly_one_record() {
        let mut list = ResultList::new();
        list.replace(vec![record("a"), record("b")]);

        assert!(list.remove("b"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.records()[0].id, "a");

        // Unknown id leaves the list unchanged
        assert!(!list.remove("b"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_removing_everything_yields_the_empty_view() {
        let mut list = ResultList::new();
        list.replace(vec![record("a"), record("b")]);

        list.remove("a");
        list.remove("b");

        assert!(list.is_empty());
    }

    #[test]
    fn test_attach_thumbnail_ignores_vanished_records() {
        let mut list = ResultList::new();
        list.replace(vec![record("a")]);

        let handle = image::Handle::from_bytes(vec![0u8; 4]);
        assert!(list.attach_thumbnail("a", handle.clone()));
        assert!(list.records()[0].thumbnail.is_some());

        list.remove("a");
        assert!(!list.attach_thumbnail("a", handle));
    }
}
