//! In-memory record store with soft delete and page-windowed reads.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::model::{Record, RecordFields};
use super::pagination::{Page, PaginationInfo};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// An ordered, in-memory collection of records, most recent first.
///
/// Records are never physically removed: [`RecordStore::soft_delete`] moves
/// them to the deleted status, and the listing/paging methods skip them.
#[derive(Debug, Clone)]
pub struct RecordStore<F: RecordFields> {
    records: Vec<Record<F>>,
    current_page: usize,
    items_per_page: usize,
}

impl<F: RecordFields> Default for RecordStore<F> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl<F: RecordFields> RecordStore<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records` in the given order.
    pub fn with_records(records: Vec<Record<F>>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Replaces every record (re-seeding). Paging state is kept.
    pub fn replace_all(&mut self, records: Vec<Record<F>>) {
        self.records = records;
    }

    /// All records, deleted ones included, in store order.
    pub fn records(&self) -> &[Record<F>] {
        &self.records
    }

    /// Creates a record from `form` and puts it at the front of the store.
    pub fn create(&mut self, form: F, actor: &str) -> Record<F> {
        let now = Utc::now();
        let record = Record {
            id: self.fresh_id(),
            fields: form,
            created_at: now,
            created_by: actor.to_string(),
            updated_at: now,
            updated_by: actor.to_string(),
        };
        debug!(entity = F::ENTITY, id = %record.id, actor, "record created");
        self.records.insert(0, record.clone());
        record
    }

    /// Replaces the mutable fields of the record `id`.
    ///
    /// Returns `None` and changes nothing when `id` is unknown.
    pub fn update(&mut self, id: &str, form: F, actor: &str) -> Option<Record<F>> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.fields = form;
        record.updated_at = Utc::now();
        record.updated_by = actor.to_string();
        debug!(entity = F::ENTITY, id, actor, "record updated");
        Some(record.clone())
    }

    /// Moves the record `id` to the deleted status. No-op for unknown ids.
    pub fn soft_delete(&mut self, id: &str, actor: &str) {
        let Some(existing) = self.find_by_id(id) else {
            return;
        };
        let mut form = existing.fields.clone();
        form.set_status(F::DELETED);
        self.update(id, form, actor);
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Record<F>> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records that are not soft-deleted, in store order.
    pub fn list_active(&self) -> Vec<&Record<F>> {
        self.records.iter().filter(|r| !r.is_deleted()).collect()
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_deleted()).count()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Moves to `page` if it lies in `[1, total_pages]`.
    ///
    /// Out-of-range requests are ignored and return `false`.
    pub fn set_current_page(&mut self, page: usize) -> bool {
        let total_pages = self.pagination_info().total_pages;
        if page >= 1 && page <= total_pages {
            self.current_page = page;
            true
        } else {
            debug!(
                entity = F::ENTITY,
                page, total_pages, "ignoring out-of-range page request"
            );
            false
        }
    }

    /// Sets the page size. Zero is rejected.
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> bool {
        if items_per_page == 0 {
            return false;
        }
        self.items_per_page = items_per_page;
        true
    }

    pub fn pagination_info(&self) -> PaginationInfo {
        PaginationInfo::compute(self.current_page, self.items_per_page, self.active_count())
    }

    /// Active records in the current page window.
    pub fn current_page_items(&self) -> Vec<&Record<F>> {
        let active = self.list_active();
        let (start, end) = self.pagination_info().slice_bounds(active.len());
        active[start..end].to_vec()
    }

    /// Sets the page size, requests page `index`, and returns the current page.
    ///
    /// An `index` outside `[1, total_pages]` leaves the current page unchanged.
    pub fn page(&mut self, index: usize, page_size: usize) -> Page<'_, F> {
        self.set_items_per_page(page_size);
        self.set_current_page(index);
        Page {
            items: self.current_page_items(),
            info: self.pagination_info(),
        }
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.find_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DEFAULT_ACTOR;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum NoteStatus {
        Open,
        Deleted,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        text: String,
        status: NoteStatus,
    }

    impl RecordFields for Note {
        type Status = NoteStatus;
        const ENTITY: &'static str = "note";
        const DELETED: NoteStatus = NoteStatus::Deleted;

        fn status(&self) -> NoteStatus {
            self.status
        }

        fn set_status(&mut self, status: NoteStatus) {
            self.status = status;
        }
    }

    fn note(text: &str) -> Note {
        Note {
            text: text.to_string(),
            status: NoteStatus::Open,
        }
    }

    fn store_with(count: usize) -> RecordStore<Note> {
        let mut store = RecordStore::new();
        // Created in reverse so that "note 1" ends up first.
        for i in (1..=count).rev() {
            store.create(note(&format!("note {}", i)), DEFAULT_ACTOR);
        }
        store
    }

    fn texts(records: &[&Record<Note>]) -> Vec<String> {
        records.iter().map(|r| r.fields.text.clone()).collect()
    }

    #[test]
    fn test_create_then_find() {
        let mut store = RecordStore::new();
        let created = store.create(note("buy milk"), "hanako");

        assert_eq!(store.find_by_id(&created.id), Some(&created));
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(created.created_by, "hanako");
        assert_eq!(created.updated_by, "hanako");
    }

    #[test]
    fn test_create_prepends_and_ids_are_unique() {
        let mut store = RecordStore::new();
        let first = store.create(note("first"), DEFAULT_ACTOR);
        let second = store.create(note("second"), DEFAULT_ACTOR);

        assert_eq!(store.records()[0].id, second.id);
        assert_eq!(store.records()[1].id, first.id);

        let mut store = store_with(50);
        let ids: HashSet<String> = store.records().iter().map(|r| r.id.clone()).collect();
        let created = store.create(note("one more"), DEFAULT_ACTOR);
        assert!(!ids.contains(&created.id));
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_creation_stamp() {
        let mut store = RecordStore::new();
        let created = store.create(note("draft"), "taro");

        let updated = store
            .update(&created.id, note("final"), "hanako")
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fields.text, "final");
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.created_by, "taro");
        assert_eq!(updated.updated_by, "hanako");
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.find_by_id(&created.id), Some(&updated));
    }

    #[test]
    fn test_update_unknown_id_changes_nothing() {
        let mut store = store_with(3);
        let before = store.records().to_vec();

        assert!(store.update("missing", note("x"), DEFAULT_ACTOR).is_none());
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_soft_delete_hides_but_keeps_record() {
        let mut store = RecordStore::new();
        let created = store.create(note("temporary"), "taro");

        store.soft_delete(&created.id, "hanako");

        assert!(store.list_active().is_empty());
        let deleted = store.find_by_id(&created.id).unwrap();
        assert!(deleted.is_deleted());
        assert_eq!(deleted.fields.text, "temporary");
        assert_eq!(deleted.created_by, "taro");
        assert_eq!(deleted.updated_by, "hanako");
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn test_soft_delete_unknown_id_is_noop() {
        let mut store = store_with(2);
        let before = store.records().to_vec();
        store.soft_delete("missing", DEFAULT_ACTOR);
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_pages_of_25_records() {
        let mut store = store_with(25);

        let page = store.page(1, 10);
        assert_eq!(page.info.total_pages, 3);
        assert_eq!(page.info.end_item, 10);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].fields.text, "note 1");

        let page = store.page(3, 10);
        assert_eq!(page.info.current_page, 3);
        assert_eq!(page.info.start_item, 21);
        assert_eq!(page.info.end_item, 25);
        assert_eq!(
            texts(&page.items),
            (21..=25).map(|i| format!("note {}", i)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut store = store_with(25);
        store.page(2, 10);

        assert_eq!(store.page(0, 10).info.current_page, 2);
        assert_eq!(store.page(4, 10).info.current_page, 2);
        assert!(!store.set_current_page(99));
        assert_eq!(store.current_page(), 2);
    }

    #[test]
    fn test_paging_skips_deleted_records() {
        let mut store = store_with(12);
        let ids: Vec<String> = store.records().iter().take(2).map(|r| r.id.clone()).collect();
        for id in &ids {
            store.soft_delete(id, DEFAULT_ACTOR);
        }

        let page = store.page(1, 10);
        assert_eq!(page.info.total_items, 10);
        assert_eq!(page.info.total_pages, 1);
        assert_eq!(page.items[0].fields.text, "note 3");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let mut store = store_with(5);
        assert!(!store.set_items_per_page(0));
        assert_eq!(store.items_per_page(), DEFAULT_ITEMS_PER_PAGE);
        assert_eq!(store.page(1, 0).info.items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn test_empty_store_page() {
        let mut store: RecordStore<Note> = RecordStore::new();
        let page = store.page(1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.info.total_pages, 0);
        assert_eq!(page.info.current_page, 1);
    }
}
