//! Generic in-memory record collection
//!
//! Backs one entity type with a map keyed by a store-assigned integer id.
//! Ids are monotonic and never reused, even after deletes. Reads hand out
//! snapshot clones so callers never observe later writes through them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;

/// Storage errors surfaced to the controllers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    /// The record targeted by an update was not there anymore. Without real
    /// version tracking, "changed since load" and "gone" are the same case.
    #[error("record changed since load")]
    ConcurrencyConflict,
}

/// A record that can live in a [`Collection`]
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

/// In-memory collection of one record type
pub struct Collection<T: Record> {
    records: RwLock<HashMap<i32, T>>,
    next_id: AtomicI32,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl<T: Record> Collection<T> {
    /// Snapshot of all records, ordered by id
    pub async fn list(&self) -> Vec<T> {
        let records = self.records.read().await;
        let mut all: Vec<T> = records.values().cloned().collect();
        all.sort_by_key(Record::id);
        all
    }

    /// Snapshot of a single record
    pub async fn get(&self, id: i32) -> Option<T> {
        self.records.read().await.get(&id).cloned()
    }

    /// Persist a new record, assigning the next id. Any client-supplied id
    /// is overwritten.
    pub async fn add(&self, mut record: T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        record.set_id(id);
        self.records.write().await.insert(id, record.clone());
        record
    }

    /// Replace an existing record by its id
    pub async fn update(&self, record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        match records.get_mut(&record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(StoreError::ConcurrencyConflict),
        }
    }

    /// Remove a record by id
    pub async fn remove(&self, id: i32) -> Result<(), StoreError> {
        match self.records.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i32,
        body: String,
    }

    impl Record for Note {
        fn id(&self) -> i32 {
            self.id
        }
        fn set_id(&mut self, id: i32) {
            self.id = id;
        }
    }

    fn note(body: &str) -> Note {
        Note { id: 0, body: body.to_string() }
    }

    #[tokio::test]
    async fn add_assigns_ids_starting_at_one() {
        let collection = Collection::default();
        let first = collection.add(note("a")).await;
        let second = collection.add(note("b")).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn add_overwrites_client_supplied_id() {
        let collection = Collection::default();
        let stored = collection.add(Note { id: 99, body: "x".to_string() }).await;
        assert_eq!(stored.id, 1);
        assert!(collection.get(99).await.is_none());
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_removal() {
        let collection = Collection::default();
        let first = collection.add(note("a")).await;
        collection.remove(first.id).await.unwrap();
        let second = collection.add(note("b")).await;
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn get_returns_snapshot_unaffected_by_later_writes() {
        let collection = Collection::default();
        let stored = collection.add(note("before")).await;
        let snapshot = collection.get(stored.id).await.unwrap();
        collection
            .update(Note { id: stored.id, body: "after".to_string() })
            .await
            .unwrap();
        assert_eq!(snapshot.body, "before");
        assert_eq!(collection.get(stored.id).await.unwrap().body, "after");
    }

    #[tokio::test]
    async fn update_of_missing_record_is_a_conflict() {
        let collection: Collection<Note> = Collection::default();
        let result = collection.update(Note { id: 42, body: "x".to_string() }).await;
        assert_eq!(result.unwrap_err(), StoreError::ConcurrencyConflict);
    }

    #[tokio::test]
    async fn remove_of_missing_record_is_not_found() {
        let collection: Collection<Note> = Collection::default();
        assert_eq!(collection.remove(7).await.unwrap_err(), StoreError::NotFound);
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let collection = Collection::default();
        for body in ["a", "b", "c"] {
            collection.add(note(body)).await;
        }
        collection.remove(2).await.unwrap();
        collection.add(note("d")).await;
        let ids: Vec<i32> = collection.list().await.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    proptest! {
        /// Every assigned id is unique and strictly increasing, whatever the
        /// interleaving of adds and removes.
        #[test]
        fn prop_assigned_ids_unique_and_monotonic(ops in prop::collection::vec(any::<bool>(), 1..200)) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            rt.block_on(async {
                let collection = Collection::default();
                let mut assigned = Vec::new();
                for add in ops {
                    if add || assigned.is_empty() {
                        let stored = collection.add(note("n")).await;
                        prop_assert!(assigned.last().map_or(true, |last| stored.id > *last));
                        assigned.push(stored.id);
                    } else {
                        // Remove the oldest live record; its id must not come back
                        let live = collection.list().await;
                        if let Some(first) = live.first() {
                            collection.remove(first.id).await.unwrap();
                        }
                    }
                }
                let mut unique = assigned.clone();
                unique.dedup();
                prop_assert_eq!(unique, assigned);
                Ok(())
            })?;
        }
    }
}
