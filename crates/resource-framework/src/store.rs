//! # Collection Store
//!
//! The in-memory collection owned by a single `ResourceActor`. Records are kept in insertion
//! order and found by a linear scan on their id.
//!
//! Ids are allocated as `max(existing) + 1`, so new records always carry an id larger than
//! anything already present and insertion order coincides with id order.

use crate::entity::{ActorEntity, SequentialId};
use crate::error::FrameworkError;
use std::num::NonZeroUsize;

/// An ordered, in-memory collection of records of one resource type.
#[derive(Debug, Clone)]
pub struct CollectionStore<T: ActorEntity> {
    records: Vec<T>,
}

impl<T: ActorEntity> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> CollectionStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The id the next created record receives. An empty store starts at `T::Id::first()`.
    pub fn next_id(&self) -> T::Id {
        self.records
            .iter()
            .map(ActorEntity::id)
            .max()
            .map_or_else(T::Id::first, SequentialId::successor)
    }

    /// Appends `record`. Fails if its id is already taken.
    pub fn insert(&mut self, record: T) -> Result<(), FrameworkError> {
        let id = record.id();
        if self.position(&id).is_some() {
            return Err(FrameworkError::DuplicateId(id.to_string()));
        }
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == *id)
    }

    /// The first `limit` records, or every record when `limit` is `None`.
    pub fn list(&self, limit: Option<NonZeroUsize>) -> &[T] {
        match limit {
            Some(limit) => &self.records[..limit.get().min(self.records.len())],
            None => &self.records,
        }
    }

    /// Runs `mutator` against the stored record. `None` if the id is unknown.
    pub fn update_in_place<R>(&mut self, id: &T::Id, mutator: impl FnOnce(&mut T) -> R) -> Option<R> {
        let position = self.position(id)?;
        Some(mutator(&mut self.records[position]))
    }

    /// Removes and returns the record. `None` if the id is unknown.
    pub fn delete(&mut self, id: &T::Id) -> Option<T> {
        let position = self.position(id)?;
        Some(self.records.remove(position))
    }

    /// Empties the store, returning how many records were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct NoteId(u32);

    impl fmt::Display for NoteId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl SequentialId for NoteId {
        fn first() -> Self {
            NoteId(1)
        }

        fn successor(self) -> Self {
            NoteId(self.0 + 1)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: NoteId,
        text: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note error")]
    struct NoteError;

    impl ActorEntity for Note {
        type Id = NoteId;
        type Create = String;
        type Update = String;
        type Query = ();
        type QueryResult = usize;
        type Context = ();
        type Error = NoteError;

        fn id(&self) -> NoteId {
            self.id
        }

        fn from_create_params(id: NoteId, text: String) -> Result<Self, NoteError> {
            Ok(Self { id, text })
        }

        fn on_update(&mut self, text: String) -> Result<(), NoteError> {
            self.text = text;
            Ok(())
        }

        fn query(records: &[Self], _: ()) -> usize {
            records.len()
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id: NoteId(id),
            text: text.to_string(),
        }
    }

    fn store_with(ids: &[u32]) -> CollectionStore<Note> {
        let mut store = CollectionStore::new();
        for &id in ids {
            store.insert(note(id, "n")).unwrap();
        }
        store
    }

    #[test]
    fn next_id_starts_at_one_on_empty_store() {
        let store = CollectionStore::<Note>::new();
        assert_eq!(store.next_id(), NoteId(1));
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        let store = store_with(&[4, 2, 9, 3]);
        assert_eq!(store.next_id(), NoteId(10));
    }

    #[test]
    fn next_id_reuses_a_deleted_maximum() {
        let mut store = store_with(&[1, 2, 3]);
        store.delete(&NoteId(3)).unwrap();
        assert_eq!(store.next_id(), NoteId(3));
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let mut store = store_with(&[1]);
        let err = store.insert(note(1, "again")).unwrap_err();
        assert!(matches!(err, FrameworkError::DuplicateId(id) if id == "1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_truncates_to_limit_in_insertion_order() {
        let store = store_with(&[5, 1, 3]);
        let ids: Vec<_> = store
            .list(NonZeroUsize::new(2))
            .iter()
            .map(|n| n.id.0)
            .collect();
        assert_eq!(ids, vec![5, 1]);
    }

    #[test]
    fn list_with_limit_beyond_size_returns_everything() {
        let store = store_with(&[1, 2]);
        assert_eq!(store.list(NonZeroUsize::new(10)).len(), 2);
        assert_eq!(store.list(None).len(), 2);
    }

    #[test]
    fn update_in_place_mutates_only_the_target() {
        let mut store = store_with(&[1, 2]);
        let result = store.update_in_place(&NoteId(2), |n| {
            n.text = "edited".into();
            n.id
        });
        assert_eq!(result, Some(NoteId(2)));
        assert_eq!(store.get(&NoteId(2)).unwrap().text, "edited");
        assert_eq!(store.get(&NoteId(1)).unwrap().text, "n");
    }

    #[test]
    fn update_in_place_on_unknown_id_is_none() {
        let mut store = store_with(&[1]);
        assert!(store.update_in_place(&NoteId(7), |_| ()).is_none());
    }

    #[test]
    fn delete_unknown_id_leaves_store_unchanged() {
        let mut store = store_with(&[1, 2]);
        assert!(store.delete(&NoteId(3)).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_reports_removed_count() {
        let mut store = store_with(&[1, 2, 3]);
        assert_eq!(store.clear(), 3);
        assert!(store.is_empty());
        assert_eq!(store.next_id(), NoteId(1));
    }
}
