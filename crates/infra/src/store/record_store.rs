use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use wms_core::{DomainError, DomainResult, Entity, RecordId};

/// Storage error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str, id: RecordId },
    #[error("{0} store lock poisoned")]
    Poisoned(&'static str),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A collection of records of one kind.
///
/// Writers get exclusive access for the duration of one call; nothing
/// spans calls, so a read-modify-write across two requests can interleave.
pub trait RecordStore<T>: Send + Sync {
    fn get(&self, id: RecordId) -> Result<Option<T>, StoreError>;

    /// All records in insertion order.
    fn list(&self) -> Result<Vec<T>, StoreError>;

    /// Allocate the next id and store the record `build` makes from it.
    /// The id is not consumed when `build` fails.
    fn insert_with<F>(&self, build: F) -> Result<T, StoreError>
    where
        F: FnOnce(RecordId) -> DomainResult<T>;

    /// Run `mutate` on a copy of the record and commit it only on success.
    fn update<F>(&self, id: RecordId, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T) -> DomainResult<()>;

    fn remove(&self, id: RecordId) -> Result<T, StoreError>;

    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl<T, S> RecordStore<T> for Arc<S>
where
    S: RecordStore<T>,
{
    fn get(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        (**self).get(id)
    }

    fn list(&self) -> Result<Vec<T>, StoreError> {
        (**self).list()
    }

    fn insert_with<F>(&self, build: F) -> Result<T, StoreError>
    where
        F: FnOnce(RecordId) -> DomainResult<T>,
    {
        (**self).insert_with(build)
    }

    fn update<F>(&self, id: RecordId, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T) -> DomainResult<()>,
    {
        (**self).update(id, mutate)
    }

    fn remove(&self, id: RecordId) -> Result<T, StoreError> {
        (**self).remove(id)
    }

    fn len(&self) -> Result<usize, StoreError> {
        (**self).len()
    }
}

#[derive(Debug)]
struct Records<T> {
    rows: Vec<T>,
    next_id: u64,
}

/// In-memory collection behind one `RwLock`.
///
/// Ids grow monotonically from 1 (or from one past the highest seeded id)
/// and are never reused after a delete.
#[derive(Debug)]
pub struct InMemoryRecordStore<T> {
    inner: RwLock<Records<T>>,
}

impl<T: Entity> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Start from existing records.
    pub fn seeded(rows: Vec<T>) -> Self {
        let next_id = rows.iter().map(|r| r.id().get()).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Records { rows, next_id }),
        }
    }

    pub fn arc(rows: Vec<T>) -> Arc<Self> {
        Arc::new(Self::seeded(rows))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records<T>>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned(T::RESOURCE))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records<T>>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned(T::RESOURCE))
    }

    fn not_found(id: RecordId) -> StoreError {
        StoreError::NotFound {
            resource: T::RESOURCE,
            id,
        }
    }
}

impl<T: Entity> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordStore<T> for InMemoryRecordStore<T>
where
    T: Entity + Clone + Send + Sync + 'static,
{
    fn get(&self, id: RecordId) -> Result<Option<T>, StoreError> {
        let records = self.read()?;
        Ok(records.rows.iter().find(|r| r.id() == id).cloned())
    }

    fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.read()?.rows.clone())
    }

    fn insert_with<F>(&self, build: F) -> Result<T, StoreError>
    where
        F: FnOnce(RecordId) -> DomainResult<T>,
    {
        let mut records = self.write()?;
        let id = RecordId::new(records.next_id);
        let record = build(id)?;
        if record.id() != id {
            return Err(DomainError::invariant(format!(
                "{} built with id {} instead of {id}",
                T::RESOURCE,
                record.id()
            ))
            .into());
        }
        records.next_id += 1;
        records.rows.push(record.clone());
        tracing::debug!(resource = T::RESOURCE, %id, "record inserted");
        Ok(record)
    }

    fn update<F>(&self, id: RecordId, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T) -> DomainResult<()>,
    {
        let mut records = self.write()?;
        let slot = records
            .rows
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        let mut draft = slot.clone();
        mutate(&mut draft)?;
        if draft.id() != id {
            return Err(DomainError::invariant(format!("{} id cannot change", T::RESOURCE)).into());
        }
        *slot = draft.clone();
        Ok(draft)
    }

    fn remove(&self, id: RecordId) -> Result<T, StoreError> {
        let mut records = self.write()?;
        let idx = records
            .rows
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        Ok(records.rows.remove(idx))
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: RecordId,
        text: String,
    }

    impl Entity for Note {
        const RESOURCE: &'static str = "Note";

        fn id(&self) -> RecordId {
            self.id
        }
    }

    fn note(id: u64, text: &str) -> Note {
        Note {
            id: RecordId::new(id),
            text: text.to_string(),
        }
    }

    fn add(store: &InMemoryRecordStore<Note>, text: &str) -> Note {
        store
            .insert_with(|id| {
                Ok(Note {
                    id,
                    text: text.to_string(),
                })
            })
            .unwrap()
    }

    #[test]
    fn ids_start_at_one_and_grow() {
        let store = InMemoryRecordStore::new();
        assert_eq!(add(&store, "a").id, RecordId::new(1));
        assert_eq!(add(&store, "b").id, RecordId::new(2));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn seeded_store_continues_after_highest_id() {
        let store = InMemoryRecordStore::seeded(vec![note(1, "a"), note(7, "b")]);
        assert_eq!(add(&store, "c").id, RecordId::new(8));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = InMemoryRecordStore::new();
        add(&store, "a");
        let b = add(&store, "b");
        store.remove(b.id).unwrap();
        assert_eq!(add(&store, "c").id, RecordId::new(3));
    }

    #[test]
    fn failed_build_does_not_consume_an_id() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        let err = store
            .insert_with(|_| Err(DomainError::validation("text cannot be empty")))
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(DomainError::Validation(_))));
        assert_eq!(add(&store, "a").id, RecordId::new(1));
    }

    #[test]
    fn failed_update_leaves_record_untouched() {
        let store = InMemoryRecordStore::seeded(vec![note(1, "keep")]);
        let err = store
            .update(RecordId::new(1), |n| {
                n.text = "changed".to_string();
                Err(DomainError::validation("nope"))
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Domain(_)));
        assert_eq!(store.get(RecordId::new(1)).unwrap().unwrap().text, "keep");
    }

    #[test]
    fn update_commits_on_success() {
        let store = InMemoryRecordStore::seeded(vec![note(1, "old")]);
        let updated = store
            .update(RecordId::new(1), |n| {
                n.text = "new".to_string();
                Ok(())
            })
            .unwrap();
        assert_eq!(updated.text, "new");
        assert_eq!(store.list().unwrap(), vec![note(1, "new")]);
    }

    #[test]
    fn missing_records_report_resource_name() {
        let store: InMemoryRecordStore<Note> = InMemoryRecordStore::new();
        let err = store.remove(RecordId::new(9)).unwrap_err();
        assert_eq!(err.to_string(), "Note not found");
        assert!(store.get(RecordId::new(9)).unwrap().is_none());
    }

    #[test]
    fn list_keeps_insertion_order_after_removal() {
        let store = InMemoryRecordStore::seeded(vec![note(1, "a"), note(2, "b"), note(3, "c")]);
        store.remove(RecordId::new(2)).unwrap();
        let ids: Vec<u64> = store.list().unwrap().iter().map(|n| n.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn arc_store_delegates() {
        let store = InMemoryRecordStore::arc(vec![note(1, "a")]);
        assert!(!store.is_empty().unwrap());
        assert_eq!(RecordStore::get(&store, RecordId::new(1)).unwrap(), Some(note(1, "a")));
    }
}
