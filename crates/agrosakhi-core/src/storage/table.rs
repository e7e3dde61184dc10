//! Generic record table keyed by an auto-incrementing identifier

use crate::{Result, StorageError};
use agrosakhi_types::EntityId;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// A record type that can live in a [`Table`]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Shape accepted when creating a record
    type Insert: Send;

    /// Table name, used in logs and errors
    const TABLE: &'static str;

    /// Build the full record from its insert shape
    fn materialize(id: EntityId, created_at: DateTime<Utc>, insert: Self::Insert) -> Self;

    fn id(&self) -> EntityId;
}

/// Rows keyed by id. Ids are handed out in increasing order and never
/// reused, so iterating the map yields insertion order.
pub struct Table<E> {
    inner: RwLock<Rows<E>>,
}

struct Rows<E> {
    next_id: EntityId,
    rows: BTreeMap<EntityId, E>,
}

impl<E> Rows<E> {
    fn allocate(&mut self, table: &'static str) -> Result<EntityId> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or(StorageError::IdExhausted(table))?;
        Ok(id)
    }
}

impl<E: Entity> Table<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Rows {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    pub async fn get(&self, id: EntityId) -> Option<E> {
        self.inner.read().await.rows.get(&id).cloned()
    }

    pub async fn list(&self) -> Vec<E> {
        self.inner.read().await.rows.values().cloned().collect()
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<E>
    where
        F: Fn(&E) -> bool,
    {
        self.inner
            .read()
            .await
            .rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub async fn find<F>(&self, predicate: F) -> Option<E>
    where
        F: Fn(&E) -> bool,
    {
        self.inner
            .read()
            .await
            .rows
            .values()
            .find(|row| predicate(row))
            .cloned()
    }

    /// Record with the lowest id
    pub async fn first(&self) -> Option<E> {
        self.inner
            .read()
            .await
            .rows
            .first_key_value()
            .map(|(_, row)| row.clone())
    }

    pub async fn create(&self, insert: E::Insert) -> Result<E> {
        self.insert_with(|id, created_at| E::materialize(id, created_at, insert))
            .await
    }

    /// Allocate the next id and store whatever `build` returns for it
    pub async fn insert_with<F>(&self, build: F) -> Result<E>
    where
        F: FnOnce(EntityId, DateTime<Utc>) -> E,
    {
        let mut guard = self.inner.write().await;
        Self::store(&mut guard, build)
    }

    /// Create a row unless an existing one matches `conflict`.
    ///
    /// The check and the insert share one write lock, so of several callers
    /// racing with conflicting rows only one gets `Some`.
    pub async fn create_unless<F>(&self, conflict: F, insert: E::Insert) -> Result<Option<E>>
    where
        F: Fn(&E) -> bool,
    {
        let mut guard = self.inner.write().await;
        if guard.rows.values().any(|row| conflict(row)) {
            return Ok(None);
        }
        Self::store(&mut guard, |id, created_at| E::materialize(id, created_at, insert)).map(Some)
    }

    /// Same as [`Table::insert_with`] for callers holding the table exclusively
    pub fn push<F>(&mut self, build: F) -> Result<E>
    where
        F: FnOnce(EntityId, DateTime<Utc>) -> E,
    {
        Self::store(self.inner.get_mut(), build)
    }

    fn store<F>(rows: &mut Rows<E>, build: F) -> Result<E>
    where
        F: FnOnce(EntityId, DateTime<Utc>) -> E,
    {
        let id = rows.allocate(E::TABLE)?;
        let row = build(id, Utc::now());
        debug_assert_eq!(row.id(), id);
        rows.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Run `mutate` on the row under the write lock and return the result.
    ///
    /// Read, decide and write happen under one lock acquisition, so two
    /// concurrent callers never both observe the pre-update state.
    pub async fn update<F>(&self, id: EntityId, mutate: F) -> Option<E>
    where
        F: FnOnce(&mut E),
    {
        let mut guard = self.inner.write().await;
        let row = guard.rows.get_mut(&id)?;
        mutate(row);
        debug_assert_eq!(row.id(), id);
        Some(row.clone())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<E: Entity> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}
