use crate::model::Event;
use crate::storage::LocalStorage;
use anyhow::Result;

/// CRUD over the stored collection. Every mutation has the same shape:
/// take the file lock, load what is on disk, change it in memory, write
/// the whole collection back. Callers re-render from a fresh load.
pub struct EventStore;

impl EventStore {
    pub fn load() -> Result<Vec<Event>> {
        LocalStorage::load()
    }

    /// Transactional modification of the stored collection.
    /// Locks -> Loads -> Applies Closure -> Saves -> Unlocks.
    pub fn modify<F>(f: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<Event>),
    {
        if let Some(path) = LocalStorage::get_path() {
            LocalStorage::with_lock(&path, || {
                let mut events = LocalStorage::load()?;
                f(&mut events);
                let json = serde_json::to_string_pretty(&events)?;
                LocalStorage::atomic_write(&path, json)?;
                Ok(())
            })?;
        }
        Ok(())
    }

    /// Append an event. A blank name or date is dropped silently; the
    /// input layer already refuses those, this keeps the store honest on
    /// its own.
    pub fn create(mut event: Event) -> Result<()> {
        event.name = event.name.trim().to_string();
        if event.name.is_empty() || event.date.is_empty() {
            return Ok(());
        }
        Self::modify(|events| events.push(event))
    }

    /// Replace the record at `index`. Same validation as create; an index
    /// that no longer exists is a silent no-op.
    pub fn update(index: usize, mut event: Event) -> Result<()> {
        event.name = event.name.trim().to_string();
        if event.name.is_empty() || event.date.is_empty() {
            return Ok(());
        }
        Self::modify(|events| {
            if index < events.len() {
                events[index] = event;
            }
        })
    }

    /// Remove the record at `index`, shifting the rest left. Out of range
    /// is a no-op.
    pub fn delete(index: usize) -> Result<()> {
        Self::modify(|events| {
            if index < events.len() {
                events.remove(index);
            }
        })
    }

    /// Swap in a whole new collection (import). The previous content is
    /// discarded without being read.
    pub fn replace_all(events: Vec<Event>) -> Result<()> {
        LocalStorage::save(&events)
    }
}
