//! Active heart tracking
//!
//! Owns every heart that is still falling. A heart leaves exactly once,
//! either caught or missed; whichever removal comes second is a no-op.

use std::collections::BTreeMap;

use super::state::FallingObject;
use crate::error::LifecycleError;

/// Hearts currently in play, keyed (and iterated) by id
#[derive(Debug, Clone, Default)]
pub struct ObjectTracker {
    active: BTreeMap<u32, FallingObject>,
}

impl ObjectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly spawned heart. Ids must be unique among active hearts.
    pub fn register(&mut self, object: FallingObject) -> Result<(), LifecycleError> {
        if self.active.contains_key(&object.id) {
            return Err(LifecycleError::DuplicateId(object.id));
        }
        self.active.insert(object.id, object);
        Ok(())
    }

    /// Remove a heart if it is still active. `None` means it was already gone.
    pub fn remove(&mut self, id: u32) -> Option<FallingObject> {
        self.active.remove(&id)
    }

    pub fn get(&self, id: u32) -> Option<&FallingObject> {
        self.active.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.active.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Active hearts in id order
    pub fn iter(&self) -> impl Iterator<Item = &FallingObject> {
        self.active.values()
    }

    /// Remove and return every heart that has crossed the boundary by `now_ms`
    pub fn sweep(&mut self, now_ms: u64, threshold: f32) -> Vec<FallingObject> {
        let crossed: Vec<u32> = self
            .active
            .values()
            .filter(|o| o.has_crossed(now_ms, threshold))
            .map(|o| o.id)
            .collect();
        crossed
            .into_iter()
            .filter_map(|id| self.active.remove(&id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
