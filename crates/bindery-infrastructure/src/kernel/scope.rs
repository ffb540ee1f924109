//! Scope cache
//!
//! Holds the instances of scoped bindings, keyed by the activated binding
//! and the scope key its strategy produced.
//!
//! Each key owns a slot. The map's shard lock is only held while the slot is
//! fetched or inserted; activation happens under the slot's own lock, so at
//! most one activation per key runs at a time and activations of other keys
//! never wait on it.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use bindery_domain::error::Result;
use bindery_domain::value_objects::{AnyInstance, BindingId, ScopeKey};
use dashmap::DashMap;

#[derive(Default)]
struct ScopeSlot {
    instance: OnceLock<AnyInstance>,
    activation: Mutex<()>,
}

impl ScopeSlot {
    fn is_filled(&self) -> bool {
        self.instance.get().is_some()
    }
}

/// Per-kernel cache of scoped instances
#[derive(Default)]
pub struct ScopeCache {
    entries: DashMap<(BindingId, ScopeKey), Arc<ScopeSlot>>,
}

impl ScopeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached instance for `(binding, scope)`, activating it on first use
    ///
    /// Concurrent callers on an empty key wait for the single activation and
    /// all receive its instance. A failed activation leaves the key empty, so
    /// the next caller activates again.
    pub fn get_or_activate(
        &self,
        binding: BindingId,
        scope: ScopeKey,
        activate: impl FnOnce() -> Result<AnyInstance>,
    ) -> Result<AnyInstance> {
        let slot = self.slot(binding, scope);
        if let Some(existing) = slot.instance.get() {
            return Ok(existing.clone());
        }

        // A panicking activation never filled the slot, the lock is still usable
        let _activating = slot
            .activation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = slot.instance.get() {
            return Ok(existing.clone());
        }

        let created = activate()?;
        Ok(slot.instance.get_or_init(|| created).clone())
    }

    fn slot(&self, binding: BindingId, scope: ScopeKey) -> Arc<ScopeSlot> {
        Arc::clone(self.entries.entry((binding, scope)).or_default().value())
    }

    /// Evict every instance cached under `scope`, returning how many were dropped
    pub fn release(&self, scope: &ScopeKey) -> usize {
        let mut released = 0;
        self.entries.retain(|(_, cached), slot| {
            if cached != scope {
                return true;
            }
            if slot.is_filled() {
                released += 1;
            }
            false
        });
        released
    }

    /// Evict everything
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached instances
    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().is_filled())
            .count()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
