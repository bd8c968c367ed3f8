use std::rc::Rc;

use gridboard_core::{GridArea, GridConfig, Item, ItemKey, Position, COLUMN_COUNT};
use serde::Deserialize;

/// A placement proposed for an item, not yet applied.
pub type Candidate = Item;

/// An update as it arrives from untyped sources (scripts, JSON).
/// Both fields may be missing; the store rejects such updates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawUpdate {
    #[serde(rename = "_key", default)]
    pub key: Option<ItemKey>,
    #[serde(default)]
    pub position: Option<Vec<i32>>,
}

impl RawUpdate {
    /// Structural check only: a key and exactly four position components.
    pub fn into_candidate(self) -> Option<Candidate> {
        let key = self.key?;
        let position = Position::from_slice(&self.position?)?;
        Some(Item { key, position })
    }
}

// ──────────────────────────────────────────────
// LayoutStore
// ──────────────────────────────────────────────

/// Owns the ordered item collection. Order is stacking order: the last item draws on top.
///
/// Every accepted update swaps in a fresh collection; snapshots handed out earlier
/// keep describing the layout as it was.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    items: Rc<[Item]>,
}

impl LayoutStore {
    /// Build a store from `items`, applying them in order.
    /// Items with an empty key are dropped; a repeated key keeps its last position.
    pub fn new(items: Vec<Item>) -> Self {
        let mut store = Self {
            items: Rc::from(Vec::<Item>::new()),
        };
        for item in items {
            store.apply_update(item);
        }
        store
    }

    /// Store holding the startup layout.
    pub fn seeded() -> Self {
        Self::new(crate::seed_items())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Shared handle to the current collection.
    pub fn snapshot(&self) -> Rc<[Item]> {
        Rc::clone(&self.items)
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rows needed to fit every item; never below one.
    pub fn row_count(&self) -> i32 {
        self.items
            .iter()
            .map(|item| item.position.row_end)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            columns: COLUMN_COUNT,
            rows: self.row_count(),
        }
    }

    /// Replace `candidate.key`'s entry and move it to the end of the collection.
    /// An unknown key is appended. Returns false, leaving the store untouched,
    /// when the key is empty.
    ///
    /// No bounds checks happen here; candidates are expected to come from the resolver.
    pub fn apply_update(&mut self, candidate: Candidate) -> bool {
        if candidate.key.is_empty() {
            log::debug!("rejecting update with empty key");
            return false;
        }

        let mut next: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.key != candidate.key)
            .cloned()
            .collect();
        log::trace!("apply {} -> {:?}", candidate.key, candidate.position);
        next.push(candidate);
        self.items = Rc::from(next);
        true
    }

    /// Validate an untyped update and apply it.
    pub fn apply_raw(&mut self, update: RawUpdate) -> bool {
        match update.into_candidate() {
            Some(candidate) => self.apply_update(candidate),
            None => {
                log::debug!("rejecting malformed update");
                false
            }
        }
    }

    /// Render plan: one grid area per item, back to front.
    pub fn grid_areas(&self) -> Vec<(ItemKey, GridArea)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (item.key.clone(), GridArea::for_item(item.position, index)))
            .collect()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::seeded()
    }
}
