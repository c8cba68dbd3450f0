//! In-memory packing list.
//!
//! [`ListStore`] owns the canonical [`ItemList`] and is the only place new
//! lists are produced. Every operation is total: inputs that would change
//! nothing (a blank description, an unknown id, a declined clear) return the
//! current list untouched instead of failing.

pub mod confirm;
pub mod item;
pub mod sort;
pub mod stats;


use chrono::Utc;
use log::{debug, warn};
use std::borrow::Cow;

pub use confirm::{Confirm, FixedAnswer};
pub use item::{Item, ItemId, ItemList, Quantity};
pub use sort::{sorted_view, SortBy};
pub use stats::{compute_stats, Stats, StatsMessage};

pub const CLEAR_PROMPT: &str = "Are you sure you want to clear the list?";

#[derive(Debug, Clone, Default)]
pub struct ListStore {
    list: ItemList,
    last_id: u64,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing list. New ids continue above the largest one in it.
    pub fn with_list(list: ItemList) -> Self {
        let last_id = list.max_id().map(ItemId::get).unwrap_or(0);
        ListStore { list, last_id }
    }

    /// Store pre-populated with the two example items.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let items = vec![
            Item {
                id: ItemId::new(1),
                description: "Passports".to_string(),
                quantity: Quantity::new(2).unwrap_or_default(),
                packed: false,
                created_at: now,
            },
            Item {
                id: ItemId::new(2),
                description: "Socks".to_string(),
                quantity: Quantity::new(12).unwrap_or_default(),
                packed: true,
                created_at: now,
            },
        ];
        let list = ItemList::from_items(items).unwrap_or_default();
        Self::with_list(list)
    }

    pub fn list(&self) -> &ItemList {
        &self.list
    }

    pub fn into_list(self) -> ItemList {
        self.list
    }

    pub fn add(&mut self, description: &str, quantity: Quantity) -> ItemList {
        let description = description.trim();
        if description.is_empty() {
            debug!("Ignoring item with a blank description");
            return self.list.clone();
        }

        let now = Utc::now();
        let Some(id) = self.next_id(now.timestamp_millis()) else {
            warn!("No item ids left after {}, not adding {description}", self.last_id);
            return self.list.clone();
        };
        let item = Item {
            id,
            description: description.to_string(),
            quantity,
            packed: false,
            created_at: now,
        };

        debug!("Adding item {id}: {quantity} x {description}");
        self.replace(self.list.pushed(item))
    }

    pub fn remove(&mut self, id: ItemId) -> ItemList {
        if !self.list.contains(id) {
            debug!("No item {id} to remove");
        }
        self.replace(self.list.without(id))
    }

    pub fn toggle(&mut self, id: ItemId) -> ItemList {
        if !self.list.contains(id) {
            debug!("No item {id} to toggle");
        }
        self.replace(self.list.toggled(id))
    }

    /// Empties the list if `confirm` agrees to [`CLEAR_PROMPT`].
    pub fn clear<C>(&mut self, confirm: &mut C) -> ItemList
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(CLEAR_PROMPT) {
            debug!("Clear declined, keeping {} item(s)", self.list.len());
            return self.list.clone();
        }
        debug!("Clearing {} item(s)", self.list.len());
        self.replace(ItemList::new())
    }

    pub fn sorted(&self, by: SortBy) -> Cow<'_, [Item]> {
        sorted_view(&self.list, by)
    }

    pub fn stats(&self) -> Stats {
        compute_stats(&self.list)
    }

    fn replace(&mut self, list: ItemList) -> ItemList {
        self.list = list;
        self.list.clone()
    }

    /// Millisecond timestamp, bumped past the last id handed out.
    /// `None` once the id space is exhausted.
    fn next_id(&mut self, now_millis: i64) -> Option<ItemId> {
        let now = u64::try_from(now_millis).unwrap_or(0);
        let id = now.max(self.last_id.checked_add(1)?);
        self.last_id = id;
        Some(ItemId::new(id))
    }
}
