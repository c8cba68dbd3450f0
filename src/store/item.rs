use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::num::{NonZeroU32, ParseIntError};
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        ItemId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

/// Number of units of an item. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Returns `None` for zero.
    pub fn new(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(Quantity)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: Quantity,
    pub packed: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    fn toggled(&self) -> Self {
        Item {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

/// Ordered, shared snapshot of the packing list.
///
/// Every operation returns a new `ItemList` and leaves `self` untouched.
/// Operations that change nothing hand back a clone sharing the same
/// allocation, so callers can detect "no change" with [`ItemList::ptr_eq`].
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Arc<Vec<Item>>,
}

impl PartialEq for ItemList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for ItemList {}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from items loaded elsewhere, rejecting duplicate ids
    /// and blank descriptions.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                anyhow::bail!("Duplicate item id {}", item.id);
            }
            if item.description.trim().is_empty() {
                anyhow::bail!("Item {} has a blank description", item.id);
            }
        }
        Ok(ItemList {
            items: Arc::new(items),
        })
    }

    pub fn ptr_eq(a: &ItemList, b: &ItemList) -> bool {
        Arc::ptr_eq(&a.items, &b.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }

    pub fn to_vec(&self) -> Vec<Item> {
        self.items.as_ref().clone()
    }

    /// Appends `item`. The caller guarantees its id is not already present.
    pub(crate) fn pushed(&self, item: Item) -> Self {
        debug_assert!(!self.contains(item.id));
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(item);
        ItemList {
            items: Arc::new(items),
        }
    }

    pub(crate) fn without(&self, id: ItemId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        ItemList {
            items: Arc::new(items),
        }
    }

    pub(crate) fn toggled(&self, id: ItemId) -> Self {
        if !self.contains(id) {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    item.toggled()
                } else {
                    item.clone()
                }
            })
            .collect();
        ItemList {
            items: Arc::new(items),
        }
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
