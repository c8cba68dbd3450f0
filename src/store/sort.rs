use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::item::{Item, ItemList};

/// Display ordering for a packing list. Never changes the stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Input,
    Description,
    Packed,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Input, SortBy::Description, SortBy::Packed];

    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|by| by.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown sort order '{s}' (expected input, description or packed)"))
    }
}

/// Returns the items of `list` in display order.
///
/// `Input` borrows the list as-is; the other orders sort a copy. Both sorts
/// are stable, so items with equal keys keep their input order.
pub fn sorted_view(list: &ItemList, by: SortBy) -> Cow<'_, [Item]> {
    match by {
        SortBy::Input => Cow::Borrowed(list.as_slice()),
        SortBy::Description => {
            let mut items = list.to_vec();
            items.sort_by(|a, b| collate(&a.description, &b.description));
            Cow::Owned(items)
        }
        SortBy::Packed => {
            let mut items = list.to_vec();
            items.sort_by_key(|item| item.packed);
            Cow::Owned(items)
        }
    }
}

/// Dictionary-style comparison in three passes: base letters ignoring
/// accents and case, then accents (unaccented first), then case (lowercase
/// first).
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| uppercase_flags(a).cmp(uppercase_flags(b)))
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    folded(s).filter(|c| !is_combining_mark(*c))
}

fn uppercase_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
