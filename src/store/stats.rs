use std::fmt::{self, Display, Formatter};

use super::item::ItemList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub num_items: usize,
    pub num_packed: usize,
    pub percentage: u32,
    pub message: StatsMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsMessage {
    Empty,
    Complete,
    Progress {
        num_items: usize,
        num_packed: usize,
        percentage: u32,
    },
}

impl Display for StatsMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StatsMessage::Empty => {
                f.write_str("Start adding some items before starting your journey.")
            }
            StatsMessage::Complete => f.write_str("Everything packed up, ready to go?"),
            StatsMessage::Progress {
                num_items,
                num_packed,
                percentage,
            } => write!(
                f,
                "You have {num_items} items in your list, and you already packed {num_packed} ({percentage}%) items."
            ),
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.message, f)
    }
}

pub fn compute_stats(list: &ItemList) -> Stats {
    let num_items = list.len();
    let num_packed = list.iter().filter(|item| item.packed).count();
    let percentage = percentage(num_packed, num_items);

    let message = if num_items == 0 {
        StatsMessage::Empty
    } else if percentage == 100 {
        StatsMessage::Complete
    } else {
        StatsMessage::Progress {
            num_items,
            num_packed,
            percentage,
        }
    };

    Stats {
        num_items,
        num_packed,
        percentage,
        message,
    }
}

/// `part / whole * 100` rounded half away from zero, or 0 when `whole` is 0.
fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part as u64 * 200 + whole as u64) / (whole as u64 * 2);
    rounded as u32
}
