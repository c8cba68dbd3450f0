use anyhow::Result;
use clap::{Parser, Subcommand};
use log::warn;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::storage::{open_store, save_list};
use crate::store::{Confirm, Item, ItemId, ItemList, Quantity, SortBy};

/// Largest quantity the `add` command accepts.
pub const MAX_QUANTITY: u32 = 30;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Packing list file (defaults to ~/.packlist/items.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Start from the example items when the list file does not exist yet
    #[arg(long, global = true)]
    pub seed: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the packing list
    Add {
        /// How many to pack
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_QUANTITY)))]
        quantity: u32,

        /// What to pack (words are joined with spaces)
        #[arg(required = true)]
        description: Vec<String>,
    },

    /// Remove an item
    Remove {
        /// Id of the item to remove
        id: ItemId,
    },

    /// Mark an item packed, or unpacked if it already is
    Toggle {
        /// Id of the item to toggle
        id: ItemId,
    },

    /// Remove every item from the list
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the packing list
    List {
        /// Display order: input, description or packed
        #[arg(short, long, default_value_t = SortBy::Input)]
        sort: SortBy,
    },

    /// Show packing progress
    Stats,
}

/// Asks on stdin and accepts `y` or `yes`.
pub struct StdinPrompt;

impl Confirm for StdinPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if let Err(e) = io::stdout().flush() {
            warn!("Failed to flush prompt: {e}");
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                warn!("Failed to read confirmation: {e}");
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub async fn handle_add(config: &Config, description: Vec<String>, quantity: u32) -> Result<()> {
    let quantity =
        Quantity::new(quantity).ok_or_else(|| anyhow::anyhow!("Quantity must be at least 1"))?;
    let description = description.join(" ");

    let mut store = open_store(config).await?;
    let before = store.list().clone();
    let after = store.add(&description, quantity);

    if ItemList::ptr_eq(&before, &after) {
        if description.trim().is_empty() {
            println!("Nothing to add: the description is blank");
        } else {
            eprintln!("Warning: No item ids left, '{description}' was not added");
        }
        return Ok(());
    }

    save_list(config, &after).await?;
    if let Some(item) = after.as_slice().last() {
        println!("Added {} x {} (id {})", item.quantity, item.description, item.id);
    }

    Ok(())
}

pub async fn handle_remove(config: &Config, id: ItemId) -> Result<()> {
    let mut store = open_store(config).await?;
    let Some(item) = store.list().get(id).cloned() else {
        eprintln!("Warning: Item {id} not found");
        return Ok(());
    };

    let list = store.remove(id);
    save_list(config, &list).await?;
    println!("Removed {}", item.description);

    Ok(())
}

pub async fn handle_toggle(config: &Config, id: ItemId) -> Result<()> {
    let mut store = open_store(config).await?;
    if !store.list().contains(id) {
        eprintln!("Warning: Item {id} not found");
        return Ok(());
    }

    let list = store.toggle(id);
    save_list(config, &list).await?;
    if let Some(item) = list.get(id) {
        let status = if item.packed { "packed" } else { "unpacked" };
        println!("Marked {} as {status}", item.description);
    }

    Ok(())
}

pub async fn handle_clear<C>(config: &Config, confirm: &mut C) -> Result<()>
where
    C: Confirm + ?Sized,
{
    let mut store = open_store(config).await?;
    if store.list().is_empty() {
        println!("The list is already empty");
        return Ok(());
    }

    let before = store.list().clone();
    let after = store.clear(confirm);

    if ItemList::ptr_eq(&before, &after) {
        println!("Kept {} item(s)", after.len());
        return Ok(());
    }

    save_list(config, &after).await?;
    println!("Cleared {} item(s)", before.len());

    Ok(())
}

pub async fn handle_list(config: &Config, sort: SortBy) -> Result<()> {
    let store = open_store(config).await?;

    if !store.list().is_empty() {
        println!("{:<15} {:<6} {:>4}  {}", "ID", "PACKED", "QTY", "DESCRIPTION");
        println!("{}", "-".repeat(60));
        for item in store.sorted(sort).iter() {
            println!("{}", format_row(item));
        }
        println!();
    }

    println!("{}", store.stats());

    Ok(())
}

pub async fn handle_stats(config: &Config) -> Result<()> {
    let store = open_store(config).await?;
    println!("{}", store.stats());
    Ok(())
}

fn format_row(item: &Item) -> String {
    let packed = if item.packed { "[x]" } else { "[ ]" };
    format!(
        "{:<15} {:<6} {:>4}  {}",
        item.id, packed, item.quantity, item.description
    )
}
