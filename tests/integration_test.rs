use packlist::{
    cli,
    storage::{open_store, Storage},
    store::{FixedAnswer, ItemId},
    Config,
};
use tempfile::TempDir;

fn temp_config(temp_dir: &TempDir) -> Config {
    Config::new(temp_dir.path().join(".packlist").join("items.json"))
}

async fn load_items(config: &Config) -> Storage {
    Storage::load(&config.data_file)
        .await
        .unwrap()
        .unwrap_or_default()
}

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[tokio::test]
async fn test_end_to_end_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    cli::handle_add(&config, words("Passports"), 2).await.unwrap();
    cli::handle_add(&config, words("Socks"), 12).await.unwrap();

    let storage = load_items(&config).await;
    assert_eq!(storage.items.len(), 2);
    let socks = storage.items[1].id;

    cli::handle_toggle(&config, socks).await.unwrap();
    cli::handle_list(&config, Default::default()).await.unwrap();
    cli::handle_stats(&config).await.unwrap();

    let stats = open_store(&config).await.unwrap().stats();
    assert_eq!(stats.num_items, 2);
    assert_eq!(stats.num_packed, 1);
    assert_eq!(stats.percentage, 50);

    cli::handle_remove(&config, socks).await.unwrap();
    let storage = load_items(&config).await;
    assert_eq!(storage.items.len(), 1);
    assert_eq!(storage.items[0].description, "Passports");
}

#[tokio::test]
async fn test_add_joins_words() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    cli::handle_add(&config, words("hiking   boots"), 1)
        .await
        .unwrap();

    let storage = load_items(&config).await;
    assert_eq!(storage.items[0].description, "hiking boots");
    assert!(!storage.items[0].packed);
}

#[tokio::test]
async fn test_blank_add_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    cli::handle_add(&config, vec!["   ".to_string()], 3)
        .await
        .unwrap();

    assert!(!config.data_file.exists());
}

#[tokio::test]
async fn test_zero_quantity_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    let result = cli::handle_add(&config, words("Socks"), 0).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("at least 1"));
}

#[tokio::test]
async fn test_multiple_items_keep_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    for i in 1..=5 {
        cli::handle_add(&config, vec![format!("item-{i}")], i)
            .await
            .unwrap();
    }

    let storage = load_items(&config).await;
    assert_eq!(storage.items.len(), 5);
    let third = storage.items[2].id;

    cli::handle_remove(&config, third).await.unwrap();

    let storage = load_items(&config).await;
    let names: Vec<_> = storage
        .items
        .iter()
        .map(|item| item.description.as_str())
        .collect();
    assert_eq!(names, ["item-1", "item-2", "item-4", "item-5"]);
}

#[tokio::test]
async fn test_unknown_ids_are_not_errors() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    cli::handle_add(&config, words("Charger"), 1).await.unwrap();
    let before = load_items(&config).await;

    cli::handle_remove(&config, ItemId::new(1)).await.unwrap();
    cli::handle_toggle(&config, ItemId::new(1)).await.unwrap();

    assert_eq!(load_items(&config).await, before);
}

#[tokio::test]
async fn test_clear_requires_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    cli::handle_add(&config, words("Passports"), 2).await.unwrap();
    cli::handle_add(&config, words("Socks"), 12).await.unwrap();

    cli::handle_clear(&config, &mut FixedAnswer(false))
        .await
        .unwrap();
    assert_eq!(load_items(&config).await.items.len(), 2);

    let mut prompts = 0;
    cli::handle_clear(&config, &mut |_: &str| {
        prompts += 1;
        true
    })
    .await
    .unwrap();
    assert_eq!(prompts, 1);
    assert!(load_items(&config).await.items.is_empty());
}

#[tokio::test]
async fn test_seeded_list_is_saved_on_first_change() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir).with_seed(true);

    cli::handle_add(&config, words("Sunscreen"), 1).await.unwrap();

    let storage = load_items(&config).await;
    let names: Vec<_> = storage
        .items
        .iter()
        .map(|item| item.description.as_str())
        .collect();
    assert_eq!(names, ["Passports", "Socks", "Sunscreen"]);
}

#[tokio::test]
async fn test_ids_stay_unique_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    for name in ["a", "b", "c", "d"] {
        cli::handle_add(&config, words(name), 1).await.unwrap();
    }

    let storage = load_items(&config).await;
    let mut ids: Vec<_> = storage.items.iter().map(|item| item.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}
