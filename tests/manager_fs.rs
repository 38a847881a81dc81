//! Manager over the real file-backed store.

use larder::error::LarderError;
use larder::manager::{CookbookManager, COOKBOOKS_FILE, RECIPES_FILE};

#[test]
fn test_open_creates_both_collection_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("larder");

    CookbookManager::open(&data_dir).unwrap();

    let cookbooks = std::fs::read_to_string(data_dir.join(COOKBOOKS_FILE)).unwrap();
    let recipes = std::fs::read_to_string(data_dir.join(RECIPES_FILE)).unwrap();
    assert_eq!(cookbooks, "[]");
    assert_eq!(recipes, "[]");
}

#[test]
fn test_data_survives_reopening() {
    let temp_dir = tempfile::tempdir().unwrap();

    {
        let mut manager = CookbookManager::open(temp_dir.path()).unwrap();
        manager
            .add_cookbook("Breakfast".to_string(), Some("Morning food".to_string()))
            .unwrap();
        manager
            .add_recipe(
                "Pancakes".to_string(),
                "https://example.com/pancakes".to_string(),
            )
            .unwrap();
        manager
            .add_recipe_to_cookbook("Breakfast", "Pancakes")
            .unwrap();
    }

    let manager = CookbookManager::open(temp_dir.path()).unwrap();
    let cookbook = manager.get_cookbook_by_name("Breakfast").unwrap().unwrap();
    assert_eq!(cookbook.description.as_deref(), Some("Morning food"));
    assert_eq!(cookbook.recipes.len(), 1);
    assert_eq!(cookbook.recipes[0].url, "https://example.com/pancakes");
    assert_eq!(manager.get_all_recipes().unwrap().len(), 1);
}

#[test]
fn test_collection_files_stay_human_readable() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut manager = CookbookManager::open(temp_dir.path()).unwrap();
    manager
        .add_cookbook("Breakfast".to_string(), None)
        .unwrap();

    let on_disk = std::fs::read_to_string(temp_dir.path().join(COOKBOOKS_FILE)).unwrap();
    assert!(on_disk.starts_with('['));
    assert!(on_disk.contains("\"name\": \"Breakfast\""));
    // Pretty-printed, one field per line.
    assert!(on_disk.lines().count() > 3);
}

#[test]
fn test_corrupt_collection_is_a_load_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    let manager = CookbookManager::open(temp_dir.path()).unwrap();
    std::fs::write(temp_dir.path().join(RECIPES_FILE), "{not json").unwrap();

    let err = manager.get_all_recipes().unwrap_err();
    assert!(matches!(err, LarderError::Serialization(_)));
}
