//! # Domain Manager
//!
//! [`CookbookManager`] is the single entry point for every cookbook and
//! recipe operation, regardless of the UI driving it. It owns one record
//! store per entity kind and encodes the domain rules the untyped stores
//! cannot: reconstructing typed records, validating them, and rejecting a
//! duplicate recipe inside one cookbook.
//!
//! ## What the Manager Does NOT Do
//!
//! - **I/O formatting**: it returns data structures, never prints
//! - **Uniqueness enforcement on insert**: duplicate-named cookbooks or
//!   recipes are allowed; lookups return the first match in stored order
//! - **Cascading deletes**: removing a standalone recipe leaves every
//!   embedded copy in place, and removing a cookbook leaves the standalone
//!   recipes alone
//!
//! ## Generic Over RecordStore
//!
//! `CookbookManager<S: RecordStore>` is generic over the storage backend:
//! production wires [`JsonFileStore`], tests wire
//! [`InMemoryStore`](crate::store::memory::InMemoryStore). Absence is
//! always a value (`None` / `false`), never an error; the only hard errors
//! are genuine I/O or parse failures and records that no longer satisfy
//! the schema.

use crate::error::{LarderError, Result};
use crate::model::{Cookbook, Recipe};
use crate::store::fs::JsonFileStore;
use crate::store::{Record, RecordStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

pub const COOKBOOKS_FILE: &str = "cookbooks.json";
pub const RECIPES_FILE: &str = "recipes.json";

/// Typed façade over the two record stores.
pub struct CookbookManager<S: RecordStore> {
    cookbooks: S,
    recipes: S,
}

impl CookbookManager<JsonFileStore> {
    /// Open the two well-known collection files under `data_dir`, creating
    /// them when missing.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let dir = data_dir.as_ref();
        Ok(Self::new(
            JsonFileStore::open(dir.join(COOKBOOKS_FILE))?,
            JsonFileStore::open(dir.join(RECIPES_FILE))?,
        ))
    }
}

impl<S: RecordStore> CookbookManager<S> {
    pub fn new(cookbooks: S, recipes: S) -> Self {
        Self { cookbooks, recipes }
    }

    /// Create a cookbook with an empty recipe list and persist it.
    pub fn add_cookbook(&mut self, name: String, description: Option<String>) -> Result<Cookbook> {
        let cookbook = Cookbook::new(name, description);
        self.cookbooks.insert(to_record(&cookbook)?)?;
        Ok(cookbook)
    }

    pub fn get_all_cookbooks(&self) -> Result<Vec<Cookbook>> {
        self.cookbooks
            .get_all()?
            .into_iter()
            .map(|record| from_record(record, "cookbook"))
            .collect()
    }

    pub fn get_cookbook_by_name(&self, name: &str) -> Result<Option<Cookbook>> {
        self.cookbooks
            .find_by_field("name", &Value::from(name))?
            .map(|record| from_record(record, "cookbook"))
            .transpose()
    }

    /// Delete every cookbook with the given name. Embedded recipe copies
    /// vanish with their cookbook; standalone recipes are untouched.
    pub fn delete_cookbook(&mut self, name: &str) -> Result<bool> {
        self.cookbooks.delete_by_field("name", &Value::from(name))
    }

    /// Create a recipe and persist it.
    pub fn add_recipe(&mut self, name: String, url: String) -> Result<Recipe> {
        let recipe = Recipe::new(name, url);
        self.recipes.insert(to_record(&recipe)?)?;
        Ok(recipe)
    }

    pub fn get_all_recipes(&self) -> Result<Vec<Recipe>> {
        self.recipes
            .get_all()?
            .into_iter()
            .map(|record| from_record(record, "recipe"))
            .collect()
    }

    pub fn get_recipe_by_name(&self, name: &str) -> Result<Option<Recipe>> {
        self.recipes
            .find_by_field("name", &Value::from(name))?
            .map(|record| from_record(record, "recipe"))
            .transpose()
    }

    /// Delete every standalone recipe with the given name. Cookbooks keep
    /// the copies they already embedded.
    pub fn delete_recipe(&mut self, name: &str) -> Result<bool> {
        self.recipes.delete_by_field("name", &Value::from(name))
    }

    /// Embed a snapshot of the named recipe into the named cookbook.
    ///
    /// Returns `false` without touching the stores when either side is
    /// missing, or when the cookbook already embeds a recipe of that name.
    pub fn add_recipe_to_cookbook(
        &mut self,
        cookbook_name: &str,
        recipe_name: &str,
    ) -> Result<bool> {
        let Some(mut cookbook) = self.get_cookbook_by_name(cookbook_name)? else {
            return Ok(false);
        };
        let Some(recipe) = self.get_recipe_by_name(recipe_name)? else {
            return Ok(false);
        };
        if cookbook.contains_recipe(&recipe.name) {
            return Ok(false);
        }
        cookbook.recipes.push(recipe);
        self.cookbooks
            .update_by_field("name", &Value::from(cookbook_name), to_record(&cookbook)?)
    }

    /// Drop every embedded copy of the named recipe from the named
    /// cookbook. Returns `false` when the cookbook is missing or held no
    /// such recipe.
    pub fn remove_recipe_from_cookbook(
        &mut self,
        cookbook_name: &str,
        recipe_name: &str,
    ) -> Result<bool> {
        let Some(mut cookbook) = self.get_cookbook_by_name(cookbook_name)? else {
            return Ok(false);
        };
        let before = cookbook.recipes.len();
        cookbook.recipes.retain(|r| r.name != recipe_name);
        if cookbook.recipes.len() == before {
            return Ok(false);
        }
        self.cookbooks
            .update_by_field("name", &Value::from(cookbook_name), to_record(&cookbook)?)
    }
}

fn to_record<T: Serialize>(value: &T) -> Result<Record> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(LarderError::Store(
            "record did not serialize to a JSON object".to_string(),
        )),
    }
}

fn from_record<T: DeserializeOwned>(record: Record, kind: &'static str) -> Result<T> {
    serde_json::from_value(Value::Object(record)).map_err(|e| LarderError::Validation {
        kind,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn manager() -> CookbookManager<InMemoryStore> {
        CookbookManager::new(InMemoryStore::new(), InMemoryStore::new())
    }

    /// A manager whose stores are pre-seeded with one cookbook and one
    /// standalone recipe, the starting point for the linking tests.
    fn seeded_manager() -> CookbookManager<InMemoryStore> {
        let mut m = manager();
        m.add_cookbook("Breakfast".to_string(), Some("Morning food".to_string()))
            .unwrap();
        m.add_recipe(
            "Pancakes".to_string(),
            "https://example.com/pancakes".to_string(),
        )
        .unwrap();
        m
    }

    #[test]
    fn add_cookbook_returns_and_persists_it() {
        let mut m = manager();
        let cookbook = m
            .add_cookbook("Breakfast".to_string(), Some("Morning food".to_string()))
            .unwrap();
        assert_eq!(cookbook.name, "Breakfast");
        assert_eq!(cookbook.description.as_deref(), Some("Morning food"));
        assert!(cookbook.recipes.is_empty());

        let all = m.get_all_cookbooks().unwrap();
        assert_eq!(all, vec![cookbook]);
    }

    #[test]
    fn cookbook_description_is_optional() {
        let mut m = manager();
        m.add_cookbook("Plain".to_string(), None).unwrap();

        let found = m.get_cookbook_by_name("Plain").unwrap().unwrap();
        assert_eq!(found.description, None);
    }

    #[test]
    fn duplicate_cookbook_names_are_allowed_and_first_wins() {
        let mut m = manager();
        m.add_cookbook("Dup".to_string(), Some("first".to_string()))
            .unwrap();
        m.add_cookbook("Dup".to_string(), Some("second".to_string()))
            .unwrap();

        assert_eq!(m.get_all_cookbooks().unwrap().len(), 2);
        let found = m.get_cookbook_by_name("Dup").unwrap().unwrap();
        assert_eq!(found.description.as_deref(), Some("first"));
    }

    #[test]
    fn get_cookbook_by_name_misses_are_none() {
        let m = manager();
        assert!(m.get_cookbook_by_name("Nope").unwrap().is_none());
    }

    #[test]
    fn delete_cookbook_reports_whether_anything_was_removed() {
        let mut m = seeded_manager();
        assert!(m.delete_cookbook("Breakfast").unwrap());
        assert!(!m.delete_cookbook("Breakfast").unwrap());
        assert!(m.get_all_cookbooks().unwrap().is_empty());
    }

    #[test]
    fn delete_cookbook_removes_all_same_named_entries() {
        let mut m = manager();
        m.add_cookbook("Dup".to_string(), None).unwrap();
        m.add_cookbook("Dup".to_string(), None).unwrap();

        assert!(m.delete_cookbook("Dup").unwrap());
        assert!(m.get_all_cookbooks().unwrap().is_empty());
    }

    #[test]
    fn add_recipe_round_trips() {
        let mut m = manager();
        m.add_recipe("Pancakes".to_string(), "https://example.com/p".to_string())
            .unwrap();

        let found = m.get_recipe_by_name("Pancakes").unwrap().unwrap();
        assert_eq!(found.url, "https://example.com/p");
        assert_eq!(m.get_all_recipes().unwrap().len(), 1);
    }

    #[test]
    fn invalid_stored_recipe_is_a_hard_error() {
        let cookbooks = InMemoryStore::new();
        let mut recipes = InMemoryStore::new();
        let mut broken = Record::new();
        broken.insert("name".to_string(), Value::from("No URL"));
        recipes.insert(broken).unwrap();

        let m = CookbookManager::new(cookbooks, recipes);
        let err = m.get_all_recipes().unwrap_err();
        assert!(matches!(
            err,
            LarderError::Validation { kind: "recipe", .. }
        ));
    }

    #[test]
    fn attach_embeds_a_snapshot() {
        let mut m = seeded_manager();
        assert!(m.add_recipe_to_cookbook("Breakfast", "Pancakes").unwrap());

        let cookbook = m.get_cookbook_by_name("Breakfast").unwrap().unwrap();
        assert_eq!(cookbook.recipes.len(), 1);
        assert_eq!(cookbook.recipes[0].name, "Pancakes");
        assert_eq!(cookbook.recipes[0].url, "https://example.com/pancakes");
    }

    #[test]
    fn attach_rejects_a_duplicate_recipe() {
        let mut m = seeded_manager();
        assert!(m.add_recipe_to_cookbook("Breakfast", "Pancakes").unwrap());
        assert!(!m.add_recipe_to_cookbook("Breakfast", "Pancakes").unwrap());

        let cookbook = m.get_cookbook_by_name("Breakfast").unwrap().unwrap();
        assert_eq!(cookbook.recipes.len(), 1);
    }

    #[test]
    fn attach_to_a_missing_cookbook_is_false_without_mutation() {
        let mut m = seeded_manager();
        let before = m.get_all_cookbooks().unwrap();

        assert!(!m.add_recipe_to_cookbook("Missing", "Pancakes").unwrap());
        assert_eq!(m.get_all_cookbooks().unwrap(), before);
    }

    #[test]
    fn attach_of_a_missing_recipe_is_false_without_mutation() {
        let mut m = seeded_manager();

        assert!(!m.add_recipe_to_cookbook("Breakfast", "Missing").unwrap());
        let cookbook = m.get_cookbook_by_name("Breakfast").unwrap().unwrap();
        assert!(cookbook.recipes.is_empty());
    }

    #[test]
    fn deleting_a_standalone_recipe_keeps_the_embedded_copy() {
        let mut m = seeded_manager();
        m.add_recipe_to_cookbook("Breakfast", "Pancakes").unwrap();

        assert!(m.delete_recipe("Pancakes").unwrap());
        assert!(m.get_recipe_by_name("Pancakes").unwrap().is_none());

        let cookbook = m.get_cookbook_by_name("Breakfast").unwrap().unwrap();
        assert_eq!(cookbook.recipes.len(), 1);
        assert_eq!(cookbook.recipes[0].name, "Pancakes");
    }

    #[test]
    fn replacing_a_standalone_recipe_does_not_touch_the_snapshot() {
        let mut m = seeded_manager();
        m.add_recipe_to_cookbook("Breakfast", "Pancakes").unwrap();

        m.delete_recipe("Pancakes").unwrap();
        m.add_recipe(
            "Pancakes".to_string(),
            "https://example.com/better-pancakes".to_string(),
        )
        .unwrap();

        let cookbook = m.get_cookbook_by_name("Breakfast").unwrap().unwrap();
        assert_eq!(cookbook.recipes[0].url, "https://example.com/pancakes");
    }

    #[test]
    fn detach_removes_the_embedded_recipe_only() {
        let mut m = seeded_manager();
        m.add_recipe_to_cookbook("Breakfast", "Pancakes").unwrap();

        assert!(m.remove_recipe_from_cookbook("Breakfast", "Pancakes").unwrap());
        let cookbook = m.get_cookbook_by_name("Breakfast").unwrap().unwrap();
        assert!(cookbook.recipes.is_empty());
        // The standalone recipe is still there.
        assert!(m.get_recipe_by_name("Pancakes").unwrap().is_some());
    }

    #[test]
    fn detach_misses_are_false() {
        let mut m = seeded_manager();
        assert!(!m.remove_recipe_from_cookbook("Missing", "Pancakes").unwrap());
        assert!(!m.remove_recipe_from_cookbook("Breakfast", "Pancakes").unwrap());
    }

    #[test]
    fn store_write_failures_propagate() {
        let mut recipes = InMemoryStore::new();
        recipes.set_fail_writes(true);
        let mut m = CookbookManager::new(InMemoryStore::new(), recipes);

        let err = m
            .add_recipe("Pancakes".to_string(), "https://example.com".to_string())
            .unwrap_err();
        assert!(matches!(err, LarderError::Store(_)));
    }
}
