use serde::{Deserialize, Serialize};

/// A pointer to a recipe somewhere on the web: a name and the URL it lives at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub url: String,
}

impl Recipe {
    pub fn new(name: String, url: String) -> Self {
        Self { name, url }
    }
}

/// A named collection of recipes.
///
/// Cookbooks embed full copies of the recipes added to them, not references.
/// Editing or deleting a standalone recipe afterwards leaves the embedded
/// copy untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookbook {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Cookbook {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            name,
            description,
            recipes: Vec::new(),
        }
    }

    /// Whether a recipe with the given name is already embedded.
    pub fn contains_recipe(&self, name: &str) -> bool {
        self.recipes.iter().any(|r| r.name == name)
    }
}
