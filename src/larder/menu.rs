//! Interactive menus, the default mode when the binary is run bare.
//!
//! Every flow here is a thin loop over [`CookbookManager`] calls; the
//! printing helpers live in the crate root so the subcommand handlers and
//! the menus produce identical output.

use colored::*;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use larder::error::Result;
use larder::manager::CookbookManager;
use larder::store::fs::JsonFileStore;

pub fn main_menu(manager: &mut CookbookManager<JsonFileStore>) -> Result<()> {
    loop {
        match select(
            "What would you like to do?",
            &["Manage cookbooks", "Manage recipes", "Exit"],
        )? {
            0 => cookbook_menu(manager)?,
            1 => recipe_menu(manager)?,
            _ => return Ok(()),
        }
    }
}

fn cookbook_menu(manager: &mut CookbookManager<JsonFileStore>) -> Result<()> {
    loop {
        match select(
            "Cookbooks",
            &[
                "View all cookbooks",
                "Add a new cookbook",
                "Manage a cookbook",
                "Back",
            ],
        )? {
            0 => {
                crate::print_cookbooks(&manager.get_all_cookbooks()?);
                pause()?;
            }
            1 => {
                let name = input("Cookbook name")?;
                let description = optional_input("Description (optional)")?;
                manager.add_cookbook(name.clone(), description)?;
                println!("{}", format!("Added cookbook \"{}\".", name).green());
            }
            2 => {
                let cookbooks = manager.get_all_cookbooks()?;
                if cookbooks.is_empty() {
                    println!("No cookbooks yet.");
                    continue;
                }
                let names: Vec<String> = cookbooks.iter().map(|c| c.name.clone()).collect();
                if let Some(i) = choose("Which cookbook?", &names)? {
                    manage_cookbook(manager, &names[i])?;
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Management loop for one cookbook, addressed by name. Exits when the
/// cookbook is deleted or no longer resolves.
fn manage_cookbook(manager: &mut CookbookManager<JsonFileStore>, name: &str) -> Result<()> {
    loop {
        match select(
            name,
            &[
                "View details",
                "Add a recipe",
                "Remove a recipe",
                "Delete this cookbook",
                "Back",
            ],
        )? {
            0 => match manager.get_cookbook_by_name(name)? {
                Some(cookbook) => {
                    crate::print_cookbook(&cookbook);
                    pause()?;
                }
                None => return Ok(()),
            },
            1 => {
                let recipes = manager.get_all_recipes()?;
                if recipes.is_empty() {
                    println!("No recipes yet.");
                    continue;
                }
                let names: Vec<String> = recipes.iter().map(|r| r.name.clone()).collect();
                let Some(i) = choose("Add which recipe?", &names)? else {
                    continue;
                };
                if manager.add_recipe_to_cookbook(name, &names[i])? {
                    println!(
                        "{}",
                        format!("Added \"{}\" to \"{}\".", names[i], name).green()
                    );
                } else {
                    println!(
                        "{}",
                        format!(
                            "Could not add \"{}\" to \"{}\": missing, or already present.",
                            names[i], name
                        )
                        .yellow()
                    );
                }
            }
            2 => {
                let Some(cookbook) = manager.get_cookbook_by_name(name)? else {
                    return Ok(());
                };
                if cookbook.recipes.is_empty() {
                    println!("No recipes in this cookbook.");
                    continue;
                }
                let names: Vec<String> = cookbook.recipes.iter().map(|r| r.name.clone()).collect();
                let Some(i) = choose("Remove which recipe?", &names)? else {
                    continue;
                };
                if manager.remove_recipe_from_cookbook(name, &names[i])? {
                    println!(
                        "{}",
                        format!("Removed \"{}\" from \"{}\".", names[i], name).green()
                    );
                } else {
                    println!(
                        "{}",
                        format!("\"{}\" is not in \"{}\".", names[i], name).yellow()
                    );
                }
            }
            3 => {
                if confirm(&format!("Delete cookbook \"{}\"?", name))? {
                    manager.delete_cookbook(name)?;
                    println!("{}", format!("Deleted cookbook \"{}\".", name).green());
                    return Ok(());
                }
            }
            _ => return Ok(()),
        }
    }
}

fn recipe_menu(manager: &mut CookbookManager<JsonFileStore>) -> Result<()> {
    loop {
        match select(
            "Recipes",
            &[
                "View all recipes",
                "Add a new recipe",
                "View recipe details",
                "Delete a recipe",
                "Back",
            ],
        )? {
            0 => {
                crate::print_recipes(&manager.get_all_recipes()?);
                pause()?;
            }
            1 => {
                let name = input("Recipe name")?;
                let url = input("Recipe link")?;
                manager.add_recipe(name.clone(), url)?;
                println!("{}", format!("Added recipe \"{}\".", name).green());
            }
            2 => {
                let recipes = manager.get_all_recipes()?;
                if recipes.is_empty() {
                    println!("No recipes yet.");
                    continue;
                }
                let names: Vec<String> = recipes.iter().map(|r| r.name.clone()).collect();
                let Some(i) = choose("Which recipe?", &names)? else {
                    continue;
                };
                if let Some(recipe) = manager.get_recipe_by_name(&names[i])? {
                    crate::print_recipe(&recipe);
                    pause()?;
                }
            }
            3 => {
                let recipes = manager.get_all_recipes()?;
                if recipes.is_empty() {
                    println!("No recipes yet.");
                    continue;
                }
                let names: Vec<String> = recipes.iter().map(|r| r.name.clone()).collect();
                let Some(i) = choose("Delete which recipe?", &names)? else {
                    continue;
                };
                if confirm(&format!("Delete recipe \"{}\"?", names[i]))? {
                    manager.delete_recipe(&names[i])?;
                    println!("{}", format!("Deleted recipe \"{}\".", names[i]).green());
                }
            }
            _ => return Ok(()),
        }
    }
}

fn select(prompt: &str, items: &[&str]) -> Result<usize> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

/// Pick one of `names`, with a trailing "Back" entry mapped to `None`.
fn choose(prompt: &str, names: &[String]) -> Result<Option<usize>> {
    let mut items: Vec<&str> = names.iter().map(String::as_str).collect();
    items.push("Back");
    let picked = select(prompt, &items)?;
    if picked == names.len() {
        Ok(None)
    } else {
        Ok(Some(picked))
    }
}

fn input(prompt: &str) -> Result<String> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(text)
}

fn optional_input(prompt: &str) -> Result<Option<String>> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

fn pause() -> Result<()> {
    let term = Term::stdout();
    term.write_line(&"Press any key to continue...".dimmed().to_string())?;
    term.read_key()?;
    Ok(())
}
