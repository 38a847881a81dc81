use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use larder::error::Result;
use larder::manager::CookbookManager;
use larder::model::{Cookbook, Recipe};
use larder::store::fs::JsonFileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
mod menu;
use args::{Cli, Commands, CookbookCmd, RecipeCmd};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir);
    let mut manager = CookbookManager::open(&data_dir)?;

    match cli.command {
        Some(Commands::Cookbook { command }) => handle_cookbook(&mut manager, command),
        Some(Commands::Recipe { command }) => handle_recipe(&mut manager, command),
        Some(Commands::Menu) | None => menu::main_menu(&mut manager),
    }
}

/// Explicit flag, then the `LARDER_DATA` environment variable, then the
/// platform data directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var("LARDER_DATA") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    match ProjectDirs::from("com", "larder", "larder") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".larder"),
    }
}

fn handle_cookbook(
    manager: &mut CookbookManager<JsonFileStore>,
    command: CookbookCmd,
) -> Result<()> {
    match command {
        CookbookCmd::Add { name, description } => {
            let cookbook = manager.add_cookbook(name, description)?;
            println!(
                "{}",
                format!("Added cookbook \"{}\".", cookbook.name).green()
            );
        }
        CookbookCmd::List => {
            print_cookbooks(&manager.get_all_cookbooks()?);
        }
        CookbookCmd::Show { name } => match manager.get_cookbook_by_name(&name)? {
            Some(cookbook) => print_cookbook(&cookbook),
            None => println!("{}", format!("No cookbook named \"{}\".", name).yellow()),
        },
        CookbookCmd::Delete { name } => {
            if manager.delete_cookbook(&name)? {
                println!("{}", format!("Deleted cookbook \"{}\".", name).green());
            } else {
                println!("{}", format!("No cookbook named \"{}\".", name).yellow());
            }
        }
        CookbookCmd::Attach { cookbook, recipe } => {
            if manager.add_recipe_to_cookbook(&cookbook, &recipe)? {
                println!(
                    "{}",
                    format!("Added \"{}\" to \"{}\".", recipe, cookbook).green()
                );
            } else {
                println!(
                    "{}",
                    format!(
                        "Could not add \"{}\" to \"{}\": missing, or already present.",
                        recipe, cookbook
                    )
                    .yellow()
                );
            }
        }
        CookbookCmd::Detach { cookbook, recipe } => {
            if manager.remove_recipe_from_cookbook(&cookbook, &recipe)? {
                println!(
                    "{}",
                    format!("Removed \"{}\" from \"{}\".", recipe, cookbook).green()
                );
            } else {
                println!(
                    "{}",
                    format!("\"{}\" is not in \"{}\".", recipe, cookbook).yellow()
                );
            }
        }
    }
    Ok(())
}

fn handle_recipe(manager: &mut CookbookManager<JsonFileStore>, command: RecipeCmd) -> Result<()> {
    match command {
        RecipeCmd::Add { name, url } => {
            let recipe = manager.add_recipe(name, url)?;
            println!("{}", format!("Added recipe \"{}\".", recipe.name).green());
        }
        RecipeCmd::List => {
            print_recipes(&manager.get_all_recipes()?);
        }
        RecipeCmd::Show { name } => match manager.get_recipe_by_name(&name)? {
            Some(recipe) => print_recipe(&recipe),
            None => println!("{}", format!("No recipe named \"{}\".", name).yellow()),
        },
        RecipeCmd::Delete { name } => {
            if manager.delete_recipe(&name)? {
                println!("{}", format!("Deleted recipe \"{}\".", name).green());
            } else {
                println!("{}", format!("No recipe named \"{}\".", name).yellow());
            }
        }
    }
    Ok(())
}

const NAME_COLUMN: usize = 28;

fn pad_name(name: &str) -> String {
    let padding = NAME_COLUMN.saturating_sub(name.width());
    format!("{}{}", name, " ".repeat(padding))
}

fn print_cookbooks(cookbooks: &[Cookbook]) {
    if cookbooks.is_empty() {
        println!("No cookbooks yet.");
        return;
    }
    for cookbook in cookbooks {
        let count = match cookbook.recipes.len() {
            1 => "1 recipe".to_string(),
            n => format!("{} recipes", n),
        };
        match &cookbook.description {
            Some(description) => println!(
                "{} {}  {}",
                pad_name(&cookbook.name).bold(),
                format!("({})", count).dimmed(),
                description
            ),
            None => println!(
                "{} {}",
                pad_name(&cookbook.name).bold(),
                format!("({})", count).dimmed()
            ),
        }
    }
}

fn print_cookbook(cookbook: &Cookbook) {
    println!("{}", cookbook.name.bold());
    if let Some(description) = &cookbook.description {
        println!("{}", description.dimmed());
    }
    if cookbook.recipes.is_empty() {
        println!("No recipes in this cookbook.");
        return;
    }
    for recipe in &cookbook.recipes {
        println!("  {} {}", pad_name(&recipe.name), recipe.url.dimmed());
    }
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes yet.");
        return;
    }
    for recipe in recipes {
        println!("{} {}", pad_name(&recipe.name).bold(), recipe.url.dimmed());
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.name.bold());
    println!("{}", recipe.url);
}
