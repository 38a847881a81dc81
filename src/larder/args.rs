use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "larder")]
#[command(version)]
#[command(about = "Personal cookbook and recipe organizer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the collection files (overrides LARDER_DATA)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with cookbooks
    #[command(alias = "cb")]
    Cookbook {
        #[command(subcommand)]
        command: CookbookCmd,
    },

    /// Work with recipes
    #[command(alias = "rc")]
    Recipe {
        #[command(subcommand)]
        command: RecipeCmd,
    },

    /// Open the interactive menu (the default when run bare)
    Menu,
}

#[derive(Subcommand, Debug)]
pub enum CookbookCmd {
    /// Create a cookbook
    Add {
        /// Name of the cookbook
        name: String,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all cookbooks
    #[command(alias = "ls")]
    List,

    /// Show one cookbook and the recipes it holds
    Show {
        /// Name of the cookbook
        name: String,
    },

    /// Delete a cookbook
    #[command(alias = "rm")]
    Delete {
        /// Name of the cookbook
        name: String,
    },

    /// Copy a saved recipe into a cookbook
    Attach {
        /// Name of the cookbook
        cookbook: String,

        /// Name of the recipe
        recipe: String,
    },

    /// Take a recipe out of a cookbook
    Detach {
        /// Name of the cookbook
        cookbook: String,

        /// Name of the recipe
        recipe: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecipeCmd {
    /// Save a recipe
    Add {
        /// Name of the recipe
        name: String,

        /// Link to the recipe
        url: String,
    },

    /// List all recipes
    #[command(alias = "ls")]
    List,

    /// Show one recipe
    Show {
        /// Name of the recipe
        name: String,
    },

    /// Delete a recipe
    #[command(alias = "rm")]
    Delete {
        /// Name of the recipe
        name: String,
    },
}
