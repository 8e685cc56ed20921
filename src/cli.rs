use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::catalog::SortKey;
use crate::types::Collection;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Browse, search and curate a movie catalog")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive browser with debounced search
    #[command(visible_alias = "b")]
    Browse {
        /// Browse favorites instead of the catalog
        #[arg(short, long)]
        favorites: bool,

        /// Initial sort key: latest, title, year, rating, duration (favorites only)
        #[arg(short, long, default_value = "latest", value_parser = parse_sort_key)]
        sort: SortKey,
    },

    /// List a collection
    Ls {
        /// List favorites instead of the catalog
        #[arg(short, long)]
        favorites: bool,

        /// Sort key: latest, title, year, rating, duration (favorites only)
        #[arg(short, long, default_value = "latest", value_parser = parse_sort_key)]
        sort: SortKey,

        /// Render as a table
        #[arg(long)]
        table: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search a collection by title
    #[command(visible_alias = "s")]
    Search {
        /// Search text; blank prints the full list
        query: String,

        /// Search favorites instead of the catalog
        #[arg(short, long)]
        favorites: bool,

        /// Sort key: latest, title, year, rating, duration (favorites only)
        #[arg(short, long, default_value = "latest", value_parser = parse_sort_key)]
        sort: SortKey,

        /// Render as a table
        #[arg(long)]
        table: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one movie
    Show {
        /// Movie ID
        #[arg(value_parser = parse_movie_id)]
        id: String,

        /// Look the ID up among favorites
        #[arg(short, long)]
        favorites: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the featured movies from the home screen
    Featured {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a movie to the catalog
    Add {
        /// Poster image URL
        #[arg(long, default_value = "")]
        poster: String,

        /// Title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Genre (case-insensitive): Action, Adventure, Comedy, Drama, ...
        #[arg(short, long, default_value = "")]
        genre: String,

        /// Running time in minutes (60-300)
        #[arg(short, long, default_value = "")]
        duration: String,

        /// Release year (within the last 20 years)
        #[arg(short = 'y', long = "year", default_value = "")]
        release_year: String,

        /// Rating, 0.5 to 5
        #[arg(short, long, default_value = "0")]
        rating: f64,

        /// Short summary (at least 10 characters)
        #[arg(long, default_value = "")]
        summary: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a movie from the catalog
    Rm {
        /// Movie ID
        #[arg(value_parser = parse_movie_id)]
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage favorites
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },

    /// Send feedback
    Feedback {
        /// Your name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Your email address
        #[arg(short, long, default_value = "")]
        email: String,

        /// Rating from 1 to 5
        #[arg(short, long, default_value = "0")]
        rating: u8,

        /// Message (20-500 characters)
        #[arg(short, long, default_value = "")]
        message: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show the signed-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum FavAction {
    /// Add a catalog movie to favorites
    Add {
        /// Catalog movie ID
        #[arg(value_parser = parse_movie_id)]
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a favorite
    Rm {
        /// Favorite record ID
        #[arg(value_parser = parse_movie_id)]
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (base_url, user.name, user.email, user.photo)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (base_url, user.name, user.email, user.photo)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear a configuration value
    Unset {
        /// Configuration key (base_url, user.name, user.email, user.photo)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Whether this command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Browse { .. })
    }

    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            AddOptions, FeedbackOptions, cmd_add, cmd_browse, cmd_config_get, cmd_config_set,
            cmd_config_show, cmd_config_unset, cmd_fav_add, cmd_fav_rm, cmd_featured,
            cmd_feedback, cmd_ls, cmd_rm, cmd_search, cmd_show, cmd_whoami,
        };

        match self {
            Commands::Browse { favorites, sort } => {
                cmd_browse(collection_for(favorites), sort).await
            }
            Commands::Ls {
                favorites,
                sort,
                table,
                json,
            } => cmd_ls(collection_for(favorites), sort, table, json).await,
            Commands::Search {
                query,
                favorites,
                sort,
                table,
                json,
            } => cmd_search(&query, collection_for(favorites), sort, table, json).await,
            Commands::Show {
                id,
                favorites,
                json,
            } => cmd_show(&id, collection_for(favorites), json).await,
            Commands::Featured { json } => cmd_featured(json).await,

            Commands::Add {
                poster,
                title,
                genre,
                duration,
                release_year,
                rating,
                summary,
                json,
            } => {
                cmd_add(
                    AddOptions {
                        poster,
                        title,
                        genre,
                        duration,
                        release_year,
                        rating,
                        summary,
                    },
                    json,
                )
                .await
            }
            Commands::Rm { id, yes, json } => cmd_rm(&id, yes, json).await,

            Commands::Fav { action } => match action {
                FavAction::Add { id, json } => cmd_fav_add(&id, json).await,
                FavAction::Rm { id, yes, json } => cmd_fav_rm(&id, yes, json).await,
            },

            Commands::Feedback {
                name,
                email,
                rating,
                message,
                json,
            } => cmd_feedback(
                FeedbackOptions {
                    name,
                    email,
                    rating,
                    message,
                },
                json,
            ),

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Unset { key, json } => cmd_config_unset(&key, json),
            },
            Commands::Whoami { json } => cmd_whoami(json),

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn collection_for(favorites: bool) -> Collection {
    if favorites {
        Collection::Favorites
    } else {
        Collection::Movies
    }
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    s.parse()
        .map_err(|_| "Invalid sort key. Must be one of: latest, title, year, rating, duration".to_string())
}

fn parse_movie_id(s: &str) -> Result<String, String> {
    let id = s.trim();
    if id.is_empty() {
        return Err("ID cannot be empty".to_string());
    }
    if id.contains('/') || id.chars().any(char::is_whitespace) {
        return Err("ID must not contain slashes or whitespace".to_string());
    }
    Ok(id.to_string())
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "marquee", &mut io::stdout());
}
