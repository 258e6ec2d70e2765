use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{clear, collections, config, movies, session, theme, AppContext};
use streambox_core::CollectionKind;
use streambox_models::ThemeMode;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "streambox")]
#[command(about = "StreamBox - browse movies, keep favourites and a watch-later list")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Keep all state in memory for this run instead of the storage directory
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog movies, optionally filtered
    #[command(long_about = "List the movies in the configured catalog. Languages and genres may be given several times; a movie must match one of the languages AND one of the genres. An empty selection is no constraint.")]
    Movies {
        /// Only movies in this language (repeatable)
        #[arg(long = "language", value_name = "LANGUAGE")]
        languages: Vec<String>,

        /// Only movies with this genre (repeatable)
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,

        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,

        /// Only trending movies
        #[arg(long, action = ArgAction::SetTrue)]
        trending: bool,
    },
    /// Show the languages and genres available for filtering
    Options {
        #[arg(value_enum, default_value = "all")]
        kind: OptionKind,
    },
    /// Manage favourites
    Favourites {
        #[command(subcommand)]
        cmd: Option<CollectionCommands>,
    },
    /// Manage the watch-later list
    WatchLater {
        #[command(subcommand)]
        cmd: Option<CollectionCommands>,
    },
    /// Show or change the theme
    Theme {
        #[command(subcommand)]
        cmd: Option<ThemeCommands>,
    },
    /// Show, start or end the remembered session
    Session {
        #[command(subcommand)]
        cmd: Option<SessionCommands>,
    },
    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
    /// Clear persisted state
    #[command(long_about = "Clear persisted state. Use --collections to empty favourites and watch later, --theme to forget the theme, --session to sign out, or --all to remove everything.")]
    Clear {
        /// Clear everything
        #[arg(long, action = ArgAction::SetTrue, conflicts_with_all = ["collections", "theme", "session"])]
        all: bool,

        /// Empty favourites and watch later
        #[arg(long, action = ArgAction::SetTrue)]
        collections: bool,

        /// Forget the stored theme
        #[arg(long, action = ArgAction::SetTrue)]
        theme: bool,

        /// Forget the stored session
        #[arg(long, action = ArgAction::SetTrue)]
        session: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OptionKind {
    Languages,
    Genres,
    All,
}

#[derive(Subcommand)]
pub enum CollectionCommands {
    /// List the collection
    List,
    /// Add a catalog movie by id
    Add { id: String },
    /// Remove a movie by id
    Remove { id: String },
    /// Add the movie if absent, remove it if present
    Toggle { id: String },
    /// Remove every movie
    Clear,
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Show the current theme
    Show,
    /// Set the theme (light or dark)
    Set { mode: ThemeMode },
    /// Switch between light and dark
    Toggle,
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Show the remembered user
    Show,
    /// Remember a user
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Forget the remembered user
    Logout,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let ctx = AppContext::load(cli.ephemeral)?;

    logging::init_logging(cli.verbose, cli.quiet, &ctx.config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Movies { languages, genres, search, trending } => {
            movies::run_movies(&ctx, languages, genres, search, trending, &output).await
        }
        Commands::Options { kind } => movies::run_options(&ctx, kind, &output).await,
        Commands::Favourites { cmd } => {
            let cmd = cmd.unwrap_or(CollectionCommands::List);
            collections::run_collection(&ctx, CollectionKind::Favourites, cmd, &output).await
        }
        Commands::WatchLater { cmd } => {
            let cmd = cmd.unwrap_or(CollectionCommands::List);
            collections::run_collection(&ctx, CollectionKind::WatchLater, cmd, &output).await
        }
        Commands::Theme { cmd } => theme::run_theme(&ctx, cmd.unwrap_or(ThemeCommands::Show), &output),
        Commands::Session { cmd } => session::run_session(&ctx, cmd.unwrap_or(SessionCommands::Show), &output),
        Commands::Config { cmd } => config::run_config(&ctx, cmd.unwrap_or(ConfigCommands::Show), &output),
        Commands::Clear { all, collections, theme, session } => {
            clear::run_clear(&ctx, all, collections, theme, session, &output)
        }
    }
}
