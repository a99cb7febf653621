use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

use commands::{browse, details, discover, genres, profile, review, search, trailer};
use commands::browse::ListCategory;

#[derive(Parser)]
#[command(name = "cinelens")]
#[command(about = "CineLens - browse, search and review the movie catalog from your terminal")]
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

    /// Write logs to this file (rotated daily) instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the four browse rails (popular, top rated, upcoming, now playing)
    #[command(long_about = "Fetch the popular, top rated, upcoming and now playing rails concurrently and print each. A rail that fails to load renders as an empty section with a warning.")]
    Home,

    /// List one page of a curated movie rail
    List {
        #[arg(value_enum)]
        category: ListCategory,

        /// Page number (the provider serves 20 entries per page)
        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// List all movie genres
    Genres,

    /// Discover movies by a structured filter
    #[command(long_about = "Discover movies constrained by a structured filter: a genre id, an original-language code, or a cast member id. Exactly one filter must be given. Identifiers are passed to the provider as-is; an unknown id simply yields an empty page.")]
    #[command(group(clap::ArgGroup::new("filter").required(true).multiple(false)))]
    Discover {
        /// Genre id (see `cinelens genres`)
        #[arg(long, group = "filter")]
        genre: Option<u64>,

        /// Original-language code (e.g. en, ko, ta)
        #[arg(long, group = "filter")]
        language: Option<String>,

        /// Cast member id (see `cinelens search people`)
        #[arg(long, group = "filter")]
        actor: Option<u64>,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Free-text search of movies or people
    Search {
        #[command(subcommand)]
        cmd: SearchCommands,
    },

    /// Show details for one movie (credits and similar titles included)
    Details {
        movie_id: u64,
    },

    /// Look up the trailer for a movie
    Trailer {
        movie_id: u64,
    },

    /// Manage the signed-in profile on this device
    Profile {
        #[command(subcommand)]
        cmd: ProfileCommands,
    },

    /// Add or list reviews for a movie
    Review {
        #[command(subcommand)]
        cmd: ReviewCommands,
    },
}

#[derive(Subcommand)]
enum SearchCommands {
    /// Search movie titles
    Movies {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search people (actors shown with their department)
    People {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show the current profile
    Show,
    /// Sign in (prompts for anything not given as a flag)
    Login {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Photo URL or embedded data URI
        #[arg(long)]
        photo: Option<String>,
    },
    /// Sign out and clear the stored profile
    Logout,
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Attach a review to a movie (requires a signed-in profile)
    Add {
        movie_id: u64,
        /// Rating from 1 to 5
        #[arg(long)]
        rating: u8,
        /// Review text
        #[arg(long)]
        text: String,
        /// Optional photo URL or embedded data URI
        #[arg(long)]
        photo: Option<String>,
    },
    /// List the reviews stored for a movie, oldest first
    List {
        movie_id: u64,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    let result = match cli.command {
        Commands::Home => browse::run_home(&output).await,
        Commands::List { category, page } => browse::run_list(category, page, &output).await,
        Commands::Genres => genres::run_genres(&output).await,
        Commands::Discover {
            genre,
            language,
            actor,
            page,
        } => discover::run_discover(genre, language, actor, page, &output).await,
        Commands::Search { cmd } => match cmd {
            SearchCommands::Movies { query, page } => {
                search::run_search_movies(&query, page, &output).await
            }
            SearchCommands::People { query, page } => {
                search::run_search_people(&query, page, &output).await
            }
        },
        Commands::Details { movie_id } => details::run_details(movie_id, &output).await,
        Commands::Trailer { movie_id } => trailer::run_trailer(movie_id, &output).await,
        Commands::Profile { cmd } => match cmd {
            ProfileCommands::Show => profile::run_show(&output),
            ProfileCommands::Login { name, email, photo } => {
                profile::run_login(name, email, photo, &output)
            }
            ProfileCommands::Logout => profile::run_logout(&output),
        },
        Commands::Review { cmd } => match cmd {
            ReviewCommands::Add {
                movie_id,
                rating,
                text,
                photo,
            } => review::run_add(movie_id, rating, text, photo, &output),
            ReviewCommands::List { movie_id } => review::run_list(movie_id, &output),
        },
    };

    result.map_err(|e| color_eyre::eyre::eyre!("{:#}", e))
}
