mod commands;
mod config;
mod menu;
mod render;

use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use moviedb_core::constants::DEFAULT_SITE_TITLE;
use moviedb_service::CatalogService;
use moviedb_site::SiteOptions;
use moviedb_storage::Storage;
use tracing_subscriber::EnvFilter;

use crate::commands::{catalog, edit, site};

#[derive(Parser)]
#[command(name = "moviedb")]
#[command(about = "Personal movie catalog backed by SQLite and OMDb", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "MOVIEDB_DB_PATH")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in insertion order
    List {
        /// Print the catalog as JSON keyed by title
        #[arg(long)]
        json: bool,
    },
    /// Look a title up on OMDb and store it
    Add { title: String },
    /// Delete a movie by title (case-insensitive)
    Delete { title: String },
    /// Set a new rating (0-10) for a movie
    Update { title: String, rating: f64 },
    /// Show rating statistics
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Pick a random movie
    Random,
    /// Case-insensitive substring search over titles
    Search { query: String },
    /// List movies sorted by rating, best first
    Rank,
    /// Generate a static HTML page of the catalog
    Site {
        #[arg(long, default_value = DEFAULT_SITE_TITLE)]
        title: String,
        /// HTML template containing the title and grid placeholders
        #[arg(long)]
        template: Option<PathBuf>,
        #[arg(short, long, default_value = "index.html")]
        output: PathBuf,
    },
    /// Interactive menu (default)
    Menu,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn open_service(db: Option<PathBuf>) -> Result<CatalogService> {
    let db_path = db.unwrap_or_else(config::default_db_path);
    let storage = Storage::new(&db_path)
        .with_context(|| format!("failed to open movie database at {}", db_path.display()))?;
    let lookup = config::lookup_from_env()?;
    Ok(CatalogService::new(storage, lookup))
}

fn exit_code(applied: bool) -> ExitCode {
    if applied { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let service = open_service(cli.db)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command.unwrap_or(Commands::Menu) {
        Commands::List { json } => {
            catalog::list_movies(&service, json, &mut out).await?;
            ExitCode::SUCCESS
        },
        Commands::Add { title } => exit_code(edit::add_movie(&service, &title, &mut out).await?),
        Commands::Delete { title } => exit_code(edit::delete_movie(&service, &title, &mut out).await?),
        Commands::Update { title, rating } => {
            exit_code(edit::update_movie(&service, &title, rating, &mut out).await?)
        },
        Commands::Stats { json } => {
            catalog::show_stats(&service, json, &mut out).await?;
            ExitCode::SUCCESS
        },
        Commands::Random => {
            catalog::random_movie(&service, &mut out).await?;
            ExitCode::SUCCESS
        },
        Commands::Search { query } => {
            catalog::search_movies(&service, &query, &mut out).await?;
            ExitCode::SUCCESS
        },
        Commands::Rank => {
            catalog::ranked_movies(&service, &mut out).await?;
            ExitCode::SUCCESS
        },
        Commands::Site { title, template, output } => {
            let options = SiteOptions { title, template_path: template, output_path: output };
            site::generate_website(&service, &options, &mut out).await?;
            ExitCode::SUCCESS
        },
        Commands::Menu => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            menu::run_menu(&service, &SiteOptions::default(), &mut input, &mut out).await?;
            ExitCode::SUCCESS
        },
    };

    out.flush()?;
    Ok(code)
}
