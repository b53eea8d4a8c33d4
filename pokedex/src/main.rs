//! Pokédex - terminal surface for the listing and detail views
//!
//! Loads the directory once per run, then lists, searches or shows a single
//! profile. Set RUST_LOG to control log output (e.g. RUST_LOG=pokedex=debug).

use clap::{Parser, Subcommand};
use pokedex::config::{DEFAULT_API_URL, DEFAULT_DIRECTORY_LIMIT, DEFAULT_PAGE_SIZE};
use pokedex::format::{format_cards, format_profile};
use pokedex::{
    fetch_profile, BatchPolicy, BrowseSession, DisplayItem, PokeApi, PokedexConfig,
    ScrollMetrics,
};
use std::time::Duration;

/// Row height used to fake the listing's scroll geometry
const ROW_HEIGHT: u32 = 108;

/// Searchable, paginated Pokédex backed by PokeAPI
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version, about, long_about = None)]
struct Args {
    /// Upstream API base URL
    #[arg(long, env = "POKEDEX_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Number of directory entries to load
    #[arg(long, default_value_t = DEFAULT_DIRECTORY_LIMIT)]
    directory_limit: usize,

    /// Entries revealed per scroll
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Per-request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Drop a whole batch when any of its entries fails to load
    #[arg(long, default_value_t = false)]
    atomic: bool,

    /// Print results as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the first page, then scroll down the given number of times
    List {
        #[arg(long, default_value_t = 0)]
        pages: usize,
    },
    /// Search the directory by name
    Search { query: String },
    /// Show one Pokémon's profile
    Show { name: String },
}

impl Args {
    fn config(&self) -> PokedexConfig {
        PokedexConfig {
            api_url: self.api_url.clone(),
            directory_limit: self.directory_limit,
            page_size: self.page_size,
            timeout: self.timeout_secs.map(Duration::from_secs),
            batch_policy: if self.atomic {
                BatchPolicy::Atomic
            } else {
                BatchPolicy::Partial
            },
            ..PokedexConfig::default()
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    log::info!("Using PokeAPI at {}", config.api_url);

    if let Err(e) = run(&args, config).await {
        log::error!("Application error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: &Args, config: PokedexConfig) -> pokedex::Result<()> {
    let api = PokeApi::new(&config)?;

    match &args.command {
        Command::List { pages } => run_list(api, config, *pages, args.json).await,
        Command::Search { query } => run_search(api, config, query, args.json).await,
        Command::Show { name } => {
            let profile = fetch_profile(&api, name).await;
            match profile {
                Ok(profile) => {
                    if args.json {
                        println!("{}", serde_json::to_string_pretty(&profile)?);
                    } else {
                        print!("{}", format_profile(&profile));
                    }
                    Ok(())
                }
                Err(e) => {
                    // Alert, then fall back to the listing view
                    log::error!("Failed to load profile for {}: {}", name, e);
                    eprintln!("Failed to load Pokémon data: {e}");
                    run_list(api, config, 0, args.json).await
                }
            }
        }
    }
}

async fn run_list(
    api: PokeApi,
    config: PokedexConfig,
    pages: usize,
    json: bool,
) -> pokedex::Result<()> {
    let mut session = BrowseSession::open(api, config).await?;

    for _ in 0..pages {
        let metrics = bottom_of(session.visible_items().len());
        if !session.on_scroll(metrics)? {
            break;
        }
        session.settle().await?;
    }

    print_items(session.visible_items(), json)?;
    session.close();
    Ok(())
}

async fn run_search(
    api: PokeApi,
    config: PokedexConfig,
    query: &str,
    json: bool,
) -> pokedex::Result<()> {
    let mut session = BrowseSession::open(api, config).await?;
    session.search(query)?;
    session.settle().await?;

    for failure in session.last_failures() {
        eprintln!("Could not load {}: {}", failure.entry.name, failure.error);
    }
    print_items(session.visible_items(), json)?;
    session.close();
    Ok(())
}

/// Scroll geometry with the viewport resting on the last row
fn bottom_of(rows: usize) -> ScrollMetrics {
    let scroll_height = rows as u32 * ROW_HEIGHT;
    let client_height = scroll_height.min(6 * ROW_HEIGHT);
    ScrollMetrics {
        scroll_top: scroll_height - client_height,
        client_height,
        scroll_height,
    }
}

fn print_items(items: &[DisplayItem], json: bool) -> pokedex::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        print!("{}", format_cards(items));
    }
    Ok(())
}
