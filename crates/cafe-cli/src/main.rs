//! Cafe CLI
//!
//! Command-line interface for the cafe order tracker

use std::path::PathBuf;

use cafe_core::logging_facility;
use cafe_core::CafeConfig;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cafe")]
#[command(about = "Cafe order tracker - dishes, orders and reviews", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database file (overrides the configuration)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print records as JSON instead of one line each
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the details of one order
    Order(commands::order::OrderArgs),
    /// List every order, sorted by dish name or order id
    List(commands::list::ListArgs),
    /// List orders cooked faster than a threshold
    Fast(commands::fast::FastArgs),
    /// Insert random test dishes, orders and reviews
    Generate(commands::generate::GenerateArgs),
    /// Add a dish to the menu
    AddDish(commands::add::AddDishArgs),
    /// Record an order for a dish
    AddOrder(commands::add::AddOrderArgs),
    /// Attach a review to an order
    AddReview(commands::add::AddReviewArgs),
    /// Interactive numbered menu
    Menu,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::CliResult {
    let mut config = CafeConfig::load(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    logging_facility::init(config.log_profile);

    let mut conn = cafe_store::db::open_store(&config.db_path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let json = cli.json;

    let result = match cli.command {
        Commands::Order(args) => commands::order::execute(&conn, args, json, &mut out),
        Commands::List(args) => commands::list::execute(&conn, args, json, &mut out),
        Commands::Fast(args) => commands::fast::execute(&conn, &config, args, json, &mut out),
        Commands::Generate(args) => commands::generate::execute(&mut conn, args, json, &mut out),
        Commands::AddDish(args) => commands::add::execute_dish(&conn, args, json, &mut out),
        Commands::AddOrder(args) => commands::add::execute_order(&conn, args, json, &mut out),
        Commands::AddReview(args) => commands::add::execute_review(&conn, args, json, &mut out),
        Commands::Menu => {
            let stdin = std::io::stdin();
            commands::menu::execute(&mut conn, &config, stdin.lock(), &mut out)
        }
    };

    cafe_store::db::close(conn)?;
    result
}
