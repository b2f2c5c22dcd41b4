//! Picker binary entry point
//!
//! Thin terminal presentation over the picker library: parses input, calls
//! the core operations, renders tables and the reveal sequence. No decision
//! logic lives here.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use picker::services::{FileLocalCache, HttpRemoteStore, LoadSource};
use picker::session::Session;
use picker::traits::RevealSink;
use shared::{BudgetFilter, Restaurant};

#[derive(Parser)]
#[command(name = "picker")]
#[command(about = "Maintain a restaurant list and pick one at random within a budget")]
struct Args {
    /// Collection webserver base URL
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server_url: String,

    /// Local cache file used when the webserver is unreachable
    #[arg(long, default_value = "restaurant_cache.json")]
    cache_file: PathBuf,

    /// Log level for workspace crates
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the full collection
    List,
    /// Show the distinct category labels
    Categories,
    /// Add a restaurant
    Add {
        name: String,
        category: String,
        /// Lowest typical price
        #[arg(long, default_value_t = 0)]
        min: u32,
        /// Highest typical price (omit for no upper bound)
        #[arg(long)]
        max: Option<u32>,
    },
    /// Delete a restaurant by id (irreversible; asks for confirmation)
    Delete {
        id: u32,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Pick a random restaurant within a budget
    Pick {
        /// Budget lower bound
        #[arg(long)]
        min: Option<u32>,
        /// Budget upper bound
        #[arg(long)]
        max: Option<u32>,
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    shared::logging::init_tracing(&args.log_level);

    let remote = HttpRemoteStore::new(&args.server_url);
    let cache = FileLocalCache::new(&args.cache_file);
    let mut session = Session::new(remote, cache);

    match session.load().await {
        LoadSource::Remote => {}
        LoadSource::CacheFallback => {
            eprintln!("⚠ Could not reach {}; showing the last cached collection.", args.server_url);
        }
        LoadSource::Empty => {
            eprintln!("⚠ Could not reach {} and no cache exists; starting empty.", args.server_url);
        }
    }

    match args.command {
        Command::List => render_table(session.records()),
        Command::Categories => {
            for category in session.distinct_categories() {
                println!("{category}");
            }
        }
        Command::Add { name, category, min, max } => {
            match session.add(&name, &category, min, max) {
                Ok(record) => println!("Added #{}: {} ({})", record.id, record.name, record.price),
                Err(e) => eprintln!("✗ {e}"),
            }
        }
        Command::Delete { id, yes } => {
            if yes || confirm_delete(id)? {
                if session.delete(id) {
                    println!("Deleted #{id}");
                } else {
                    println!("No restaurant with id {id}");
                }
            } else {
                println!("Cancelled");
            }
        }
        Command::Pick { min, max, category } => {
            let filter = BudgetFilter {
                min_budget: min,
                max_budget: max,
                category,
            };
            let mut sink = StdoutReveal;
            match session.pick(&filter, &mut sink).await? {
                Some(choice) => {
                    println!("\r🎉 {} 🎉 ({} | {})", choice.name, choice.category, choice.price);
                }
                None => println!("No restaurant matches... try loosening the filters."),
            }
        }
    }

    // Short-lived process: wait for the queued fire-and-forget syncs.
    session.flush().await?;
    Ok(())
}

/// Transient reveal updates on a single rewritten line.
struct StdoutReveal;

impl RevealSink for StdoutReveal {
    fn reveal(&mut self, candidate: &Restaurant) {
        print!("\r🤔 {}          ", candidate.name);
        let _ = std::io::stdout().flush();
    }
}

fn render_table(records: &[Restaurant]) {
    if records.is_empty() {
        println!("(empty collection)");
        return;
    }

    println!("{:<4} {:<24} {:<16} {}", "id", "name", "category", "price");
    for r in records {
        println!("{:<4} {:<24} {:<16} {}", r.id, r.name, r.category, r.price);
    }
}

fn confirm_delete(id: u32) -> Result<bool> {
    print!("Delete restaurant #{id}? This cannot be undone. [y/N] ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
