use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::json;

use super::render;
use crate::filters::distinct_leading_letters;
use crate::indexer::discover_registry_files;
use crate::lookup::ClientDirectory;
use crate::utils::{DataPaths, get_data_dir, get_page_size};

/// Exit code for a client ID that is not in the registry
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Parser)]
#[command(name = "registry-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Browse the client registry and credit histories", long_about = None)]
pub struct Cli {
    /// Data directory holding registry files and the history folder
    /// [default: $REGISTRY_DATA_DIR or ./data]
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List clients, optionally narrowed by leading letter and search query
    List {
        /// Case-insensitive name fragment or ID fragment
        #[arg(short, long)]
        query: Option<String>,

        /// Leading letter of the client's name
        #[arg(short, long)]
        letter: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Clients per page [default: $REGISTRY_PAGE_SIZE or 30]
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show the leading letters available for navigation
    Letters,
    /// Show one client with its credit history
    Show { id: String },
    /// Show the credit history of one client
    History { id: String },
    /// Show statistics about the registry
    Stats,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(ExitCode::SUCCESS);
    };

    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => get_data_dir()?,
    };
    let directory = ClientDirectory::new(DataPaths::from_data_dir(&data_dir));

    match command {
        Commands::List { query, letter, page, page_size } => {
            let page_size = match page_size {
                Some(size) => *size,
                None => get_page_size()?,
            };
            let directory = directory.with_page_size(page_size);
            list_clients(&directory, query.as_deref(), letter.as_deref(), *page, cli.json)
        }
        Commands::Letters => show_letters(&directory, cli.json),
        Commands::Show { id } => show_client(&directory, id, cli.json),
        Commands::History { id } => show_history(&directory, id, cli.json),
        Commands::Stats => show_stats(&directory, cli.json),
    }
}

fn list_clients(
    directory: &ClientDirectory,
    query: Option<&str>,
    letter: Option<&str>,
    page: usize,
    as_json: bool,
) -> Result<ExitCode> {
    let listing = directory.list_clients(query, letter, page)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{}", render::listing(&listing));
    }

    Ok(ExitCode::SUCCESS)
}

fn show_letters(directory: &ClientDirectory, as_json: bool) -> Result<ExitCode> {
    let clients = directory.load_clients()?;
    let letters: Vec<char> = distinct_leading_letters(&clients).into_iter().collect();

    if as_json {
        println!("{}", serde_json::to_string(&letters)?);
    } else {
        println!("{}", render::letters(&letters));
    }

    Ok(ExitCode::SUCCESS)
}

fn show_client(directory: &ClientDirectory, id: &str, as_json: bool) -> Result<ExitCode> {
    let Some(client) = directory.find_client_by_id(id)? else {
        return Ok(client_not_found(id));
    };
    let outcome = directory.get_history_for(&client)?;

    if as_json {
        let value = json!({
            "client": client,
            "history_file": outcome.file_name(),
            "history": outcome.entries(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render::client(&client));
        println!();
        print!("{}", render::history(&outcome));
    }

    Ok(ExitCode::SUCCESS)
}

fn show_history(directory: &ClientDirectory, id: &str, as_json: bool) -> Result<ExitCode> {
    let Some(client) = directory.find_client_by_id(id)? else {
        return Ok(client_not_found(id));
    };
    let outcome = directory.get_history_for(&client)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(outcome.entries())?);
    } else {
        print!("{}", render::history(&outcome));
    }

    Ok(ExitCode::SUCCESS)
}

fn show_stats(directory: &ClientDirectory, as_json: bool) -> Result<ExitCode> {
    let registry_dir = &directory.paths().registry_dir;
    let files = discover_registry_files(registry_dir)?;
    let clients = directory.load_clients()?;
    let letters = distinct_leading_letters(&clients);

    if as_json {
        let value = json!({
            "total_clients": clients.len(),
            "registry_files": files.len(),
            "letters": letters,
            "registry_dir": registry_dir,
            "history_dir": directory.paths().history_root,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Client Registry Statistics");
    println!("==========================");
    println!("Total clients: {}", clients.len());
    println!("Registry files: {}", files.len());
    println!("Letters: {}", letters.len());
    println!();
    println!("Registry directory: {}", registry_dir.display());
    println!("History directory: {}", directory.paths().history_root.display());

    Ok(ExitCode::SUCCESS)
}

fn client_not_found(id: &str) -> ExitCode {
    eprintln!("Client not found: {}", id);
    ExitCode::from(EXIT_NOT_FOUND)
}
