//! Shopsearch: product catalog search widget
//!
//! Debounced search over a team's product catalog with paginated results.
//!
//! Usage:
//!   shopsearch                       - Open the search window
//!   shopsearch search [--pages N] X  - Search from the terminal
//!   shopsearch config                - Print effective configuration
//!   shopsearch help                  - Show help

mod app;
mod catalog;
mod cli;
mod commands;
mod config;
mod error;
mod ui;
mod widget;

use app::Shop;
use catalog::CatalogClient;
use commands::Command;
use config::ShopConfig;
use iced::{window, Size};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize logging (try_init so tests or embedders can install their own)
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(args.as_slice());

    if matches!(command, Command::Help) {
        println!("{}", Command::help_text());
        return ExitCode::SUCCESS;
    }
    if let Command::Invalid { message } = &command {
        eprintln!("{}", message);
        eprintln!("Run 'shopsearch help' for usage");
        return ExitCode::from(cli::EXIT_USAGE);
    }

    let config = match ShopConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Gui => {
            let client = match CatalogClient::from_config(&config) {
                Ok(client) => client,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            match start_window(config, client) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Command::Search { text, pages } => run_search_command(&config, &text, pages),
        Command::Config => {
            print_config(&config);
            ExitCode::SUCCESS
        }
        Command::Help | Command::Invalid { .. } => ExitCode::SUCCESS,
    }
}

fn run_search_command(config: &ShopConfig, text: &str, pages: usize) -> ExitCode {
    let client = match CatalogClient::from_config(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (outcome, renderer) = rt.block_on(cli::run_search(config, &client, text, pages));
    if let widget::SearchOutcome::Failed(e) = &outcome {
        eprintln!("Search failed: {}", e);
    } else {
        let stdout = std::io::stdout();
        if let Err(e) = renderer.write_to(&mut stdout.lock()) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::from(cli::exit_status(&outcome))
}

fn print_config(config: &ShopConfig) {
    match ShopConfig::default_path() {
        Some(path) if path.exists() => println!("# {}", path.display()),
        Some(path) => println!("# {} (not present, using defaults)", path.display()),
        None => println!("# no config directory on this platform"),
    }
    match serde_json::to_string_pretty(config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn start_window(config: ShopConfig, client: CatalogClient) -> iced::Result {
    tracing::info!(
        "Opening catalog search for team '{}' at {}",
        config.team,
        client.base_url()
    );

    iced::application("Shopsearch", Shop::update, Shop::view)
        .theme(Shop::theme)
        .window(window::Settings {
            size: Size::new(760.0, 720.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || Shop::boot(&config, client.clone()))
}
